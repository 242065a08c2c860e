use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::CircuitState;

const BACKGROUND: &str = "#05060f";
const TRACE_ALPHA: f64 = 0.35;
const GLOW_ALPHA: f64 = 0.05;

/// Paint one frame: background, traces, solder points, then the pulses on
/// top with additive blending. Coordinates are CSS pixels; the context is
/// already scaled for the device pixel ratio.
pub fn render(state: &CircuitState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_pulses(state, ctx);
}

fn draw_edges(state: &CircuitState, ctx: &CanvasRenderingContext2d) {
	let cfg = &state.cfg;
	for i in 0..state.graph.edges.len() {
		let Some((a, b)) = state.graph.endpoints(i) else {
			continue;
		};

		// wide faint under-glow, then the colored trace on top
		ctx.set_stroke_style_str(&cfg.hue_b.css_alpha(GLOW_ALPHA));
		ctx.set_line_width(cfg.line_width * 3.0);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();

		let gradient = ctx.create_linear_gradient(a.x, a.y, b.x, b.y);
		let _ = gradient.add_color_stop(0.0, &cfg.hue_a.css_alpha(TRACE_ALPHA));
		let _ = gradient.add_color_stop(1.0, &cfg.hue_b.css_alpha(TRACE_ALPHA));
		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_line_width(cfg.line_width);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &CircuitState, ctx: &CanvasRenderingContext2d) {
	let cfg = &state.cfg;
	let glow_radius = cfg.node_radius * 3.0;
	for node in &state.graph.nodes {
		if let Ok(gradient) =
			ctx.create_radial_gradient(node.x, node.y, 0.0, node.x, node.y, glow_radius)
		{
			let _ = gradient.add_color_stop(0.0, &cfg.hue_b.css_alpha(0.5));
			let _ = gradient.add_color_stop(1.0, &cfg.hue_b.css_alpha(0.0));
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}

		ctx.set_fill_style_str(&cfg.hue_b.css_alpha(0.9));
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, cfg.node_radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_pulses(state: &CircuitState, ctx: &CanvasRenderingContext2d) {
	let cfg = &state.cfg;
	let halo_radius = cfg.node_radius * 4.0;
	let _ = ctx.set_global_composite_operation("lighter");

	for pulse in &state.pulses {
		// stale indices are skipped rather than treated as errors
		let Some((a, b)) = state.graph.endpoints(pulse.edge) else {
			continue;
		};
		let x = a.x + (b.x - a.x) * pulse.t;
		let y = a.y + (b.y - a.y) * pulse.t;
		let color = cfg.hue_a.mix(cfg.hue_b, pulse.transit());

		if let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, halo_radius) {
			let _ = gradient.add_color_stop(0.0, &color.css_alpha(0.85));
			let _ = gradient.add_color_stop(1.0, &color.css_alpha(0.0));
			ctx.begin_path();
			let _ = ctx.arc(x, y, halo_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}

		ctx.set_fill_style_str(&color.css());
		ctx.begin_path();
		let _ = ctx.arc(x, y, cfg.node_radius * 1.4, 0.0, 2.0 * PI);
		ctx.fill();
	}

	let _ = ctx.set_global_composite_operation("source-over");
}
