use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::CircuitConfig;
use super::render;
use super::state::CircuitState;

/// Fullscreen animated circuit-board background.
///
/// Drives itself with `requestAnimationFrame`; a window resize regenerates
/// the whole board for the new viewport. When the canvas or its 2d context
/// is unavailable the component stays blank and the page carries on.
///
/// `seed` pins the RNG for reproducible boards; by default each visit gets
/// a fresh layout.
#[component]
pub fn CircuitCanvas(
	#[prop(default = CircuitConfig::default())] config: CircuitConfig,
	#[prop(default = None)] seed: Option<u64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<CircuitState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		let Some(ctx) = sized_context(&canvas, w, h, device_pixel_ratio(&window)) else {
			log::warn!("circuit background disabled: no 2d canvas context");
			return;
		};
		let seed = seed.unwrap_or_else(|| js_sys::Date::now() as u64);
		*state_init.borrow_mut() = Some(CircuitState::new(config, w, h, seed));

		let (state_resize, canvas_resize, ctx_resize) =
			(state_init.clone(), canvas.clone(), ctx.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			if resize_backing(&canvas_resize, &ctx_resize, nw, nh, device_pixel_ratio(&win)) {
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.rebuild(nw, nh);
				}
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! { <canvas node_ref=canvas_ref class="circuit-canvas" style="display: block;" /> }
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(w, h)
}

fn device_pixel_ratio(window: &Window) -> f64 {
	let dpr = window.device_pixel_ratio();
	if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

fn sized_context(
	canvas: &HtmlCanvasElement,
	w: f64,
	h: f64,
	dpr: f64,
) -> Option<CanvasRenderingContext2d> {
	let ctx = canvas
		.get_context("2d")
		.ok()??
		.dyn_into::<CanvasRenderingContext2d>()
		.ok()?;
	resize_backing(canvas, &ctx, w, h, dpr).then_some(ctx)
}

/// Backing store in device pixels, CSS size in logical pixels. Resizing the
/// backing store resets the context transform, so the scale is re-applied
/// here every time.
fn resize_backing(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	w: f64,
	h: f64,
	dpr: f64,
) -> bool {
	canvas.set_width((w * dpr).round() as u32);
	canvas.set_height((h * dpr).round() as u32);
	// Qualified: the leptos prelude brings an element extension trait whose
	// own `style` method shadows the web-sys getter on the canvas handle.
	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{w}px"));
	let _ = style.set_property("height", &format!("{h}px"));
	ctx.scale(dpr, dpr).is_ok()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
	use wasm_bindgen::JsCast;
	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn fresh_canvas() -> HtmlCanvasElement {
		web_sys::window()
			.expect("browser test needs a window")
			.document()
			.expect("browser test needs a document")
			.create_element("canvas")
			.expect("create canvas")
			.dyn_into()
			.expect("element is a canvas")
	}

	#[wasm_bindgen_test]
	fn backing_store_scales_with_device_pixel_ratio() {
		let canvas = fresh_canvas();
		assert!(sized_context(&canvas, 640.0, 480.0, 2.0).is_some());
		assert_eq!(canvas.width(), 1280);
		assert_eq!(canvas.height(), 960);
		let style = web_sys::HtmlElement::style(&canvas);
		assert_eq!(style.get_property_value("width").unwrap(), "640px");
	}

	#[wasm_bindgen_test]
	fn resize_updates_the_backing_store_and_css_size() {
		let canvas = fresh_canvas();
		let ctx = sized_context(&canvas, 640.0, 480.0, 1.0).expect("2d context");
		assert!(resize_backing(&canvas, &ctx, 800.0, 600.0, 1.0));
		assert_eq!((canvas.width(), canvas.height()), (800, 600));
		let style = web_sys::HtmlElement::style(&canvas);
		assert_eq!(style.get_property_value("width").unwrap(), "800px");
		assert_eq!(style.get_property_value("height").unwrap(), "600px");
	}
}
