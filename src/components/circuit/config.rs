use super::color::Rgb;

/// Grid floors; tiny viewports still get a believable board.
pub const MIN_COLS: usize = 4;
pub const MIN_ROWS: usize = 3;

/// Tunable look and density of the circuit background.
///
/// Column and row counts derive from `cell_size` and the viewport, clamped
/// to [`MIN_COLS`] x [`MIN_ROWS`]. Probabilities are per cell, so orthogonal
/// traces should stay more likely than diagonal ones.
#[derive(Clone, Copy, Debug)]
pub struct CircuitConfig {
	/// Target cell size in CSS pixels.
	pub cell_size: f64,
	pub node_radius: f64,
	pub line_width: f64,
	/// Upper bound on the pulse population.
	pub pulse_target: usize,
	/// Sparse boards are capped at this many pulses per edge instead.
	pub pulses_per_edge: usize,
	/// Pulse speed range, in edge fractions per frame.
	pub speed_min: f64,
	pub speed_max: f64,
	pub p_right: f64,
	pub p_down: f64,
	pub p_diag: f64,
	/// Node jitter as a fraction of the cell size, per axis.
	pub jitter_x: f64,
	pub jitter_y: f64,
	/// Pulses sit on `hue_a` at the edge endpoints and `hue_b` mid-edge.
	pub hue_a: Rgb,
	pub hue_b: Rgb,
}

impl Default for CircuitConfig {
	fn default() -> Self {
		Self {
			cell_size: 200.0,
			node_radius: 2.5,
			line_width: 1.2,
			pulse_target: 60,
			pulses_per_edge: 2,
			speed_min: 0.002,
			speed_max: 0.012,
			p_right: 0.55,
			p_down: 0.35,
			p_diag: 0.08,
			jitter_x: 0.15,
			jitter_y: 0.12,
			hue_a: Rgb::new(255, 105, 245),
			hue_b: Rgb::new(0, 255, 255),
		}
	}
}
