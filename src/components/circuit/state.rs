use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::CircuitConfig;
use super::graph::CircuitGraph;
use super::pulse::{Pulse, seed_pulses};

/// Everything the background animation owns: the generated board, the pulse
/// population, the viewport it was built for, and the RNG that built it.
pub struct CircuitState {
	pub cfg: CircuitConfig,
	pub graph: CircuitGraph,
	pub pulses: Vec<Pulse>,
	pub width: f64,
	pub height: f64,
	rng: SmallRng,
}

impl CircuitState {
	pub fn new(cfg: CircuitConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let graph = CircuitGraph::generate(width, height, &cfg, &mut rng);
		let pulses = seed_pulses(graph.edges.len(), &cfg, &mut rng);
		log::debug!(
			"circuit board built: {}x{} grid, {} edges, {} pulses",
			graph.cols,
			graph.rows,
			graph.edges.len(),
			pulses.len()
		);
		Self { cfg, graph, pulses, width, height, rng }
	}

	/// Throw the layout away and regenerate it for a new viewport. The pulse
	/// population is reseeded too, so no pulse can outlive its edge.
	pub fn rebuild(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.graph = CircuitGraph::generate(width, height, &self.cfg, &mut self.rng);
		self.pulses = seed_pulses(self.graph.edges.len(), &self.cfg, &mut self.rng);
		let trace: f64 = self.graph.edges.iter().map(|e| e.length).sum();
		log::debug!(
			"circuit board rebuilt for {width}x{height}: {} edges ({trace:.0}px of traces), {} pulses",
			self.graph.edges.len(),
			self.pulses.len()
		);
	}

	/// Advance every pulse one frame.
	pub fn tick(&mut self) {
		for pulse in &mut self.pulses {
			pulse.step();
		}
	}
}
