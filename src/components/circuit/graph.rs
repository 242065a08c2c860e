use std::collections::HashSet;

use rand::Rng;
use rand::rngs::SmallRng;

use super::config::{CircuitConfig, MIN_COLS, MIN_ROWS};

/// A solder point, in CSS pixels.
#[derive(Clone, Copy, Debug)]
pub struct Node {
	pub x: f64,
	pub y: f64,
}

/// A trace between two nodes, by index into the node list.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
	pub a: usize,
	pub b: usize,
	pub length: f64,
}

/// Randomized grid graph that plays the part of a circuit board.
///
/// Nodes sit near cell centers of a `cols` x `rows` grid; edges connect a
/// node to its right, lower, or lower-right neighbor with the configured
/// probabilities. No self-loops, no duplicate pairs in either order.
pub struct CircuitGraph {
	pub cols: usize,
	pub rows: usize,
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

/// Column and row counts for a viewport, floored from the cell size and
/// clamped so degenerate sizes still produce a usable grid.
pub fn grid_dims(width: f64, height: f64, cell_size: f64) -> (usize, usize) {
	let cell = if cell_size > 0.0 { cell_size } else { 1.0 };
	let cols = ((width / cell).floor() as usize).max(MIN_COLS);
	let rows = ((height / cell).floor() as usize).max(MIN_ROWS);
	(cols, rows)
}

impl CircuitGraph {
	pub fn generate(width: f64, height: f64, cfg: &CircuitConfig, rng: &mut SmallRng) -> Self {
		let (cols, rows) = grid_dims(width, height, cfg.cell_size);
		let cell_w = width / cols as f64;
		let cell_h = height / rows as f64;

		let mut nodes = Vec::with_capacity(cols * rows);
		for row in 0..rows {
			for col in 0..cols {
				nodes.push(Node {
					x: (col as f64 + 0.5) * cell_w + jitter(rng, cfg.jitter_x * cell_w),
					y: (row as f64 + 0.5) * cell_h + jitter(rng, cfg.jitter_y * cell_h),
				});
			}
		}

		let mut edges = Vec::new();
		let mut seen: HashSet<(usize, usize)> = HashSet::new();
		for row in 0..rows {
			for col in 0..cols {
				let here = row * cols + col;
				if col + 1 < cols && chance(rng, cfg.p_right) {
					push_edge(&mut edges, &mut seen, &nodes, here, here + 1);
				}
				if row + 1 < rows && chance(rng, cfg.p_down) {
					push_edge(&mut edges, &mut seen, &nodes, here, here + cols);
				}
				if col + 1 < cols && row + 1 < rows && chance(rng, cfg.p_diag) {
					push_edge(&mut edges, &mut seen, &nodes, here, here + cols + 1);
				}
			}
		}

		Self { cols, rows, nodes, edges }
	}

	/// Endpoint lookup for an edge index. `None` means the index is stale
	/// (from before a rebuild) and the caller should skip it.
	pub fn endpoints(&self, edge: usize) -> Option<(&Node, &Node)> {
		let e = self.edges.get(edge)?;
		Some((self.nodes.get(e.a)?, self.nodes.get(e.b)?))
	}
}

fn chance(rng: &mut SmallRng, p: f64) -> bool {
	rng.gen_range(0.0..1.0) < p
}

fn jitter(rng: &mut SmallRng, amplitude: f64) -> f64 {
	if amplitude > 0.0 {
		rng.gen_range(-amplitude..amplitude)
	} else {
		0.0
	}
}

fn push_edge(
	edges: &mut Vec<Edge>,
	seen: &mut HashSet<(usize, usize)>,
	nodes: &[Node],
	a: usize,
	b: usize,
) {
	let key = if a < b { (a, b) } else { (b, a) };
	if a == b || !seen.insert(key) {
		return;
	}
	let (dx, dy) = (nodes[b].x - nodes[a].x, nodes[b].y - nodes[a].y);
	edges.push(Edge { a, b, length: (dx * dx + dy * dy).sqrt() });
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;

	fn rng(seed: u64) -> SmallRng {
		SmallRng::seed_from_u64(seed)
	}

	#[test]
	fn grid_dims_floor_the_cell_count() {
		assert_eq!(grid_dims(1000.0, 800.0, 200.0), (5, 4));
		assert_eq!(grid_dims(1199.0, 999.0, 200.0), (5, 4));
	}

	#[test]
	fn grid_dims_clamp_degenerate_viewports() {
		assert_eq!(grid_dims(0.0, 0.0, 200.0), (MIN_COLS, MIN_ROWS));
		assert_eq!(grid_dims(150.0, 90.0, 200.0), (MIN_COLS, MIN_ROWS));
		assert_eq!(grid_dims(1000.0, 800.0, 0.0), (1000, 800));
	}

	#[test]
	fn generate_places_one_node_per_cell() {
		let cfg = CircuitConfig::default();
		let graph = CircuitGraph::generate(1000.0, 800.0, &cfg, &mut rng(7));
		assert_eq!((graph.cols, graph.rows), (5, 4));
		assert_eq!(graph.nodes.len(), 20);
	}

	#[test]
	fn generate_survives_a_zero_size_viewport() {
		let cfg = CircuitConfig::default();
		let graph = CircuitGraph::generate(0.0, 0.0, &cfg, &mut rng(7));
		assert_eq!(graph.nodes.len(), MIN_COLS * MIN_ROWS);
		for node in &graph.nodes {
			assert_eq!((node.x, node.y), (0.0, 0.0));
		}
	}

	#[test]
	fn nodes_stay_within_jitter_of_cell_centers() {
		let cfg = CircuitConfig::default();
		let (w, h) = (1280.0, 900.0);
		let graph = CircuitGraph::generate(w, h, &cfg, &mut rng(42));
		let cell_w = w / graph.cols as f64;
		let cell_h = h / graph.rows as f64;
		for (i, node) in graph.nodes.iter().enumerate() {
			let col = (i % graph.cols) as f64;
			let row = (i / graph.cols) as f64;
			assert!((node.x - (col + 0.5) * cell_w).abs() <= cfg.jitter_x * cell_w);
			assert!((node.y - (row + 0.5) * cell_h).abs() <= cfg.jitter_y * cell_h);
		}
	}

	#[test]
	fn edges_reference_live_nodes_without_duplicates() {
		let cfg = CircuitConfig::default();
		for seed in 0..32 {
			let graph = CircuitGraph::generate(1400.0, 900.0, &cfg, &mut rng(seed));
			let mut pairs = std::collections::HashSet::new();
			for edge in &graph.edges {
				assert_ne!(edge.a, edge.b);
				assert!(edge.a < graph.nodes.len());
				assert!(edge.b < graph.nodes.len());
				assert!(edge.length > 0.0);
				let key = if edge.a < edge.b { (edge.a, edge.b) } else { (edge.b, edge.a) };
				assert!(pairs.insert(key), "duplicate trace {key:?} with seed {seed}");
			}
		}
	}

	#[test]
	fn edges_only_reach_right_down_or_diagonal_neighbors() {
		let cfg = CircuitConfig {
			p_right: 1.0,
			p_down: 1.0,
			p_diag: 1.0,
			..CircuitConfig::default()
		};
		let graph = CircuitGraph::generate(1000.0, 800.0, &cfg, &mut rng(3));
		for edge in &graph.edges {
			let (lo, hi) = if edge.a < edge.b { (edge.a, edge.b) } else { (edge.b, edge.a) };
			let step = hi - lo;
			assert!(
				step == 1 || step == graph.cols || step == graph.cols + 1,
				"unexpected neighbor offset {step}",
			);
		}
	}

	#[test]
	fn zero_probabilities_give_an_edgeless_board() {
		let cfg = CircuitConfig {
			p_right: 0.0,
			p_down: 0.0,
			p_diag: 0.0,
			..CircuitConfig::default()
		};
		let graph = CircuitGraph::generate(1000.0, 800.0, &cfg, &mut rng(9));
		assert!(graph.edges.is_empty());
	}

	#[test]
	fn same_seed_reproduces_the_board() {
		let cfg = CircuitConfig::default();
		let a = CircuitGraph::generate(1000.0, 800.0, &cfg, &mut rng(11));
		let b = CircuitGraph::generate(1000.0, 800.0, &cfg, &mut rng(11));
		assert_eq!(a.edges.len(), b.edges.len());
		for (ea, eb) in a.edges.iter().zip(&b.edges) {
			assert_eq!((ea.a, ea.b), (eb.a, eb.b));
		}
		for (na, nb) in a.nodes.iter().zip(&b.nodes) {
			assert_eq!((na.x, na.y), (nb.x, nb.y));
		}
	}

	#[test]
	fn endpoints_reject_stale_indices() {
		let cfg = CircuitConfig::default();
		let graph = CircuitGraph::generate(1000.0, 800.0, &cfg, &mut rng(5));
		assert!(graph.endpoints(graph.edges.len()).is_none());
		assert!(graph.endpoints(usize::MAX).is_none());
		if !graph.edges.is_empty() {
			assert!(graph.endpoints(0).is_some());
		}
	}

	#[test]
	fn full_probability_board_has_every_orthogonal_trace() {
		let cfg = CircuitConfig {
			p_right: 1.0,
			p_down: 1.0,
			p_diag: 0.0,
			..CircuitConfig::default()
		};
		let graph = CircuitGraph::generate(1000.0, 800.0, &cfg, &mut rng(1));
		// (cols-1)*rows horizontal plus cols*(rows-1) vertical
		let expected = (graph.cols - 1) * graph.rows + graph.cols * (graph.rows - 1);
		assert_eq!(graph.edges.len(), expected);
	}
}
