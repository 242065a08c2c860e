use std::f64::consts::PI;

use rand::Rng;
use rand::rngs::SmallRng;

use super::config::CircuitConfig;

/// A light pulse traveling along one edge.
///
/// `t` is the normalized position between the edge endpoints and always
/// stays in [0, 1]; `dir` is +1.0 or -1.0 and flips when an endpoint is hit.
#[derive(Clone, Copy, Debug)]
pub struct Pulse {
	pub edge: usize,
	pub t: f64,
	pub speed: f64,
	pub dir: f64,
}

impl Pulse {
	/// Advance one frame, bouncing off the endpoints.
	pub fn step(&mut self) {
		self.t += self.speed * self.dir;
		if self.t > 1.0 {
			self.t = 1.0;
			self.dir = -1.0;
		} else if self.t < 0.0 {
			self.t = 0.0;
			self.dir = 1.0;
		}
	}

	/// Hue blend factor: 0 at either endpoint, 1 mid-edge.
	pub fn transit(&self) -> f64 {
		(self.t * PI).sin().abs()
	}
}

/// Seed the pulse population for a board with `edge_count` edges.
///
/// Sparse boards are held to `pulses_per_edge` pulses per edge instead of
/// the full target; an edgeless board gets none at all.
pub fn seed_pulses(edge_count: usize, cfg: &CircuitConfig, rng: &mut SmallRng) -> Vec<Pulse> {
	if edge_count == 0 {
		return Vec::new();
	}
	let count = cfg
		.pulse_target
		.min(edge_count.saturating_mul(cfg.pulses_per_edge));
	(0..count)
		.map(|_| Pulse {
			edge: rng.gen_range(0..edge_count),
			t: rng.gen_range(0.0..1.0),
			speed: speed_between(cfg.speed_min, cfg.speed_max, rng),
			dir: if rng.gen_range(0.0..1.0) < 0.5 { 1.0 } else { -1.0 },
		})
		.collect()
}

fn speed_between(min: f64, max: f64, rng: &mut SmallRng) -> f64 {
	if max > min { rng.gen_range(min..max) } else { min }
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::super::color::Rgb;
	use super::*;

	fn rng(seed: u64) -> SmallRng {
		SmallRng::seed_from_u64(seed)
	}

	fn pulse(t: f64, speed: f64, dir: f64) -> Pulse {
		Pulse { edge: 0, t, speed, dir }
	}

	#[test]
	fn step_advances_by_speed_times_direction() {
		let mut p = pulse(0.5, 0.01, 1.0);
		p.step();
		assert!((p.t - 0.51).abs() < 1e-12);
		let mut q = pulse(0.5, 0.01, -1.0);
		q.step();
		assert!((q.t - 0.49).abs() < 1e-12);
	}

	#[test]
	fn overshoot_clamps_then_reverses() {
		let mut p = pulse(0.995, 0.01, 1.0);
		p.step();
		assert_eq!(p.t, 1.0);
		assert_eq!(p.dir, -1.0);
		p.step();
		assert!((p.t - 0.99).abs() < 1e-12);
	}

	#[test]
	fn exactly_at_the_far_endpoint_still_reverses() {
		// t lands on 1.0, the next step pushes past and flips
		let mut p = pulse(1.0, 0.01, 1.0);
		p.step();
		assert_eq!(p.t, 1.0);
		assert_eq!(p.dir, -1.0);
	}

	#[test]
	fn exactly_at_the_near_endpoint_still_reverses() {
		let mut p = pulse(0.0, 0.01, -1.0);
		p.step();
		assert_eq!(p.t, 0.0);
		assert_eq!(p.dir, 1.0);
	}

	#[test]
	fn position_never_escapes_the_unit_interval() {
		let mut r = rng(21);
		let mut pulses = seed_pulses(40, &CircuitConfig::default(), &mut r);
		for _ in 0..10_000 {
			for p in &mut pulses {
				p.step();
				assert!(p.t >= 0.0 && p.t <= 1.0, "t escaped: {}", p.t);
				assert!(p.dir == 1.0 || p.dir == -1.0);
			}
		}
	}

	#[test]
	fn transit_is_zero_at_endpoints_and_one_mid_edge() {
		assert_eq!(pulse(0.0, 0.01, 1.0).transit(), 0.0);
		assert!((pulse(1.0, 0.01, 1.0).transit()).abs() < 1e-9);
		assert_eq!(pulse(0.5, 0.01, 1.0).transit(), 1.0);
	}

	#[test]
	fn blended_hue_sits_on_the_endpoints_exactly() {
		let (a, b) = (Rgb::new(255, 105, 245), Rgb::new(0, 255, 255));
		assert_eq!(a.mix(b, pulse(0.0, 0.01, 1.0).transit()), a);
		assert_eq!(a.mix(b, pulse(1.0, 0.01, 1.0).transit()), a);
		assert_eq!(a.mix(b, pulse(0.5, 0.01, 1.0).transit()), b);
	}

	#[test]
	fn seeding_caps_at_the_configured_target() {
		let cfg = CircuitConfig::default();
		let pulses = seed_pulses(500, &cfg, &mut rng(1));
		assert_eq!(pulses.len(), cfg.pulse_target);
	}

	#[test]
	fn sparse_boards_get_proportionally_fewer_pulses() {
		let cfg = CircuitConfig::default();
		let pulses = seed_pulses(3, &cfg, &mut rng(2));
		assert_eq!(pulses.len(), 3 * cfg.pulses_per_edge);
	}

	#[test]
	fn edgeless_boards_get_no_pulses() {
		assert!(seed_pulses(0, &CircuitConfig::default(), &mut rng(3)).is_empty());
	}

	#[test]
	fn seeded_pulses_are_well_formed() {
		let cfg = CircuitConfig::default();
		for p in seed_pulses(25, &cfg, &mut rng(4)) {
			assert!(p.edge < 25);
			assert!(p.t >= 0.0 && p.t < 1.0);
			assert!(p.speed >= cfg.speed_min && p.speed <= cfg.speed_max);
			assert!(p.dir == 1.0 || p.dir == -1.0);
		}
	}
}
