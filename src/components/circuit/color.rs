/// 8-bit sRGB color used for the circuit hues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Rgb {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn css(&self) -> String {
		format!("rgb({}, {}, {})", self.r, self.g, self.b)
	}

	pub fn css_alpha(&self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}

	/// Channel-wise blend toward `other`; `f` is clamped to [0, 1].
	pub fn mix(&self, other: Rgb, f: f64) -> Rgb {
		let f = f.clamp(0.0, 1.0);
		let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8;
		Rgb {
			r: lerp(self.r, other.r),
			g: lerp(self.g, other.g),
			b: lerp(self.b, other.b),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const PINK: Rgb = Rgb::new(255, 105, 245);
	const CYAN: Rgb = Rgb::new(0, 255, 255);

	#[test]
	fn mix_endpoints_are_exact() {
		assert_eq!(PINK.mix(CYAN, 0.0), PINK);
		assert_eq!(PINK.mix(CYAN, 1.0), CYAN);
	}

	#[test]
	fn mix_clamps_factor() {
		assert_eq!(PINK.mix(CYAN, -2.0), PINK);
		assert_eq!(PINK.mix(CYAN, 5.0), CYAN);
	}

	#[test]
	fn mix_midpoint_rounds_per_channel() {
		let mid = PINK.mix(CYAN, 0.5);
		assert_eq!(mid, Rgb::new(128, 180, 250));
	}

	#[test]
	fn css_strings() {
		assert_eq!(CYAN.css(), "rgb(0, 255, 255)");
		assert_eq!(CYAN.css_alpha(0.5), "rgba(0, 255, 255, 0.5)");
		assert_eq!(CYAN.css_alpha(0.0), "rgba(0, 255, 255, 0)");
	}
}
