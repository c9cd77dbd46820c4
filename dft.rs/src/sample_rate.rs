use std::fmt::Display;

use derive_more::derive::{Add, AddAssign, Div, Mul, MulAssign, Sub};

/// Number of samples per time unit. The time unit is the caller's choice,
/// as long as the window length uses the same one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Add, AddAssign, Sub, Div, Mul, MulAssign)]
pub struct SampleRate(pub f64);

impl SampleRate {
	#[must_use]
	pub const fn inner(&self) -> f64 {
		self.0
	}

	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.0.is_finite() && self.0 > 0.
	}
}

impl Display for SampleRate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&format!("{} samples/unit", self.0), f)
	}
}

impl From<f64> for SampleRate {
	fn from(value: f64) -> Self {
		Self(value)
	}
}

impl From<usize> for SampleRate {
	fn from(value: usize) -> Self {
		#[allow(clippy::cast_precision_loss)]
		Self(value as f64)
	}
}

impl From<SampleRate> for f64 {
	fn from(value: SampleRate) -> Self {
		value.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validity() {
		assert!(SampleRate(150.).is_valid());
		assert!(!SampleRate(0.).is_valid());
		assert!(!SampleRate(-1.).is_valid());
		assert!(!SampleRate(f64::NAN).is_valid());
		assert!(!SampleRate(f64::INFINITY).is_valid());
	}

	#[test]
	fn display() {
		assert_eq!(SampleRate(44100.).to_string(), "44100 samples/unit");
		assert_eq!(SampleRate::from(4_usize).to_string(), "4 samples/unit");
	}
}
