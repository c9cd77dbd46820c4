#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]

pub trait RoundToDecimals {
	/// Round half away from zero, keeping `decimals` digits after the decimal point.
	///
	/// The value is scaled by `10^decimals` in floating point before rounding, so
	/// ties are decided on the scaled binary value, not on the exact decimal
	/// expansion, and are never rounded to even: `2.5` becomes `3` and `0.125`
	/// with two decimals becomes `0.13`.
	///
	/// Non-finite values are returned as they are.
	#[must_use]
	fn round_decimals(self, decimals: u32) -> Self;
}

macro_rules! impl_round_decimals_for_float {
	($t:ty) => {
		impl RoundToDecimals for $t {
			fn round_decimals(self, decimals: u32) -> Self {
				if !self.is_finite() {
					return self;
				}
				let scale = (10 as $t).powi(decimals as i32);
				let scaled = self * scale;
				// the value already carries fewer significant digits than requested
				if !scaled.is_finite() {
					return self;
				}
				scaled.round() / scale
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_round_decimals_for_float!($t);
		impl_round_decimals_for_float!($($others),+);
	};
}

impl_round_decimals_for_float!(f32, f64);

pub trait MultiplyByUsize {
	#[must_use]
	fn mul_usize(self, rhs: usize) -> Self;
}

macro_rules! impl_mul_for_float {
	($t:ty) => {
		impl MultiplyByUsize for $t {
			fn mul_usize(self, rhs: usize) -> Self {
				self * rhs as Self
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_mul_for_float!($t);
		impl_mul_for_float!($($others),+);
	};
}

impl_mul_for_float!(f32, f64);

pub trait DivisibleByUsize {
	#[must_use]
	fn div_usize(self, rhs: usize) -> Self;
}

macro_rules! impl_div_for_float {
	($t:ty) => {
		impl DivisibleByUsize for $t {
			fn div_usize(self, rhs: usize) -> Self {
				self / rhs as Self
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_div_for_float!($t);
		impl_div_for_float!($($others),+);
	};
}

impl_div_for_float!(f32, f64);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_to_ten_decimals() {
		assert!((0.123_456_789_012_34_f64.round_decimals(10) - 0.123_456_789_0).abs() < 1e-15);
		assert!((0.123_456_789_06_f64.round_decimals(10) - 0.123_456_789_1).abs() < 1e-15);
		assert!((-0.123_456_789_06_f64.round_decimals(10) + 0.123_456_789_1).abs() < 1e-15);
	}

	#[test]
	fn round_ties_away_from_zero() {
		assert_eq!(0.5_f64.round_decimals(0), 1.);
		assert_eq!(2.5_f64.round_decimals(0), 3.);
		assert_eq!((-2.5_f64).round_decimals(0), -3.);
		// exactly representable tie: 12.5 after scaling
		assert_eq!(0.125_f64.round_decimals(2), 0.13);
		// a tie at the eleventh decimal goes up as well
		assert_eq!(0.000_000_000_05_f64.round_decimals(10), 1e-10);
	}

	#[test]
	fn round_flushes_tiny_values_to_zero() {
		assert_eq!(6.123_233_995_736_766e-17_f64.round_decimals(10), 0.);
		assert_eq!((-1.8e-16_f64).round_decimals(10).abs(), 0.);
	}

	#[test]
	fn round_keeps_non_finite_values() {
		assert!(f64::NAN.round_decimals(10).is_nan());
		assert_eq!(f64::INFINITY.round_decimals(10), f64::INFINITY);
		assert_eq!(f64::MAX.round_decimals(10), f64::MAX);
	}

	#[test]
	fn usize_helpers() {
		assert!((3_f64.mul_usize(4) - 12.).abs() < f64::EPSILON);
		assert!((3_f32.div_usize(4) - 0.75).abs() < f32::EPSILON);
	}
}
