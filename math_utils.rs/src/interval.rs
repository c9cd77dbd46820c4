use std::fmt::Display;

use crate::ext::{DivisibleByUsize, MultiplyByUsize};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum IntervalError {
	#[error("interval start {0} is greater than its end {1}")]
	Inverted(f64, f64),
	#[error("interval bounds must be finite")]
	NotFinite,
}

/// A closed range `[start, end]` over `f64`, with helpers to move values
/// between ranges (e.g. from data coordinates to screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
	start: f64,
	end: f64,
}

impl Interval {
	/// # Errors
	/// - [`IntervalError::NotFinite`] if any bound is `NaN` or infinite
	/// - [`IntervalError::Inverted`] if `start > end`
	pub fn new(start: f64, end: f64) -> Result<Self, IntervalError> {
		if !start.is_finite() || !end.is_finite() {
			return Err(IntervalError::NotFinite);
		}
		if start > end {
			return Err(IntervalError::Inverted(start, end));
		}
		Ok(Self { start, end })
	}

	/// The smallest interval containing every finite value, or `None` if there are none.
	///
	/// A zero-width result is widened by `0.5` on both sides so that it can
	/// still be used as the source of a [`Interval::map_to`].
	#[must_use]
	pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
		let (start, end) = values
			.into_iter()
			.filter(|v| v.is_finite())
			.fold(None, |acc: Option<(f64, f64)>, v| match acc {
				None => Some((v, v)),
				Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
			})?;

		if (end - start).abs() < f64::EPSILON {
			Some(Self {
				start: start - 0.5,
				end: end + 0.5,
			})
		} else {
			Some(Self { start, end })
		}
	}

	#[must_use]
	pub const fn start(&self) -> f64 {
		self.start
	}

	#[must_use]
	pub const fn end(&self) -> f64 {
		self.end
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.end - self.start
	}

	#[must_use]
	pub fn contains(&self, value: f64) -> bool {
		value >= self.start && value <= self.end
	}

	/// Position of `value` inside the interval, `0.` at `start` and `1.` at `end`.
	/// Values outside the interval map outside `[0, 1]`.
	#[must_use]
	pub fn normalize(&self, value: f64) -> f64 {
		let width = self.width();
		if width == 0. {
			0.
		} else {
			(value - self.start) / width
		}
	}

	#[must_use]
	pub fn lerp(&self, ratio: f64) -> f64 {
		self.start + self.width() * ratio
	}

	/// Linearly remap `value` from this interval into `target`.
	#[must_use]
	pub fn map_to(&self, value: f64, target: &Interval) -> f64 {
		target.lerp(self.normalize(value))
	}

	/// `n` evenly spaced values, the first equal to `start` and the last equal to `end`.
	#[must_use]
	pub fn ticks(&self, n: usize) -> Vec<f64> {
		match n {
			0 => vec![],
			1 => vec![self.start],
			_ => {
				let step = self.width().div_usize(n - 1);
				(0..n)
					.map(|i| {
						if i == n - 1 {
							self.end
						} else {
							self.start + step.mul_usize(i)
						}
					})
					.collect()
			}
		}
	}

	/// Grow the interval on both sides by `ratio` of its width.
	#[must_use]
	pub fn padded(&self, ratio: f64) -> Self {
		let pad = self.width() * ratio.max(0.);
		Self {
			start: self.start - pad,
			end: self.end + pad,
		}
	}
}

impl Display for Interval {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}]", self.start, self.end)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_invalid_bounds() {
		assert_eq!(Interval::new(1., 0.), Err(IntervalError::Inverted(1., 0.)));
		assert_eq!(Interval::new(f64::NAN, 0.), Err(IntervalError::NotFinite));
		assert_eq!(
			Interval::new(0., f64::INFINITY),
			Err(IntervalError::NotFinite)
		);
		assert!(Interval::new(0., 0.).is_ok());
	}

	#[test]
	fn map_between_intervals() {
		let data = Interval::new(-1., 1.).unwrap();
		let screen = Interval::new(100., 300.).unwrap();
		assert!((data.map_to(-1., &screen) - 100.).abs() < f64::EPSILON);
		assert!((data.map_to(0., &screen) - 200.).abs() < f64::EPSILON);
		assert!((data.map_to(1., &screen) - 300.).abs() < f64::EPSILON);
		assert!((data.map_to(2., &screen) - 400.).abs() < f64::EPSILON);
	}

	#[test]
	fn from_values_bounds_the_data() {
		let interval = Interval::from_values([3., -2., f64::NAN, 7., 0.]).unwrap();
		assert_eq!(interval, Interval::new(-2., 7.).unwrap());
		assert!(Interval::from_values([]).is_none());
		assert!(Interval::from_values([f64::NAN]).is_none());
	}

	#[test]
	fn from_values_widens_degenerate_ranges() {
		let interval = Interval::from_values([2., 2.]).unwrap();
		assert!((interval.start() - 1.5).abs() < f64::EPSILON);
		assert!((interval.end() - 2.5).abs() < f64::EPSILON);
	}

	#[test]
	fn ticks_include_both_ends() {
		let interval = Interval::new(0., 75.).unwrap();
		assert_eq!(interval.ticks(0), Vec::<f64>::new());
		assert_eq!(interval.ticks(1), vec![0.]);
		assert_eq!(interval.ticks(4), vec![0., 25., 50., 75.]);
	}

	#[test]
	fn padding() {
		let interval = Interval::new(0., 10.).unwrap().padded(0.1);
		assert!((interval.start() + 1.).abs() < f64::EPSILON);
		assert!((interval.end() - 11.).abs() < f64::EPSILON);
		assert!(interval.contains(-1.) && interval.contains(11.) && !interval.contains(11.5));
	}
}
