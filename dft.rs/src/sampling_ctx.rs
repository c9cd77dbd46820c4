use math_utils::ext::{DivisibleByUsize, MultiplyByUsize};

use crate::{DftError, SampleRate, Signal};

/// Relative tolerance used to decide whether `window * sample_rate` is an integer.
const INTEGRAL_TOLERANCE: f64 = 1e-9;

/// An observation window sampled at a fixed rate.
///
/// Only constructible through [`SamplingCtx::new`], so every instance describes
/// at least one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingCtx {
	window: f64,
	sample_rate: SampleRate,
	n_of_samples: usize,
}

impl SamplingCtx {
	/// # Errors
	/// - [`DftError::InvalidWindow`] if `window` is not a positive finite number
	/// - [`DftError::InvalidSampleRate`] if `sample_rate` is not a positive finite number
	/// - [`DftError::NonIntegralSampleCount`] if `window * sample_rate` is not an integer
	/// - [`DftError::TooManySamples`] if `window * sample_rate` does not fit in a `usize`
	/// - [`DftError::NoSamples`] if `window * sample_rate` rounds to zero
	pub fn new(window: f64, sample_rate: impl Into<SampleRate>) -> Result<Self, DftError> {
		let sample_rate = sample_rate.into();
		if !window.is_finite() || window <= 0. {
			return Err(DftError::InvalidWindow(window));
		}
		if !sample_rate.is_valid() {
			return Err(DftError::InvalidSampleRate(sample_rate.0));
		}

		let product = window * sample_rate.0;
		let rounded = product.round();
		// `usize::MAX as f64` rounds up to 2^64, the first value that saturates the cast
		if !product.is_finite() || rounded >= usize::MAX as f64 {
			return Err(DftError::TooManySamples {
				window,
				sample_rate: sample_rate.0,
			});
		}
		if (product - rounded).abs() > INTEGRAL_TOLERANCE * rounded.max(1.) {
			return Err(DftError::NonIntegralSampleCount {
				window,
				sample_rate: sample_rate.0,
			});
		}
		if rounded < 1. {
			return Err(DftError::NoSamples);
		}

		#[allow(clippy::cast_sign_loss)]
		let n_of_samples = rounded as usize;

		Ok(Self {
			window,
			sample_rate,
			n_of_samples,
		})
	}

	/// Length of the observation window, in time units.
	#[must_use]
	pub const fn window(&self) -> f64 {
		self.window
	}

	#[must_use]
	pub const fn sample_rate(&self) -> SampleRate {
		self.sample_rate
	}

	/// `window * sample_rate`, always `>= 1`.
	#[must_use]
	pub const fn n_of_samples(&self) -> usize {
		self.n_of_samples
	}

	/// Time of the `i`-th sample: `i * window / n_of_samples`.
	#[must_use]
	pub fn time_at(&self, i: usize) -> f64 {
		self.window.mul_usize(i).div_usize(self.n_of_samples)
	}

	/// Distance in frequency between two adjacent bins.
	#[must_use]
	pub fn frequency_gap(&self) -> f64 {
		self.sample_rate.0.div_usize(self.n_of_samples)
	}

	/// Evaluate `f` at every sampling instant of the window.
	///
	/// `f` is called exactly `n_of_samples` times, in increasing time order.
	#[must_use]
	pub fn sample(&self, f: impl Fn(f64) -> f64) -> Signal {
		let samples = (0..self.n_of_samples).map(|i| f(self.time_at(i))).collect();
		Signal::new_unchecked(*self, samples)
	}
}
