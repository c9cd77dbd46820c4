use std::f64::consts::TAU;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rustfft::num_complex::Complex64;

use crate::{ComplexAmplitude, DftError, ReconstructedSignal, SamplingCtx};

/// Inverse transform by direct summation over the raw bin coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseDft {
	window: f64,
}

impl InverseDft {
	/// # Errors
	/// [`DftError::InvalidWindow`] if `window` is not a positive finite number.
	pub fn new(window: f64) -> Result<Self, DftError> {
		if window.is_finite() && window > 0. {
			Ok(Self { window })
		} else {
			Err(DftError::InvalidWindow(window))
		}
	}

	#[must_use]
	pub const fn from_ctx(ctx: &SamplingCtx) -> Self {
		Self {
			window: ctx.window(),
		}
	}

	#[must_use]
	pub const fn window(&self) -> f64 {
		self.window
	}

	/// Recover one time-domain value per entry of `amplitudes`.
	///
	/// Only [`ComplexAmplitude::coefficient`] is used. The output has as many
	/// points as `amplitudes`, the `n`-th one at time `n * window / len`.
	///
	/// # Errors
	/// [`DftError::EmptySpectrum`] if `amplitudes` is empty.
	pub fn reconstruct(
		&self,
		amplitudes: &[ComplexAmplitude],
	) -> Result<ReconstructedSignal, DftError> {
		let n_of_samples = amplitudes.len();
		if n_of_samples == 0 {
			return Err(DftError::EmptySpectrum);
		}
		tracing::debug!(n_of_samples, window = self.window, "inverse DFT");

		let coefficients: Vec<Complex64> =
			amplitudes.iter().map(ComplexAmplitude::coefficient).collect();
		let reconstruct_point = |n: usize| {
			(
				self.window * n as f64 / n_of_samples as f64,
				sample(&coefficients, n).re,
			)
		};

		#[cfg(feature = "parallel")]
		let points = (0..n_of_samples)
			.into_par_iter()
			.map(reconstruct_point)
			.collect();
		#[cfg(not(feature = "parallel"))]
		let points = (0..n_of_samples).map(reconstruct_point).collect();

		Ok(ReconstructedSignal::new(points))
	}
}

/// `x[n] = (1/N) · Σ X[i] · e^(+j·2π·n·i/N)`, summed in increasing `i`.
#[must_use]
pub fn sample(coefficients: &[Complex64], n: usize) -> Complex64 {
	let n_of_samples = coefficients.len() as f64;
	let step = TAU / n_of_samples;
	let sum = coefficients
		.iter()
		.enumerate()
		.fold(Complex64::new(0., 0.), |acc, (i, &c)| {
			acc + c * Complex64::cis(step * n as f64 * i as f64)
		});
	(1. / n_of_samples) * sum
}
