use std::f64::consts::TAU;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rustfft::num_complex::Complex64;

use crate::{
	frequency_bin::bin_to_frequency, ComplexAmplitude, DftError, SamplingCtx, Signal, Spectrum,
};

/// Forward transform by direct summation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dft {
	ctx: SamplingCtx,
}

impl Dft {
	#[must_use]
	pub const fn new(ctx: SamplingCtx) -> Self {
		Self { ctx }
	}

	#[must_use]
	pub const fn ctx(&self) -> &SamplingCtx {
		&self.ctx
	}

	/// Compute one [`ComplexAmplitude`] per bin, in natural order.
	///
	/// # Errors
	/// [`DftError::LengthMismatch`] if `signal` does not contain exactly
	/// `ctx.n_of_samples()` samples.
	pub fn analyze(&self, signal: &[f64]) -> Result<Spectrum, DftError> {
		let n_of_samples = self.ctx.n_of_samples();
		if signal.len() != n_of_samples {
			return Err(DftError::LengthMismatch {
				expected: n_of_samples,
				actual: signal.len(),
			});
		}

		let sample_rate = self.ctx.sample_rate();
		tracing::debug!(n_of_samples, %sample_rate, "forward DFT");

		let analyze_bin = |k: usize| {
			let amplitude = ComplexAmplitude::from_coefficient(
				bin_to_frequency(n_of_samples, sample_rate.0, k),
				coefficient(signal, k),
				n_of_samples,
			);
			tracing::trace!(
				bin = k,
				frequency = amplitude.frequency(),
				amplitude = amplitude.amplitude(),
				phase = amplitude.phase()
			);
			amplitude
		};

		#[cfg(feature = "parallel")]
		let amplitudes = (0..n_of_samples).into_par_iter().map(analyze_bin).collect();
		#[cfg(not(feature = "parallel"))]
		let amplitudes = (0..n_of_samples).map(analyze_bin).collect();

		Ok(Spectrum::from_amplitudes(amplitudes, sample_rate))
	}

	/// Same as [`Dft::analyze`], for a signal produced by this transform's sampling context.
	///
	/// # Errors
	/// [`DftError::LengthMismatch`] if `signal` was sampled with a different number of samples.
	pub fn analyze_signal(&self, signal: &Signal) -> Result<Spectrum, DftError> {
		self.analyze(signal.samples())
	}
}

/// `X[k] = Σ x[i] · e^(-j·2π·k·i/N)`, summed in increasing `i`.
///
/// The summation order is part of the contract: results are reproducible
/// bit for bit whichever way the bins are scheduled.
#[must_use]
pub fn coefficient(signal: &[f64], k: usize) -> Complex64 {
	let step = -TAU / signal.len() as f64;
	signal
		.iter()
		.enumerate()
		.fold(Complex64::new(0., 0.), |acc, (i, &sample)| {
			acc + sample * Complex64::cis(step * k as f64 * i as f64)
		})
}
