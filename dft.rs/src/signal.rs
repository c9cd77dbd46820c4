use std::f64::consts::TAU;

use derive_more::derive::Deref;

use crate::{DftError, SamplingCtx};

/// An immutable sequence of real samples taken over a [`SamplingCtx`].
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Signal {
	ctx: SamplingCtx,
	#[deref]
	samples: Vec<f64>,
}

impl Signal {
	pub(crate) fn new_unchecked(ctx: SamplingCtx, samples: Vec<f64>) -> Self {
		debug_assert_eq!(ctx.n_of_samples(), samples.len());
		Self { ctx, samples }
	}

	/// Wrap samples that were acquired elsewhere.
	///
	/// # Errors
	/// [`DftError::LengthMismatch`] if `samples.len()` differs from `ctx.n_of_samples()`.
	pub fn from_samples(ctx: SamplingCtx, samples: Vec<f64>) -> Result<Self, DftError> {
		if samples.len() == ctx.n_of_samples() {
			Ok(Self { ctx, samples })
		} else {
			Err(DftError::LengthMismatch {
				expected: ctx.n_of_samples(),
				actual: samples.len(),
			})
		}
	}

	#[must_use]
	pub const fn ctx(&self) -> &SamplingCtx {
		&self.ctx
	}

	#[must_use]
	pub fn samples(&self) -> &[f64] {
		&self.samples
	}

	/// `(time, value)` pairs, in sampling order.
	#[must_use]
	pub fn points(&self) -> Vec<(f64, f64)> {
		self.samples
			.iter()
			.enumerate()
			.map(|(i, &v)| (self.ctx.time_at(i), v))
			.collect()
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<f64> {
		self.samples
	}
}

/// A cosine component `amplitude * cos(2π * frequency * t + phase)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tone {
	pub frequency: f64,
	pub amplitude: f64,
	pub phase: f64,
}

impl Tone {
	#[must_use]
	pub const fn new(frequency: f64, amplitude: f64, phase: f64) -> Self {
		Self {
			frequency,
			amplitude,
			phase,
		}
	}

	#[must_use]
	pub fn eval(&self, t: f64) -> f64 {
		self.amplitude * (TAU * self.frequency * t + self.phase).cos()
	}
}

/// The sum of all `tones`, as a function of time.
pub fn superpose(tones: &[Tone]) -> impl Fn(f64) -> f64 + '_ {
	move |t| tones.iter().map(|tone| tone.eval(t)).sum()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_samples_checks_length() {
		let ctx = SamplingCtx::new(1., 4.).unwrap();
		assert!(Signal::from_samples(ctx, vec![0.; 4]).is_ok());
		assert_eq!(
			Signal::from_samples(ctx, vec![0.; 3]),
			Err(DftError::LengthMismatch {
				expected: 4,
				actual: 3
			})
		);
	}

	#[test]
	fn points_carry_sampling_times() {
		let ctx = SamplingCtx::new(2., 2.).unwrap();
		let signal = Signal::from_samples(ctx, vec![4., 3., 2., 1.]).unwrap();
		assert_eq!(
			signal.points(),
			vec![(0., 4.), (0.5, 3.), (1., 2.), (1.5, 1.)]
		);
	}

	#[test]
	fn superposed_tones() {
		let tones = [Tone::new(5., 1.5, 0.5), Tone::new(10., 2., 1.)];
		let f = superpose(&tones);
		let expected = 1.5 * 0.5_f64.cos() + 2. * 1_f64.cos();
		assert!((f(0.) - expected).abs() < 1e-12);
		assert!((f(0.2) - expected).abs() < 1e-9);
		assert_eq!(superpose(&[])(1.), 0.);
	}
}
