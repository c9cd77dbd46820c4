use math_utils::ext::RoundToDecimals;
use rustfft::num_complex::Complex64;

/// Decimal digits kept on amplitude and phase.
pub const DISPLAY_DECIMALS: u32 = 10;

/// One bin of a forward transform.
///
/// `amplitude` and `phase` are rounded display values. The unrounded sum of the
/// bin is kept in `coefficient`, which is what the inverse transform consumes.
///
/// Amplitude and phase are always derived from the coefficient, so there is no
/// public way to set them independently:
///
/// ```compile_fail
/// use dft::{num_complex::Complex64, ComplexAmplitude};
///
/// let _ = ComplexAmplitude::new(1., 0.5, 0., Complex64::new(2., 0.));
/// ```
///
/// ```
/// use dft::{num_complex::Complex64, ComplexAmplitude};
///
/// let amplitude = ComplexAmplitude::from_coefficient(1., Complex64::new(2., 0.), 4);
/// assert_eq!(amplitude.amplitude(), 1.);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexAmplitude {
	frequency: f64,
	amplitude: f64,
	phase: f64,
	coefficient: Complex64,
}

impl ComplexAmplitude {
	/// `magnitude` is the normalized magnitude `|X| / N`. It is rounded and then
	/// doubled to obtain the amplitude; `phase` is rounded too, unless the resulting
	/// amplitude is exactly zero, in which case it becomes `0`.
	#[must_use]
	#[allow(clippy::float_cmp)]
	pub(crate) fn new(frequency: f64, magnitude: f64, phase: f64, coefficient: Complex64) -> Self {
		let amplitude = magnitude.round_decimals(DISPLAY_DECIMALS) * 2.;
		let phase = if amplitude == 0. {
			0.
		} else {
			phase.round_decimals(DISPLAY_DECIMALS)
		};
		Self {
			frequency,
			amplitude,
			phase,
			coefficient,
		}
	}

	/// Derive magnitude and phase from the raw sum `coefficient` of a transform over `n_of_samples` samples.
	#[must_use]
	pub fn from_coefficient(frequency: f64, coefficient: Complex64, n_of_samples: usize) -> Self {
		let magnitude = (1. / n_of_samples as f64)
			* (coefficient.re.powi(2) + coefficient.im.powi(2)).sqrt();
		let phase = coefficient.im.atan2(coefficient.re);
		Self::new(frequency, magnitude, phase, coefficient)
	}

	#[must_use]
	pub const fn frequency(&self) -> f64 {
		self.frequency
	}

	/// Twice the normalized magnitude, rounded to [`DISPLAY_DECIMALS`] before doubling.
	#[must_use]
	pub const fn amplitude(&self) -> f64 {
		self.amplitude
	}

	/// Phase in `(-π, π]`, rounded to [`DISPLAY_DECIMALS`]. Zero whenever the amplitude is zero.
	#[must_use]
	pub const fn phase(&self) -> f64 {
		self.phase
	}

	#[must_use]
	pub const fn coefficient(&self) -> Complex64 {
		self.coefficient
	}
}
