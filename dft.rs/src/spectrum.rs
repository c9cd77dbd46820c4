use derive_more::derive::Deref;
use rustfft::num_complex::Complex64;

use crate::{
	frequency_bin::{frequency_to_bin, n_of_non_negative_bins},
	ComplexAmplitude, SampleRate,
};

/// The output of a forward transform: one [`ComplexAmplitude`] per bin, in natural order.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Spectrum {
	sample_rate: SampleRate,
	#[deref]
	amplitudes: Vec<ComplexAmplitude>,
}

impl Spectrum {
	#[must_use]
	pub fn from_amplitudes(amplitudes: Vec<ComplexAmplitude>, sample_rate: SampleRate) -> Self {
		Self {
			sample_rate,
			amplitudes,
		}
	}

	#[must_use]
	pub const fn sample_rate(&self) -> SampleRate {
		self.sample_rate
	}

	#[must_use]
	pub fn bin(&self, bin_idx: usize) -> Option<&ComplexAmplitude> {
		self.amplitudes.get(bin_idx)
	}

	/// The bin closest to `frequency`, `None` for an empty spectrum.
	#[must_use]
	pub fn at_frequency(&self, frequency: f64) -> Option<&ComplexAmplitude> {
		if self.amplitudes.is_empty() {
			return None;
		}
		self.bin(frequency_to_bin(
			self.amplitudes.len(),
			self.sample_rate.0,
			frequency,
		))
	}

	pub fn coefficients(&self) -> impl Iterator<Item = Complex64> + '_ {
		self.amplitudes.iter().map(ComplexAmplitude::coefficient)
	}

	/// The bins with a non-negative frequency, in ascending frequency order.
	#[must_use]
	pub fn non_negative(&self) -> &[ComplexAmplitude] {
		&self.amplitudes[..n_of_non_negative_bins(self.amplitudes.len())]
	}

	/// `(frequency, amplitude)` for every non-negative frequency.
	#[must_use]
	pub fn amplitudes(&self) -> Vec<(f64, f64)> {
		self.non_negative()
			.iter()
			.map(|a| (a.frequency(), a.amplitude()))
			.collect()
	}

	/// `(frequency, phase)` for every non-negative frequency.
	#[must_use]
	pub fn phases(&self) -> Vec<(f64, f64)> {
		self.non_negative()
			.iter()
			.map(|a| (a.frequency(), a.phase()))
			.collect()
	}

	/// Non-negative frequencies whose amplitude is a local maximum above `threshold`,
	/// as `(frequency, amplitude)` pairs.
	///
	/// The first and last non-negative bins are never reported, as they only have one neighbour.
	#[must_use]
	pub fn dominant_frequencies(&self, threshold: f64) -> Vec<(f64, f64)> {
		let bins = self.non_negative();
		(1..bins.len().saturating_sub(1))
			.filter(|&i| {
				let amplitude = bins[i].amplitude();
				amplitude > bins[i - 1].amplitude()
					&& amplitude > bins[i + 1].amplitude()
					&& amplitude > threshold
			})
			.map(|i| (bins[i].frequency(), bins[i].amplitude()))
			.collect()
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<ComplexAmplitude> {
		self.amplitudes
	}
}

#[cfg(test)]
mod tests {
	use crate::frequency_bin::bin_to_frequency;

	use super::*;

	fn spectrum_with_amplitudes(sample_rate: f64, magnitudes: &[f64]) -> Spectrum {
		let n = magnitudes.len();
		Spectrum::from_amplitudes(
			magnitudes
				.iter()
				.enumerate()
				.map(|(k, &m)| {
					ComplexAmplitude::new(
						bin_to_frequency(n, sample_rate, k),
						m,
						0.,
						Complex64::new(m * n as f64, 0.),
					)
				})
				.collect(),
			SampleRate(sample_rate),
		)
	}

	#[test]
	fn non_negative_view() {
		let spectrum = spectrum_with_amplitudes(4., &[0., 0.5, 0., 0.5]);
		assert_eq!(spectrum.amplitudes(), vec![(0., 0.), (1., 1.)]);
		assert_eq!(spectrum.phases(), vec![(0., 0.), (1., 0.)]);

		let spectrum = spectrum_with_amplitudes(5., &[0., 0.5, 0.25, 0.25, 0.5]);
		assert_eq!(spectrum.amplitudes(), vec![(0., 0.), (1., 1.), (2., 0.5)]);
	}

	#[test]
	fn lookup_by_frequency() {
		let spectrum = spectrum_with_amplitudes(4., &[0., 0.5, 0., 0.25]);
		assert!((spectrum.at_frequency(-1.).unwrap().amplitude() - 0.5).abs() < 1e-15);
		assert!((spectrum.at_frequency(1.1).unwrap().amplitude() - 1.).abs() < 1e-15);
		assert!(spectrum.bin(4).is_none());
		assert!(Spectrum::from_amplitudes(vec![], SampleRate(1.))
			.at_frequency(0.)
			.is_none());
	}

	#[test]
	fn dominant_frequencies() {
		let spectrum =
			spectrum_with_amplitudes(10., &[0.05, 0.25, 0.15, 0.35, 0.1, 0., 0.1, 0.35, 0.15, 0.25]);
		assert_eq!(spectrum.dominant_frequencies(0.4), vec![(1., 0.5), (3., 0.7)]);
		assert_eq!(spectrum.dominant_frequencies(0.6), vec![(3., 0.7)]);
	}

	#[test]
	fn coefficients_follow_bin_order() {
		let spectrum = spectrum_with_amplitudes(3., &[1., 2., 3.]);
		let coefficients: Vec<_> = spectrum.coefficients().map(|c| c.re).collect();
		assert_eq!(coefficients, vec![3., 6., 9.]);
	}
}
