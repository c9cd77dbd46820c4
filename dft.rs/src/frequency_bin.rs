//! Mapping between DFT bin indices and physical frequencies, in natural order:
//! DC first, then ascending positive frequencies, then negative frequencies
//! ascending towards zero.

use math_utils::even_odd::{HasParity, Parity};

/// Number of bins that represent a non-negative frequency (DC included).
///
/// For even `n_of_samples` the Nyquist bin is counted among the negative ones.
#[must_use]
pub fn n_of_non_negative_bins(n_of_samples: usize) -> usize {
	match n_of_samples.parity() {
		Parity::Even => n_of_samples / 2,
		Parity::Odd => (n_of_samples + 1) / 2,
	}
}

/// Signed frequency represented by `bin_idx`, given `n_of_samples` samples taken at `sample_rate`.
#[must_use]
pub fn bin_to_frequency(n_of_samples: usize, sample_rate: f64, bin_idx: usize) -> f64 {
	debug_assert!(
		bin_idx < n_of_samples,
		"bin {bin_idx} out of range for {n_of_samples} samples"
	);
	let n = n_of_samples as f64;
	if bin_idx < n_of_non_negative_bins(n_of_samples) {
		bin_idx as f64 * sample_rate / n
	} else {
		-((n_of_samples - bin_idx) as f64) * sample_rate / n
	}
}

/// The bin whose frequency is closest to `frequency`.
///
/// Frequencies outside `[-sample_rate / 2, sample_rate / 2)` alias onto the range.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn frequency_to_bin(n_of_samples: usize, sample_rate: f64, frequency: f64) -> usize {
	debug_assert!(n_of_samples > 0, "no bins available");
	let bin = (frequency * n_of_samples as f64 / sample_rate).round() as i64;
	bin.rem_euclid(n_of_samples as i64) as usize
}

/// The bin holding the complex conjugate of `bin_idx` for a real input: `(N - k) mod N`.
#[must_use]
pub fn mirror_bin(n_of_samples: usize, bin_idx: usize) -> usize {
	(n_of_samples - bin_idx) % n_of_samples
}
