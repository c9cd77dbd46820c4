#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum DftError {
	#[error("window length must be a positive finite number, got {0}")]
	InvalidWindow(f64),
	#[error("sample rate must be a positive finite number, got {0}")]
	InvalidSampleRate(f64),
	#[error("window {window} at sample rate {sample_rate} does not yield an integral number of samples")]
	NonIntegralSampleCount { window: f64, sample_rate: f64 },
	#[error("window {window} at sample rate {sample_rate} yields more samples than can be addressed")]
	TooManySamples { window: f64, sample_rate: f64 },
	#[error("the configuration yields no samples")]
	NoSamples,
	#[error("expected {expected} samples, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },
	#[error("cannot invert an empty spectrum")]
	EmptySpectrum,
}
