#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

//! Direct (O(N²)) discrete Fourier transform of uniformly sampled real signals
//! and its inverse.
//!
//! ```
//! use dft::{Dft, InverseDft, SamplingCtx};
//!
//! let ctx = SamplingCtx::new(1., 4.).unwrap();
//! let signal = ctx.sample(|t| (std::f64::consts::TAU * t).cos());
//! let spectrum = Dft::new(ctx).analyze(&signal).unwrap();
//! assert_eq!(spectrum.len(), 4);
//!
//! let reconstructed = InverseDft::from_ctx(&ctx).reconstruct(&spectrum).unwrap();
//! assert!((reconstructed.values()[0] - 1.).abs() < 1e-9);
//! ```

pub use rustfft::num_complex;

mod error;
pub use error::*;

mod sample_rate;
pub use sample_rate::*;

mod sampling_ctx;
pub use sampling_ctx::*;

mod signal;
pub use signal::*;

pub mod frequency_bin;

mod complex_amplitude;
pub use complex_amplitude::*;

mod spectrum;
pub use spectrum::*;

mod reconstructed_signal;
pub use reconstructed_signal::*;

pub mod transform;
pub use transform::{Dft, InverseDft};
