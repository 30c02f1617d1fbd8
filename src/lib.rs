//! [Local binary pattern] texture descriptors for grayscale images.
//!
//! For each interior pixel a ring of `P` samples at radius `R` is
//! thresholded against the centre to give a `P`-bit code. Codes can be
//! canonicalised under rotation into uniform classes, histogrammed over
//! the image, and reduced to a compact feature vector.
//!
//! Images are read with the [image] crate and converted to a [`Grid`].
//!
//! [Local binary pattern]: https://en.wikipedia.org/wiki/Local_binary_patterns
//! [image]: https://github.com/image-rs/image
//! [`Grid`]: grid::Grid
#![deny(missing_docs)]
#![allow(
    clippy::cast_lossless,
    clippy::needless_range_loop,
    clippy::many_single_char_names
)]

pub mod cache;
pub mod distribution;
pub mod error;
pub mod feature;
pub mod grid;
pub mod local_binary_patterns;
pub mod math;
pub mod options;
pub mod pattern;
pub mod rotation;
pub mod sampling;

pub use crate::distribution::{Distribution, Histogram, RotationHistogram};
pub use crate::error::{LbpError, Result};
pub use crate::grid::Grid;
pub use crate::local_binary_patterns::{lbp_distribution, LbpEngine};
pub use crate::options::{LbpOptions, RotationMode, SpectrumMagnitude};
