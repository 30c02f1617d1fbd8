//! Sampling parameters and feature reduction modes.

use crate::error::{LbpError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest supported number of sampling points. The pattern cache holds
/// one slot per possible code, i.e. `2^points` slots.
pub const MAX_POINTS: u32 = 16;

/// How the magnitude of a spectral bin is taken in
/// [`RotationMode::HistogramSpectrum`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpectrumMagnitude {
    /// Absolute value of the real component only.
    #[default]
    RealPart,
    /// Complex modulus `sqrt(re^2 + im^2)`.
    Modulus,
}

/// Whether codes are canonicalised under rotation, and if so how the
/// class histogram is reduced to a feature vector.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RotationMode {
    /// Raw codes are histogrammed directly into `2^P` bins. No feature vector.
    Disabled,
    /// Rotation-invariant classes; the feature sums each class over all rotations.
    #[default]
    #[serde(rename = "pattern")]
    PatternSum,
    /// Rotation-invariant classes; the feature is the magnitude spectrum of
    /// each uniform class's rotation histogram.
    #[serde(rename = "histogram")]
    HistogramSpectrum {
        /// Magnitude taken from each spectral bin.
        #[serde(default)]
        magnitude: SpectrumMagnitude,
    },
}

impl RotationMode {
    /// Whether codes are mapped to rotation-invariant classes.
    pub fn is_invariant(&self) -> bool {
        !matches!(self, RotationMode::Disabled)
    }
}

impl FromStr for RotationMode {
    type Err = LbpError;

    /// Parses the mode names `false`/`disabled`, `pattern` and `histogram`.
    fn from_str(s: &str) -> Result<RotationMode> {
        match s {
            "false" | "disabled" => Ok(RotationMode::Disabled),
            "pattern" => Ok(RotationMode::PatternSum),
            "histogram" => Ok(RotationMode::HistogramSpectrum {
                magnitude: SpectrumMagnitude::default(),
            }),
            other => Err(LbpError::InvalidMode(other.to_owned())),
        }
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationMode::Disabled => write!(f, "disabled"),
            RotationMode::PatternSum => write!(f, "pattern"),
            RotationMode::HistogramSpectrum { .. } => write!(f, "histogram"),
        }
    }
}

/// Parameters for local binary pattern descriptors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LbpOptions {
    /// Number of samples on the ring (P).
    pub points: u32,
    /// Ring radius in pixels (R).
    pub radius: u32,
    /// Rotation invariance and feature reduction.
    pub rotation: RotationMode,
    /// Whether the feature vector is scaled to unit L1 norm.
    pub normalize: bool,
}

impl Default for LbpOptions {
    fn default() -> Self {
        LbpOptions {
            points: 8,
            radius: 1,
            rotation: RotationMode::default(),
            normalize: true,
        }
    }
}

impl LbpOptions {
    /// Options with the given geometry and default mode and normalisation.
    pub fn new(points: u32, radius: u32) -> LbpOptions {
        LbpOptions {
            points,
            radius,
            ..Default::default()
        }
    }

    /// Sets the rotation mode.
    pub fn with_rotation(mut self, rotation: RotationMode) -> LbpOptions {
        self.rotation = rotation;
        self
    }

    /// Sets whether the feature vector is normalised.
    pub fn with_normalize(mut self, normalize: bool) -> LbpOptions {
        self.normalize = normalize;
        self
    }

    /// Checks that `1 <= points <= 8 * radius` and `points <= MAX_POINTS`.
    ///
    /// Beyond `8 * radius` points, two samples on the ring can round to the
    /// same pixel.
    pub fn validate(&self) -> Result<()> {
        let dense = u64::from(self.points) > 8 * u64::from(self.radius);
        if self.points == 0 || self.points > MAX_POINTS || dense {
            return Err(LbpError::InvalidSamplingGeometry {
                points: self.points,
                radius: self.radius,
            });
        }
        Ok(())
    }
}
