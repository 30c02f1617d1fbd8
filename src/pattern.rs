//! Per-pixel pattern codes and local contrast statistics.

use crate::grid::Grid;
use crate::rotation::PatternClass;
use crate::sampling::NeighborRing;
use serde::{Deserialize, Serialize};

/// The result computed for one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalPattern {
    /// Code before canonicalisation: bit `p` is set if sample `p` is at
    /// least as bright as the centre.
    pub raw: u32,
    /// Least rotation of `raw`, or `raw` itself when rotation invariance is
    /// disabled.
    pub canonical: u32,
    /// Rotation-invariant class. Always non-uniform when rotation
    /// invariance is disabled.
    pub class: PatternClass,
    /// Mean of the samples at or above the centre minus the mean of those
    /// below it.
    pub contrast: f64,
    /// Population variance of the samples.
    pub variance: f64,
}

/// Contrast and variance of a pixel's ring samples.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PixelStats {
    /// See [`LocalPattern::contrast`].
    pub contrast: f64,
    /// See [`LocalPattern::variance`].
    pub variance: f64,
}

/// Step function used to threshold a sample against the centre.
/// Ties count as brighter.
#[inline]
pub fn threshold(z: i32) -> u32 {
    (z >= 0) as u32
}

/// Computes the raw code of the ring centred at `(xc, yc)` together with
/// the ring's contrast and variance.
///
/// Empty groups contribute a mean of 0 to the contrast. The caller
/// guarantees the ring fits inside the grid.
pub fn encode(ring: &NeighborRing, grid: &Grid, xc: usize, yc: usize) -> (u32, PixelStats) {
    let center = i32::from(grid[(xc, yc)]);

    let mut code = 0u32;
    let (mut brighter_count, mut darker_count) = (0u32, 0u32);
    let (mut brighter_sum, mut darker_sum) = (0f64, 0f64);
    let (mut sum, mut sum_sq) = (0f64, 0f64);

    for (p, gp) in ring.samples(grid, xc, yc).enumerate() {
        let bit = threshold(i32::from(gp) - center);
        code |= bit << p;

        let g = f64::from(gp);
        if bit == 1 {
            brighter_count += 1;
            brighter_sum += g;
        } else {
            darker_count += 1;
            darker_sum += g;
        }
        sum += g;
        sum_sq += g * g;
    }

    let n = ring.len() as f64;
    let mean = sum / n;
    let mean_sq = sum_sq / n;
    let brighter_mean = if brighter_count > 0 {
        brighter_sum / f64::from(brighter_count)
    } else {
        0.0
    };
    let darker_mean = if darker_count > 0 {
        darker_sum / f64::from(darker_count)
    } else {
        0.0
    };

    let stats = PixelStats {
        contrast: brighter_mean - darker_mean,
        // Clamped so rounding can't produce a tiny negative variance.
        variance: (mean_sq - mean * mean).max(0.0),
    };
    (code, stats)
}
