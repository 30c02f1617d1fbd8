//! Histograms of pattern codes and classes over a grid.

use crate::grid::Grid;
use crate::pattern::LocalPattern;
use crate::rotation::PatternClass;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Counts of rotation-invariant classes, split by rotation.
///
/// Row `n` for `0 < n < P` holds `P` counts, one per rotation. Rows `0`
/// (all zeros), `P` (all ones) and `P + 1` (non-uniform) hold a single count,
/// since rotation is meaningless for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationHistogram {
    points: u32,
    rows: Vec<Vec<u32>>,
}

impl RotationHistogram {
    /// An empty histogram for rings of `points` samples.
    pub fn new(points: u32) -> RotationHistogram {
        let p = points as usize;
        let rows = (0..=p + 1)
            .map(|n| if n == 0 || n >= p { vec![0; 1] } else { vec![0; p] })
            .collect();
        RotationHistogram { points, rows }
    }

    /// Counts one pixel of the given class.
    pub fn add(&mut self, class: PatternClass) {
        let row = class.row(self.points);
        let column = match class {
            PatternClass::Uniform { rotation, .. } if self.rows[row].len() > 1 => {
                rotation as usize
            }
            _ => 0,
        };
        self.rows[row][column] += 1;
    }

    /// Number of samples on the ring.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Per-rotation counts of class `n`.
    pub fn row(&self, n: usize) -> &[u32] {
        &self.rows[n]
    }

    /// All rows, indexed by class.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Total count of each class over all rotations; `P + 2` entries.
    pub fn class_counts(&self) -> Vec<u32> {
        self.rows.iter().map(|row| row.iter().sum()).collect()
    }

    /// Total number of pixels counted.
    pub fn total(&self) -> u64 {
        self.rows.iter().flatten().map(|&c| u64::from(c)).sum()
    }
}

/// The histogram produced by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Histogram {
    /// One bin per raw code (`2^P` bins); rotation invariance disabled.
    Codes(Vec<u32>),
    /// Rotation-invariant classes split by rotation.
    Classes(RotationHistogram),
}

impl Histogram {
    /// Flat counts: per raw code, or per class summed over rotations.
    pub fn counts(&self) -> Vec<u32> {
        match self {
            Histogram::Codes(bins) => bins.clone(),
            Histogram::Classes(classes) => classes.class_counts(),
        }
    }

    /// The rotation histogram, if classes were counted.
    pub fn classes(&self) -> Option<&RotationHistogram> {
        match self {
            Histogram::Codes(_) => None,
            Histogram::Classes(classes) => Some(classes),
        }
    }
}

/// Everything computed by one scan of a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Pattern histogram.
    pub histogram: Histogram,
    /// Reduced feature vector; present only in rotation-invariant modes.
    pub feature: Option<Vec<f64>>,
    /// Contrast per scanned pixel, outer loop over x, inner over y.
    pub contrast: Vec<f64>,
    /// Variance per scanned pixel, in the same order as `contrast`.
    pub variance: Vec<f64>,
}

/// Coordinates scanned along an axis of length `len`.
///
/// The scan starts at `radius` and stops before `len - 1`, so the last
/// line is never a centre even when a ring of radius 1 would fit there.
/// For larger radii the end is pulled in to `len - radius` so that every
/// ring stays inside the grid.
pub fn scan_range(len: usize, radius: u32) -> Range<usize> {
    let r = radius as usize;
    let end = len.saturating_sub(1).min(len.saturating_sub(r));
    r..end.max(r)
}

/// Scans every interior pixel of `grid`, calling `pattern_at` for each and
/// accumulating the histogram and the contrast and variance series.
pub(crate) fn aggregate<F>(
    grid: &Grid,
    points: u32,
    radius: u32,
    invariant: bool,
    mut pattern_at: F,
) -> (Histogram, Vec<f64>, Vec<f64>)
where
    F: FnMut(usize, usize) -> LocalPattern,
{
    let xs = scan_range(grid.width(), radius);
    let ys = scan_range(grid.height(), radius);
    let pixels = xs.len() * ys.len();
    log::debug!(
        "scanning {}x{} grid: x in {:?}, y in {:?} ({} pixels)",
        grid.width(),
        grid.height(),
        xs,
        ys,
        pixels
    );

    let mut histogram = if invariant {
        Histogram::Classes(RotationHistogram::new(points))
    } else {
        Histogram::Codes(vec![0; 1usize << points])
    };
    let mut contrast = Vec::with_capacity(pixels);
    let mut variance = Vec::with_capacity(pixels);

    for (xc, yc) in iproduct!(xs, ys) {
        let pattern = pattern_at(xc, yc);
        match &mut histogram {
            Histogram::Classes(classes) => classes.add(pattern.class),
            Histogram::Codes(bins) => bins[pattern.canonical as usize] += 1,
        }
        contrast.push(pattern.contrast);
        variance.push(pattern.variance);
    }

    (histogram, contrast, variance)
}
