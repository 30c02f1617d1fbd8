//! Computing [local binary patterns](https://en.wikipedia.org/wiki/Local_binary_patterns)
//! and their histograms over a grid.

use crate::cache::PatternCache;
use crate::distribution::{aggregate, Distribution};
use crate::error::Result;
use crate::feature::build_feature;
use crate::grid::Grid;
use crate::options::LbpOptions;
use crate::pattern::{encode, LocalPattern};
use crate::rotation::{classify, PatternClass};
use crate::sampling::NeighborRing;

/// Computes local binary patterns for a fixed ring geometry and mode.
///
/// Each engine owns a [`PatternCache`] that persists across calls. Pixel
/// results are memoised by raw code, so two pixels with the same code share
/// one result, including the contrast and variance of whichever pixel
/// produced that code first. The cache is not tied to any grid; clear it
/// with [`clear_cache`](LbpEngine::clear_cache) before scanning an unrelated
/// image if that matters.
///
/// # Examples
/// ```
/// use lbp::grid::Grid;
/// use lbp::local_binary_patterns::LbpEngine;
/// use lbp::options::LbpOptions;
///
/// let grid = Grid::from_columns(vec![
///     vec![6, 5, 2, 6],
///     vec![7, 6, 1, 7],
///     vec![9, 8, 7, 9],
///     vec![6, 5, 2, 6],
/// ]).unwrap();
///
/// let mut engine = LbpEngine::new(LbpOptions::default().with_normalize(false)).unwrap();
/// let distribution = engine.distribution(&grid);
/// assert_eq!(distribution.histogram.counts(), vec![0, 1, 0, 0, 0, 1, 0, 0, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct LbpEngine {
    options: LbpOptions,
    ring: NeighborRing,
    cache: PatternCache,
}

impl LbpEngine {
    /// Creates an engine, validating the sampling geometry.
    ///
    /// # Errors
    /// [`LbpError::InvalidSamplingGeometry`](crate::error::LbpError::InvalidSamplingGeometry)
    /// if `points` is 0, exceeds `8 * radius`, or exceeds
    /// [`MAX_POINTS`](crate::options::MAX_POINTS).
    pub fn new(options: LbpOptions) -> Result<LbpEngine> {
        options.validate()?;
        Ok(LbpEngine {
            ring: NeighborRing::new(options.points, options.radius),
            cache: PatternCache::new(options.points),
            options,
        })
    }

    /// The options this engine was created with.
    pub fn options(&self) -> &LbpOptions {
        &self.options
    }

    /// The sampling ring.
    pub fn ring(&self) -> &NeighborRing {
        &self.ring
    }

    /// The per-code result cache.
    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    /// Mutable access to the per-code result cache.
    pub fn cache_mut(&mut self) -> &mut PatternCache {
        &mut self.cache
    }

    /// Forgets all memoised pixel results.
    pub fn clear_cache(&mut self) {
        log::debug!("clearing {} cached pattern results", self.cache.len());
        self.cache.clear();
    }

    /// Computes the pattern of the pixel at `(xc, yc)`, or `None` if its
    /// ring would leave the grid.
    ///
    /// If an earlier pixel produced the same raw code, that pixel's result
    /// is returned unchanged.
    pub fn calculate(&mut self, grid: &Grid, xc: usize, yc: usize) -> Option<LocalPattern> {
        if !self.ring.fits(grid, xc, yc) {
            return None;
        }
        Some(self.pattern_at(grid, xc, yc))
    }

    fn pattern_at(&mut self, grid: &Grid, xc: usize, yc: usize) -> LocalPattern {
        let (raw, stats) = encode(&self.ring, grid, xc, yc);
        if let Some(cached) = self.cache.get(raw) {
            return *cached;
        }

        let (canonical, class) = if self.options.rotation.is_invariant() {
            let mapping = classify(raw, self.options.points);
            (mapping.canonical, mapping.class)
        } else {
            (raw, PatternClass::NonUniform)
        };
        let pattern = LocalPattern {
            raw,
            canonical,
            class,
            contrast: stats.contrast,
            variance: stats.variance,
        };
        log::trace!("caching code {} from ({}, {}): {:?}", raw, xc, yc, class);
        self.cache.set(raw, pattern);
        pattern
    }

    /// Scans every interior pixel of `grid` and returns the pattern
    /// histogram, the feature vector (in rotation-invariant modes) and the
    /// per-pixel contrast and variance series.
    ///
    /// Pixels are visited with `x` in the outer loop and `y` in the inner
    /// loop, over [`scan_range`](crate::distribution::scan_range) on each
    /// axis.
    pub fn distribution(&mut self, grid: &Grid) -> Distribution {
        let LbpOptions {
            points,
            radius,
            rotation,
            normalize,
        } = self.options;

        let (histogram, contrast, variance) =
            aggregate(grid, points, radius, rotation.is_invariant(), |xc, yc| {
                self.pattern_at(grid, xc, yc)
            });
        log::debug!(
            "scanned {} pixels, {} distinct codes cached",
            contrast.len(),
            self.cache.len()
        );

        let feature = histogram
            .classes()
            .and_then(|classes| build_feature(classes, rotation, normalize));

        Distribution {
            histogram,
            feature,
            contrast,
            variance,
        }
    }
}

/// Validates `columns` and `options`, then computes the distribution with a
/// fresh engine.
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::lbp_distribution;
/// use lbp::options::LbpOptions;
///
/// let columns = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// let distribution = lbp_distribution(columns, LbpOptions::default()).unwrap();
/// assert_eq!(distribution.contrast.len(), 1);
/// ```
pub fn lbp_distribution(columns: Vec<Vec<u8>>, options: LbpOptions) -> Result<Distribution> {
    let mut engine = LbpEngine::new(options)?;
    let grid = Grid::from_columns(columns)?;
    Ok(engine.distribution(&grid))
}
