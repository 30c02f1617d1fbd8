//! Nearest-pixel sampling of a circular neighbourhood.

use crate::grid::Grid;
use std::f64::consts::PI;

/// The `P` sample displacements of a ring of radius `R`.
///
/// Sample `p` lies at angle `2πp/P`, at `(xc - R cos θ, yc - R sin θ)`.
/// Its position determines bit `p` of a pattern code.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborRing {
    radius: u32,
    displacements: Vec<(f64, f64)>,
}

impl NeighborRing {
    /// Precomputes the displacements for `points` samples at `radius`.
    pub fn new(points: u32, radius: u32) -> NeighborRing {
        let r = f64::from(radius);
        let displacements = (0..points)
            .map(|p| {
                let angle = 2.0 * PI * f64::from(p) / f64::from(points);
                (r * angle.cos(), r * angle.sin())
            })
            .collect();
        NeighborRing {
            radius,
            displacements,
        }
    }

    /// Number of samples on the ring.
    pub fn len(&self) -> usize {
        self.displacements.len()
    }

    /// Whether the ring has no samples.
    pub fn is_empty(&self) -> bool {
        self.displacements.is_empty()
    }

    /// Ring radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Returns true if every sample of the ring centred at `(xc, yc)` lies
    /// inside `grid`.
    pub fn fits(&self, grid: &Grid, xc: usize, yc: usize) -> bool {
        let r = self.radius as usize;
        xc >= r && yc >= r && xc + r < grid.width() && yc + r < grid.height()
    }

    /// Intensity of sample `p` of the ring centred at `(xc, yc)`.
    ///
    /// Coordinates are rounded half away from zero. Since `xc >= R` and
    /// `yc >= R` for any ring that fits, rounded coordinates are never
    /// negative and this agrees with rounding half up.
    ///
    /// The caller guarantees the ring [fits](NeighborRing::fits) the grid.
    pub fn neighbor(&self, grid: &Grid, p: usize, xc: usize, yc: usize) -> u8 {
        let (dx, dy) = self.displacements[p];
        let x = (xc as f64 - dx).round() as usize;
        let y = (yc as f64 - dy).round() as usize;
        grid[(x, y)]
    }

    /// Iterates over the intensities of all samples, in bit order.
    pub fn samples<'a>(
        &'a self,
        grid: &'a Grid,
        xc: usize,
        yc: usize,
    ) -> impl Iterator<Item = u8> + 'a {
        (0..self.len()).map(move |p| self.neighbor(grid, p, xc, yc))
    }
}
