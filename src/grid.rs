//! The intensity grid that descriptors are computed from.

use crate::error::{LbpError, Result};
use image::{GrayImage, RgbImage};
use std::ops::Index;

/// A rectangular grid of 8-bit intensities addressed as `grid[(x, y)]`.
///
/// `x` indexes columns (`0..width`) and `y` indexes rows within a column
/// (`0..height`). Values are stored column by column.
///
/// A `Grid` is only ever built through a validating constructor, so every
/// grid has equal-length columns, is non-empty and is not smaller than 3x3
/// in both directions at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// A colour channel to copy verbatim into a grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl Grid {
    /// Builds a grid from columns, so that `columns[x][y]` becomes `grid[(x, y)]`.
    ///
    /// # Errors
    /// - [`LbpError::EmptyInput`] if there are no columns or a column is empty.
    /// - [`LbpError::RaggedGrid`] if the columns differ in length.
    /// - [`LbpError::GridTooSmall`] if width and height are both below 3.
    ///
    /// # Examples
    /// ```
    /// use lbp::grid::Grid;
    ///
    /// let grid = Grid::from_columns(vec![
    ///     vec![6, 5, 2],
    ///     vec![7, 6, 1],
    ///     vec![9, 8, 7],
    /// ]).unwrap();
    ///
    /// assert_eq!(grid.dimensions(), (3, 3));
    /// assert_eq!(grid[(2, 1)], 8);
    /// ```
    pub fn from_columns(columns: Vec<Vec<u8>>) -> Result<Grid> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        if columns.iter().any(Vec::is_empty) {
            return Err(LbpError::EmptyInput);
        }
        check_dimensions(width, height)?;

        let mut data = Vec::with_capacity(width * height);
        for (column, values) in columns.into_iter().enumerate() {
            if values.len() != height {
                return Err(LbpError::RaggedGrid {
                    column,
                    expected: height,
                    found: values.len(),
                });
            }
            data.extend(values);
        }

        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Builds a grid from the luma values of a grayscale image.
    pub fn from_gray_image(image: &GrayImage) -> Result<Grid> {
        Grid::from_fn(image.width(), image.height(), |x, y| {
            image.get_pixel(x, y)[0]
        })
    }

    /// Builds a grid from an RGB image using the luma weighting
    /// `0.3 * r + 0.59 * g + 0.11 * b`, rounded down.
    ///
    /// The sum is taken in integer hundredths, so it is exact: a gray pixel
    /// `(v, v, v)` always maps to `v`. Evaluating the weights in floating
    /// point instead lands just below `v` for some values and floors to
    /// `v - 1`.
    pub fn from_rgb_image(image: &RgbImage) -> Result<Grid> {
        Grid::from_fn(image.width(), image.height(), |x, y| {
            let [r, g, b] = image.get_pixel(x, y).0;
            let weighted = 30 * r as u32 + 59 * g as u32 + 11 * b as u32;
            // Weights sum to 100, so the quotient is at most 255.
            (weighted / 100) as u8
        })
    }

    /// Builds a grid from a single channel of an RGB image.
    pub fn from_channel(image: &RgbImage, channel: Channel) -> Result<Grid> {
        let idx = channel.index();
        Grid::from_fn(image.width(), image.height(), |x, y| {
            image.get_pixel(x, y)[idx]
        })
    }

    fn from_fn<F>(width: u32, height: u32, f: F) -> Result<Grid>
    where
        F: Fn(u32, u32) -> u8,
    {
        let (w, h) = (width as usize, height as usize);
        check_dimensions(w, h)?;

        let mut data = Vec::with_capacity(w * h);
        for x in 0..width {
            for y in 0..height {
                data.push(f(x, y));
            }
        }

        Ok(Grid {
            width: w,
            height: h,
            data,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows in each column.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the intensity at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[x * self.height + y])
        } else {
            None
        }
    }

    /// The values of column `x`.
    pub fn column(&self, x: usize) -> &[u8] {
        &self.data[x * self.height..(x + 1) * self.height]
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u8;

    fn index(&self, (x, y): (usize, usize)) -> &u8 {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside a {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        &self.data[x * self.height + y]
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = LbpError;

    fn try_from(columns: Vec<Vec<u8>>) -> Result<Grid> {
        Grid::from_columns(columns)
    }
}

impl TryFrom<&GrayImage> for Grid {
    type Error = LbpError;

    fn try_from(image: &GrayImage) -> Result<Grid> {
        Grid::from_gray_image(image)
    }
}

// Only a grid that is small in both directions is rejected; a 2x100 grid is
// accepted and simply has no interior pixels.
fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(LbpError::EmptyInput);
    }
    if width < 3 && height < 3 {
        return Err(LbpError::GridTooSmall { width, height });
    }
    Ok(())
}
