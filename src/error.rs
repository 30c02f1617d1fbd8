//! Errors reported when validating sampling parameters, modes and input grids.

use thiserror::Error;

/// Reasons a descriptor computation can be rejected.
///
/// All of these are detected before any pixel is scanned, so a call either
/// returns a complete result or one of these errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LbpError {
    /// The ring is too dense for its radius (`points > 8 * radius`), empty,
    /// or has more points than the pattern cache can index.
    #[error("incorrect sampling geometry: {points} points on a ring of radius {radius}")]
    InvalidSamplingGeometry {
        /// Number of sampling points.
        points: u32,
        /// Ring radius.
        radius: u32,
    },
    /// The grid has no columns, or a column has no rows.
    #[error("input grid must not be empty")]
    EmptyInput,
    /// A column differs in length from the first column.
    #[error("column {column} has {found} rows, expected {expected}")]
    RaggedGrid {
        /// Index of the offending column.
        column: usize,
        /// Length of the first column.
        expected: usize,
        /// Length of the offending column.
        found: usize,
    },
    /// Both grid dimensions are below 3.
    #[error("input grid must be at least 3x3, got {width}x{height}")]
    GridTooSmall {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
    },
    /// A textual rotation mode was not one of the recognised names.
    #[error("unknown rotation mode {0:?}")]
    InvalidMode(String),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, LbpError>;
