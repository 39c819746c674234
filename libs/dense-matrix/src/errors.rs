//! Crate errors.

use thiserror::Error;

/// Matrix Error.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum MatrixError {
    /// A matrix can't have a zero dimension.
    #[error("invalid dimension: a {rows}x{cols} matrix must have at least one row and one column")]
    InvalidDimension {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },

    /// Elementwise operation on matrices of different shape.
    #[error("dimension mismatch: {left:?} and {right:?} matrices should be the same size")]
    DimensionMismatch {
        /// Shape of the receiver.
        left: (usize, usize),
        /// Shape of the operand.
        right: (usize, usize),
    },

    /// Product where the left columns don't match the right rows.
    #[error("incompatible dimensions: can't multiply a {left:?} matrix by a {right:?} matrix")]
    IncompatibleDimensions {
        /// Shape of the left factor.
        left: (usize, usize),
        /// Shape of the right factor.
        right: (usize, usize),
    },

    /// Operation only defined for square matrices.
    #[error("matrix should be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Non-invertible, singular matrix.
    #[error("singular matrix can't be inverted")]
    Singular,

    /// Index outside of the matrix.
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Error building matrix.
    #[error("error building matrix, given data has {0} entries which does not match rows x cols = {1}")]
    Build(usize, usize),

    /// Integer overflow computing the matrix size.
    #[error("integer overflow")]
    Arithmetic,
}
