//! Serde support.
//!
//! A [`Matrix`] is encoded as `{ rows, cols, data }` with `data` in row-major order. Decoding goes through
//! [`Matrix::from_vec`], so a payload with a zero dimension or a mismatched length is rejected.

use crate::{errors::MatrixError, matrix::Matrix};
use serde::{Deserialize, Serialize};

/// Encoded matrix.
#[derive(Serialize, Deserialize)]
pub struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        Matrix::from_vec(repr.rows, repr.cols, repr.data)
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(matrix: Matrix) -> Self {
        let (rows, cols) = matrix.shape();
        MatrixRepr { rows, cols, data: matrix.into_vec() }
    }
}
