//! Matrix.

use crate::errors::MatrixError;
use std::fmt;
use tracing::trace;

/// Absolute tolerance under which two elements compare equal.
pub const EPSILON: f64 = 1e-7;

/// Side of the matrix built by [`Matrix::default`].
const DEFAULT_SIZE: usize = 3;

/// Dense matrix of `f64` elements, stored row-major.
///
/// Element `(row, col)` lives at offset `row * cols + col` of a single owned buffer. A matrix always
/// has at least one row and one column, and the buffer always holds exactly `rows * cols` elements.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(try_from = "crate::serde::MatrixRepr", into = "crate::serde::MatrixRepr")
)]
pub struct Matrix {
    /// Elements.
    data: Vec<f64>,

    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,
}

/// Number of elements of a `rows x cols` matrix.
fn checked_len(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    rows.checked_mul(cols).ok_or(MatrixError::Arithmetic)
}

impl Matrix {
    /// Zero filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        let len = checked_len(rows, cols)?;
        Ok(Matrix { data: vec![0.0; len], rows, cols })
    }

    /// Zero filled `n x n` matrix.
    pub fn square(n: usize) -> Result<Matrix, MatrixError> {
        Matrix::new(n, n)
    }

    /// Matrix from its elements in row-major order.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix, MatrixError> {
        let n = checked_len(rows, cols)?;
        if n != data.len() {
            return Err(MatrixError::Build(data.len(), n));
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Matrix from a slice of rows, all of them must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Matrix, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map(|row| row.as_ref().len()).unwrap_or_default();
        let expected = checked_len(nrows, ncols)?;
        if rows.iter().any(|row| row.as_ref().len() != ncols) {
            let len = rows.iter().map(|row| row.as_ref().len()).sum();
            return Err(MatrixError::Build(len, expected));
        }
        let mut data = Vec::with_capacity(expected);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Matrix::from_vec(nrows, ncols, data)
    }

    /// Identity matrix.
    pub fn identity(n: usize) -> Result<Matrix, MatrixError> {
        let mut m = Matrix::square(n)?;
        for i in 0..n {
            *m.entry_mut(i, i)? = 1.0;
        }
        Ok(m)
    }

    /// Builds a matrix out of parts that are already known to be consistent.
    pub(super) fn from_parts(data: Vec<f64>, rows: usize, cols: usize) -> Matrix {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Matrix { data, rows, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Elements in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable elements in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Returns the elements as a Vec consuming the matrix.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Elements of a single row.
    pub fn row(&self, row: usize) -> Result<&[f64], MatrixError> {
        let start = self.offset(row, 0)?;
        self.data.get(start..start.saturating_add(self.cols)).ok_or_else(|| self.out_of_range(row, 0))
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&f64, MatrixError> {
        let index = self.offset(row, col)?;
        self.data.get(index).ok_or_else(|| self.out_of_range(row, col))
    }

    /// Get the matrix entry `M[row,col]` for writing.
    pub fn entry_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        let index = self.offset(row, col)?;
        let error = self.out_of_range(row, col);
        self.data.get_mut(index).ok_or(error)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(row * self.cols + col)
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfRange { row, col, rows: self.rows, cols: self.cols }
    }

    /// Changes the number of rows, zero filling new rows and dropping removed ones.
    pub fn set_rows(&mut self, rows: usize) -> Result<(), MatrixError> {
        let mut resized = Matrix::new(rows, self.cols)?;
        let kept = rows.min(self.rows) * self.cols;
        if let (Some(dst), Some(src)) = (resized.data.get_mut(..kept), self.data.get(..kept)) {
            dst.copy_from_slice(src);
        }
        trace!(from = ?self.shape(), to = ?resized.shape(), "resized matrix rows");
        *self = resized;
        Ok(())
    }

    /// Changes the number of columns, zero filling new columns and dropping removed ones.
    pub fn set_cols(&mut self, cols: usize) -> Result<(), MatrixError> {
        let mut resized = Matrix::new(self.rows, cols)?;
        let kept = cols.min(self.cols);
        for (dst, src) in resized.data.chunks_exact_mut(cols).zip(self.data.chunks_exact(self.cols)) {
            if let (Some(dst), Some(src)) = (dst.get_mut(..kept), src.get(..kept)) {
                dst.copy_from_slice(src);
            }
        }
        trace!(from = ?self.shape(), to = ?resized.shape(), "resized matrix columns");
        *self = resized;
        Ok(())
    }

    /// Fills the matrix row by row with 1, 2, 3, ...
    pub fn fill_sequential(&mut self) {
        for (i, value) in self.data.iter_mut().enumerate() {
            *value = (i + 1) as f64;
        }
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Matrix equality, elements are compared with an absolute tolerance of [`EPSILON`].
    pub fn eq_matrix(&self, other: &Matrix) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(left, right)| (left - right).abs() < EPSILON)
    }

    /// Writes the matrix to stdout.
    ///
    /// Thin wrapper over the [`Display`](fmt::Display) impl, prints the same text as `to_string()`.
    pub fn print_matrix(&self) {
        print!("{self}");
    }
}

impl Default for Matrix {
    /// A zero filled 3x3 matrix.
    fn default() -> Self {
        Matrix::from_parts(vec![0.0; DEFAULT_SIZE * DEFAULT_SIZE], DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.eq_matrix(other)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
