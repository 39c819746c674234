//! Transpose, minors and the cofactor based determinant and inverse.

use crate::{
    errors::MatrixError,
    matrix::{Matrix, EPSILON},
};
use tracing::debug;

/// `(-1)^index`
fn sign(index: usize) -> f64 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl Matrix {
    fn ensure_square(&self) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { rows: self.rows(), cols: self.cols() });
        }
        Ok(())
    }

    /// Transposed copy of the matrix, `cols x rows`.
    pub fn transpose(&self) -> Matrix {
        let cols = self.cols();
        let mut data = Vec::with_capacity(self.as_slice().len());
        for col in 0..cols {
            data.extend(self.as_slice().iter().skip(col).step_by(cols));
        }
        Matrix::from_parts(data, cols, self.rows())
    }

    /// The matrix without the given row and column.
    ///
    /// Fails with [`MatrixError::IndexOutOfRange`] for indices outside the matrix and with
    /// [`MatrixError::InvalidDimension`] when the matrix has a single row or column.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix, MatrixError> {
        self.entry(row, col)?;
        let mut minor = Matrix::new(self.rows() - 1, self.cols() - 1)?;
        let kept = self
            .as_slice()
            .chunks_exact(self.cols())
            .enumerate()
            .filter(|(i, _)| *i != row)
            .flat_map(|(_, values)| values.iter().enumerate().filter(|(j, _)| *j != col).map(|(_, value)| *value));
        for (dst, src) in minor.as_mut_slice().iter_mut().zip(kept) {
            *dst = src;
        }
        Ok(minor)
    }

    /// Determinant by cofactor expansion along the first row, O(N!).
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        self.ensure_square()?;
        match self.as_slice() {
            [a] => Ok(*a),
            [a, b, c, d] => Ok(a * d - b * c),
            values => {
                let mut determinant = 0.0;
                for (col, value) in values.iter().take(self.cols()).enumerate() {
                    determinant += value * self.minor(0, col)?.determinant()? * sign(col);
                }
                Ok(determinant)
            }
        }
    }

    /// Matrix of cofactors, `M[i,j] = minor(i, j).determinant() * (-1)^(i+j)`.
    ///
    /// A 1x1 matrix has no minors, its cofactor matrix is `[[1]]`.
    pub fn calc_complements(&self) -> Result<Matrix, MatrixError> {
        self.ensure_square()?;
        let mut complements = Matrix::square(self.rows())?;
        if self.rows() == 1 {
            complements.fill(1.0);
            return Ok(complements);
        }
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                *complements.entry_mut(row, col)? = self.minor(row, col)?.determinant()? * sign(row + col);
            }
        }
        Ok(complements)
    }

    /// Inverse as the adjugate over the determinant.
    pub fn inverse_matrix(&self) -> Result<Matrix, MatrixError> {
        self.ensure_square()?;
        let determinant = self.determinant()?;
        debug!(determinant, size = self.rows(), "computed determinant for inversion");
        if determinant.abs() < EPSILON {
            debug!(determinant, "matrix is singular");
            return Err(MatrixError::Singular);
        }
        let mut inverse = self.calc_complements()?.transpose();
        inverse.mul_number(1.0 / determinant);
        Ok(inverse)
    }
}
