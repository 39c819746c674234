//! Matrix Operations

use crate::{errors::MatrixError, matrix::Matrix};
use std::ops::{Add, Mul, MulAssign, Neg, Sub};
use tracing::trace;

impl Matrix {
    fn ensure_same_shape(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch { left: self.shape(), right: other.shape() });
        }
        Ok(())
    }

    /// Adds `other` elementwise, in place.
    pub fn sum_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.ensure_same_shape(other)?;
        for (left, right) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *left += right;
        }
        Ok(())
    }

    /// Subtracts `other` elementwise, in place.
    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.ensure_same_shape(other)?;
        for (left, right) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *left -= right;
        }
        Ok(())
    }

    /// Scales every element by `num`, in place.
    pub fn mul_number(&mut self, num: f64) {
        for value in self.as_mut_slice() {
            *value *= num;
        }
    }

    /// Replaces the matrix with the product `self * other`.
    ///
    /// The product is computed into a new buffer which is only swapped in once complete, so on error
    /// the matrix is left untouched.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        let product = self.product(other)?;
        trace!(left = ?self.shape(), right = ?other.shape(), "multiplied matrices");
        *self = product;
        Ok(())
    }

    /// Naive matrix multiplication, A: MxK * B: KxN -> C: MxN, O(KMN).
    fn product(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::IncompatibleDimensions { left: self.shape(), right: other.shape() });
        }
        let mut out = Matrix::new(self.rows(), other.cols())?;
        for row in 0..self.rows() {
            for col in 0..other.cols() {
                let mut acc = 0.0;
                for i in 0..self.cols() {
                    acc += self.entry(row, i)? * other.entry(i, col)?;
                }
                *out.entry_mut(row, col)? = acc;
            }
        }
        Ok(out)
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(mut self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.sum_matrix(other)?;
        Ok(self)
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.ensure_same_shape(other)?;
        self.clone() + other
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(mut self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.sub_matrix(other)?;
        Ok(self)
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.ensure_same_shape(other)?;
        self.clone() - other
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.product(other)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.product(other)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, num: f64) -> Matrix {
        self.mul_number(num);
        self
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, num: f64) -> Matrix {
        self.clone() * num
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, num: f64) {
        self.mul_number(num);
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self * -1.0
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self * -1.0
    }
}
