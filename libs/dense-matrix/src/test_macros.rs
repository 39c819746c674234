//! Test macros.

/// Builds a [`Matrix`](crate::matrix::Matrix) out of row literals.
///
/// Evaluates to `Result<Matrix, MatrixError>`, so ragged rows are reported rather than accepted.
///
/// ```ignore
/// let m = test_matrix!([1, 2], [3, 4]).unwrap();
/// ```
#[macro_export]
macro_rules! test_matrix {
    ($([$($value:expr),* $(,)?]),+ $(,)?) => {
        $crate::matrix::Matrix::from_rows(&[$(&[$($value as f64),*][..]),+])
    };
}

/// Asserts two matrices are equal within [`EPSILON`](crate::matrix::EPSILON), printing both on failure.
#[macro_export]
macro_rules! assert_matrix_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        assert!(left.eq_matrix(right), "matrices differ\nleft:\n{left}right:\n{right}");
    }};
}
