//! Dense matrix and its operations.

pub mod algebra;
pub mod matrix;
pub mod ops;

pub use matrix::{Matrix, EPSILON};
