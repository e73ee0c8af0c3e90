//! `matf-matrix` - Fixed-shape f32 matrices with build-time checked multiplication.
//!
//! This crate provides:
//! - A `Matrix<M, N>` type whose row and column counts are const-generic
//!   parameters, stored row-major as `[[f32; N]; M]`
//! - A `multiply_into` operation whose signature encodes the
//!   shape-compatibility rule, so a mismatched multiply is a type error
//!   caught at build time rather than a runtime failure
//! - A fixed, documented accumulation order so products are bit-for-bit
//!   reproducible for identical inputs
//!
//! There are no runtime dimension fields and no allocation: a matrix is a
//! caller-owned value container, and multiplication only reads its inputs
//! and overwrites every element of the destination.
//!
//! `Matrix` is plain `f32` data and is `Send` and `Sync`. Concurrent
//! multiplies on disjoint operand triples need no synchronization; aliasing
//! a destination across threads is unrepresentable in safe code because the
//! destination is taken by `&mut`.
//!
//! # Example
//!
//! ```
//! use matf_matrix::{multiply_into, Matrix};
//!
//! let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
//! let b = Matrix::from_rows([[5.0, 6.0], [7.0, 8.0]]);
//! let mut c = Matrix::zeros();
//! multiply_into(&a, &b, &mut c);
//! assert_eq!(c.as_rows(), &[[19.0, 22.0], [43.0, 50.0]]);
//! ```

pub mod matrix;
pub mod multiply;

// Re-export primary types at the crate root for convenience.
pub use matrix::Matrix;
pub use multiply::multiply_into;
