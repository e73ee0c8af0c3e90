use std::fmt;
use std::ops::{Index, IndexMut};

use matf_assert::build_assert;

// The accumulation contract is written in terms of IEEE 754 binary32.
build_assert!(std::mem::size_of::<f32>() == 4);
build_assert!(f32::MANTISSA_DIGITS == 24, "f32 must be IEEE 754 binary32");

/// A rectangular f32 matrix with `M` rows and `N` columns.
///
/// Both dimensions are const-generic parameters, so a matrix's shape is
/// known at build time and carries no runtime dimension fields. Storage is
/// row-major, `[[f32; N]; M]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const M: usize, const N: usize> {
    rows: [[f32; N]; M],
}

impl<const M: usize, const N: usize> Matrix<M, N> {
    /// Number of rows.
    pub const ROWS: usize = M;
    /// Number of columns.
    pub const COLS: usize = N;
    /// Total number of elements.
    pub const NUMEL: usize = M * N;

    /// Create a zero-filled matrix.
    pub const fn zeros() -> Self {
        Matrix {
            rows: [[0.0; N]; M],
        }
    }

    /// Create a matrix with every element set to `value`.
    pub const fn filled(value: f32) -> Self {
        Matrix {
            rows: [[value; N]; M],
        }
    }

    /// Create a matrix from a row-major array of rows.
    pub const fn from_rows(rows: [[f32; N]; M]) -> Self {
        Matrix { rows }
    }

    /// Returns the number of rows.
    pub const fn rows(&self) -> usize {
        M
    }

    /// Returns the number of columns.
    pub const fn cols(&self) -> usize {
        N
    }

    /// Returns a reference to the underlying rows.
    pub const fn as_rows(&self) -> &[[f32; N]; M] {
        &self.rows
    }

    /// Returns a mutable reference to the underlying rows.
    pub fn as_rows_mut(&mut self) -> &mut [[f32; N]; M] {
        &mut self.rows
    }
}

impl<const N: usize> Matrix<N, N> {
    /// Create an `N`×`N` identity matrix.
    pub const fn identity() -> Self {
        let mut m = Self::zeros();
        let mut i = 0;
        while i < N {
            m.rows[i][i] = 1.0;
            i += 1;
        }
        m
    }
}

impl<const M: usize, const N: usize> Default for Matrix<M, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const M: usize, const N: usize> Index<(usize, usize)> for Matrix<M, N> {
    type Output = f32;

    /// Returns the element at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i >= M` or `j >= N`.
    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        &self.rows[i][j]
    }
}

impl<const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<M, N> {
    /// Returns the element at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i >= M` or `j >= N`.
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f32 {
        &mut self.rows[i][j]
    }
}

impl<const M: usize, const N: usize> fmt::Display for Matrix<M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl<const M: usize, const N: usize> From<[[f32; N]; M]> for Matrix<M, N> {
    fn from(rows: [[f32; N]; M]) -> Self {
        Matrix::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let m = Matrix::<2, 3>::zeros();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(Matrix::<2, 3>::ROWS, 2);
        assert_eq!(Matrix::<2, 3>::COLS, 3);
        assert_eq!(Matrix::<2, 3>::NUMEL, 6);
    }

    #[test]
    fn test_zeros_filled() {
        let z = Matrix::<2, 2>::zeros();
        assert_eq!(z.as_rows(), &[[0.0; 2]; 2]);

        let f = Matrix::<2, 3>::filled(1.5);
        assert_eq!(f.as_rows(), &[[1.5; 3]; 2]);
    }

    #[test]
    fn test_from_rows_and_index() {
        let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 1)], 5.0);
    }

    #[test]
    fn test_index_mut() {
        let mut m = Matrix::<2, 2>::zeros();
        m[(1, 0)] = 42.0;
        assert_eq!(m.as_rows(), &[[0.0, 0.0], [42.0, 0.0]]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let m = Matrix::<2, 2>::zeros();
        let _ = m[(2, 0)];
    }

    #[test]
    fn test_identity() {
        let i = Matrix::<3, 3>::identity();
        assert_eq!(
            i.as_rows(),
            &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn test_identity_is_const() {
        const I: Matrix<2, 2> = Matrix::identity();
        assert_eq!(I.as_rows(), &[[1.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_default_is_zeros() {
        let d = Matrix::<3, 1>::default();
        assert_eq!(d, Matrix::zeros());
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.to_string(), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn test_from_array() {
        let m: Matrix<1, 2> = [[7.0, 8.0]].into();
        assert_eq!(m.as_rows(), &[[7.0, 8.0]]);
    }
}
