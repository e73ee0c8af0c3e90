use std::ops::Mul;

use crate::matrix::Matrix;

/// Matrix multiplication: writes `a` times `b` into `c`.
///
/// `a` is M×K, `b` is K×N and `c` is M×N. The shape-compatibility rule is
/// encoded in the shared const parameters, so an incompatible triple fails
/// to type check and no runtime shape check exists. The operation performs
/// no allocation: it reads `a` and `b` and overwrites every element of `c`
/// without reading `c`'s prior contents.
///
/// The loop order is fixed: result columns outer, rows inner, contraction
/// index innermost. Each element is a single f32 accumulator summed by
/// sequential addition in increasing contraction index, with no reordering
/// or pairwise summation, so outputs are bit-for-bit reproducible given
/// identical inputs.
///
/// # Examples
///
/// ```
/// use matf_matrix::{multiply_into, Matrix};
///
/// let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// let b = Matrix::from_rows([[5.0, 6.0], [7.0, 8.0]]);
/// let mut c = Matrix::zeros();
/// multiply_into(&a, &b, &mut c);
/// assert_eq!(c.as_rows(), &[[19.0, 22.0], [43.0, 50.0]]);
/// ```
///
/// An inner-dimension mismatch (`cols(a) != rows(b)`) fails the build:
///
/// ```compile_fail
/// use matf_matrix::{multiply_into, Matrix};
///
/// let a = Matrix::<2, 3>::zeros();
/// let b = Matrix::<2, 2>::zeros();
/// let mut c = Matrix::<2, 2>::zeros();
/// multiply_into(&a, &b, &mut c);
/// ```
///
/// So does a destination with the wrong shape:
///
/// ```compile_fail
/// use matf_matrix::{multiply_into, Matrix};
///
/// let a = Matrix::<2, 3>::zeros();
/// let b = Matrix::<3, 4>::zeros();
/// let mut c = Matrix::<4, 2>::zeros();
/// multiply_into(&a, &b, &mut c);
/// ```
pub fn multiply_into<const M: usize, const K: usize, const N: usize>(
    a: &Matrix<M, K>,
    b: &Matrix<K, N>,
    c: &mut Matrix<M, N>,
) {
    let a = a.as_rows();
    let b = b.as_rows();
    let c = c.as_rows_mut();
    for j in 0..N {
        for i in 0..M {
            let mut sum = 0.0f32;
            for l in 0..K {
                sum += a[i][l] * b[l][j];
            }
            c[i][j] = sum;
        }
    }
}

impl<const M: usize, const K: usize> Matrix<M, K> {
    /// Matrix multiplication returning a fresh product matrix.
    ///
    /// self is M×K, `rhs` is K×N, the result is M×N. Delegates to
    /// [`multiply_into`] with a zeroed destination.
    pub fn matmul<const N: usize>(&self, rhs: &Matrix<K, N>) -> Matrix<M, N> {
        let mut out = Matrix::zeros();
        multiply_into(self, rhs, &mut out);
        out
    }
}

impl<const M: usize, const K: usize, const N: usize> Mul<&Matrix<K, N>> for &Matrix<M, K> {
    type Output = Matrix<M, N>;

    fn mul(self, rhs: &Matrix<K, N>) -> Matrix<M, N> {
        self.matmul(rhs)
    }
}
