//! Linear algebra on [`Vector`] and [`Matrix`].
//!
//! Every function returns a new value; none of them modifies its arguments
//! except [`build_identity`].

use crate::{Error, Matrix, Vector};
use kplutl_kern::{Element, Kernels};
use num_traits::Float;

/// Dot product: elementwise product through the kernels, then summed from
/// the first to the last element.
///
/// The sum starts from the first product rather than zero, so a sum of
/// negative zeros stays negative.
pub fn dot_prod<T: Element, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<T, N>) -> T {
    let products = lhs * rhs;
    products.iter().skip(1).fold(products[0], |acc, &x| acc + x)
}

/// Cross product, defined for 2- and 3-dimensional vectors.
pub trait CrossProd {
    /// Result of the product: a scalar in 2D, a vector in 3D.
    type Output;

    /// Computes `self × rhs`.
    fn cross(&self, rhs: &Self) -> Self::Output;
}

impl<T: Element> CrossProd for Vector<T, 2> {
    type Output = T;

    fn cross(&self, rhs: &Self) -> T { self[0] * rhs[1] - self[1] * rhs[0] }
}

impl<T: Element> CrossProd for Vector<T, 3> {
    type Output = Vector<T, 3>;

    fn cross(&self, rhs: &Self) -> Vector<T, 3> {
        let mut out = Vector::zeros();
        <T::Kernels as Kernels<T>>::cross_v3(out.as_mut_array(), self.as_array(), rhs.as_array());
        out
    }
}

/// Cross product of two 2- or 3-dimensional vectors.
pub fn cross_prod<V: CrossProd>(lhs: &V, rhs: &V) -> V::Output { lhs.cross(rhs) }

/// Euclidean length.
pub fn length<T: Element, const N: usize>(v: &Vector<T, N>) -> T { dot_prod(v, v).sqrt() }

/// Scales `v` to unit length.
///
/// A zero vector divides by zero; use [`try_normalize`] when the input may be
/// degenerate.
pub fn normalize<T: Element, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> { v / length(v) }

/// Scales `v` to unit length, rejecting vectors whose length is zero or not
/// a number.
pub fn try_normalize<T, const N: usize>(v: &Vector<T, N>) -> Result<Vector<T, N>, Error>
where
    T: Element + Float,
{
    let len = length(v);
    if !(len > T::zero()) || !len.is_finite() {
        log::debug!("Cannot normalize {v}: length is {len}");
        return Err(Error::InvalidInput("vector length must be finite and non-zero"));
    }
    Ok(v / len)
}

/// Multiplies a 4x4 matrix with a 4-vector.
pub fn transform<T: Element>(mat: &Matrix<T, 4, 4>, v: &Vector<T, 4>) -> Vector<T, 4> {
    let mut out = *v;
    <T::Kernels as Kernels<T>>::transform_v4(mat.as_array16(), out.as_mut_array());
    out
}

/// Swaps rows and columns.
pub fn transpose<T: Element, const ROWS: usize, const COLS: usize>(
    mat: &Matrix<T, ROWS, COLS>,
) -> Matrix<T, COLS, ROWS> {
    let mut out = Matrix::zeros();
    <T::Kernels as Kernels<T>>::transpose(out.as_mut_slice(), mat.as_slice(), ROWS, COLS);
    out
}

/// Matrix product of an `A x B` and a `B x C` matrix.
///
/// The right-hand side is transposed first so that every output element is
/// the dot product of two rows.
pub fn matrix_prod<T: Element, const A: usize, const B: usize, const C: usize>(
    lhs: &Matrix<T, A, B>,
    rhs: &Matrix<T, B, C>,
) -> Matrix<T, A, C> {
    let rhs_t = transpose(rhs);
    let mut out = Matrix::zeros();
    for (r, row) in lhs.rows().iter().enumerate() {
        for (c, col) in rhs_t.rows().iter().enumerate() {
            out[(r, c)] = dot_prod(row, col);
        }
    }
    out
}

/// Overwrites a square matrix with the identity.
pub fn build_identity<T: Element, const N: usize>(mat: &mut Matrix<T, N, N>) {
    <T::Kernels as Kernels<T>>::identity(mat.as_mut_slice(), N);
}
