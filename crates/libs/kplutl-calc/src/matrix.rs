use crate::{
    cast::NumericCast,
    ops::{impl_approx, impl_binary_op, impl_elementwise, impl_neg},
    Error, Vector,
};
use kplutl_kern::{Element, Kernels};
use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

/// Row-major matrix of `ROWS` row vectors of `COLS` elements each.
///
/// Storage is contiguous, the flat view returned by [`Matrix::as_slice`] is
/// the rows laid end to end. `+ - * /` are elementwise (Hadamard); the matrix
/// product is [`crate::linalg::matrix_prod`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const ROWS: usize, const COLS: usize>(pub(crate) [Vector<T, COLS>; ROWS]);

/// 3x3 single precision matrix.
pub type Matrix3x3f = Matrix<f32, 3, 3>;
/// 4x4 single precision matrix.
pub type Matrix4x4f = Matrix<f32, 4, 4>;

static_assertions::assert_eq_size!(Matrix4x4f, [f32; 16]);
static_assertions::assert_eq_size!(Matrix<f64, 2, 3>, [f64; 6]);

impl<T, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    const NON_EMPTY: () = assert!(ROWS > 0 && COLS > 0, "a matrix holds at least one element");

    /// Number of rows.
    pub const NUM_ROWS: usize = ROWS;

    /// Number of columns.
    pub const NUM_COLS: usize = COLS;

    /// Creates a matrix from its row vectors.
    #[inline]
    pub const fn from_rows(rows: [Vector<T, COLS>; ROWS]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self(rows)
    }

    /// Creates a matrix from nested row arrays.
    pub fn new(rows: [[T; COLS]; ROWS]) -> Self { Self::from_rows(rows.map(Vector::new)) }

    /// Returns the `row`-th row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS`.
    #[inline]
    pub fn row(&self, row: usize) -> &Vector<T, COLS> { &self.0[row] }

    /// Returns the `row`-th row mutably.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut Vector<T, COLS> { &mut self.0[row] }

    /// Returns all rows.
    #[inline]
    pub const fn rows(&self) -> &[Vector<T, COLS>; ROWS] { &self.0 }

    /// Returns all elements as one row-major slice of `ROWS * COLS` values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `Vector` is `repr(transparent)` over `[T; COLS]`, so the
        // rows form a contiguous `[[T; COLS]; ROWS]` without padding.
        unsafe { std::slice::from_raw_parts(self.0.as_ptr().cast::<T>(), ROWS * COLS) }
    }

    /// Returns all elements as one mutable row-major slice.
    ///
    /// The slice exclusively borrows the matrix, row references cannot be
    /// held at the same time.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`; the unique borrow of `self` covers the
        // whole buffer.
        unsafe { std::slice::from_raw_parts_mut(self.0.as_mut_ptr().cast::<T>(), ROWS * COLS) }
    }

    /// Returns a raw pointer to the first element of the flat buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T { self.0.as_ptr().cast::<T>() }

    /// Returns a mutable raw pointer to the first element of the flat buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T { self.0.as_mut_ptr().cast::<T>() }
}

impl<T> Matrix<T, 4, 4> {
    /// Flat view of a 4x4 matrix for the fixed-size kernels.
    #[inline]
    pub(crate) fn as_array16(&self) -> &[T; 16] {
        // SAFETY: same layout as `[T; 16]`, see `as_slice`.
        unsafe { &*self.0.as_ptr().cast::<[T; 16]>() }
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Creates a matrix with every element set to `value`.
    ///
    /// Note that this fills the whole matrix, not only the diagonal.
    #[inline]
    pub const fn splat(value: T) -> Self { Self::from_rows([Vector::splat(value); ROWS]) }

    /// Elementwise cast of a nested raw buffer of another scalar type.
    pub fn cast_from<S: NumericCast<T>>(src: &[[S; COLS]; ROWS]) -> Self {
        Self::from_rows(std::array::from_fn(|r| Vector::cast_from(&src[r])))
    }

    /// Elementwise cast to another scalar type, with `as` semantics.
    pub fn cast<S: Copy>(&self) -> Matrix<S, ROWS, COLS>
    where
        T: NumericCast<S>,
    {
        Matrix::from_rows(std::array::from_fn(|r| self.0[r].cast()))
    }
}

impl<T: Element, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Creates a matrix with all elements set to zero.
    #[inline]
    pub fn zeros() -> Self { Self::splat(T::zero()) }

    /// Creates a matrix from a list of rows of varying length.
    ///
    /// Exactly `ROWS` rows are required; each row may be shorter than `COLS`,
    /// in which case it fills the leftmost columns and the rest stay zero.
    pub fn try_from_rows(rows: &[&[T]]) -> Result<Self, Error> {
        if rows.len() != ROWS {
            log::debug!("Rejected matrix initializer: {} rows for {}", rows.len(), ROWS);
            return Err(Error::DimensionMismatch {
                expected: ROWS,
                actual: rows.len(),
            });
        }
        let mut out = Self::zeros();
        for (r, values) in rows.iter().enumerate() {
            if values.len() > COLS {
                log::debug!(
                    "Rejected matrix initializer: row {} has {} values for {} columns",
                    r,
                    values.len(),
                    COLS
                );
                return Err(Error::RowTooLong {
                    row: r,
                    len: values.len(),
                    cols: COLS,
                });
            }
            out.0[r].as_mut_slice()[..values.len()].copy_from_slice(values);
        }
        Ok(out)
    }

    /// Creates a matrix from exactly `ROWS * COLS` values in row-major order.
    ///
    /// Reads no more than one value past the element count.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut out = Self::zeros();
        let flat = out.as_mut_slice();
        let mut count = 0;
        for value in iter.into_iter().take(ROWS * COLS + 1) {
            if let Some(slot) = flat.get_mut(count) {
                *slot = value;
            }
            count += 1;
        }
        if count != ROWS * COLS {
            log::debug!(
                "Rejected matrix initializer: {} values for {}x{} elements",
                count,
                ROWS,
                COLS
            );
            return Err(Error::DimensionMismatch {
                expected: ROWS * COLS,
                actual: count,
            });
        }
        Ok(out)
    }

    #[inline]
    pub(crate) fn zip_kernel(&self, rhs: &Self, kernel: impl FnOnce(&mut [T], &[T], &[T])) -> Self {
        let mut out = Self::zeros();
        kernel(out.as_mut_slice(), self.as_slice(), rhs.as_slice());
        out
    }

    #[inline]
    pub(crate) fn map_kernel(&self, kernel: impl FnOnce(&mut [T], &[T])) -> Self {
        let mut out = Self::zeros();
        kernel(out.as_mut_slice(), self.as_slice());
        out
    }
}

impl<T: Element, const N: usize> Matrix<T, N, N> {
    /// Creates the identity matrix.
    pub fn identity() -> Self {
        let mut out = Self::zeros();
        <T::Kernels as Kernels<T>>::identity(out.as_mut_slice(), N);
        out
    }
}

impl_binary_op!(Add, add, Matrix<T, ROWS, COLS>);
impl_binary_op!(Sub, sub, Matrix<T, ROWS, COLS>);
impl_binary_op!(Mul, mul, Matrix<T, ROWS, COLS>);
impl_binary_op!(Div, div, Matrix<T, ROWS, COLS>);
impl_neg!(Matrix<T, ROWS, COLS>);
impl_elementwise!(Matrix<T, ROWS, COLS>);
impl_approx!(Matrix<T, ROWS, COLS>);

macro_rules! impl_scalar_lhs {
    ($($s:ty),*) => {
        $(
            impl<const ROWS: usize, const COLS: usize> std::ops::Add<Matrix<$s, ROWS, COLS>> for $s {
                type Output = Matrix<$s, ROWS, COLS>;

                fn add(self, rhs: Matrix<$s, ROWS, COLS>) -> Self::Output { Matrix::splat(self) + rhs }
            }

            impl<const ROWS: usize, const COLS: usize> std::ops::Sub<Matrix<$s, ROWS, COLS>> for $s {
                type Output = Matrix<$s, ROWS, COLS>;

                fn sub(self, rhs: Matrix<$s, ROWS, COLS>) -> Self::Output { Matrix::splat(self) - rhs }
            }

            impl<const ROWS: usize, const COLS: usize> std::ops::Mul<Matrix<$s, ROWS, COLS>> for $s {
                type Output = Matrix<$s, ROWS, COLS>;

                fn mul(self, rhs: Matrix<$s, ROWS, COLS>) -> Self::Output { Matrix::splat(self) * rhs }
            }

            impl<const ROWS: usize, const COLS: usize> std::ops::Div<Matrix<$s, ROWS, COLS>> for $s {
                type Output = Matrix<$s, ROWS, COLS>;

                fn div(self, rhs: Matrix<$s, ROWS, COLS>) -> Self::Output { Matrix::splat(self) / rhs }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Element, const ROWS: usize, const COLS: usize> Default for Matrix<T, ROWS, COLS> {
    fn default() -> Self { Self::zeros() }
}

impl<T, const ROWS: usize, const COLS: usize> From<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    fn from(rows: [[T; COLS]; ROWS]) -> Self { Self::new(rows) }
}

impl<T, const ROWS: usize, const COLS: usize> From<[Vector<T, COLS>; ROWS]>
    for Matrix<T, ROWS, COLS>
{
    fn from(rows: [Vector<T, COLS>; ROWS]) -> Self { Self::from_rows(rows) }
}

impl<T, const ROWS: usize, const COLS: usize> Index<usize> for Matrix<T, ROWS, COLS> {
    type Output = Vector<T, COLS>;

    #[inline]
    fn index(&self, row: usize) -> &Self::Output { &self.0[row] }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output { &mut self.0[row] }
}

impl<T, const ROWS: usize, const COLS: usize> Index<(usize, usize)> for Matrix<T, ROWS, COLS> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output { &self.0[row][col] }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<(usize, usize)> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// SAFETY: `Matrix` is `repr(transparent)` over an array of `Zeroable` rows.
unsafe impl<T: bytemuck::Zeroable, const ROWS: usize, const COLS: usize> bytemuck::Zeroable
    for Matrix<T, ROWS, COLS>
{
}

// SAFETY: `Matrix` is `repr(transparent)` over an array of `Pod` rows.
unsafe impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize> bytemuck::Pod
    for Matrix<T, ROWS, COLS>
{
}

impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Returns the raw row-major bytes of the matrix.
    pub fn as_bytes(&self) -> &[u8] { bytemuck::bytes_of(self) }
}

impl<T: Display, const ROWS: usize, const COLS: usize> Display for Matrix<T, ROWS, COLS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.0 {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{abs, sqrt};
    use approx::assert_relative_eq;

    #[test]
    fn splat_fills_every_element() {
        let m = Matrix3x3f::splat(2.0);
        assert!(m.as_slice().iter().all(|&x| x == 2.0));
    }

    #[test]
    fn identity() {
        let m = Matrix::<i32, 3, 3>::identity();
        assert_eq!(m, Matrix::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]));
        assert_eq!(Matrix4x4f::identity()[(3, 3)], 1.0);
        assert_eq!(Matrix4x4f::identity()[(0, 3)], 0.0);
    }

    #[test]
    fn nested_rows() {
        let m = Matrix::<i32, 2, 3>::try_from_rows(&[&[1, 2], &[3, 4, 5]]).unwrap();
        assert_eq!(m, Matrix::new([[1, 2, 0], [3, 4, 5]]));

        assert_eq!(
            Matrix::<i32, 2, 3>::try_from_rows(&[&[1, 2, 3]]),
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            Matrix::<i32, 2, 3>::try_from_rows(&[&[1], &[1, 2, 3, 4]]),
            Err(Error::RowTooLong {
                row: 1,
                len: 4,
                cols: 3
            })
        );
    }

    #[test]
    fn flat_iterator_is_row_major() {
        let m = Matrix::<u16, 2, 2>::try_from_iter(1..=4).unwrap();
        assert_eq!(m, Matrix::new([[1, 2], [3, 4]]));
        assert!(Matrix::<u16, 2, 2>::try_from_iter(1..=3).is_err());
        assert!(Matrix::<u16, 2, 2>::try_from_iter(1..=5).is_err());
        assert_eq!(
            Matrix::<u16, 2, 2>::try_from_iter(std::iter::repeat(1)),
            Err(Error::DimensionMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn casting() {
        let m = Matrix::<i64, 2, 2>::cast_from(&[[1.5f32, -2.5], [3.9, 4.0]]);
        assert_eq!(m, Matrix::new([[1, -2], [3, 4]]));
        assert_eq!(m.cast::<f64>(), Matrix::new([[1.0, -2.0], [3.0, 4.0]]));
    }

    #[test]
    fn rows_and_elements() {
        let mut m = Matrix::new([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(m[1], Vector::new([3, 4]));
        assert_eq!(m.row(2), &Vector::new([5, 6]));
        m[(0, 1)] = 9;
        m.row_mut(2)[0] = 0;
        m[1][1] = 8;
        assert_eq!(m.as_slice(), &[1, 9, 3, 8, 0, 6]);
        m.as_mut_slice()[5] = 7;
        assert_eq!(m.rows()[2], Vector::new([0, 7]));
    }

    #[test]
    fn hadamard_arithmetic() {
        let a = Matrix::new([[1.0f32, 2.0], [3.0, 4.0]]);
        let b = Matrix::splat(2.0f32);
        assert_eq!(a + b, Matrix::new([[3.0, 4.0], [5.0, 6.0]]));
        assert_eq!(a - 1.0, Matrix::new([[0.0, 1.0], [2.0, 3.0]]));
        assert_eq!(a * b, Matrix::new([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(&a / &b, Matrix::new([[0.5, 1.0], [1.5, 2.0]]));
        assert_eq!(10.0 - a, Matrix::new([[9.0, 8.0], [7.0, 6.0]]));
        assert_eq!(-a, Matrix::new([[-1.0, -2.0], [-3.0, -4.0]]));

        let mut c = a;
        c *= 3.0;
        c -= &a;
        assert_eq!(c, a * 2.0);
    }

    #[test]
    fn elementwise_math() {
        let m = Matrix::new([[-4.0f64, 9.0], [16.0, -25.0]]);
        assert_relative_eq!(sqrt(&abs(&m)), Matrix::new([[2.0, 3.0], [4.0, 5.0]]));
    }

    #[test]
    fn display_one_line_per_row() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        assert_eq!(format!("{}", m), "( 1, 2 )\n( 3, 4 )\n");
    }

    #[test]
    fn byte_view() {
        let m = Matrix4x4f::identity();
        assert_eq!(m.as_bytes().len(), 64);
        assert_eq!(m.as_array16()[5], 1.0);
    }
}
