use crate::{
    cast::NumericCast,
    ops::{impl_approx, impl_binary_op, impl_elementwise, impl_neg},
    Error,
};
use kplutl_kern::Element;
use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

/// Fixed-size vector of `N` elements of type `T`.
///
/// The length is part of the type, operations between vectors of different
/// lengths do not compile. `+ - * /` are elementwise and run through the
/// kernels bound to `T` (see [`kplutl_kern::Element`]).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

/// Two-dimensional single precision vector.
pub type Vector2f = Vector<f32, 2>;
/// Three-dimensional single precision vector.
pub type Vector3f = Vector<f32, 3>;
/// Four-dimensional single precision vector.
pub type Vector4f = Vector<f32, 4>;

static_assertions::assert_eq_size!(Vector4f, [f32; 4]);
static_assertions::assert_eq_align!(Vector4f, f32);

impl<T, const N: usize> Vector<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "a vector holds at least one element");

    /// Number of elements.
    pub const DIM: usize = N;

    /// Creates a vector from exactly `N` values.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self(data)
    }

    /// Returns the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Returns the underlying array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] { &self.0 }

    /// Returns the underlying array mutably.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] { &mut self.0 }

    /// Consumes the vector, returning the underlying array.
    #[inline]
    pub fn into_array(self) -> [T; N] { self.0 }

    /// Returns a raw pointer to the first element.
    ///
    /// The pointer is valid for `N` reads while the vector is alive and not
    /// moved. Writing through it is undefined behaviour, use
    /// [`Vector::as_mut_ptr`].
    #[inline]
    pub const fn as_ptr(&self) -> *const T { self.0.as_ptr() }

    /// Returns a mutable raw pointer to the first element.
    ///
    /// The pointer is valid for `N` reads and writes while the vector is
    /// exclusively borrowed; no other reference to the vector may be used
    /// during that time.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T { self.0.as_mut_ptr() }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.0.iter_mut() }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a vector with all elements set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self { Self::new([value; N]) }

    /// Elementwise cast of a raw buffer of another scalar type.
    pub fn cast_from<S: NumericCast<T>>(src: &[S; N]) -> Self {
        Self::new(std::array::from_fn(|i| src[i].cast()))
    }

    /// Elementwise cast to another scalar type, with `as` semantics.
    pub fn cast<S: Copy>(&self) -> Vector<S, N>
    where
        T: NumericCast<S>,
    {
        Vector::new(std::array::from_fn(|i| self.0[i].cast()))
    }
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// Creates a vector with all elements set to zero.
    #[inline]
    pub fn zeros() -> Self { Self::splat(T::zero()) }

    /// Creates a vector from a slice holding exactly `N` values.
    pub fn try_from_slice(values: &[T]) -> Result<Self, Error> {
        if values.len() != N {
            log::debug!(
                "Rejected vector initializer: {} values for {} elements",
                values.len(),
                N
            );
            return Err(Error::DimensionMismatch {
                expected: N,
                actual: values.len(),
            });
        }
        let mut data = [T::zero(); N];
        data.copy_from_slice(values);
        Ok(Self::new(data))
    }

    /// Creates a vector from an iterator yielding exactly `N` values.
    ///
    /// At most `N + 1` values are pulled, so unbounded iterators are rejected
    /// as well. The count reported on error saturates at `N + 1`.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut data = [T::zero(); N];
        let mut count = 0;
        for value in iter.into_iter().take(N + 1) {
            if let Some(slot) = data.get_mut(count) {
                *slot = value;
            }
            count += 1;
        }
        if count != N {
            log::debug!("Rejected vector initializer: {} values for {} elements", count, N);
            return Err(Error::DimensionMismatch {
                expected: N,
                actual: count,
            });
        }
        Ok(Self::new(data))
    }

    /// Runs a binary kernel against `rhs` into a fresh vector.
    #[inline]
    pub(crate) fn zip_kernel(&self, rhs: &Self, kernel: impl FnOnce(&mut [T], &[T], &[T])) -> Self {
        let mut out = Self::zeros();
        kernel(&mut out.0, &self.0, &rhs.0);
        out
    }

    /// Runs a unary kernel into a fresh vector.
    #[inline]
    pub(crate) fn map_kernel(&self, kernel: impl FnOnce(&mut [T], &[T])) -> Self {
        let mut out = Self::zeros();
        kernel(&mut out.0, &self.0);
        out
    }
}

impl_binary_op!(Add, add, Vector<T, N>);
impl_binary_op!(Sub, sub, Vector<T, N>);
impl_binary_op!(Mul, mul, Vector<T, N>);
impl_binary_op!(Div, div, Vector<T, N>);
impl_neg!(Vector<T, N>);
impl_elementwise!(Vector<T, N>);
impl_approx!(Vector<T, N>);

macro_rules! impl_scalar_lhs {
    ($($s:ty),*) => {
        $(
            impl<const N: usize> std::ops::Add<Vector<$s, N>> for $s {
                type Output = Vector<$s, N>;

                fn add(self, rhs: Vector<$s, N>) -> Self::Output { Vector::splat(self) + rhs }
            }

            impl<const N: usize> std::ops::Sub<Vector<$s, N>> for $s {
                type Output = Vector<$s, N>;

                fn sub(self, rhs: Vector<$s, N>) -> Self::Output { Vector::splat(self) - rhs }
            }

            impl<const N: usize> std::ops::Mul<Vector<$s, N>> for $s {
                type Output = Vector<$s, N>;

                fn mul(self, rhs: Vector<$s, N>) -> Self::Output { Vector::splat(self) * rhs }
            }

            impl<const N: usize> std::ops::Div<Vector<$s, N>> for $s {
                type Output = Vector<$s, N>;

                fn div(self, rhs: Vector<$s, N>) -> Self::Output { Vector::splat(self) / rhs }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::zeros() }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self { Self::new(data) }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self { v.0 }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]`.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]`, which has no padding.
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: bytemuck::Pod, const N: usize> Vector<T, N> {
    /// Returns the raw bytes of the vector, e.g. for a GPU upload.
    pub fn as_bytes(&self) -> &[u8] { bytemuck::bytes_of(self) }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "( ")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, " )")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{abs, pow, sqrt};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn construction() {
        let a = Vector::new([1.0f32, 2.0, 3.0]);
        assert_eq!(Vector3f::splat(4.0), Vector::new([4.0, 4.0, 4.0]));
        assert_eq!(Vector3f::from([1.0, 2.0, 3.0]), a);
        assert_eq!(Vector3f::try_from_slice(&[1.0, 2.0, 3.0]).unwrap(), a);
        assert_eq!(Vector3f::try_from_iter(vec![1.0, 2.0, 3.0]).unwrap(), a);
        assert_eq!(Vector3f::default(), Vector3f::zeros());
        assert_eq!(Vector4f::DIM, 4);
    }

    #[test]
    fn construction_rejects_wrong_counts() {
        assert_eq!(
            Vector3f::try_from_slice(&[1.0, 2.0]),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            Vector::<i32, 2>::try_from_iter(0..5),
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert!(Vector::<u8, 1>::try_from_iter(std::iter::empty()).is_err());
    }

    #[test]
    fn unbounded_iterator_is_rejected() {
        assert_eq!(
            Vector3f::try_from_iter(std::iter::repeat(1.0)),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 4
            })
        );
        let mut source = 0..;
        assert!(Vector::<u32, 2>::try_from_iter(source.by_ref()).is_err());
        assert_eq!(source.next(), Some(3));
    }

    #[test]
    fn casting() {
        let raw = [4.7f64, -5.2, 6.0];
        let v = Vector::<i32, 3>::cast_from(&raw);
        assert_eq!(v, Vector::new([4, -5, 6]));
        assert_eq!(v.cast::<f32>(), Vector::new([4.0, -5.0, 6.0]));
        assert_eq!(Vector::new([300i32, -1, 7]).cast::<u8>(), Vector::new([44, 255, 7]));
    }

    #[test]
    fn arithmetic() {
        let v1 = Vector3f::new([1.0, 2.0, 3.0]);
        let v2 = Vector3f::new([4.0, 5.0, 6.0]);
        assert_eq!(v1 + v2, Vector::new([5.0, 7.0, 9.0]));
        assert_eq!(v1 - v2, Vector::new([-3.0, -3.0, -3.0]));
        assert_eq!(v1 * v2, Vector::new([4.0, 10.0, 18.0]));
        assert_relative_eq!(v1 / v2, Vector::new([0.25, 0.4, 0.5]));
        assert_eq!(&v1 + &v2, v1 + v2);
        assert_eq!(v1 + &v2, &v1 + v2);
        assert_eq!(-v1, Vector::new([-1.0, -2.0, -3.0]));
    }

    #[test]
    fn scalar_arithmetic() {
        let v = Vector::new([2, 4, 8]);
        assert_eq!(v + 1, Vector::new([3, 5, 9]));
        assert_eq!(v - 1, Vector::new([1, 3, 7]));
        assert_eq!(v * 2, Vector::new([4, 8, 16]));
        assert_eq!(v / 2, Vector::new([1, 2, 4]));
        assert_eq!(1 + v, Vector::new([3, 5, 9]));
        assert_eq!(10 - v, Vector::new([8, 6, 2]));
        assert_eq!(2 * v, Vector::new([4, 8, 16]));
        assert_eq!(16 / v, Vector::new([8, 4, 2]));
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vector::new([1.0f64, 2.0, 3.0]);
        v += Vector::splat(1.0);
        assert_eq!(v, Vector::new([2.0, 3.0, 4.0]));
        v -= 1.0;
        assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
        v *= Vector::new([3.0, 2.0, 1.0]);
        assert_eq!(v, Vector::new([3.0, 4.0, 3.0]));
        v /= 2.0;
        assert_eq!(v, Vector::new([1.5, 2.0, 1.5]));
        v *= &Vector::splat(2.0);
        assert_eq!(v, Vector::new([3.0, 4.0, 3.0]));
    }

    #[test]
    fn elementwise_math() {
        assert_eq!(abs(&Vector3f::new([-1.0, -2.0, -3.0])), Vector::new([1.0, 2.0, 3.0]));
        assert_eq!(sqrt(&Vector3f::new([4.0, 9.0, 16.0])), Vector::new([2.0, 3.0, 4.0]));
        assert_eq!(
            pow(&Vector::new([2u32, 3, 4]), &Vector::new([3, 2, 0])),
            Vector::new([8, 9, 1])
        );
    }

    #[test]
    fn indexing_and_views() {
        let mut v = Vector::new([1, 2, 3, 4]);
        v[2] = 7;
        assert_eq!(v[2], 7);
        assert_eq!(v.as_slice(), &[1, 2, 7, 4]);
        v.as_mut_slice()[0] = 0;
        assert_eq!(v.into_array(), [0, 2, 7, 4]);
        assert_eq!(v.iter().sum::<i32>(), 13);
        assert_eq!(Vector4f::splat(1.0).as_bytes().len(), 16);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Vector::new([1, 2, 3])), "( 1, 2, 3 )");
        assert_eq!(format!("{}", Vector::new([0.5f32])), "( 0.5 )");
    }

    proptest! {
        #[test]
        fn add_commutes(a in prop::array::uniform4(-1.0e6f32..1.0e6),
                        b in prop::array::uniform4(-1.0e6f32..1.0e6)) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn sub_anti_commutes(a in prop::array::uniform3(-1000i32..1000),
                             b in prop::array::uniform3(-1000i32..1000)) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            prop_assert_eq!(a - b, -(b - a));
            let (a, b) = (a.cast::<f64>(), b.cast::<f64>());
            prop_assert_eq!(a - b, -(b - a));
        }

        #[test]
        fn iterator_matches_literal(a in prop::array::uniform4(-1.0e6f32..1.0e6)) {
            prop_assert_eq!(Vector4f::try_from_iter(a.iter().copied()).unwrap(), Vector::new(a));
        }
    }
}
