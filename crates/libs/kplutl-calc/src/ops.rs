//! Elementwise operators shared by [`Vector`](crate::Vector) and
//! [`Matrix`](crate::Matrix).
//!
//! Every operator goes through the kernels of the element type. Scalar
//! operands are broadcast to a full container first, then the container
//! kernel runs, so both forms share one code path per backend.

/// Elementwise math shared by vectors and matrices.
pub trait Elementwise: Sized {
    /// Elementwise absolute value.
    fn abs(&self) -> Self;

    /// Elementwise square root.
    fn sqrt(&self) -> Self;

    /// Elementwise power, `self[i] ^ exp[i]`.
    fn pow(&self, exp: &Self) -> Self;
}

/// Elementwise absolute value of a vector or a matrix.
pub fn abs<C: Elementwise>(c: &C) -> C { c.abs() }

/// Elementwise square root of a vector or a matrix.
pub fn sqrt<C: Elementwise>(c: &C) -> C { c.sqrt() }

/// Elementwise power of a vector or a matrix.
pub fn pow<C: Elementwise>(base: &C, exp: &C) -> C { base.pow(exp) }

/// Implements `$Op`, `$Op<T>`, their reference forms and the compound
/// assignments for a container with `zip_kernel` and `splat`.
macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $ty:ident<T $(, $c:ident)*>) => {
        paste::paste! {
            impl<T: kplutl_kern::Element $(, const $c: usize)*> std::ops::$Op
                for $ty<T $(, $c)*>
            {
                type Output = Self;

                #[inline]
                fn $op(self, rhs: Self) -> Self {
                    self.zip_kernel(&rhs, <T::Kernels as kplutl_kern::Kernels<T>>::$op)
                }
            }

            impl<'a, T: kplutl_kern::Element $(, const $c: usize)*> std::ops::$Op<&'a $ty<T $(, $c)*>>
                for $ty<T $(, $c)*>
            {
                type Output = Self;

                #[inline]
                fn $op(self, rhs: &'a Self) -> Self {
                    self.zip_kernel(rhs, <T::Kernels as kplutl_kern::Kernels<T>>::$op)
                }
            }

            impl<'a, T: kplutl_kern::Element $(, const $c: usize)*> std::ops::$Op<$ty<T $(, $c)*>>
                for &'a $ty<T $(, $c)*>
            {
                type Output = $ty<T $(, $c)*>;

                #[inline]
                fn $op(self, rhs: $ty<T $(, $c)*>) -> Self::Output {
                    self.zip_kernel(&rhs, <T::Kernels as kplutl_kern::Kernels<T>>::$op)
                }
            }

            impl<'a, 'b, T: kplutl_kern::Element $(, const $c: usize)*>
                std::ops::$Op<&'b $ty<T $(, $c)*>> for &'a $ty<T $(, $c)*>
            {
                type Output = $ty<T $(, $c)*>;

                #[inline]
                fn $op(self, rhs: &'b $ty<T $(, $c)*>) -> Self::Output {
                    self.zip_kernel(rhs, <T::Kernels as kplutl_kern::Kernels<T>>::$op)
                }
            }

            impl<T: kplutl_kern::Element $(, const $c: usize)*> std::ops::$Op<T>
                for $ty<T $(, $c)*>
            {
                type Output = Self;

                #[inline]
                fn $op(self, rhs: T) -> Self {
                    self.zip_kernel(&Self::splat(rhs), <T::Kernels as kplutl_kern::Kernels<T>>::$op)
                }
            }

            impl<'a, T: kplutl_kern::Element $(, const $c: usize)*> std::ops::$Op<T>
                for &'a $ty<T $(, $c)*>
            {
                type Output = $ty<T $(, $c)*>;

                #[inline]
                fn $op(self, rhs: T) -> Self::Output {
                    self.zip_kernel(&$ty::splat(rhs), <T::Kernels as kplutl_kern::Kernels<T>>::$op)
                }
            }

            impl<T: kplutl_kern::Element $(, const $c: usize)*> std::ops::[<$Op Assign>]
                for $ty<T $(, $c)*>
            {
                #[inline]
                fn [<$op _assign>](&mut self, rhs: Self) {
                    *self = self.zip_kernel(&rhs, <T::Kernels as kplutl_kern::Kernels<T>>::$op);
                }
            }

            impl<'a, T: kplutl_kern::Element $(, const $c: usize)*> std::ops::[<$Op Assign>]<&'a $ty<T $(, $c)*>>
                for $ty<T $(, $c)*>
            {
                #[inline]
                fn [<$op _assign>](&mut self, rhs: &'a Self) {
                    *self = self.zip_kernel(rhs, <T::Kernels as kplutl_kern::Kernels<T>>::$op);
                }
            }

            impl<T: kplutl_kern::Element $(, const $c: usize)*> std::ops::[<$Op Assign>]<T>
                for $ty<T $(, $c)*>
            {
                #[inline]
                fn [<$op _assign>](&mut self, rhs: T) {
                    *self = self.zip_kernel(&Self::splat(rhs), <T::Kernels as kplutl_kern::Kernels<T>>::$op);
                }
            }
        }
    };
}

/// Implements unary negation as `zeros - x` through the subtraction kernel.
macro_rules! impl_neg {
    ($ty:ident<T $(, $c:ident)*>) => {
        impl<T $(, const $c: usize)*> std::ops::Neg for $ty<T $(, $c)*>
        where
            T: kplutl_kern::Element + std::ops::Neg<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self { Self::zeros() - self }
        }

        impl<'a, T $(, const $c: usize)*> std::ops::Neg for &'a $ty<T $(, $c)*>
        where
            T: kplutl_kern::Element + std::ops::Neg<Output = T>,
        {
            type Output = $ty<T $(, $c)*>;

            #[inline]
            fn neg(self) -> Self::Output { $ty::zeros() - self }
        }
    };
}

/// Implements [`Elementwise`] through the unary and power kernels.
macro_rules! impl_elementwise {
    ($ty:ident<T $(, $c:ident)*>) => {
        impl<T: kplutl_kern::Element $(, const $c: usize)*> $crate::ops::Elementwise
            for $ty<T $(, $c)*>
        {
            fn abs(&self) -> Self {
                self.map_kernel(<T::Kernels as kplutl_kern::Kernels<T>>::abs)
            }

            fn sqrt(&self) -> Self {
                self.map_kernel(<T::Kernels as kplutl_kern::Kernels<T>>::sqrt)
            }

            fn pow(&self, exp: &Self) -> Self {
                self.zip_kernel(exp, <T::Kernels as kplutl_kern::Kernels<T>>::pow)
            }
        }
    };
}

/// Implements the `approx` comparison traits elementwise over `as_slice`.
macro_rules! impl_approx {
    ($ty:ident<T $(, $c:ident)*>) => {
        impl<T $(, const $c: usize)*> approx::AbsDiffEq for $ty<T $(, $c)*>
        where
            T: approx::AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T $(, const $c: usize)*> approx::RelativeEq for $ty<T $(, $c)*>
        where
            T: approx::RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<T $(, const $c: usize)*> approx::UlpsEq for $ty<T $(, $c)*>
        where
            T: approx::UlpsEq,
            T::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 { T::default_max_ulps() }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

pub(crate) use impl_approx;
pub(crate) use impl_binary_op;
pub(crate) use impl_elementwise;
pub(crate) use impl_neg;
