use crate::Kernels;
use num_traits::Num;
use std::fmt::{Debug, Display};

/// Arithmetic a kernel needs from a scalar type on top of `+ - * /`.
pub trait Scalar: Copy + Num + PartialOrd + Debug + Display + Send + Sync + 'static {
    /// Absolute value. Identity for unsigned integers.
    fn abs(self) -> Self;

    /// Square root. Integers are rooted in double precision and truncated.
    fn sqrt(self) -> Self;

    /// `self` raised to the power `exp`. Integers go through double precision
    /// and are truncated.
    fn pow(self, exp: Self) -> Self;
}

/// Scalar type that can be stored in the containers.
///
/// Binds each scalar to the backend executing its element loops. Only `f32`
/// follows the build-time backend selection, the externally compiled kernels
/// exist for single precision only.
pub trait Element: Scalar {
    /// Kernels used for this scalar type.
    type Kernels: Kernels<Self>;
}

macro_rules! impl_float {
    ($($t:ty => $kernels:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn abs(self) -> Self { <$t>::abs(self) }

                #[inline(always)]
                fn sqrt(self) -> Self { <$t>::sqrt(self) }

                #[inline(always)]
                fn pow(self, exp: Self) -> Self { <$t>::powf(self, exp) }
            }

            impl Element for $t {
                type Kernels = $kernels;
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn abs(self) -> Self { self.wrapping_abs() }

                #[inline(always)]
                fn sqrt(self) -> Self { (self as f64).sqrt() as $t }

                #[inline(always)]
                fn pow(self, exp: Self) -> Self { (self as f64).powf(exp as f64) as $t }
            }

            impl Element for $t {
                type Kernels = crate::Reference;
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn abs(self) -> Self { self }

                #[inline(always)]
                fn sqrt(self) -> Self { (self as f64).sqrt() as $t }

                #[inline(always)]
                fn pow(self, exp: Self) -> Self { (self as f64).powf(exp as f64) as $t }
            }

            impl Element for $t {
                type Kernels = crate::Reference;
            }
        )*
    };
}

impl_float!(f32 => crate::Active, f64 => crate::Reference);
impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
