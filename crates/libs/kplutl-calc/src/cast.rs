/// Trait for converting from one primitive numeric type to another.
///
/// Follows `as` semantics: widening conversions are exact, narrowing ones
/// truncate (floats towards zero, saturating at the integer bounds).
pub trait NumericCast<T> {
    /// Casts `self` to `T`.
    fn cast(&self) -> T;
}

macro_rules! impl_numeric_cast {
    ($($t0:ty),*) => {
        $(
            impl_numeric_cast!(@to $t0 as
                f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
        )*
    };
    (@to $t0:ty as $($t1:ty),*) => {
        $(
            impl NumericCast<$t1> for $t0 {
                #[inline(always)]
                #[allow(clippy::unnecessary_cast)]
                fn cast(&self) -> $t1 { *self as $t1 }
            }
        )*
    };
}

impl_numeric_cast!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
