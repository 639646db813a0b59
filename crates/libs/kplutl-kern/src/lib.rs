//! # kplutl-kern
//! Compute kernels behind the kplutl vector and matrix containers.
//!
//! Every kernel operates on flat, row-major buffers whose length is either
//! carried by the slice or passed explicitly (`dim`, `rows`, `cols`). Two
//! implementations exist:
//!
//! * [`Reference`]: plain scalar loops, available for every [`Scalar`].
//! * `Ispc` (feature `ispc`): the externally compiled data-parallel kernels,
//!   available for `f32` only.
//!
//! Which one runs is decided at build time: [`Active`] is a type alias and
//! every [`Element`] names its kernels through an associated type, so there is
//! no runtime branch and no dynamic dispatch on the element loops.
#![warn(missing_docs)]

mod element;
mod reference;

pub use element::*;
pub use reference::Reference;

/// Set of kernels a compute backend provides for the scalar type `T`.
///
/// The kernels never allocate and never read from the output buffers before
/// writing them, except for [`Kernels::transform_v4`] which transforms the
/// vector in place.
pub trait Kernels<T: Scalar> {
    /// Human readable name of the backend.
    const NAME: &'static str;

    /// `out[i] = lhs[i] + rhs[i]`
    fn add(out: &mut [T], lhs: &[T], rhs: &[T]);

    /// `out[i] = lhs[i] - rhs[i]`
    fn sub(out: &mut [T], lhs: &[T], rhs: &[T]);

    /// `out[i] = lhs[i] * rhs[i]`
    fn mul(out: &mut [T], lhs: &[T], rhs: &[T]);

    /// `out[i] = lhs[i] / rhs[i]`
    fn div(out: &mut [T], lhs: &[T], rhs: &[T]);

    /// `out[i] = lhs[i] ^ rhs[i]`
    fn pow(out: &mut [T], lhs: &[T], rhs: &[T]);

    /// `out[i] = |arg[i]|`
    fn abs(out: &mut [T], arg: &[T]);

    /// `out[i] = sqrt(arg[i])`
    fn sqrt(out: &mut [T], arg: &[T]);

    /// Cross product of two 3-element vectors.
    fn cross_v3(out: &mut [T; 3], lhs: &[T; 3], rhs: &[T; 3]);

    /// Multiplies the row-major 4x4 matrix `mat` with `vec`, overwriting `vec`.
    fn transform_v4(mat: &[T; 16], vec: &mut [T; 4]);

    /// Fills the `dim` x `dim` buffer with the identity matrix.
    fn identity(mat: &mut [T], dim: usize);

    /// Writes the transpose of the `rows` x `cols` buffer `mat` into the
    /// `cols` x `rows` buffer `out`.
    fn transpose(out: &mut [T], mat: &[T], rows: usize, cols: usize);
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ispc")] {
        mod ispc;
        pub use ispc::Ispc;

        /// Backend running the `f32` element loops in this build.
        pub type Active = Ispc;
    } else {
        /// Backend running the `f32` element loops in this build.
        pub type Active = Reference;
    }
}

/// Returns the name of the backend selected for this build.
pub const fn active_backend_name() -> &'static str { <Active as Kernels<f32>>::NAME }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_backend_matches_feature() {
        if cfg!(feature = "ispc") {
            assert_eq!(active_backend_name(), "ispc");
        } else {
            assert_eq!(active_backend_name(), "reference");
        }
    }
}
