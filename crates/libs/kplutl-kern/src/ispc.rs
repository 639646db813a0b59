//! Bindings to the externally compiled data-parallel kernels.
//!
//! The kernels are built outside of cargo and linked by the build script (see
//! `KPLUTL_ISPC_LIB_DIR`). Every entry point takes raw `f32` buffers plus an
//! explicit element count or dimension. Output buffers never alias inputs,
//! which the borrow rules of the safe wrappers guarantee.

use crate::Kernels;

extern "C" {
    #[link_name = "AddForeach"]
    fn add_foreach(out: *mut f32, in_lhs: *const f32, in_rhs: *const f32, len: usize);
    #[link_name = "SubForeach"]
    fn sub_foreach(out: *mut f32, in_lhs: *const f32, in_rhs: *const f32, len: usize);
    #[link_name = "MulForeach"]
    fn mul_foreach(out: *mut f32, in_lhs: *const f32, in_rhs: *const f32, len: usize);
    #[link_name = "DivForeach"]
    fn div_foreach(out: *mut f32, in_lhs: *const f32, in_rhs: *const f32, len: usize);
    #[link_name = "PowForeach"]
    fn pow_foreach(out: *mut f32, in_lhs: *const f32, in_rhs: *const f32, len: usize);
    #[link_name = "AbsForeach"]
    fn abs_foreach(out: *mut f32, in_arg: *const f32, len: usize);
    #[link_name = "SqrtForeach"]
    fn sqrt_foreach(out: *mut f32, in_arg: *const f32, len: usize);

    #[link_name = "VectorCrossV3"]
    fn vector_cross_v3(vec_out: *mut f32, vec_lhs: *const f32, vec_rhs: *const f32);
    #[link_name = "VectorTransformV4"]
    fn vector_transform_v4(mat_lhs: *const f32, vec_rhs: *mut f32);
    #[link_name = "BuildIdentity"]
    fn build_identity(mat_arg: *mut f32, dim: usize);
    #[link_name = "MatrixTranspose"]
    fn matrix_transpose(mat_out: *mut f32, mat_arg: *const f32, row: usize, col: usize);
}

/// Data-parallel kernels compiled with ispc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ispc;

macro_rules! binary {
    ($($name:ident => $ffi:ident),*) => {
        $(
            fn $name(out: &mut [f32], lhs: &[f32], rhs: &[f32]) {
                assert!(lhs.len() >= out.len() && rhs.len() >= out.len());
                // SAFETY: both inputs hold at least `out.len()` elements and
                // `out` is exclusively borrowed.
                unsafe { $ffi(out.as_mut_ptr(), lhs.as_ptr(), rhs.as_ptr(), out.len()) }
            }
        )*
    };
}

macro_rules! unary {
    ($($name:ident => $ffi:ident),*) => {
        $(
            fn $name(out: &mut [f32], arg: &[f32]) {
                assert!(arg.len() >= out.len());
                // SAFETY: `arg` holds at least `out.len()` elements.
                unsafe { $ffi(out.as_mut_ptr(), arg.as_ptr(), out.len()) }
            }
        )*
    };
}

impl Kernels<f32> for Ispc {
    const NAME: &'static str = "ispc";

    binary!(
        add => add_foreach,
        sub => sub_foreach,
        mul => mul_foreach,
        div => div_foreach,
        pow => pow_foreach
    );

    unary!(abs => abs_foreach, sqrt => sqrt_foreach);

    fn cross_v3(out: &mut [f32; 3], lhs: &[f32; 3], rhs: &[f32; 3]) {
        // SAFETY: fixed size arrays of the expected length.
        unsafe { vector_cross_v3(out.as_mut_ptr(), lhs.as_ptr(), rhs.as_ptr()) }
    }

    fn transform_v4(mat: &[f32; 16], vec: &mut [f32; 4]) {
        // SAFETY: fixed size arrays of the expected length.
        unsafe { vector_transform_v4(mat.as_ptr(), vec.as_mut_ptr()) }
    }

    fn identity(mat: &mut [f32], dim: usize) {
        assert_eq!(mat.len(), dim * dim);
        // SAFETY: the buffer holds exactly `dim * dim` elements.
        unsafe { build_identity(mat.as_mut_ptr(), dim) }
    }

    fn transpose(out: &mut [f32], mat: &[f32], rows: usize, cols: usize) {
        assert_eq!(mat.len(), rows * cols);
        assert_eq!(out.len(), rows * cols);
        // SAFETY: both buffers hold exactly `rows * cols` elements.
        unsafe { matrix_transpose(out.as_mut_ptr(), mat.as_ptr(), rows, cols) }
    }
}
