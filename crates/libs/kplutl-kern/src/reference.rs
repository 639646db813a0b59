use crate::{Kernels, Scalar};

/// Scalar loop implementation of the kernels.
///
/// Defines the numeric semantics every other backend has to reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference;

#[inline(always)]
fn binary_foreach<T: Scalar>(out: &mut [T], lhs: &[T], rhs: &[T], op: impl Fn(T, T) -> T) {
    debug_assert_eq!(out.len(), lhs.len(), "output and lhs lengths differ");
    debug_assert_eq!(out.len(), rhs.len(), "output and rhs lengths differ");
    for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = op(a, b);
    }
}

#[inline(always)]
fn unary_foreach<T: Scalar>(out: &mut [T], arg: &[T], op: impl Fn(T) -> T) {
    debug_assert_eq!(out.len(), arg.len(), "output and argument lengths differ");
    for (o, &a) in out.iter_mut().zip(arg) {
        *o = op(a);
    }
}

impl<T: Scalar> Kernels<T> for Reference {
    const NAME: &'static str = "reference";

    fn add(out: &mut [T], lhs: &[T], rhs: &[T]) { binary_foreach(out, lhs, rhs, |a, b| a + b) }

    fn sub(out: &mut [T], lhs: &[T], rhs: &[T]) { binary_foreach(out, lhs, rhs, |a, b| a - b) }

    fn mul(out: &mut [T], lhs: &[T], rhs: &[T]) { binary_foreach(out, lhs, rhs, |a, b| a * b) }

    fn div(out: &mut [T], lhs: &[T], rhs: &[T]) { binary_foreach(out, lhs, rhs, |a, b| a / b) }

    fn pow(out: &mut [T], lhs: &[T], rhs: &[T]) { binary_foreach(out, lhs, rhs, T::pow) }

    fn abs(out: &mut [T], arg: &[T]) { unary_foreach(out, arg, T::abs) }

    fn sqrt(out: &mut [T], arg: &[T]) { unary_foreach(out, arg, T::sqrt) }

    fn cross_v3(out: &mut [T; 3], lhs: &[T; 3], rhs: &[T; 3]) {
        out[0] = lhs[1] * rhs[2] - lhs[2] * rhs[1];
        out[1] = lhs[2] * rhs[0] - lhs[0] * rhs[2];
        out[2] = lhs[0] * rhs[1] - lhs[1] * rhs[0];
    }

    fn transform_v4(mat: &[T; 16], vec: &mut [T; 4]) {
        let v = *vec;
        for (out, row) in vec.iter_mut().zip(mat.chunks_exact(4)) {
            // Accumulate left to right, same order as the dot product.
            *out = row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3];
        }
    }

    fn identity(mat: &mut [T], dim: usize) {
        debug_assert_eq!(mat.len(), dim * dim, "buffer is not {dim}x{dim}");
        for (i, elem) in mat.iter_mut().enumerate() {
            *elem = if i / dim == i % dim {
                T::one()
            } else {
                T::zero()
            };
        }
    }

    fn transpose(out: &mut [T], mat: &[T], rows: usize, cols: usize) {
        debug_assert_eq!(mat.len(), rows * cols, "input is not {rows}x{cols}");
        debug_assert_eq!(out.len(), rows * cols, "output is not {cols}x{rows}");
        for r in 0..rows {
            for c in 0..cols {
                out[c * rows + r] = mat[r * cols + c];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    type K = Reference;

    #[test]
    fn elementwise_binary() {
        let lhs = [1.0f32, 2.0, 3.0];
        let rhs = [4.0f32, 5.0, 6.0];
        let mut out = [0.0f32; 3];

        <K as Kernels<f32>>::add(&mut out, &lhs, &rhs);
        assert_eq!(out, [5.0, 7.0, 9.0]);
        <K as Kernels<f32>>::sub(&mut out, &lhs, &rhs);
        assert_eq!(out, [-3.0, -3.0, -3.0]);
        <K as Kernels<f32>>::mul(&mut out, &lhs, &rhs);
        assert_eq!(out, [4.0, 10.0, 18.0]);
        <K as Kernels<f32>>::div(&mut out, &lhs, &rhs);
        for (a, b) in out.iter().zip([0.25, 0.4, 0.5]) {
            assert_relative_eq!(*a, b);
        }
        <K as Kernels<f32>>::pow(&mut out, &lhs, &[2.0, 3.0, 0.5]);
        for (a, b) in out.iter().zip([1.0, 8.0, 3.0f32.sqrt()]) {
            assert_relative_eq!(*a, b);
        }
    }

    #[test]
    fn elementwise_unary() {
        let mut out = [0i32; 3];
        <K as Kernels<i32>>::abs(&mut out, &[-1, 2, -3]);
        assert_eq!(out, [1, 2, 3]);

        let mut out = [0.0f64; 3];
        <K as Kernels<f64>>::sqrt(&mut out, &[4.0, 9.0, 16.0]);
        assert_eq!(out, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn cross() {
        let mut out = [0; 3];
        <K as Kernels<i32>>::cross_v3(&mut out, &[1, 2, 3], &[7, 8, 9]);
        assert_eq!(out, [-6, 12, -6]);
        <K as Kernels<i32>>::cross_v3(&mut out, &[1, 0, 0], &[0, 1, 0]);
        assert_eq!(out, [0, 0, 1]);
    }

    #[test]
    fn transform() {
        #[rustfmt::skip]
        let mat = [
            2.0, 0.0, 0.0, 1.0,
            0.0, 0.5, 0.0, 1.0,
            0.0, 0.0, 1.0, 1.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        let mut vec = [1.0f32, 1.0, 1.0, 1.0];
        <K as Kernels<f32>>::transform_v4(&mat, &mut vec);
        assert_eq!(vec, [3.0, 1.5, 2.0, 1.0]);
    }

    #[test]
    fn identity() {
        let mut mat = [7u8; 9];
        <K as Kernels<u8>>::identity(&mut mat, 3);
        assert_eq!(mat, [1, 0, 0, 0, 1, 0, 0, 0, 1]);

        let mut mat = [7.0f32; 1];
        <K as Kernels<f32>>::identity(&mut mat, 1);
        assert_eq!(mat, [1.0]);
    }

    #[test]
    fn transpose() {
        let mat = [1, 2, 3, 4, 5, 6];
        let mut out = [0; 6];
        <K as Kernels<i32>>::transpose(&mut out, &mat, 3, 2);
        assert_eq!(out, [1, 3, 5, 2, 4, 6]);
        <K as Kernels<i32>>::transpose(&mut out, &mat, 1, 6);
        assert_eq!(out, mat);
    }
}
