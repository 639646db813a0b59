//! Transformation and camera matrices for 3D rendering.
//!
//! Conventions: Y-up, row-major 4x4 matrices acting on column vectors, the
//! translation lives in the last column. Angles are in radians.

use crate::{
    linalg::{cross_prod, length, normalize},
    Error, Matrix, Vector,
};
use kplutl_kern::Element;
use num_traits::Float;
use std::fmt::{Display, Formatter};

/// Quaternion stored as `(x, y, z, w)`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T>(pub Vector<T, 4>);

impl<T: Copy> Quaternion<T> {
    /// Creates a quaternion from its components. No normalization happens.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self { Self(Vector::new([x, y, z, w])) }

    /// The `x` component.
    #[inline]
    pub fn x(&self) -> T { self.0[0] }

    /// The `y` component.
    #[inline]
    pub fn y(&self) -> T { self.0[1] }

    /// The `z` component.
    #[inline]
    pub fn z(&self) -> T { self.0[2] }

    /// The `w` (scalar) component.
    #[inline]
    pub fn w(&self) -> T { self.0[3] }
}

impl<T: Element + Float> Quaternion<T> {
    /// Creates a quaternion that must already have unit length.
    pub fn try_unit(x: T, y: T, z: T, w: T) -> Result<Self, Error> {
        let q = Self::new(x, y, z, w);
        if !q.is_unit() {
            log::debug!("Rejected quaternion {q}: not of unit length");
            return Err(Error::InvalidInput("quaternion must have unit length"));
        }
        Ok(q)
    }

    /// Creates the rotation of `angle` radians around `axis`.
    pub fn from_axis_angle(axis: &Vector<T, 3>, angle: T) -> Result<Self, Error> {
        let axis = crate::linalg::try_normalize(axis)?;
        let half = angle / (T::one() + T::one());
        let (sin, cos) = Float::sin_cos(half);
        Ok(Self::new(axis[0] * sin, axis[1] * sin, axis[2] * sin, cos))
    }

    /// Whether the length is one within `sqrt(epsilon)`.
    pub fn is_unit(&self) -> bool {
        Float::abs(length(&self.0) - T::one()) <= Float::sqrt(T::epsilon())
    }

    /// Returns the quaternion rescaled to unit length.
    pub fn normalized(&self) -> Self { Self(normalize(&self.0)) }
}

impl<T> From<Vector<T, 4>> for Quaternion<T> {
    fn from(v: Vector<T, 4>) -> Self { Self(v) }
}

impl<T: Display> Display for Quaternion<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Display::fmt(&self.0, f) }
}

/// Orientation of the view space basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    /// The camera looks down the positive z axis.
    Left,
    /// The camera looks down the negative z axis.
    Right,
}

/// Translation by `(x, y, z)`.
pub fn build_translation_matrix<T: Element + Float>(x: T, y: T, z: T) -> Matrix<T, 4, 4> {
    let (o, i) = (T::zero(), T::one());
    Matrix::new([[i, o, o, x], [o, i, o, y], [o, o, i, z], [o, o, o, i]])
}

/// Non-uniform scale by `(x, y, z)`.
pub fn build_scale_matrix<T: Element + Float>(x: T, y: T, z: T) -> Matrix<T, 4, 4> {
    let (o, i) = (T::zero(), T::one());
    Matrix::new([[x, o, o, o], [o, y, o, o], [o, o, z, o], [o, o, o, i]])
}

/// Rotation around the x axis.
pub fn build_rotation_matrix_x<T: Element + Float>(angle: T) -> Matrix<T, 4, 4> {
    let (o, i) = (T::zero(), T::one());
    let (s, c) = Float::sin_cos(angle);
    Matrix::new([[i, o, o, o], [o, c, -s, o], [o, s, c, o], [o, o, o, i]])
}

/// Rotation around the y axis.
pub fn build_rotation_matrix_y<T: Element + Float>(angle: T) -> Matrix<T, 4, 4> {
    let (o, i) = (T::zero(), T::one());
    let (s, c) = Float::sin_cos(angle);
    Matrix::new([[c, o, s, o], [o, i, o, o], [-s, o, c, o], [o, o, o, i]])
}

/// Rotation around the z axis.
pub fn build_rotation_matrix_z<T: Element + Float>(angle: T) -> Matrix<T, 4, 4> {
    let (o, i) = (T::zero(), T::one());
    let (s, c) = Float::sin_cos(angle);
    Matrix::new([[c, -s, o, o], [s, c, o, o], [o, o, i, o], [o, o, o, i]])
}

/// Rotation described by a unit quaternion.
///
/// The result is only a rotation if `q` has unit length, see
/// [`Quaternion::try_unit`].
pub fn build_rotation_matrix<T: Element + Float>(q: &Quaternion<T>) -> Matrix<T, 4, 4> {
    let (o, i) = (T::zero(), T::one());
    let two = i + i;
    let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());

    let r00 = two * (w * w + x * x) - i;
    let r01 = two * (x * y - w * z);
    let r02 = two * (x * z + w * y);

    let r10 = two * (x * y + w * z);
    let r11 = two * (w * w + y * y) - i;
    let r12 = two * (y * z - w * x);

    let r20 = two * (x * z - w * y);
    let r21 = two * (y * z + w * x);
    let r22 = two * (w * w + z * z) - i;

    Matrix::new([
        [r00, r01, r02, o],
        [r10, r11, r12, o],
        [r20, r21, r22, o],
        [o, o, o, i],
    ])
}

/// Camera matrix looking from `eye` at `target`.
///
/// The rows hold the camera basis, the last column is `-eye`.
pub fn build_view_matrix<T: Element + Float>(
    eye: &Vector<T, 3>,
    target: &Vector<T, 3>,
    up: &Vector<T, 3>,
    handedness: Handedness,
) -> Matrix<T, 4, 4> {
    let z_axis = match handedness {
        Handedness::Right => normalize(&(eye - target)),
        Handedness::Left => normalize(&(target - eye)),
    };
    let x_axis = normalize(&cross_prod(up, &z_axis));
    let y_axis = cross_prod(&z_axis, &x_axis);

    let (o, i) = (T::zero(), T::one());
    Matrix::new([
        [x_axis[0], x_axis[1], x_axis[2], -eye[0]],
        [y_axis[0], y_axis[1], y_axis[2], -eye[1]],
        [z_axis[0], z_axis[1], z_axis[2], -eye[2]],
        [o, o, o, i],
    ])
}

/// Left-handed [`build_view_matrix`].
pub fn build_view_matrix_lh<T: Element + Float>(
    eye: &Vector<T, 3>,
    target: &Vector<T, 3>,
    up: &Vector<T, 3>,
) -> Matrix<T, 4, 4> {
    build_view_matrix(eye, target, up, Handedness::Left)
}

/// Right-handed [`build_view_matrix`].
pub fn build_view_matrix_rh<T: Element + Float>(
    eye: &Vector<T, 3>,
    target: &Vector<T, 3>,
    up: &Vector<T, 3>,
) -> Matrix<T, 4, 4> {
    build_view_matrix(eye, target, up, Handedness::Right)
}

/// Right-handed orthographic projection of the given clipping box.
pub fn build_orthographic_projection_matrix_rh<T: Element + Float>(
    right: T,
    left: T,
    top: T,
    bottom: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let (o, i) = (T::zero(), T::one());
    let two = i + i;
    let width = right - left;
    let height = top - bottom;
    let depth = near - far;

    Matrix::new([
        [two / width, o, o, -(right + left) / width],
        [o, two / height, o, -(top + bottom) / height],
        [o, o, two / depth, -(near + far) / depth],
        [o, o, o, i],
    ])
}

/// Right-handed perspective projection of the given frustum.
///
/// The off-center terms of the third column are `-(r + l) / w` and
/// `-(t + b) / h`, matching the fourth column.
pub fn build_perspective_projection_matrix_rh<T: Element + Float>(
    right: T,
    left: T,
    top: T,
    bottom: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let (o, i) = (T::zero(), T::one());
    let two = i + i;
    let width = right - left;
    let height = top - bottom;
    let depth = near - far;

    let x_offset = -(right + left) / width;
    let y_offset = -(top + bottom) / height;

    Matrix::new([
        [two * near / width, o, x_offset, x_offset],
        [o, two * near / height, y_offset, y_offset],
        [o, o, (near + far) / depth, -(two * near * far) / depth],
        [o, o, i, o],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::{matrix_prod, transform};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn translation_and_scale() {
        let p = Vector::new([1.0f32, 2.0, 3.0, 1.0]);
        let t = build_translation_matrix(1.0, -1.0, 0.5);
        assert_eq!(transform(&t, &p), Vector::new([2.0, 1.0, 3.5, 1.0]));
        let s = build_scale_matrix(2.0, 3.0, 4.0);
        assert_eq!(transform(&s, &p), Vector::new([2.0, 6.0, 12.0, 1.0]));
    }

    #[test]
    fn axis_rotations() {
        let x = Vector::new([1.0f32, 0.0, 0.0, 1.0]);
        let y = Vector::new([0.0f32, 1.0, 0.0, 1.0]);
        let z = Vector::new([0.0f32, 0.0, 1.0, 1.0]);
        assert_relative_eq!(transform(&build_rotation_matrix_z(FRAC_PI_2), &x), y);
        assert_relative_eq!(transform(&build_rotation_matrix_x(FRAC_PI_2), &y), z);
        assert_relative_eq!(transform(&build_rotation_matrix_y(FRAC_PI_2), &z), x);
    }

    #[test]
    fn quaternion_rotation() {
        let identity = Quaternion::try_unit(0.0f64, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(build_rotation_matrix(&identity), Matrix::identity());

        let q = Quaternion::from_axis_angle(&Vector::new([0.0f32, 0.0, 2.0]), FRAC_PI_2).unwrap();
        assert!(q.is_unit());
        assert_relative_eq!(build_rotation_matrix(&q), build_rotation_matrix_z(FRAC_PI_2));
    }

    #[test]
    fn quaternion_validation() {
        assert!(Quaternion::try_unit(1.0f32, 1.0, 0.0, 0.0).is_err());
        let q = Quaternion::new(0.0f32, 3.0, 0.0, 4.0);
        assert!(!q.is_unit());
        assert!(q.normalized().is_unit());
        assert_eq!((q.x(), q.y(), q.z(), q.w()), (0.0, 3.0, 0.0, 4.0));
        assert!(Quaternion::from_axis_angle(&Vector::<f32, 3>::zeros(), 1.0).is_err());
    }

    #[test]
    fn rotations_compose() {
        let quarter = build_rotation_matrix_z(FRAC_PI_2);
        let half = matrix_prod(&quarter, &quarter);
        let x = Vector::new([1.0f32, 0.0, 0.0, 1.0]);
        assert_relative_eq!(transform(&half, &x), Vector::new([-1.0, 0.0, 0.0, 1.0]), epsilon = 1.0e-6);
    }

    #[test]
    fn view_matrices() {
        let eye = Vector::new([0.0f32, 0.0, 5.0]);
        let target = Vector::zeros();
        let up = Vector::new([0.0, 1.0, 0.0]);

        assert_eq!(
            build_view_matrix_rh(&eye, &target, &up),
            Matrix::new([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, -5.0],
                [0.0, 0.0, 0.0, 1.0],
            ])
        );
        assert_eq!(
            build_view_matrix_lh(&eye, &target, &up),
            Matrix::new([
                [-1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, -5.0],
                [0.0, 0.0, 0.0, 1.0],
            ])
        );
        assert_eq!(
            build_view_matrix(&eye, &target, &up, Handedness::Right),
            build_view_matrix_rh(&eye, &target, &up)
        );
    }

    #[test]
    fn orthographic() {
        let m = build_orthographic_projection_matrix_rh(1.0f32, -1.0, 1.0, -1.0, 1.0, 3.0);
        assert_eq!(
            m,
            Matrix::new([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, 2.0],
                [0.0, 0.0, 0.0, 1.0],
            ])
        );
    }

    #[test]
    fn perspective() {
        let m = build_perspective_projection_matrix_rh(2.0f32, 1.0, 3.0, 1.0, 1.0, 3.0);
        assert_eq!(
            m,
            Matrix::new([
                [2.0, 0.0, -3.0, -3.0],
                [0.0, 1.0, -2.0, -2.0],
                [0.0, 0.0, -2.0, 3.0],
                [0.0, 0.0, 1.0, 0.0],
            ])
        );
    }

    #[test]
    fn perspective_off_center_terms_divide_whole_sum() {
        let (r, l, t, b, n, f) = (2.0f32, 1.0, 3.0, 1.0, 1.0, 3.0);
        let m = build_perspective_projection_matrix_rh(r, l, t, b, n, f);
        let (w, h, d) = (r - l, t - b, n - f);
        assert_ne!(m[(0, 2)], r + l / -w);
        assert_ne!(m[(1, 2)], t + b / -h);
        assert_ne!(m[(2, 2)], n + f / d);
        assert_eq!(m[(0, 2)], m[(0, 3)]);
        assert_eq!(m[(1, 2)], m[(1, 3)]);
    }
}
