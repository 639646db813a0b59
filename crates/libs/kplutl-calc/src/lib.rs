//! # kplutl-calc
//! Fixed-size vectors and matrices for numeric and 3D graphics work.
//!
//! Dimensions are const generic parameters, so shape errors in arithmetic are
//! compile errors. Elementwise loops are delegated to the kernels bound to
//! the element type (see [`kplutl_kern`]); enabling the `ispc` feature routes
//! `f32` through the data-parallel backend without any change to the API.
//!
//! ```
//! use kplutl_calc::prelude::*;
//!
//! let a = Vector3f::new([1.0, 2.0, 3.0]);
//! let b = Vector3f::new([7.0, 8.0, 9.0]);
//! assert_eq!(dot_prod(&a, &b), 50.0);
//! assert_eq!(cross_prod(&a, &b), Vector3f::new([-6.0, 12.0, -6.0]));
//! ```
#![warn(missing_docs)]

mod cast;
mod error;
pub mod graphics;
pub mod linalg;
mod matrix;
mod ops;
mod vector;

pub use cast::NumericCast;
pub use error::Error;
pub use graphics::{Handedness, Quaternion};
pub use kplutl_kern::{active_backend_name, Element, Scalar};
pub use matrix::{Matrix, Matrix3x3f, Matrix4x4f};
pub use ops::{abs, pow, sqrt, Elementwise};
pub use vector::{Vector, Vector2f, Vector3f, Vector4f};

cfg_if::cfg_if! {
    if #[cfg(feature = "use_f64")] {
        /// Default floating point type of the crate.
        pub type Real = f64;
    } else {
        /// Default floating point type of the crate.
        pub type Real = f32;
    }
}

/// Everything needed for day-to-day use.
pub mod prelude {
    pub use crate::{
        abs, graphics::*, linalg::*, pow, sqrt, Elementwise, Error, Matrix, Matrix3x3f,
        Matrix4x4f, NumericCast, Real, Vector, Vector2f, Vector3f, Vector4f,
    };
}
