// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Constants, easing curves, and projection helpers on top of [`glam`].
//!
//! Everything is a pure function of its arguments. Scalar helpers are generic over
//! [`Float`]; geometry helpers use the build-time [`Real`] precision.
//!
//! Features:
//! - `double_precision`: [`Real`] is `f64` and the aliases are glam's `D*` types.
//! - `log`: diagnostics through the `log` facade. `cargo test-log` runs the tests with it.
//! - `glam_bytemuck`: forwards `glam/bytemuck`.

mod constants;
mod easing;
mod float;
mod precision;
mod projection;
mod rigid;
mod scalar;

pub use constants::{EPSILON, HALF_LOG, HALF_PI, INV_PI, PI, QUARTER_PI, TWO_PI};
pub use easing::{bias, gain, lerp, step, stepcurve, trilerp};
pub use float::Float;
pub use precision::{Mat3f, Mat4f, Real, Vec2f, Vec3f, Vec4f};
pub use projection::{
    frustum_tan_fov_matrix, perspective_fov_matrix, DepthRange, ForwardAxis, Fov,
};
pub use rigid::rigidbody_inverse;
pub use scalar::{almost_equal, degrees, max4, min4, radians, saturate, MinMax};

// Re-export commonly-used third party crates.
pub use {glam, strum};
