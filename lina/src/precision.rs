// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Build-time precision. Enable the `double_precision` feature to switch every
//! alias below (and every geometry helper using them) to `f64`.

#[cfg(not(feature = "double_precision"))]
mod selected {
    pub type Real = f32;
    pub type Vec2f = glam::Vec2;
    pub type Vec3f = glam::Vec3;
    pub type Vec4f = glam::Vec4;
    pub type Mat3f = glam::Mat3;
    pub type Mat4f = glam::Mat4;
}

#[cfg(feature = "double_precision")]
mod selected {
    pub type Real = f64;
    pub type Vec2f = glam::DVec2;
    pub type Vec3f = glam::DVec3;
    pub type Vec4f = glam::DVec4;
    pub type Mat3f = glam::DMat3;
    pub type Mat4f = glam::DMat4;
}

pub use selected::{Mat3f, Mat4f, Real, Vec2f, Vec3f, Vec4f};
