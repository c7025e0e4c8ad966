// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later
//
// See: https://github.com/KhronosGroup/OpenXR-SDK-Source/blob/main/src/common/xr_linear.h

use crate::{Mat4f, Real, Vec4f};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which view space axis the camera looks down.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum ForwardAxis {
    /// Left handed, Direct3D style.
    #[strum(to_string = "+z", serialize = "pos_z")]
    PosZ,
    /// Right handed, OpenGL/OpenXR style.
    #[default]
    #[strum(to_string = "-z", serialize = "neg_z")]
    NegZ,
}

impl ForwardAxis {
    /// Sign of view space z for points in front of the camera.
    pub fn sign(self) -> Real {
        match self {
            Self::PosZ => 1.0,
            Self::NegZ => -1.0,
        }
    }
}

/// Range of normalized device depth after the perspective divide.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum DepthRange {
    /// Direct3D, Vulkan, Metal, WebGPU.
    #[strum(to_string = "0..1", serialize = "zero_to_one")]
    ZeroToOne,
    /// OpenGL, WebGL.
    #[default]
    #[strum(to_string = "-1..1", serialize = "neg_one_to_one")]
    NegOneToOne,
}

impl DepthRange {
    /// Normalized depth of the near plane.
    pub fn near(self) -> Real {
        match self {
            Self::ZeroToOne => 0.0,
            Self::NegOneToOne => -1.0,
        }
    }

    /// Normalized depth of the far plane.
    pub fn far(self) -> Real {
        1.0
    }
}

/// Builds an off-axis perspective projection from the tangents of the angles between
/// the forward axis and each side of the frustum (`left` and `down` are usually negative).
///
/// If `far <= near` the far plane is placed at infinity, which is better for far off
/// objects. Reversed or empty depth ranges take this path too.
///
/// The matrix is built for [`ForwardAxis::NegZ`], and [`ForwardAxis::PosZ`] negates
/// its z column. With an infinite far plane, entry `[2][2]` is therefore `-1` under
/// `NegZ` and `+1` under `PosZ` (the same as [`glam::Mat4::perspective_infinite_lh`]).
#[allow(clippy::too_many_arguments)]
pub fn frustum_tan_fov_matrix(
    left: Real,
    right: Real,
    down: Real,
    up: Real,
    near: Real,
    far: Real,
    forward: ForwardAxis,
    depth: DepthRange,
) -> Mat4f {
    let s = forward.sign();
    let offset = match depth {
        DepthRange::ZeroToOne => 0.0,
        DepthRange::NegOneToOne => near,
    };
    let (zz, zw) = if far <= near {
        #[cfg(feature = "log")]
        log::trace!("far plane {far} <= near plane {near}, using infinite far plane");
        (-1.0, -(near + offset))
    } else {
        (
            (far + offset) / (near - far),
            (far * (near + offset)) / (near - far),
        )
    };
    let w = 1.0 / (right - left);
    let h = 1.0 / (up - down);
    // Derived for -Z forward; +Z mirrors the z column.
    Mat4f::from_cols(
        Vec4f::new(2.0 * w, 0.0, 0.0, 0.0),
        Vec4f::new(0.0, 2.0 * h, 0.0, 0.0),
        Vec4f::new(-s * (right + left) * w, -s * (up + down) * h, -s * zz, s),
        Vec4f::new(0.0, 0.0, zw, 0.0),
    )
}

/// Like [`frustum_tan_fov_matrix`] but takes the angles themselves, in radians.
///
/// [`ForwardAxis::default`] and [`DepthRange::default`] (`-z`, `-1..1`) match OpenGL.
#[allow(clippy::too_many_arguments)]
pub fn perspective_fov_matrix(
    angle_left: Real,
    angle_right: Real,
    angle_down: Real,
    angle_up: Real,
    near: Real,
    far: Real,
    forward: ForwardAxis,
    depth: DepthRange,
) -> Mat4f {
    frustum_tan_fov_matrix(
        angle_left.tan(),
        angle_right.tan(),
        angle_down.tan(),
        angle_up.tan(),
        near,
        far,
        forward,
        depth,
    )
}

/// Field of view as four angles in radians, measured from the forward axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Fov {
    pub angle_left: Real,
    pub angle_right: Real,
    pub angle_down: Real,
    pub angle_up: Real,
}

impl Fov {
    /// Centered frustum from a vertical field of view and a width / height ratio.
    pub fn symmetric(vertical: Real, aspect_ratio: Real) -> Self {
        let half_vertical = vertical * 0.5;
        let half_horizontal = (half_vertical.tan() * aspect_ratio).atan();
        Self {
            angle_left: -half_horizontal,
            angle_right: half_horizontal,
            angle_down: -half_vertical,
            angle_up: half_vertical,
        }
    }

    /// Total horizontal angle.
    pub fn horizontal(&self) -> Real {
        self.angle_right - self.angle_left
    }

    /// Total vertical angle.
    pub fn vertical(&self) -> Real {
        self.angle_up - self.angle_down
    }

    /// Projection with the default conventions.
    pub fn to_projection(&self, near: Real, far: Real) -> Mat4f {
        self.to_projection_with(near, far, ForwardAxis::default(), DepthRange::default())
    }

    pub fn to_projection_with(
        &self,
        near: Real,
        far: Real,
        forward: ForwardAxis,
        depth: DepthRange,
    ) -> Mat4f {
        perspective_fov_matrix(
            self.angle_left,
            self.angle_right,
            self.angle_down,
            self.angle_up,
            near,
            far,
            forward,
            depth,
        )
    }
}
