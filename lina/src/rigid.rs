// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{Mat3f, Mat4f};

/// Inverts a matrix made of a rotation followed by a translation, without the cost of a
/// general 4x4 inverse.
///
/// The upper left 3x3 part must be orthonormal (no scale, no shear). This is **not**
/// checked: any other matrix yields a finite but wrong result. Use [`Mat4f::inverse`]
/// when the input may be scaled.
pub fn rigidbody_inverse(mat: &Mat4f) -> Mat4f {
    let rotation = Mat3f::from_mat4(*mat);
    #[cfg(feature = "log")]
    {
        if !(rotation * rotation.transpose()).abs_diff_eq(Mat3f::IDENTITY, 1e-4) {
            log::debug!("rigidbody_inverse of non-orthonormal rotation {rotation:?}");
        }
    }
    // The transpose of an orthonormal matrix is its inverse.
    let inverse_rotation = rotation.transpose();
    let inverse_translation = -(inverse_rotation * mat.w_axis.truncate());
    Mat4f::from_cols(
        inverse_rotation.x_axis.extend(0.0),
        inverse_rotation.y_axis.extend(0.0),
        inverse_rotation.z_axis.extend(0.0),
        inverse_translation.extend(1.0),
    )
}
