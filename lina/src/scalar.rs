// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::Float;
use glam::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};

/// Converts radians to degrees.
#[inline]
pub fn degrees<T: Float>(radians: T) -> T {
    radians * T::DEGREES_PER_RADIAN
}

/// Converts degrees to radians.
#[inline]
pub fn radians<T: Float>(degrees: T) -> T {
    degrees * T::RADIANS_PER_DEGREE
}

/// Pairwise minimum/maximum. Component-wise for vectors.
pub trait MinMax: Copy {
    fn min_with(self, other: Self) -> Self;
    fn max_with(self, other: Self) -> Self;
}

macro_rules! impl_min_max {
    (inherent: $($t:ty),*) => {
        $(
            impl MinMax for $t {
                #[inline]
                fn min_with(self, other: Self) -> Self {
                    self.min(other)
                }

                #[inline]
                fn max_with(self, other: Self) -> Self {
                    self.max(other)
                }
            }
        )*
    };
    (ord: $($t:ty),*) => {
        $(
            impl MinMax for $t {
                #[inline]
                fn min_with(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline]
                fn max_with(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )*
    };
}

impl_min_max!(inherent: f32, f64);
impl_min_max!(inherent: Vec2, Vec3, Vec4, DVec2, DVec3, DVec4);
impl_min_max!(inherent: IVec2, IVec3, IVec4, UVec2, UVec3, UVec4);
impl_min_max!(ord: i32, u32, i64, u64);

/// Minimum of four values, nested as `min(a, min(b, min(c, d)))`.
#[inline]
pub fn min4<T: MinMax>(a: T, b: T, c: T, d: T) -> T {
    a.min_with(b.min_with(c.min_with(d)))
}

/// Maximum of four values, nested as `max(a, max(b, max(c, d)))`.
#[inline]
pub fn max4<T: MinMax>(a: T, b: T, c: T, d: T) -> T {
    a.max_with(b.max_with(c.max_with(d)))
}

/// Returns true if `a` and `b` are within machine epsilon of each other, or within
/// the smallest normal value scaled by `|a + b|`.
///
/// Symmetric but not transitive: `almost_equal(a, b) && almost_equal(b, c)` does not imply
/// `almost_equal(a, c)`.
///
/// ```
/// assert!(lina::almost_equal(0.1f64 + 0.2, 0.3));
/// assert!(!lina::almost_equal(1.0f32, 1.001));
/// ```
///
/// Only defined for floating point; integers do not compile:
///
/// ```compile_fail
/// lina::almost_equal(1i64, 1i64);
/// ```
pub fn almost_equal<T: Float>(a: T, b: T) -> bool {
    let distance = (b - a).abs();
    distance < T::EPSILON || distance < T::MIN_POSITIVE * (b + a).abs()
}

/// Clamps to `[0, 1]`.
///
/// ```
/// assert_eq!(lina::saturate(1.5f64), 1.0);
/// assert_eq!(lina::saturate(-0.5f32), 0.0);
/// ```
///
/// ```compile_fail
/// lina::saturate(2i32);
/// ```
#[inline]
pub fn saturate<T: Float>(a: T) -> T {
    a.clamp(T::ZERO, T::ONE)
}
