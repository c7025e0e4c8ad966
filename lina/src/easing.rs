// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later
//
// See: https://www.iquilezles.org/www/articles/functions/functions.htm

use crate::Float;

/// Returns `0` if `edge > x`, otherwise `1` (including when `edge == x`).
///
/// ```
/// assert_eq!(lina::step(0.5f64, 0.5), 1.0);
/// assert_eq!(lina::step(0.5f32, 0.25), 0.0);
/// ```
///
/// Integers are rejected:
///
/// ```compile_fail
/// lina::step(1u32, 2u32);
/// ```
#[inline]
pub fn step<T: Float>(edge: T, x: T) -> T {
    if edge > x {
        T::ZERO
    } else {
        T::ONE
    }
}

/// Linearly interpolates (and possibly extrapolates) from start to end, based on amount.
/// It uses FMA instruction if available.
///
/// Exact at both ends: `lerp(a, b, 0) == a` and `lerp(a, b, 1) == b`.
#[inline]
pub fn lerp<T: Float>(start: T, end: T, amount: T) -> T {
    if cfg!(target_feature = "fma") {
        amount.mul_add(end, (-amount).mul_add(start, start))
    } else {
        amount * end + (start - amount * start)
    }
}

/// Interpolates in two linear segments, mapping `[0, 0.5, 1]` to `[a, b, c]`.
pub fn trilerp<T: Float>(a: T, b: T, c: T, x: T) -> T {
    let first = lerp(a, b, T::TWO * x);
    let second = lerp(b, c, T::TWO * x - T::ONE);
    lerp(first, second, step(T::HALF, x))
}

/// Pyramid curve mapping `[0, 0.5, 1]` to `[a, b, a]`.
pub fn stepcurve<T: Float>(a: T, b: T, x: T) -> T {
    lerp(a, b, T::ONE - (T::TWO * x - T::ONE).abs())
}

/// Perlin's bias curve: remaps `a` in `[0, 1]` so that `bias(0.5, b) == b`.
///
/// `b == 0.5` is the identity. Inputs within epsilon of `0` return `0` and inputs
/// within epsilon of `1` return `1`, checked in that order.
///
/// ```
/// assert!((lina::bias(0.5f64, 0.25) - 0.25).abs() < 1e-9);
/// assert_eq!(lina::bias(0.3f64, 1.0), 1.0);
/// ```
///
/// ```compile_fail
/// lina::bias(1i32, 2i32);
/// ```
pub fn bias<T: Float>(a: T, b: T) -> T {
    if a < T::EPSILON || b < T::EPSILON {
        return T::ZERO;
    }
    if a > T::ONE - T::EPSILON || b > T::ONE - T::EPSILON {
        return T::ONE;
    }
    a.powf(b.ln() / T::HALF_LOG)
}

/// Perlin's gain curve: an S-curve built from two mirrored [`bias`] halves, passing
/// through `(0.5, 0.5)` for every `b`.
///
/// `b == 0.5` is the identity. `b` is clamped away from `0` and `1`.
///
/// ```
/// assert_eq!(lina::gain(0.5f64, 0.9), 0.5);
/// assert!((lina::gain(0.3f64, 0.5) - 0.3).abs() < 1e-9);
/// ```
///
/// ```compile_fail
/// lina::gain(1i32, 0i32);
/// ```
pub fn gain<T: Float>(a: T, b: T) -> T {
    if a < T::EPSILON {
        return T::ZERO;
    }
    if a > T::ONE - T::EPSILON {
        return T::ONE;
    }
    let b = b.clamp(T::EPSILON, T::ONE - T::EPSILON);
    let exponent = (T::ONE - b).ln() / T::HALF_LOG;
    let half = |x: T| (T::TWO * x).powf(exponent) / T::TWO;
    if a < T::HALF {
        half(a)
    } else {
        T::ONE - half(T::ONE - a)
    }
}
