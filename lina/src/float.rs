// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use std::ops::{Add, Div, Mul, Neg, Sub};

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point scalars accepted by the easing and comparison helpers.
///
/// Implemented for [`f32`] and [`f64`] only. Calling a helper such as
/// [`crate::bias`] with an integer is a compile error rather than a garbage
/// result at runtime.
pub trait Float:
    private::Sealed
    + Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const HALF: Self;
    const ONE: Self;
    const TWO: Self;
    /// Difference between `1.0` and the next representable value.
    const EPSILON: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    /// `ln(0.5)`.
    const HALF_LOG: Self;
    const QUARTER_PI: Self;
    const HALF_PI: Self;
    const PI: Self;
    const TWO_PI: Self;
    const INV_PI: Self;
    /// Multiply radians by this to get degrees.
    const DEGREES_PER_RADIAN: Self;
    /// Multiply degrees by this to get radians.
    const RADIANS_PER_DEGREE: Self;

    fn abs(self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
    /// `self * a + b`, fused when the target supports it.
    fn mul_add(self, a: Self, b: Self) -> Self;
}

macro_rules! impl_float {
    ($t:ident) => {
        #[allow(clippy::excessive_precision)]
        impl Float for $t {
            const ZERO: Self = 0.0;
            const HALF: Self = 0.5;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const EPSILON: Self = $t::EPSILON;
            const MIN_POSITIVE: Self = $t::MIN_POSITIVE;
            const HALF_LOG: Self = -0.693147180599;
            const QUARTER_PI: Self = 0.785398163397;
            const HALF_PI: Self = 2.0 * Self::QUARTER_PI;
            const PI: Self = 4.0 * Self::QUARTER_PI;
            const TWO_PI: Self = 8.0 * Self::QUARTER_PI;
            const INV_PI: Self = 1.0 / Self::PI;
            const DEGREES_PER_RADIAN: Self = 180.0 / Self::PI;
            const RADIANS_PER_DEGREE: Self = Self::PI / 180.0;

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn clamp(self, min: Self, max: Self) -> Self {
                $t::clamp(self, min, max)
            }

            #[inline]
            fn ln(self) -> Self {
                $t::ln(self)
            }

            #[inline]
            fn powf(self, exponent: Self) -> Self {
                $t::powf(self, exponent)
            }

            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                $t::mul_add(self, a, b)
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);
