// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{Float, Real};

/// Machine epsilon of [`Real`].
pub const EPSILON: Real = <Real as Float>::EPSILON;
/// `ln(0.5)`, the denominator of the bias and gain exponents.
pub const HALF_LOG: Real = <Real as Float>::HALF_LOG;
pub const QUARTER_PI: Real = <Real as Float>::QUARTER_PI;
pub const HALF_PI: Real = <Real as Float>::HALF_PI;
pub const PI: Real = <Real as Float>::PI;
pub const TWO_PI: Real = <Real as Float>::TWO_PI;
pub const INV_PI: Real = <Real as Float>::INV_PI;
