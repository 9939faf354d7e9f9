//! Conversions between `U128` and floating point

use crate::primitives::U128;
use crate::primitives::limb::{from_f64, to_f32, to_f64};

impl U128 {
    /// Nearest `f64`, ties to even.
    pub fn as_f64(&self) -> f64 {
        to_f64(&self.0)
    }

    /// Nearest `f32`, ties to even. Values rounding to 2¹²⁸ become
    /// `f32::INFINITY`.
    pub fn as_f32(&self) -> f32 {
        to_f32(&self.0)
    }

    /// Whole part of `value`.
    ///
    /// NaN, magnitudes below one and values at or below −2¹²⁸ give zero,
    /// values at or above 2¹²⁸ saturate to [`U128::MAX`], and other
    /// negative values wrap to the two's complement of their whole part.
    pub fn from_f64(value: f64) -> Self {
        U128(from_f64(value))
    }

    /// Whole part of `value`, as for [`U128::from_f64`].
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(value as f64)
    }
}

impl From<f64> for U128 {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<f32> for U128 {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<U128> for f64 {
    fn from(value: U128) -> Self {
        value.as_f64()
    }
}

impl From<U128> for f32 {
    fn from(value: U128) -> Self {
        value.as_f32()
    }
}
