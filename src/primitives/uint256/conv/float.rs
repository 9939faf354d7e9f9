//! Conversions between `U256` and floating point

use crate::primitives::U256;
use crate::primitives::limb::{from_f64, to_f32, to_f64};

impl U256 {
    /// Nearest `f64`, ties to even.
    pub fn as_f64(&self) -> f64 {
        to_f64(&self.0)
    }

    /// Nearest `f32`, ties to even; anything rounding to 2¹²⁸ or more is
    /// `f32::INFINITY`.
    pub fn as_f32(&self) -> f32 {
        to_f32(&self.0)
    }

    /// Whole part of `value`, with the same edge rules as
    /// [`U128::from_f64`](crate::primitives::U128::from_f64) at 256 bits.
    pub fn from_f64(value: f64) -> Self {
        U256(from_f64(value))
    }

    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(value as f64)
    }
}

impl From<f64> for U256 {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<f32> for U256 {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<U256> for f64 {
    fn from(value: U256) -> Self {
        value.as_f64()
    }
}

impl From<U256> for f32 {
    fn from(value: U256) -> Self {
        value.as_f32()
    }
}
