//! Conversions between `U256` and `U128`
//!
//! Widening zero-extends. Narrowing either truncates to the low two limbs
//! ([`U256::low_u128`]) or is checked (`TryFrom`).

use crate::error::ConversionOverflow;
use crate::primitives::{U128, U256};

impl From<U128> for U256 {
    fn from(value: U128) -> Self {
        let [lo, hi] = value.0;
        U256([lo, hi, 0, 0])
    }
}

impl TryFrom<U256> for U128 {
    type Error = ConversionOverflow;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[2] != 0 || value.0[3] != 0 {
            return Err(ConversionOverflow);
        }

        Ok(value.low_u128())
    }
}

impl U256 {
    /// The low 128 bits.
    pub const fn low_u128(&self) -> U128 {
        U128::new(self.0[0], self.0[1])
    }

    /// Overwrites the value with a zero-extended `U128`.
    pub fn set_u128(&mut self, value: U128) {
        *self = Self::from(value);
    }
}
