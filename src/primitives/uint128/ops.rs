//! Arithmetic, shifts and division for `U128`
//!
//! Addition and subtraction propagate a carry across the two limbs.
//! Multiplication is the truncated schoolbook product: the full product of
//! the low limbs plus the low halves of the two cross products, so only
//! bits below 2¹²⁸ are ever computed.
//!
//! The operator traits themselves are generated from these methods in
//! `primitives::macros`.

use crate::error::Result;
use crate::primitives::U256;
use crate::primitives::limb::{DivRem, add_with_carry, div_rem_128, sub_with_borrow, widening_mul};
use crate::primitives::uint128::U128;

impl U128 {
    /// Sum and whether it wrapped.
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (lo, carry) = add_with_carry(self.0[0], rhs.0[0], 0);
        let (hi, carry) = add_with_carry(self.0[1], rhs.0[1], carry);

        (Self([lo, hi]), carry != 0)
    }

    /// Sum modulo 2¹²⁸.
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Difference and whether it wrapped.
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (lo, borrow) = sub_with_borrow(self.0[0], rhs.0[0], 0);
        let (hi, borrow) = sub_with_borrow(self.0[1], rhs.0[1], borrow);

        (Self([lo, hi]), borrow != 0)
    }

    /// Difference modulo 2¹²⁸.
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Product modulo 2¹²⁸.
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        let (lo, hi) = widening_mul(self.0[0], rhs.0[0]);

        let hi = hi
            .wrapping_add(self.0[0].wrapping_mul(rhs.0[1]))
            .wrapping_add(self.0[1].wrapping_mul(rhs.0[0]));

        Self([lo, hi])
    }

    /// Two's complement negation modulo 2¹²⁸.
    pub const fn wrapping_neg(self) -> Self {
        Self([!self.0[0], !self.0[1]]).wrapping_add(Self::ONE)
    }

    /// Logical left shift. Shifts of 128 or more yield zero.
    pub const fn shl_bits(self, shift: u32) -> Self {
        let [lo, hi] = self.0;

        match shift {
            0 => self,
            1..=63 => Self([lo << shift, (hi << shift) | (lo >> (64 - shift))]),
            64..=127 => Self([0, lo << (shift - 64)]),
            _ => Self::ZERO,
        }
    }

    /// Logical right shift. Shifts of 128 or more yield zero.
    pub const fn shr_bits(self, shift: u32) -> Self {
        let [lo, hi] = self.0;

        match shift {
            0 => self,
            1..=63 => Self([(lo >> shift) | (hi << (64 - shift)), hi >> shift]),
            64..=127 => Self([hi >> (shift - 64), 0]),
            _ => Self::ZERO,
        }
    }

    /// Quotient and remainder.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::DivideByZero`](crate::UintError::DivideByZero)
    /// when `rhs` is zero.
    pub fn div_rem(self, rhs: Self) -> Result<(Self, Self)> {
        let DivRem {
            quotient,
            remainder,
        } = div_rem_128(self.0, rhs.0)?;

        Ok((Self(quotient), Self(remainder)))
    }

    /// Full-width product as a 256-bit value.
    pub fn widening_mul(self, rhs: Self) -> U256 {
        U256::from(self).wrapping_mul(U256::from(rhs))
    }

    /// `(a * b) / c` with a 256-bit intermediate product, truncated to 128
    /// bits.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::DivideByZero`](crate::UintError::DivideByZero)
    /// when `c` is zero.
    pub fn muldiv(a: Self, b: Self, c: Self) -> Result<Self> {
        let (quotient, _) = a.widening_mul(b).div_rem(U256::from(c))?;

        Ok(quotient.low_u128())
    }
}
