//! Arithmetic and shifts for `U256`
//!
//! Addition and subtraction run a carry (borrow) chain through all four
//! limbs. Multiplication is schoolbook: every limb product `a[i] * b[j]`
//! is accumulated at offset `i + j`, and products landing at offset four
//! or beyond are never formed, which is exactly reduction modulo 2²⁵⁶.
//!
//! Shifts split the amount into whole limbs (`shift / 64`) and a bit offset
//! (`shift % 64`) spliced across adjacent limbs.

use crate::primitives::limb::{add_with_carry, mul_add, sub_with_borrow};
use crate::primitives::uint256::U256;

impl U256 {
    /// Sum and whether it wrapped.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0;

        for (o, (a, b)) in out.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            (*o, carry) = add_with_carry(*a, *b, carry);
        }

        (Self(out), carry != 0)
    }

    /// Sum modulo 2²⁵⁶.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Difference and whether it wrapped.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut borrow = 0;

        for (o, (a, b)) in out.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            (*o, borrow) = sub_with_borrow(*a, *b, borrow);
        }

        (Self(out), borrow != 0)
    }

    /// Difference modulo 2²⁵⁶.
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Product modulo 2²⁵⁶.
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        let mut out = [0u64; 4];

        for i in 0..4 {
            let mut carry = 0;

            for j in 0..4 - i {
                (out[i + j], carry) = mul_add(out[i + j], a[i], b[j], carry);
            }
        }

        Self(out)
    }

    /// Two's complement negation modulo 2²⁵⁶.
    pub fn wrapping_neg(self) -> Self {
        (!self).wrapping_add(Self::ONE)
    }

    /// Logical left shift. Shifts of 256 or more yield zero.
    pub fn shl_bits(self, shift: u32) -> Self {
        if shift == 0 {
            return self;
        }
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        let (limbs, bits) = ((shift / 64) as usize, shift % 64);
        let mut out = [0u64; 4];

        for i in limbs..4 {
            out[i] = self.0[i - limbs] << bits;

            if bits != 0 && i > limbs {
                out[i] |= self.0[i - limbs - 1] >> (64 - bits);
            }
        }

        Self(out)
    }

    /// Logical right shift. Shifts of 256 or more yield zero.
    pub fn shr_bits(self, shift: u32) -> Self {
        if shift == 0 {
            return self;
        }
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        let (limbs, bits) = ((shift / 64) as usize, shift % 64);
        let mut out = [0u64; 4];

        for i in 0..4 - limbs {
            out[i] = self.0[i + limbs] >> bits;

            if bits != 0 && i + limbs + 1 < 4 {
                out[i] |= self.0[i + limbs + 1] << (64 - bits);
            }
        }

        Self(out)
    }
}
