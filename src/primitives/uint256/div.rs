//! Division for `U256`
//!
//! Cheap cases are peeled off first: a zero divisor, a dividend below the
//! divisor, equal operands, a power-of-two divisor and a divisor that fits
//! in one limb. Everything else goes through Knuth's algorithm D (TAOCP
//! vol. 2, 4.3.1) on 64-bit digits:
//!
//! 1. Normalize so the divisor's top limb has its high bit set.
//! 2. For each quotient digit, estimate `qhat` from the top two dividend
//!    digits and the top divisor digit, then refine it against the second
//!    divisor digit. The estimate is then at most one too large.
//! 3. Multiply and subtract; if that borrows, add the divisor back once.
//! 4. Unnormalize the remainder.

use std::cmp::Ordering;

use crate::error::{Result, UintError};
use crate::primitives::limb::{
    add_with_carry, div_rem_small, div_rem_wide, mul_add, sub_with_borrow, widening_mul,
};
use crate::primitives::uint256::U256;

impl U256 {
    /// Quotient and remainder.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::DivideByZero`] when `rhs` is zero.
    pub fn div_rem(self, rhs: Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            log::debug!("U256::div_rem: zero divisor");
            return Err(UintError::DivideByZero);
        }

        match self.cmp(&rhs) {
            Ordering::Less => return Ok((Self::ZERO, self)),
            Ordering::Equal => return Ok((Self::ONE, Self::ZERO)),
            Ordering::Greater => {}
        }

        if rhs.count_ones() == 1 {
            let shift = rhs.trailing_zeros();
            let mask = rhs.wrapping_sub(Self::ONE);

            return Ok((self.shr_bits(shift), self & mask));
        }

        let n = significant_limbs(&rhs.0);

        if n == 1 {
            let (quotient, remainder) = div_rem_small(&self.0, rhs.0[0]);
            return Ok((Self(quotient), Self::from(remainder)));
        }

        let (quotient, remainder) = knuth_d(&self.0, &rhs.0, n);

        Ok((Self(quotient), Self(remainder)))
    }
}

/// Number of limbs up to and including the top non-zero one.
fn significant_limbs(limbs: &[u64; 4]) -> usize {
    limbs.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1)
}

/// `hi:lo << shift`, keeping the high limb. `shift` is below 64.
#[inline]
fn splice(hi: u64, lo: u64, shift: u32) -> u64 {
    if shift == 0 {
        hi
    } else {
        (hi << shift) | (lo >> (64 - shift))
    }
}

/// Divides `u` by the `n`-limb divisor `v`, with `2 <= n` and `u > v`.
fn knuth_d(u: &[u64; 4], v: &[u64; 4], n: usize) -> ([u64; 4], [u64; 4]) {
    let m = significant_limbs(u);
    let shift = v[n - 1].leading_zeros();

    let mut vn = [0u64; 4];
    for i in (1..n).rev() {
        vn[i] = splice(v[i], v[i - 1], shift);
    }
    vn[0] = v[0] << shift;

    let mut un = [0u64; 5];
    un[m] = if shift == 0 { 0 } else { u[m - 1] >> (64 - shift) };
    for i in (1..m).rev() {
        un[i] = splice(u[i], u[i - 1], shift);
    }
    un[0] = u[0] << shift;

    let top = vn[n - 1];
    let second = vn[n - 2];
    let mut q = [0u64; 4];

    for j in (0..=m - n).rev() {
        let (mut qhat, mut rhat, mut rhat_overflow) = if un[j + n] == top {
            let (rhat, overflow) = un[j + n - 1].overflowing_add(top);
            (u64::MAX, rhat, overflow)
        } else {
            let (qhat, rhat) = div_rem_wide(un[j + n], un[j + n - 1], top);
            (qhat, rhat, false)
        };

        // qhat * second > rhat:un[j + n - 2] means qhat is too large.
        while !rhat_overflow {
            let (lo, hi) = widening_mul(qhat, second);

            if hi < rhat || (hi == rhat && lo <= un[j + n - 2]) {
                break;
            }

            qhat -= 1;
            (rhat, rhat_overflow) = rhat.overflowing_add(top);
        }

        let mut carry = 0;
        let mut borrow = 0;

        for i in 0..n {
            let (product, high) = mul_add(0, qhat, vn[i], carry);
            carry = high;
            (un[i + j], borrow) = sub_with_borrow(un[i + j], product, borrow);
        }

        (un[j + n], borrow) = sub_with_borrow(un[j + n], carry, borrow);

        if borrow != 0 {
            qhat -= 1;

            let mut carry = 0;
            for i in 0..n {
                (un[i + j], carry) = add_with_carry(un[i + j], vn[i], carry);
            }
            un[j + n] = un[j + n].wrapping_add(carry);
        }

        q[j] = qhat;
    }

    let mut r = [0u64; 4];
    for i in 0..n {
        r[i] = if shift == 0 {
            un[i]
        } else {
            (un[i] >> shift) | (un[i + 1] << (64 - shift))
        };
    }

    (q, r)
}
