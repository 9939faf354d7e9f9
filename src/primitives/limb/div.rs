//! Long division on limbs.
//!
//! [`div_rem_wide`] is the single-digit step every other routine is built on:
//! it divides a two-limb numerator by one limb. [`div_rem_small`] chains it
//! across an array, and [`div_rem_128`] is the full two-limb by two-limb
//! division used by the 128-bit type.

use crate::error::{Result, UintError};
use crate::primitives::limb::widening_mul;

/// Quotient and remainder of a division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivRem<T> {
    pub quotient: T,
    pub remainder: T,
}

#[cfg(not(feature = "speed"))]
/// Divides the 128-bit value `hi:lo` by `divisor`, returning `(quotient, remainder)`.
///
/// Requires `hi < divisor` so the quotient fits in one limb. The divisor is
/// normalized so its top bit is set, then two 32-bit quotient digits are
/// estimated and corrected in turn.
pub fn div_rem_wide(hi: u64, lo: u64, divisor: u64) -> (u64, u64) {
    const B: u64 = 1 << 32;
    const MASK: u64 = B - 1;

    debug_assert!(hi < divisor);

    let s = divisor.leading_zeros();
    let v = divisor << s;
    let (vn1, vn0) = (v >> 32, v & MASK);

    let un32 = if s == 0 { hi } else { (hi << s) | (lo >> (64 - s)) };
    let un10 = lo << s;
    let (un1, un0) = (un10 >> 32, un10 & MASK);

    let mut q1 = un32 / vn1;
    let mut rhat = un32 - q1 * vn1;

    while q1 >= B || q1 * vn0 > (rhat << 32) + un1 {
        q1 -= 1;
        rhat += vn1;

        if rhat >= B {
            break;
        }
    }

    let un21 = (un32 << 32)
        .wrapping_add(un1)
        .wrapping_sub(q1.wrapping_mul(v));

    let mut q0 = un21 / vn1;
    rhat = un21 - q0 * vn1;

    while q0 >= B || q0 * vn0 > (rhat << 32) + un0 {
        q0 -= 1;
        rhat += vn1;

        if rhat >= B {
            break;
        }
    }

    let rem = (un21 << 32)
        .wrapping_add(un0)
        .wrapping_sub(q0.wrapping_mul(v));

    ((q1 << 32) | q0, rem >> s)
}

#[cfg(feature = "speed")]
/// Divides the 128-bit value `hi:lo` by `divisor` (native fast path).
///
/// Requires `hi < divisor` so the quotient fits in one limb.
#[inline]
pub fn div_rem_wide(hi: u64, lo: u64, divisor: u64) -> (u64, u64) {
    debug_assert!(hi < divisor);

    let n = ((hi as u128) << 64) | lo as u128;
    let d = divisor as u128;

    ((n / d) as u64, (n % d) as u64)
}

/// Divides a limb array by a single non-zero limb.
///
/// Returns the quotient and the remainder, which is always below `divisor`.
pub fn div_rem_small<const N: usize>(limbs: &[u64; N], divisor: u64) -> ([u64; N], u64) {
    debug_assert!(divisor != 0);

    let mut quotient = [0u64; N];
    let mut rem = 0u64;

    for i in (0..N).rev() {
        let (q, r) = div_rem_wide(rem, limbs[i], divisor);
        quotient[i] = q;
        rem = r;
    }

    (quotient, rem)
}

/// Divides a limb array by 10, returning the quotient and the decimal digit
/// that was removed.
#[inline]
pub fn div_rem_10<const N: usize>(limbs: &[u64; N]) -> ([u64; N], u8) {
    let (quotient, rem) = div_rem_small(limbs, 10);

    (quotient, rem as u8)
}

/// Divides the two-limb value `dividend` by `divisor`.
///
/// # Errors
///
/// Returns [`UintError::DivideByZero`] when `divisor` is zero.
pub fn div_rem_128(dividend: [u64; 2], divisor: [u64; 2]) -> Result<DivRem<[u64; 2]>> {
    if divisor == [0, 0] {
        log::debug!("div_rem_128: zero divisor");
        return Err(UintError::DivideByZero);
    }

    if less_than(dividend, divisor) {
        return Ok(DivRem {
            quotient: [0, 0],
            remainder: dividend,
        });
    }

    if divisor[1] == 0 {
        let d = divisor[0];

        if d & (d - 1) == 0 {
            let shift = d.trailing_zeros();

            return Ok(DivRem {
                quotient: shr(dividend, shift),
                remainder: [dividend[0] & (d - 1), 0],
            });
        }

        let (q_hi, r) = (dividend[1] / d, dividend[1] % d);
        let (q_lo, r) = div_rem_wide(r, dividend[0], d);

        return Ok(DivRem {
            quotient: [q_lo, q_hi],
            remainder: [r, 0],
        });
    }

    // The divisor has a non-zero high limb, so the quotient fits in one limb.
    // Estimate it from the normalized top limb of the divisor and the halved
    // dividend, then correct by at most one.
    let n = divisor[1].leading_zeros();
    let v1 = shl(divisor, n)[1];
    let u1 = shr(dividend, 1);

    let (q1, _) = div_rem_wide(u1[1], u1[0], v1);

    let mut q0 = shr(shl([q1, 0], n), 63)[0];
    if q0 != 0 {
        q0 -= 1;
    }

    let mut remainder = sub(dividend, mul_limb(divisor, q0));
    if !less_than(remainder, divisor) {
        q0 += 1;
        remainder = sub(remainder, divisor);
    }

    Ok(DivRem {
        quotient: [q0, 0],
        remainder,
    })
}

#[inline]
fn less_than(a: [u64; 2], b: [u64; 2]) -> bool {
    if a[1] == b[1] { a[0] < b[0] } else { a[1] < b[1] }
}

#[inline]
fn shl(v: [u64; 2], shift: u32) -> [u64; 2] {
    match shift {
        0 => v,
        1..=63 => [v[0] << shift, (v[1] << shift) | (v[0] >> (64 - shift))],
        64..=127 => [0, v[0] << (shift - 64)],
        _ => [0, 0],
    }
}

#[inline]
fn shr(v: [u64; 2], shift: u32) -> [u64; 2] {
    match shift {
        0 => v,
        1..=63 => [(v[0] >> shift) | (v[1] << (64 - shift)), v[1] >> shift],
        64..=127 => [v[1] >> (shift - 64), 0],
        _ => [0, 0],
    }
}

#[inline]
fn sub(a: [u64; 2], b: [u64; 2]) -> [u64; 2] {
    let (lo, borrow) = a[0].overflowing_sub(b[0]);
    let hi = a[1].wrapping_sub(b[1]).wrapping_sub(borrow as u64);

    [lo, hi]
}

#[inline]
fn mul_limb(a: [u64; 2], b: u64) -> [u64; 2] {
    let (lo, hi) = widening_mul(a[0], b);

    [lo, hi.wrapping_add(a[1].wrapping_mul(b))]
}
