//! Carry-propagating 64-bit arithmetic.
//!
//! Carries and borrows are passed around as `u64` values that are always
//! either `0` or `1`, so they can be fed straight into the next limb.

/// Computes `a + b + carry`.
///
/// Returns the sum modulo 2⁶⁴ and the outgoing carry, which is `1` iff the
/// true sum is at least 2⁶⁴.
#[inline(always)]
pub const fn add_with_carry(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry);

    (sum, (c1 | c2) as u64)
}

/// Computes `a - b - borrow`.
///
/// Returns the difference modulo 2⁶⁴ and the outgoing borrow, which is `1`
/// iff `a < b + borrow`.
#[inline(always)]
pub const fn sub_with_borrow(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(borrow);

    (diff, (b1 | b2) as u64)
}

#[cfg(not(feature = "speed"))]
/// Exact 128-bit product of two limbs, returned as `(lo, hi)`.
///
/// Both operands are split into 32-bit halves and the four partial products
/// are recombined, so no 128-bit multiplier is required.
#[inline]
pub const fn widening_mul(a: u64, b: u64) -> (u64, u64) {
    const MASK: u64 = 0xFFFF_FFFF;

    let (a_lo, a_hi) = (a & MASK, a >> 32);
    let (b_lo, b_hi) = (b & MASK, b >> 32);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    // Three 32-bit quantities, cannot overflow.
    let mid = (ll >> 32) + (lh & MASK) + (hl & MASK);

    let lo = (mid << 32) | (ll & MASK);
    let hi = hh + (lh >> 32) + (hl >> 32) + (mid >> 32);

    (lo, hi)
}

#[cfg(feature = "speed")]
/// Exact 128-bit product of two limbs, returned as `(lo, hi)` (native fast path).
#[inline(always)]
pub const fn widening_mul(a: u64, b: u64) -> (u64, u64) {
    let product = a as u128 * b as u128;

    (product as u64, (product >> 64) as u64)
}

#[cfg(not(feature = "speed"))]
/// Computes `acc + a * b + carry` as a 128-bit `(lo, hi)` pair.
///
/// The result always fits: `(2⁶⁴ − 1) + (2⁶⁴ − 1)² + (2⁶⁴ − 1) = 2¹²⁸ − 1`.
#[inline]
pub const fn mul_add(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let (lo, hi) = widening_mul(a, b);
    let (lo, c1) = add_with_carry(lo, acc, 0);
    let (lo, c2) = add_with_carry(lo, carry, 0);

    (lo, hi + c1 + c2)
}

#[cfg(feature = "speed")]
/// Computes `acc + a * b + carry` as a 128-bit `(lo, hi)` pair (native fast path).
#[inline(always)]
pub const fn mul_add(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = a as u128 * b as u128 + acc as u128 + carry as u128;

    (t as u64, (t >> 64) as u64)
}
