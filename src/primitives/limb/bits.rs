//! Bit counting over limb arrays.

/// Leading zeros of the 128-bit value `hi:lo`. Returns 128 for zero.
#[inline]
pub const fn leading_zeros_128(lo: u64, hi: u64) -> u32 {
    if hi != 0 {
        hi.leading_zeros()
    } else {
        64 + lo.leading_zeros()
    }
}

/// Trailing zeros of the 128-bit value `hi:lo`. Returns 128 for zero.
#[inline]
pub const fn trailing_zeros_128(lo: u64, hi: u64) -> u32 {
    if lo != 0 {
        lo.trailing_zeros()
    } else {
        64 + hi.trailing_zeros()
    }
}

/// Leading zeros of a little-endian limb array. Returns `64 * N` for zero.
pub fn leading_zeros<const N: usize>(limbs: &[u64; N]) -> u32 {
    let mut count = 0u32;

    for &limb in limbs.iter().rev() {
        if limb == 0 {
            count += 64;
        } else {
            return count + limb.leading_zeros();
        }
    }

    count
}

/// Trailing zeros of a little-endian limb array. Returns `64 * N` for zero.
pub fn trailing_zeros<const N: usize>(limbs: &[u64; N]) -> u32 {
    let mut count = 0u32;

    for &limb in limbs.iter() {
        if limb == 0 {
            count += 64;
        } else {
            return count + limb.trailing_zeros();
        }
    }

    count
}

/// Minimum number of bits needed to represent the value (0 for zero).
#[inline]
pub fn bit_len<const N: usize>(limbs: &[u64; N]) -> u32 {
    64 * N as u32 - leading_zeros(limbs)
}
