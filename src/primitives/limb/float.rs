//! Integer ↔ floating point conversion.
//!
//! Integer → float conversion is exact round-to-nearest-even, independent of
//! how the platform narrows a `u128` or wider value. A value whose bit length
//! `sd` fits in the mantissa is converted exactly. Otherwise the top
//! `precision + 2` bits are kept (mantissa, round bit and a sticky bit that
//! OR-reduces everything below), and the round bit decides the direction:
//!
//! - `sd == precision + 1`: the single discarded bit is the round bit and the
//!   sticky bit is clear, so a set round bit is an exact tie and goes to even.
//! - `sd == precision + 2`: round and sticky bits are taken as they are.
//! - `sd > precision + 2`: the value is truncated and every discarded bit is
//!   folded into the sticky bit.
//!
//! Float → integer conversion keeps only the whole part.

const F64_PRECISION: u32 = 53;
const F32_PRECISION: u32 = 24;

/// Converts a limb array to the nearest `f64` (ties to even).
pub fn to_f64<const N: usize>(limbs: &[u64; N]) -> f64 {
    match round(limbs, F64_PRECISION) {
        Rounded::Zero => 0.0,
        Rounded::Exact(v) => v as f64,
        Rounded::Inexact { significand, exponent } => {
            if exponent > 1023 {
                return f64::INFINITY;
            }

            let biased = (exponent + 1023) as u64;
            f64::from_bits((biased << 52) | (significand & ((1 << 52) - 1)))
        }
    }
}

/// Converts a limb array to the nearest `f32` (ties to even).
///
/// Values at or above 2¹²⁸ after rounding become `f32::INFINITY`.
pub fn to_f32<const N: usize>(limbs: &[u64; N]) -> f32 {
    match round(limbs, F32_PRECISION) {
        Rounded::Zero => 0.0,
        Rounded::Exact(v) => v as f32,
        Rounded::Inexact { significand, exponent } => {
            if exponent > 127 {
                return f32::INFINITY;
            }

            let biased = (exponent + 127) as u32;
            f32::from_bits((biased << 23) | (significand as u32 & ((1 << 23) - 1)))
        }
    }
}

/// Truncates `value` toward zero into a limb array of `64 * N` bits.
///
/// - NaN, magnitudes below one and values at or below −2^(64·N) give zero.
/// - Values at or above 2^(64·N), including `+∞`, saturate to all ones.
/// - Other negative values give the two's complement of the truncated
///   magnitude, modulo 2^(64·N).
pub fn from_f64<const N: usize>(value: f64) -> [u64; N] {
    let width = 64 * N as i32;
    let mut out = [0u64; N];

    if value.is_nan() {
        return out;
    }

    let negative = value.is_sign_negative();
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7FF) as i32;

    // Zero, subnormals and anything below one.
    if biased < 1023 {
        return out;
    }

    let exponent = biased - 1023;
    if exponent >= width {
        if !negative {
            out = [u64::MAX; N];
        }

        return out;
    }

    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);

    if exponent < 52 {
        out[0] = mantissa >> (52 - exponent);
    } else {
        let shift = (exponent - 52) as usize;
        let (limb, bit) = (shift / 64, shift % 64);

        out[limb] = mantissa << bit;
        if bit != 0 && limb + 1 < N {
            out[limb + 1] = mantissa >> (64 - bit);
        }
    }

    if negative {
        negate(&mut out);
    }

    out
}

enum Rounded {
    Zero,
    Exact(u64),
    Inexact { significand: u64, exponent: i32 },
}

fn round<const N: usize>(limbs: &[u64; N], precision: u32) -> Rounded {
    let sd = super::bit_len(limbs);

    if sd == 0 {
        return Rounded::Zero;
    }

    if sd <= precision {
        return Rounded::Exact(limbs[0]);
    }

    let mut exponent = sd as i32 - 1;

    let mut a = if sd == precision + 1 {
        extract(limbs, 0, precision + 1) << 1
    } else if sd == precision + 2 {
        extract(limbs, 0, precision + 2)
    } else {
        let shift = sd - (precision + 2);
        extract(limbs, shift, precision + 2) | sticky(limbs, shift) as u64
    };

    // Fold the lowest kept mantissa bit into the sticky position so that
    // exact ties round to even.
    a |= ((a & 4) != 0) as u64;
    a += 1;
    a >>= 2;

    if a & (1 << precision) != 0 {
        a >>= 1;
        exponent += 1;
    }

    Rounded::Inexact {
        significand: a,
        exponent,
    }
}

/// Reads `count` (≤ 64) bits starting at bit `start`.
fn extract<const N: usize>(limbs: &[u64; N], start: u32, count: u32) -> u64 {
    let (limb, bit) = ((start / 64) as usize, start % 64);

    let mut v = limbs[limb] >> bit;
    if bit != 0 && limb + 1 < N {
        v |= limbs[limb + 1] << (64 - bit);
    }

    if count < 64 { v & ((1 << count) - 1) } else { v }
}

/// True when any bit below position `end` is set.
fn sticky<const N: usize>(limbs: &[u64; N], end: u32) -> bool {
    let (limb, bit) = ((end / 64) as usize, end % 64);

    if limbs[..limb].iter().any(|&l| l != 0) {
        return true;
    }

    bit != 0 && limbs[limb] & ((1 << bit) - 1) != 0
}

fn negate<const N: usize>(limbs: &mut [u64; N]) {
    let mut carry = 1u64;

    for limb in limbs.iter_mut() {
        let (v, c) = (!*limb).overflowing_add(carry);
        *limb = v;
        carry = c as u64;
    }
}
