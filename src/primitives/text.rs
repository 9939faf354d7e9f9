//! Decimal and hexadecimal text for limb arrays.
//!
//! Only radix 10 and radix 16 are supported. Formatting produces the
//! canonical form (`"0"` for zero, no leading zeros, lowercase hex digits, no
//! prefix). Parsing accepts an empty string as zero, treats hex digits
//! case-insensitively and wraps modulo the width on overflow.

use crate::error::{Result, UintError};
use crate::primitives::limb::{div_rem_10, mul_add};

/// Rejects every radix other than 10 and 16.
pub(crate) fn check_radix(radix: u32) -> Result<()> {
    match radix {
        10 | 16 => Ok(()),
        _ => {
            log::debug!("rejected radix {radix}");
            Err(UintError::InvalidRadix(radix))
        }
    }
}

/// Formats `limbs` in the given radix.
pub(crate) fn format<const N: usize>(limbs: &[u64; N], radix: u32) -> Result<String> {
    check_radix(radix)?;

    Ok(if radix == 16 {
        to_hex(limbs)
    } else {
        to_decimal(limbs)
    })
}

/// Decimal digits by repeated division by ten.
pub(crate) fn to_decimal<const N: usize>(limbs: &[u64; N]) -> String {
    if limbs.iter().all(|&l| l == 0) {
        return "0".to_owned();
    }

    let mut digits = Vec::with_capacity(20 * N);
    let mut rest = *limbs;

    while rest.iter().any(|&l| l != 0) {
        let (quotient, digit) = div_rem_10(&rest);
        digits.push(b'0' + digit);
        rest = quotient;
    }

    digits.reverse();

    // Only ASCII digits were pushed.
    digits.into_iter().map(char::from).collect()
}

/// Lowercase hex with the minimum number of digits.
pub(crate) fn to_hex<const N: usize>(limbs: &[u64; N]) -> String {
    let Some(top) = limbs.iter().rposition(|&l| l != 0) else {
        return "0".to_owned();
    };

    let mut out = format!("{:x}", limbs[top]);

    for limb in limbs[..top].iter().rev() {
        out.push_str(&format!("{limb:016x}"));
    }

    out
}

/// Parses `text` in the given radix.
///
/// # Errors
///
/// - [`UintError::InvalidRadix`] for a radix other than 10 or 16.
/// - [`UintError::InvalidCharacter`] for the first character that is not a
///   digit of the radix.
pub(crate) fn parse<const N: usize>(text: &str, radix: u32) -> Result<[u64; N]> {
    check_radix(radix)?;

    let mut limbs = [0u64; N];

    for (index, character) in text.char_indices() {
        let Some(digit) = character.to_digit(radix) else {
            log::debug!("rejected character {character:?} at {index} for radix {radix}");
            return Err(UintError::InvalidCharacter { character, index });
        };

        if radix == 16 {
            shift_in_nibble(&mut limbs, digit as u64);
        } else {
            mul_add_small(&mut limbs, 10, digit as u64);
        }
    }

    Ok(limbs)
}

/// `limbs = limbs * factor + addend`, wrapping.
fn mul_add_small<const N: usize>(limbs: &mut [u64; N], factor: u64, addend: u64) {
    let mut carry = addend;

    for limb in limbs.iter_mut() {
        let (lo, hi) = mul_add(0, *limb, factor, carry);
        *limb = lo;
        carry = hi;
    }
}

/// `limbs = (limbs << 4) | nibble`, wrapping.
fn shift_in_nibble<const N: usize>(limbs: &mut [u64; N], nibble: u64) {
    let mut carry = nibble;

    for limb in limbs.iter_mut() {
        let next = *limb >> 60;
        *limb = (*limb << 4) | carry;
        carry = next;
    }
}
