//! Byte encoding and decoding of limb arrays
//!
//! Both fixed-width types serialize to exactly `8 * N` bytes. The
//! little-endian layout places `limb[0]` first, each limb in little-endian
//! byte order. The big-endian layout reverses both the limb order and the
//! byte order inside each limb, so it is the exact byte-reversal of the
//! little-endian encoding.
//!
//! Decoding is strict: a buffer of any other length is rejected with
//! [`UintError::InvalidLength`]. No padding or truncation is ever applied.

use crate::error::{Result, UintError};

/// Byte order used by encode/decode routines.
///
/// Little-endian is the default, matching the in-memory limb order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

/// Writes `limbs` into `out`, which must be exactly `8 * N` bytes long.
pub(crate) fn write<const N: usize>(limbs: &[u64; N], out: &mut [u8], endian: Endian) {
    debug_assert_eq!(out.len(), 8 * N);

    match endian {
        Endian::Little => {
            for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter()) {
                chunk.copy_from_slice(&limb.to_le_bytes());
            }
        }
        Endian::Big => {
            for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter().rev()) {
                chunk.copy_from_slice(&limb.to_be_bytes());
            }
        }
    }
}

/// Reads a limb array from `bytes`.
///
/// # Errors
///
/// Returns [`UintError::InvalidLength`] unless `bytes.len() == 8 * N`.
pub(crate) fn read<const N: usize>(bytes: &[u8], endian: Endian) -> Result<[u64; N]> {
    if bytes.len() != 8 * N {
        log::debug!("byte decode: expected {} bytes, got {}", 8 * N, bytes.len());

        return Err(UintError::InvalidLength {
            expected: 8 * N,
            actual: bytes.len(),
        });
    }

    Ok(decode(bytes, endian))
}

/// Decodes a buffer already known to be `8 * N` bytes long.
pub(crate) fn decode<const N: usize>(bytes: &[u8], endian: Endian) -> [u64; N] {
    debug_assert_eq!(bytes.len(), 8 * N);

    let mut limbs = [0u64; N];
    let mut word = [0u8; 8];

    match endian {
        Endian::Little => {
            for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
                word.copy_from_slice(chunk);
                *limb = u64::from_le_bytes(word);
            }
        }
        Endian::Big => {
            for (limb, chunk) in limbs.iter_mut().rev().zip(bytes.chunks_exact(8)) {
                word.copy_from_slice(chunk);
                *limb = u64::from_be_bytes(word);
            }
        }
    }

    limbs
}
