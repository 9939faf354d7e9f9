//! Conversions between `U128` and 16-byte buffers

use crate::error::{Result, UintError};
use crate::primitives::U128;
use crate::primitives::bytes::{self, Endian};

impl U128 {
    /// Size of the byte encoding.
    pub const BYTES: usize = 16;

    /// Encodes the value in the requested byte order.
    pub fn to_bytes(&self, endian: Endian) -> [u8; 16] {
        let mut out = [0u8; 16];
        bytes::write(&self.0, &mut out, endian);
        out
    }

    /// Little-endian encoding: `limb[0]` first.
    pub fn to_le_bytes(&self) -> [u8; 16] {
        self.to_bytes(Endian::Little)
    }

    /// Big-endian encoding, the byte-reversal of [`U128::to_le_bytes`].
    pub fn to_be_bytes(&self) -> [u8; 16] {
        self.to_bytes(Endian::Big)
    }

    /// Decodes the little-endian layout of [`U128::to_le_bytes`].
    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        U128(bytes::decode::<2>(&bytes, Endian::Little))
    }

    /// Decodes the big-endian layout of [`U128::to_be_bytes`].
    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        U128(bytes::decode::<2>(&bytes, Endian::Big))
    }

    /// Decodes exactly 16 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::InvalidLength`] for any other length.
    pub fn from_slice(bytes: &[u8], endian: Endian) -> Result<Self> {
        bytes::read::<2>(bytes, endian).map(U128)
    }
}

impl From<[u8; 16]> for U128 {
    /// Interprets the array as little-endian.
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_le_bytes(bytes)
    }
}

impl From<U128> for [u8; 16] {
    fn from(value: U128) -> Self {
        value.to_le_bytes()
    }
}

impl TryFrom<&[u8]> for U128 {
    type Error = UintError;

    /// Interprets the slice as little-endian.
    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes, Endian::Little)
    }
}
