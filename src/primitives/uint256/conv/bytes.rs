//! Conversions between `U256` and 32-byte buffers
//!
//! The big-endian form is what hashes and most wire formats use; the
//! little-endian form mirrors the limb layout.

use crate::error::{Result, UintError};
use crate::primitives::U256;
use crate::primitives::bytes::{self, Endian};

impl U256 {
    /// Size of the byte encoding.
    pub const BYTES: usize = 32;

    /// Encodes the value in the requested byte order.
    pub fn to_bytes(&self, endian: Endian) -> [u8; 32] {
        let mut out = [0u8; 32];
        bytes::write(&self.0, &mut out, endian);
        out
    }

    pub fn to_le_bytes(&self) -> [u8; 32] {
        self.to_bytes(Endian::Little)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.to_bytes(Endian::Big)
    }

    /// Decodes the little-endian layout of [`U256::to_le_bytes`].
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        U256(bytes::decode::<4>(&bytes, Endian::Little))
    }

    /// Decodes the big-endian layout of [`U256::to_be_bytes`].
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        U256(bytes::decode::<4>(&bytes, Endian::Big))
    }

    /// Decodes exactly 32 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::InvalidLength`] for any other length.
    pub fn from_slice(bytes: &[u8], endian: Endian) -> Result<Self> {
        bytes::read::<4>(bytes, endian).map(U256)
    }
}

impl From<[u8; 32]> for U256 {
    /// Interprets the array as little-endian.
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_le_bytes(bytes)
    }
}

impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.to_le_bytes()
    }
}

impl TryFrom<&[u8]> for U256 {
    type Error = UintError;

    /// Interprets the slice as little-endian.
    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes, Endian::Little)
    }
}
