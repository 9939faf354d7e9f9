//! 128-bit unsigned integer type and constructors

use crate::primitives::macros::impl_uint_common;

/// Fixed-size 128-bit unsigned integer.
///
/// The value is stored as two 64-bit limbs in **little-endian limb order**:
/// `self.0[0]` holds bits 0..64 and `self.0[1]` bits 64..128.
///
/// Values are plain `Copy` data. The shared constants are reachable by
/// value ([`U128::ZERO`], [`U128::ONE`], [`U128::MAX`]) or as
/// `&'static` references ([`U128::zero_ref`] and friends), which cannot be
/// mutated:
///
/// ```compile_fail
/// use fixuint::primitives::U128;
///
/// U128::zero_ref().increment();
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U128(pub(crate) [u64; 2]);

impl U128 {
    /// Width in bits.
    pub const BITS: u32 = 128;

    /// The value zero.
    pub const ZERO: Self = Self([0, 0]);

    /// The smallest value, equal to [`U128::ZERO`].
    pub const MIN: Self = Self::ZERO;

    /// The value one.
    pub const ONE: Self = Self([1, 0]);

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self([u64::MAX, u64::MAX]);

    /// Builds a value from its low and high limbs.
    #[inline]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self([lo, hi])
    }

    /// Builds a value from four 32-bit words, least significant first.
    pub const fn from_bits(w0: u32, w1: u32, w2: u32, w3: u32) -> Self {
        Self([
            (w0 as u64) | ((w1 as u64) << 32),
            (w2 as u64) | ((w3 as u64) << 32),
        ])
    }

    /// Builds a value from limbs, least significant first.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 2]) -> Self {
        Self(limbs)
    }

    /// Borrows the limbs, least significant first.
    #[inline]
    pub const fn as_limbs(&self) -> &[u64; 2] {
        &self.0
    }

    /// Low 64 bits.
    #[inline]
    pub const fn lo(&self) -> u64 {
        self.0[0]
    }

    /// High 64 bits.
    #[inline]
    pub const fn hi(&self) -> u64 {
        self.0[1]
    }

    /// Shared zero.
    pub const fn zero_ref() -> &'static Self {
        &Self::ZERO
    }

    /// Shared one.
    pub const fn one_ref() -> &'static Self {
        &Self::ONE
    }

    /// Shared maximum.
    pub const fn max_ref() -> &'static Self {
        &Self::MAX
    }
}

impl_uint_common!(U128, 2);
