//! 256-bit unsigned integer type and constructors

use crate::primitives::macros::impl_uint_common;

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as four 64-bit limbs in **little-endian limb
/// order**: `self.0[0]` holds bits 0..64 and `self.0[3]` bits 192..256.
///
/// As for `U128`, the shared constants are `const` values or `&'static`
/// references and cannot be changed in place:
///
/// ```compile_fail
/// use fixuint::primitives::U256;
///
/// U256::max_ref().set_u64(0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256(pub(crate) [u64; 4]);

impl U256 {
    /// Width in bits.
    pub const BITS: u32 = 256;

    /// The value zero.
    pub const ZERO: Self = Self([0; 4]);

    /// The smallest value, equal to [`U256::ZERO`].
    pub const MIN: Self = Self::ZERO;

    /// The value one.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// Builds a value from four limbs, least significant first.
    #[inline]
    pub const fn new(l0: u64, l1: u64, l2: u64, l3: u64) -> Self {
        Self([l0, l1, l2, l3])
    }

    /// Builds a value from eight 32-bit words, least significant first.
    pub const fn from_bits(words: [u32; 8]) -> Self {
        let mut limbs = [0u64; 4];
        let mut i = 0;

        while i < 4 {
            limbs[i] = (words[2 * i] as u64) | ((words[2 * i + 1] as u64) << 32);
            i += 1;
        }

        Self(limbs)
    }

    /// Builds a value from limbs, least significant first.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }

    /// Borrows the limbs, least significant first.
    #[inline]
    pub const fn as_limbs(&self) -> &[u64; 4] {
        &self.0
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

impl_uint_common!(U256, 4);
