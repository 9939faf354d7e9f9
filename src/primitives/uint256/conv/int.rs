//! Conversions between `U256` and native integers
//!
//! Same rules as for `U128`: signed sources are sign-extended across all
//! four limbs, `as_*` extractors truncate and `TryFrom<U256>` reports
//! [`ConversionOverflow`].

use crate::error::ConversionOverflow;
use crate::primitives::U256;

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for U256 {
            #[inline]
            fn from(value: $t) -> Self {
                U256([value as u64, 0, 0, 0])
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for U256 {
            #[inline]
            fn from(value: $t) -> Self {
                let extension = if value < 0 { u64::MAX } else { 0 };
                U256([value as i64 as u64, extension, extension, extension])
            }
        }
    )*};
}

macro_rules! try_into_narrow {
    ($($t:ty),*) => {$(
        impl TryFrom<U256> for $t {
            type Error = ConversionOverflow;

            fn try_from(value: U256) -> Result<Self, Self::Error> {
                if value.0[1..].iter().any(|&l| l != 0) {
                    return Err(ConversionOverflow);
                }

                <$t>::try_from(value.0[0]).map_err(|_| ConversionOverflow)
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);
try_into_narrow!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl From<bool> for U256 {
    #[inline]
    fn from(value: bool) -> Self {
        U256([value as u64, 0, 0, 0])
    }
}

impl From<u128> for U256 {
    #[inline]
    fn from(value: u128) -> Self {
        U256([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl TryFrom<U256> for u128 {
    type Error = ConversionOverflow;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[2] != 0 || value.0[3] != 0 {
            return Err(ConversionOverflow);
        }

        Ok(value.as_u128())
    }
}

impl From<i128> for U256 {
    /// Sign-extends into the upper two limbs.
    #[inline]
    fn from(value: i128) -> Self {
        let extension = if value < 0 { u64::MAX } else { 0 };
        U256([value as u64, (value >> 64) as u64, extension, extension])
    }
}

impl TryFrom<U256> for i128 {
    type Error = ConversionOverflow;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[2] != 0 || value.0[3] != 0 || value.0[1] >> 63 != 0 {
            return Err(ConversionOverflow);
        }

        Ok(value.as_u128() as i128)
    }
}

impl From<[u64; 4]> for U256 {
    fn from(limbs: [u64; 4]) -> Self {
        U256(limbs)
    }
}

impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        value.0
    }
}

impl U256 {
    /// True when the value is non-zero.
    pub fn as_bool(&self) -> bool {
        !self.is_zero()
    }

    pub const fn as_u8(&self) -> u8 {
        self.0[0] as u8
    }

    pub const fn as_u16(&self) -> u16 {
        self.0[0] as u16
    }

    pub const fn as_u32(&self) -> u32 {
        self.0[0] as u32
    }

    /// Low 64 bits.
    pub const fn as_u64(&self) -> u64 {
        self.0[0]
    }

    pub const fn as_i8(&self) -> i8 {
        self.0[0] as i8
    }

    pub const fn as_i16(&self) -> i16 {
        self.0[0] as i16
    }

    pub const fn as_i32(&self) -> i32 {
        self.0[0] as i32
    }

    /// The low 63 bits as magnitude, with the value's top bit (bit 255) as
    /// the sign bit.
    pub const fn as_i64(&self) -> i64 {
        ((self.0[0] & (i64::MAX as u64)) | (self.0[3] & (1 << 63))) as i64
    }

    /// Low 128 bits as a native `u128`.
    pub const fn as_u128(&self) -> u128 {
        ((self.0[1] as u128) << 64) | self.0[0] as u128
    }
}
