//! Conversions between `U128` and native integers
//!
//! Widening conversions are infallible `From` impls. Signed sources are
//! sign-extended, so `U128::from(-1i32) == U128::MAX`.
//!
//! Narrowing comes in two flavors:
//! - `as_*` extractors truncate to the target width, like an `as` cast
//! - `TryFrom<U128>` fails with [`ConversionOverflow`] when the value does
//!   not fit

use crate::error::ConversionOverflow;
use crate::primitives::U128;

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for U128 {
            #[inline]
            fn from(value: $t) -> Self {
                U128([value as u64, 0])
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for U128 {
            #[inline]
            fn from(value: $t) -> Self {
                let extension = if value < 0 { u64::MAX } else { 0 };
                U128([value as i64 as u64, extension])
            }
        }
    )*};
}

macro_rules! try_into_narrow {
    ($($t:ty),*) => {$(
        impl TryFrom<U128> for $t {
            type Error = ConversionOverflow;

            fn try_from(value: U128) -> Result<Self, Self::Error> {
                if value.0[1] != 0 {
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

impl From<bool> for U128 {
    #[inline]
    fn from(value: bool) -> Self {
        U128([value as u64, 0])
    }
}

impl From<u128> for U128 {
    #[inline]
    fn from(value: u128) -> Self {
        U128([value as u64, (value >> 64) as u64])
    }
}

impl From<U128> for u128 {
    #[inline]
    fn from(value: U128) -> Self {
        ((value.0[1] as u128) << 64) | value.0[0] as u128
    }
}

impl From<i128> for U128 {
    /// Two's complement reinterpretation.
    #[inline]
    fn from(value: i128) -> Self {
        Self::from(value as u128)
    }
}

impl TryFrom<U128> for i128 {
    type Error = ConversionOverflow;

    fn try_from(value: U128) -> Result<Self, Self::Error> {
        i128::try_from(u128::from(value)).map_err(|_| ConversionOverflow)
    }
}

impl From<[u64; 2]> for U128 {
    fn from(limbs: [u64; 2]) -> Self {
        U128(limbs)
    }
}

impl From<U128> for [u64; 2] {
    fn from(value: U128) -> Self {
        value.0
    }
}

impl U128 {
    /// True when the value is non-zero.
    pub fn as_bool(&self) -> bool {
        !self.is_zero()
    }

    /// Low 8 bits.
    pub const fn as_u8(&self) -> u8 {
        self.0[0] as u8
    }

    /// Low 16 bits.
    pub const fn as_u16(&self) -> u16 {
        self.0[0] as u16
    }

    /// Low 32 bits.
    pub const fn as_u32(&self) -> u32 {
        self.0[0] as u32
    }

    /// Low 64 bits.
    pub const fn as_u64(&self) -> u64 {
        self.0[0]
    }

    /// Low 8 bits, reinterpreted as signed.
    pub const fn as_i8(&self) -> i8 {
        self.0[0] as i8
    }

    /// Low 16 bits, reinterpreted as signed.
    pub const fn as_i16(&self) -> i16 {
        self.0[0] as i16
    }

    /// Low 32 bits, reinterpreted as signed.
    pub const fn as_i32(&self) -> i32 {
        self.0[0] as i32
    }

    /// The low 63 bits as magnitude, with the value's top bit (bit 127) as
    /// the sign bit.
    pub const fn as_i64(&self) -> i64 {
        ((self.0[0] & (i64::MAX as u64)) | (self.0[1] & (1 << 63))) as i64
    }

    /// The full value as a native `u128`.
    pub const fn as_u128(&self) -> u128 {
        ((self.0[1] as u128) << 64) | self.0[0] as u128
    }
}
