//! Generic construction and extraction over a closed set of types
//!
//! A fixed-width integer can be built from, and turned back into, any of
//! a small set of "ambient" representations: booleans, native integers up
//! to 64 bits, native `u128`, floats, the other fixed-width type, byte
//! buffers in either endianness and decimal or hex text.
//!
//! Two forms of dispatch are offered over the same set:
//!
//! - **Static**: the [`IntoUint`] and [`FromUint`] traits, used by
//!   `U128::from_value` / `U128::cast` and their `U256` counterparts. A type
//!   outside the set simply does not implement the trait, so the call does
//!   not compile.
//!
//! - **Runtime**: the [`Ambient`] tagged value and its [`AmbientKind`] tag,
//!   used by `from_ambient` / `to_ambient`. Kinds can be named by string
//!   (`"u64"`, `"bytes_be"`, `"hex"`, ...); names outside the set, such as
//!   the signed wide types `"i128"` and `"i256"`, are rejected with
//!   [`UintError::UnsupportedType`].
//!
//! Narrowing extraction truncates, like the `as_*` extractors.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, UintError};
use crate::primitives::bytes::Endian;
use crate::primitives::{U128, U256};

/// A value of one of the supported ambient types.
#[derive(Clone, Debug, PartialEq)]
pub enum Ambient {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    U128(U128),
    U256(U256),
    /// Little-endian bytes; must be exactly the target width.
    BytesLe(Vec<u8>),
    /// Big-endian bytes; must be exactly the target width.
    BytesBe(Vec<u8>),
    /// Decimal text.
    Decimal(String),
    /// Hexadecimal text without prefix.
    Hex(String),
}

/// Tag naming one [`Ambient`] variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AmbientKind {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    U128,
    U256,
    BytesLe,
    BytesBe,
    Decimal,
    Hex,
}

impl Ambient {
    /// The tag of this value.
    pub fn kind(&self) -> AmbientKind {
        match self {
            Ambient::Bool(_) => AmbientKind::Bool,
            Ambient::I8(_) => AmbientKind::I8,
            Ambient::U8(_) => AmbientKind::U8,
            Ambient::I16(_) => AmbientKind::I16,
            Ambient::U16(_) => AmbientKind::U16,
            Ambient::I32(_) => AmbientKind::I32,
            Ambient::U32(_) => AmbientKind::U32,
            Ambient::I64(_) => AmbientKind::I64,
            Ambient::U64(_) => AmbientKind::U64,
            Ambient::F32(_) => AmbientKind::F32,
            Ambient::F64(_) => AmbientKind::F64,
            Ambient::U128(_) => AmbientKind::U128,
            Ambient::U256(_) => AmbientKind::U256,
            Ambient::BytesLe(_) => AmbientKind::BytesLe,
            Ambient::BytesBe(_) => AmbientKind::BytesBe,
            Ambient::Decimal(_) => AmbientKind::Decimal,
            Ambient::Hex(_) => AmbientKind::Hex,
        }
    }
}

impl AmbientKind {
    /// Canonical name, as accepted by [`AmbientKind::from_str`].
    pub const fn name(&self) -> &'static str {
        match self {
            AmbientKind::Bool => "bool",
            AmbientKind::I8 => "i8",
            AmbientKind::U8 => "u8",
            AmbientKind::I16 => "i16",
            AmbientKind::U16 => "u16",
            AmbientKind::I32 => "i32",
            AmbientKind::U32 => "u32",
            AmbientKind::I64 => "i64",
            AmbientKind::U64 => "u64",
            AmbientKind::F32 => "f32",
            AmbientKind::F64 => "f64",
            AmbientKind::U128 => "u128",
            AmbientKind::U256 => "u256",
            AmbientKind::BytesLe => "bytes_le",
            AmbientKind::BytesBe => "bytes_be",
            AmbientKind::Decimal => "decimal",
            AmbientKind::Hex => "hex",
        }
    }
}

impl fmt::Display for AmbientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AmbientKind {
    type Err = UintError;

    /// Parses a type name. `"bytes"` is an alias of `"bytes_le"` and
    /// `"string"` of `"decimal"`.
    fn from_str(name: &str) -> Result<Self> {
        Ok(match name {
            "bool" => AmbientKind::Bool,
            "i8" => AmbientKind::I8,
            "u8" => AmbientKind::U8,
            "i16" => AmbientKind::I16,
            "u16" => AmbientKind::U16,
            "i32" => AmbientKind::I32,
            "u32" => AmbientKind::U32,
            "i64" => AmbientKind::I64,
            "u64" => AmbientKind::U64,
            "f32" => AmbientKind::F32,
            "f64" => AmbientKind::F64,
            "u128" => AmbientKind::U128,
            "u256" => AmbientKind::U256,
            "bytes" | "bytes_le" => AmbientKind::BytesLe,
            "bytes_be" => AmbientKind::BytesBe,
            "string" | "decimal" => AmbientKind::Decimal,
            "hex" => AmbientKind::Hex,
            other => {
                log::debug!("unsupported ambient type {other:?}");
                return Err(UintError::UnsupportedType(other.to_owned()));
            }
        })
    }
}

/// Sources a fixed-width integer can be built from.
pub trait IntoUint {
    fn into_u128(self) -> Result<U128>;
    fn into_u256(self) -> Result<U256>;
}

/// Targets a fixed-width integer can be extracted into.
pub trait FromUint: Sized {
    fn from_u128(value: U128) -> Self;
    fn from_u256(value: U256) -> Self;
}

macro_rules! numeric_ambient {
    ($($t:ty => $extract:ident),* $(,)?) => {$(
        impl IntoUint for $t {
            #[inline]
            fn into_u128(self) -> Result<U128> {
                Ok(U128::from(self))
            }

            #[inline]
            fn into_u256(self) -> Result<U256> {
                Ok(U256::from(self))
            }
        }

        impl FromUint for $t {
            #[inline]
            fn from_u128(value: U128) -> Self {
                value.$extract()
            }

            #[inline]
            fn from_u256(value: U256) -> Self {
                value.$extract()
            }
        }
    )*};
}

numeric_ambient!(
    bool => as_bool,
    i8 => as_i8,
    u8 => as_u8,
    i16 => as_i16,
    u16 => as_u16,
    i32 => as_i32,
    u32 => as_u32,
    i64 => as_i64,
    u64 => as_u64,
    u128 => as_u128,
    f32 => as_f32,
    f64 => as_f64,
);

impl IntoUint for U128 {
    fn into_u128(self) -> Result<U128> {
        Ok(self)
    }

    fn into_u256(self) -> Result<U256> {
        Ok(U256::from(self))
    }
}

impl FromUint for U128 {
    fn from_u128(value: U128) -> Self {
        value
    }

    fn from_u256(value: U256) -> Self {
        value.low_u128()
    }
}

impl IntoUint for U256 {
    fn into_u128(self) -> Result<U128> {
        Ok(self.low_u128())
    }

    fn into_u256(self) -> Result<U256> {
        Ok(self)
    }
}

impl FromUint for U256 {
    fn from_u128(value: U128) -> Self {
        U256::from(value)
    }

    fn from_u256(value: U256) -> Self {
        value
    }
}

/// Little-endian bytes of exactly the target width.
impl IntoUint for &[u8] {
    fn into_u128(self) -> Result<U128> {
        U128::from_slice(self, Endian::Little)
    }

    fn into_u256(self) -> Result<U256> {
        U256::from_slice(self, Endian::Little)
    }
}

impl<const N: usize> IntoUint for [u8; N] {
    fn into_u128(self) -> Result<U128> {
        self.as_slice().into_u128()
    }

    fn into_u256(self) -> Result<U256> {
        self.as_slice().into_u256()
    }
}

impl IntoUint for Vec<u8> {
    fn into_u128(self) -> Result<U128> {
        self.as_slice().into_u128()
    }

    fn into_u256(self) -> Result<U256> {
        self.as_slice().into_u256()
    }
}

/// Little-endian bytes of the full width.
impl FromUint for Vec<u8> {
    fn from_u128(value: U128) -> Self {
        value.to_le_bytes().to_vec()
    }

    fn from_u256(value: U256) -> Self {
        value.to_le_bytes().to_vec()
    }
}

/// Decimal text.
impl IntoUint for &str {
    fn into_u128(self) -> Result<U128> {
        U128::from_str_radix(self, 10)
    }

    fn into_u256(self) -> Result<U256> {
        U256::from_str_radix(self, 10)
    }
}

impl IntoUint for String {
    fn into_u128(self) -> Result<U128> {
        self.as_str().into_u128()
    }

    fn into_u256(self) -> Result<U256> {
        self.as_str().into_u256()
    }
}

/// Decimal text.
impl FromUint for String {
    fn from_u128(value: U128) -> Self {
        value.to_string()
    }

    fn from_u256(value: U256) -> Self {
        value.to_string()
    }
}

impl IntoUint for Ambient {
    fn into_u128(self) -> Result<U128> {
        U128::from_ambient(self)
    }

    fn into_u256(self) -> Result<U256> {
        U256::from_ambient(self)
    }
}

macro_rules! impl_ambient_dispatch {
    ($name:ident, $into:ident, $from:ident) => {
        impl $name {
            /// Builds a value from any supported source type.
            ///
            /// # Errors
            ///
            /// Fails only for byte buffers of the wrong length
            /// ([`UintError::InvalidLength`]) and malformed text
            /// ([`UintError::InvalidCharacter`]).
            pub fn from_value<T: IntoUint>(value: T) -> Result<Self> {
                value.$into()
            }

            /// Extracts the value as any supported target type, truncating
            /// where the target is narrower.
            pub fn cast<T: FromUint>(self) -> T {
                T::$from(self)
            }

            /// Builds a value from a tagged ambient value.
            ///
            /// # Errors
            ///
            /// As for [`Self::from_value`].
            pub fn from_ambient(value: Ambient) -> Result<Self> {
                match value {
                    Ambient::Bool(v) => Ok(Self::from(v)),
                    Ambient::I8(v) => Ok(Self::from(v)),
                    Ambient::U8(v) => Ok(Self::from(v)),
                    Ambient::I16(v) => Ok(Self::from(v)),
                    Ambient::U16(v) => Ok(Self::from(v)),
                    Ambient::I32(v) => Ok(Self::from(v)),
                    Ambient::U32(v) => Ok(Self::from(v)),
                    Ambient::I64(v) => Ok(Self::from(v)),
                    Ambient::U64(v) => Ok(Self::from(v)),
                    Ambient::F32(v) => Ok(Self::from(v)),
                    Ambient::F64(v) => Ok(Self::from(v)),
                    Ambient::U128(v) => v.$into(),
                    Ambient::U256(v) => v.$into(),
                    Ambient::BytesLe(bytes) => Self::from_slice(&bytes, Endian::Little),
                    Ambient::BytesBe(bytes) => Self::from_slice(&bytes, Endian::Big),
                    Ambient::Decimal(text) => Self::from_str_radix(&text, 10),
                    Ambient::Hex(text) => Self::from_str_radix(&text, 16),
                }
            }

            /// Extracts the value as the ambient type named by `kind`.
            pub fn to_ambient(&self, kind: AmbientKind) -> Ambient {
                let value = *self;

                match kind {
                    AmbientKind::Bool => Ambient::Bool(value.cast()),
                    AmbientKind::I8 => Ambient::I8(value.cast()),
                    AmbientKind::U8 => Ambient::U8(value.cast()),
                    AmbientKind::I16 => Ambient::I16(value.cast()),
                    AmbientKind::U16 => Ambient::U16(value.cast()),
                    AmbientKind::I32 => Ambient::I32(value.cast()),
                    AmbientKind::U32 => Ambient::U32(value.cast()),
                    AmbientKind::I64 => Ambient::I64(value.cast()),
                    AmbientKind::U64 => Ambient::U64(value.cast()),
                    AmbientKind::F32 => Ambient::F32(value.cast()),
                    AmbientKind::F64 => Ambient::F64(value.cast()),
                    AmbientKind::U128 => Ambient::U128(value.cast()),
                    AmbientKind::U256 => Ambient::U256(value.cast()),
                    AmbientKind::BytesLe => Ambient::BytesLe(value.to_le_bytes().to_vec()),
                    AmbientKind::BytesBe => Ambient::BytesBe(value.to_be_bytes().to_vec()),
                    AmbientKind::Decimal => Ambient::Decimal(value.to_string()),
                    AmbientKind::Hex => Ambient::Hex(value.to_hex()),
                }
            }

            /// Extracts the value as the ambient type called `name`.
            ///
            /// # Errors
            ///
            /// Returns [`UintError::UnsupportedType`] for a name outside
            /// the supported set.
            pub fn to_ambient_named(&self, name: &str) -> Result<Ambient> {
                Ok(self.to_ambient(name.parse()?))
            }
        }
    };
}

impl_ambient_dispatch!(U128, into_u128, from_u128);
impl_ambient_dispatch!(U256, into_u256, from_u256);

macro_rules! ambient_from {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<$t> for Ambient {
            fn from(value: $t) -> Self {
                Ambient::$variant(value)
            }
        }
    )*};
}

ambient_from!(
    bool => Bool,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    U128 => U128,
    U256 => U256,
    String => Decimal,
);
