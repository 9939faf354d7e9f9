//! Fixed-width unsigned integer arithmetic
//!
//! This crate provides 128-bit and 256-bit unsigned integers for code that
//! must represent monetary amounts, hashes and binary protocol fields
//! exactly and deterministically.
//!
//! The focus is on **predictability**: every operation has a single,
//! documented outcome for every input, including the edge cases.
//!
//! - Addition, subtraction, multiplication and shifts wrap modulo 2ᴺ.
//!   Shifting by the width or more yields zero.
//! - Division by zero is the only failing arithmetic condition. The `/` and
//!   `%` operators panic; `div_rem`, `try_div` and `try_rem` return
//!   [`UintError::DivideByZero`].
//! - Byte and text conversions are exact inverses of each other and reject
//!   malformed input with a typed [`UintError`].
//!
//! # Module overview
//!
//! - `primitives`  
//!   The `U128` and `U256` types, the limb primitives they are built on and
//!   the conversion layer (bytes, text, generic ambient dispatch).
//!
//! - `error`  
//!   The crate-wide error kinds.
//!
//! # Example
//!
//! ```
//! use fixuint::primitives::{Endian, U128, U256};
//!
//! let a = U256::from_str_radix("ffffffffffffffffffffffffffffffff", 16).unwrap();
//! let b = a + U256::ONE;
//!
//! assert_eq!(b, U256::from(U128::MAX) + U256::ONE);
//! assert_eq!(b.to_string(), "340282366920938463463374607431768211456");
//! assert_eq!(U256::from_slice(&b.to_be_bytes(), Endian::Big).unwrap(), b);
//!
//! assert_eq!(U128::muldiv(U128::MAX, U128::from(2u8), U128::from(4u8)).unwrap(), U128::MAX >> 1u32);
//! ```
//!
//! # Features
//!
//! - `speed`: native `u128` paths in the limb primitives
//! - `serde`: decimal-string `Serialize`/`Deserialize`

mod error;

pub mod primitives;

pub use error::{ConversionOverflow, Result, UintError};
