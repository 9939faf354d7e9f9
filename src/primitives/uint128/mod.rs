//! 128-bit unsigned integer primitive
//!
//! This module defines the `U128` type, a fixed-size 128-bit unsigned
//! integer stored as two 64-bit limbs, least significant first.
//!
//! All arithmetic wraps modulo 2¹²⁸. Division by zero is the only failing
//! arithmetic condition: the operator forms panic, the `div_rem`,
//! `try_div` and `try_rem` forms return
//! [`UintError::DivideByZero`](crate::UintError::DivideByZero).
//!
//! The module is split as follows:
//! - `core`: the type, its constants and constructors
//! - `ops`: limb-level arithmetic, shifts and division
//! - `conv`: conversions to and from native integers, floats, bytes and
//!   the 256-bit type

mod conv;
mod core;
mod ops;

/// Fixed-size 128-bit unsigned integer.
pub use self::core::U128;
