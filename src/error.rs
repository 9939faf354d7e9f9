//! Error types for fixed-width integer operations
//!
//! Every fallible operation in this crate reports one of the kinds below.
//! Wrapping conditions (overflow on addition or multiplication, underflow on
//! subtraction, shifting past the width) are **not** errors: they are part of
//! the modular arithmetic contract and never surface here.

use thiserror::Error;

/// Errors raised by arithmetic, parsing and conversion routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UintError {
    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// A byte buffer whose length does not match the fixed width.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A radix other than 10 or 16.
    #[error("invalid radix {0}: only 10 and 16 are supported")]
    InvalidRadix(u32),

    /// A character that is not a digit of the selected radix.
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    /// A generic conversion named a type outside the supported set.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),
}

/// Returned by checked narrowing conversions (`TryFrom`) when the value does
/// not fit in the target type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("conversion would overflow the target type")]
pub struct ConversionOverflow;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, UintError>;
