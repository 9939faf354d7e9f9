//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer stored as four 64-bit limbs, least significant first.
//!
//! `U256` is built on the limb primitives directly rather than on two
//! `U128` halves, and carries the same algebraic surface: wrapping
//! arithmetic modulo 2²⁵⁶, logical shifts that yield zero past the width,
//! floor division with an explicit divide-by-zero error, and exact
//! byte/text conversions.
//!
//! It is also the intermediate type of [`U128::muldiv`](crate::primitives::U128::muldiv).

mod conv;
mod core;
mod div;
mod ops;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
