//! Conversions between `U256` and other representations.

mod bytes;
mod float;
mod int;
mod uint128;
