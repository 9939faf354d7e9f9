//! Primitive types
//!
//! This module defines the fixed-width unsigned integers and the layers
//! they are built from.
//!
//! Primitives are simple, fixed-size `Copy` values with well-defined
//! wrapping semantics. They are intentionally minimal and do not attempt to
//! be a general arbitrary-precision library.
//!
//! Current primitives include:
//! - `U128`: a fixed-size 128-bit unsigned integer
//! - `U256`: a fixed-size 256-bit unsigned integer
//!
//! Supporting modules:
//! - `limb`: 64-bit word arithmetic shared by both widths
//! - `bytes`: strict fixed-length byte encoding in either endianness
//! - `text`: decimal and hex formatting and parsing
//! - `ambient`: generic construction and extraction over a closed set of
//!   types

pub mod limb;

mod ambient;
mod bytes;
mod macros;
#[cfg(feature = "serde")]
mod serialize;
mod text;
mod uint128;
mod uint256;

/// Fixed-size unsigned integer primitives.
pub use uint128::U128;
pub use uint256::U256;

pub use ambient::{Ambient, AmbientKind, FromUint, IntoUint};
pub use bytes::Endian;
