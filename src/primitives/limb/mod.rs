//! Limb primitives
//!
//! A limb is one 64-bit word of a multi-word integer. Every fixed-width type
//! in this crate stores its value as an array of limbs, least significant
//! limb first, and builds its arithmetic from the helpers defined here.
//!
//! The helpers are grouped by concern:
//!
//! - [`arith`]
//!   Add-with-carry, subtract-with-borrow, widening multiplication and
//!   multiply-accumulate.
//!
//! - [`div`]
//!   128-by-64 and 128-by-128 long division, plus single-limb division chains
//!   used for decimal formatting.
//!
//! - [`bits`]
//!   Leading/trailing zero counts and bit lengths.
//!
//! - [`float`]
//!   Correctly rounded integer → float conversion and truncating
//!   float → integer conversion.
//!
//! Every primitive returns all of its outputs (carries, high words,
//! remainders) as part of its result. Nothing is communicated through shared
//! state, so the helpers are reentrant and safe to call from any thread.

pub mod arith;
pub mod bits;
pub mod div;
pub mod float;

pub use arith::{add_with_carry, mul_add, sub_with_borrow, widening_mul};
pub use bits::{bit_len, leading_zeros, leading_zeros_128, trailing_zeros, trailing_zeros_128};
pub use div::{DivRem, div_rem_10, div_rem_128, div_rem_small, div_rem_wide};
pub use float::{from_f64, to_f32, to_f64};
