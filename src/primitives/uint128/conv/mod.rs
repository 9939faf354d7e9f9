//! Conversions between `U128` and other representations.
//!
//! Split by source kind: native integers, floats and byte buffers. Text
//! conversions are shared with the 256-bit type and generated alongside the
//! operators.

mod bytes;
mod float;
mod int;
