//! Wire encoding for jsonopt
//!
//! This crate implements the JSON fragment contract for nullable numbers.
//! A fragment is one raw JSON value, produced and consumed per field by a
//! surrounding document codec.
//!
//! ## Wire Encoding Rules
//!
//! | Value | JSON Encoding |
//! |-------|--------------|
//! | absent (any kind) | `null` |
//! | `u64` | digits |
//! | `i64` | digits, leading `-` when negative |
//! | `f64` (finite) | shortest round-trip digits, general format |
//! | `f64` (special) | `NaN`, `+Inf`, `-Inf` |
//!
//! ## Examples
//!
//! ```
//! use jsonopt_core::{new_nullable_uint, NULL_UINT};
//! use jsonopt_wire::JsonFragment;
//!
//! // Encode
//! assert_eq!(new_nullable_uint(42).encode_json(), "42");
//! assert_eq!(NULL_UINT.encode_json(), "null");
//!
//! // Decode in place
//! let mut value = new_nullable_uint(42);
//! value.decode_json("null").unwrap();
//! assert_eq!(value, NULL_UINT);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_json, decode_json_with, encode_json, format_float, DecodeError, DecodeMode,
    JsonFragment, NumericFault, Rejected, WireNumber, NULL_LITERAL,
};
