//! Public types for the jsonopt API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Number kinds
pub use jsonopt_core::{Number, NumberKind};

// Simple options
pub use jsonopt_core::{
    new_float64, new_int, new_uint, Float64, Int, Opt, Uint, ZERO_FLOAT64, ZERO_INT, ZERO_UINT,
};

// Nullable options
pub use jsonopt_core::{
    new_nullable_float64, new_nullable_int, new_nullable_uint, Nullable, NullableFloat64,
    NullableInt, NullableUint, NULL_FLOAT64, NULL_INT, NULL_UINT,
};

// Wire encoding
pub use jsonopt_wire::{
    decode_json, decode_json_with, encode_json, DecodeError, DecodeMode, JsonFragment,
    NumericFault, WireNumber, NULL_LITERAL,
};
