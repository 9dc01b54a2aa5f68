//! Convenient imports for jsonopt.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use jsonopt::prelude::*;
//!
//! let mut count = NullableUint::default();
//! count.decode_json("7").unwrap();
//! assert_eq!(count.encode_json(), "7");
//! ```

// Option types
pub use crate::types::{Float64, Int, Nullable, NullableFloat64, NullableInt, NullableUint, Uint};

// Constructors and constants
pub use crate::types::{
    new_float64, new_int, new_nullable_float64, new_nullable_int, new_nullable_uint, new_uint,
    NULL_FLOAT64, NULL_INT, NULL_UINT, ZERO_FLOAT64, ZERO_INT, ZERO_UINT,
};

// Wire encoding
pub use crate::types::{DecodeError, DecodeMode, JsonFragment};
