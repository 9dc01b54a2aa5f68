//! Core value types for jsonopt
//!
//! This crate defines the option types shared by every other jsonopt crate:
//! - [`Opt`]: always-bound holder for a number (no JSON behavior)
//! - [`Nullable`]: number that may be JSON `null`, with serde support
//! - [`Number`] / [`NumberKind`]: the three supported kinds (`u64`, `i64`, `f64`)
//!
//! Text encoding of [`Nullable`] values lives in `jsonopt-wire`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod nullable;
pub mod number;
pub mod option;

pub use nullable::{
    new_nullable_float64, new_nullable_int, new_nullable_uint, Nullable, NullableFloat64,
    NullableInt, NullableUint, NULL_FLOAT64, NULL_INT, NULL_UINT,
};
pub use number::{Number, NumberKind};
pub use option::{
    new_float64, new_int, new_uint, Float64, Int, Opt, Uint, ZERO_FLOAT64, ZERO_INT, ZERO_UINT,
};
