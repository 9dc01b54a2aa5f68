//! # jsonopt
//!
//! Numeric option types that tell JSON `null` apart from a present zero.
//!
//! Two families are provided for `u64`, `i64` and `f64`:
//!
//! - [`Opt`] (`Uint`, `Int`, `Float64`): an always-set value holder with no
//!   JSON behavior of its own.
//! - [`Nullable`] (`NullableUint`, `NullableInt`, `NullableFloat64`): a value
//!   plus an `init` flag. Encodes to `null` when absent and to the number when
//!   present.
//!
//! ## Quick Start
//!
//! ```
//! use jsonopt::prelude::*;
//!
//! // Field-level fragments
//! assert_eq!(new_nullable_uint(0).encode_json(), "0");
//! assert_eq!(NULL_UINT.encode_json(), "null");
//!
//! let mut price = NullableFloat64::default();
//! price.decode_json("3.14")?;
//! assert_eq!(price.get(), Some(3.14));
//! # Ok::<(), jsonopt::DecodeError>(())
//! ```
//!
//! ## Decode Modes
//!
//! [`DecodeMode::Compat`] (the default) keeps the legacy adapter's behavior:
//! the `i64` wrapper parses unsigned numerals, and a failed decode still marks
//! the target present. [`DecodeMode::Strict`] parses signed numerals and leaves
//! the target untouched on failure.
//!
//! ## Serde
//!
//! [`Nullable`] implements `Serialize` and `Deserialize`, so it can be used as
//! a field type in any serde-derived struct.

#![warn(missing_docs)]

mod types;

pub mod prelude;

// Re-export types
pub use types::*;
