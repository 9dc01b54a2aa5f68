//! Numeric kinds carried by the option types
//!
//! Exactly three kinds are supported:
//!
//! | Kind | Rust type |
//! |------|-----------|
//! | Uint | `u64` |
//! | Int | `i64` |
//! | Float64 | `f64` |

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// The numeric kind of an option type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Unsigned 64-bit integer
    Uint,
    /// Signed 64-bit integer
    Int,
    /// 64-bit IEEE-754 floating point
    Float64,
}

impl NumberKind {
    /// Returns the kind name as a string (for error messages)
    pub fn name(&self) -> &'static str {
        match self {
            NumberKind::Uint => "uint",
            NumberKind::Int => "int",
            NumberKind::Float64 => "float64",
        }
    }

    /// Whether values of this kind are integers
    pub fn is_integer(&self) -> bool {
        !matches!(self, NumberKind::Float64)
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u64 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// A number that can be held by [`Opt`](crate::Opt) and [`Nullable`](crate::Nullable)
///
/// Sealed: implemented for `u64`, `i64` and `f64` only.
pub trait Number:
    sealed::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Default
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// The zero value of this kind
    const ZERO: Self;

    /// The kind tag
    const KIND: NumberKind;

    /// Whether the value has a JSON number form (false for NaN and infinities)
    fn is_finite(self) -> bool {
        true
    }
}

impl Number for u64 {
    const ZERO: Self = 0;
    const KIND: NumberKind = NumberKind::Uint;
}

impl Number for i64 {
    const ZERO: Self = 0;
    const KIND: NumberKind = NumberKind::Int;
}

impl Number for f64 {
    const ZERO: Self = 0.0;
    const KIND: NumberKind = NumberKind::Float64;

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
