//! Nullable numeric types
//!
//! A [`Nullable<T>`] is a three-state JSON value: absent (`null`) or present
//! with a number, where present zero is distinct from absent.
//!
//! ## Invariants
//!
//! - `init == false`: the value is absent and `val` carries no meaning.
//! - `init == true`: `val` is the logical value.
//! - [`Nullable::NULL`] is a `const`; every use is a fresh copy, so the
//!   canonical null can never be changed through a decoded instance.
//!
//! Text encoding lives in the wire crate. The serde implementations here let a
//! `Nullable<T>` sit inside any `#[derive(Serialize, Deserialize)]` struct.

use crate::number::Number;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A number that may be JSON `null`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nullable<T: Number> {
    /// The value, meaningful only when `init` is true
    pub val: T,
    /// Whether a value is present
    pub init: bool,
}

/// Nullable unsigned integer
pub type NullableUint = Nullable<u64>;

/// Nullable signed integer
pub type NullableInt = Nullable<i64>;

/// Nullable float
pub type NullableFloat64 = Nullable<f64>;

/// Canonical null [`NullableUint`]
pub const NULL_UINT: NullableUint = Nullable::NULL;

/// Canonical null [`NullableInt`]
pub const NULL_INT: NullableInt = Nullable::NULL;

/// Canonical null [`NullableFloat64`]
pub const NULL_FLOAT64: NullableFloat64 = Nullable::NULL;

impl<T: Number> Nullable<T> {
    /// The absent value: `init = false`, `val = 0`
    pub const NULL: Self = Nullable {
        val: T::ZERO,
        init: false,
    };

    /// Create a present value
    pub const fn new(value: T) -> Self {
        Nullable {
            val: value,
            init: true,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        !self.init
    }

    /// Check if a value is present
    pub fn is_present(&self) -> bool {
        self.init
    }

    /// Get the value if present
    pub fn get(&self) -> Option<T> {
        if self.init {
            Some(self.val)
        } else {
            None
        }
    }

    /// Overwrite with a present value
    pub fn set(&mut self, value: T) {
        *self = Nullable::new(value);
    }

    /// Overwrite with the fields of [`Nullable::NULL`]
    pub fn set_null(&mut self) {
        *self = Self::NULL;
    }
}

impl<T: Number> Default for Nullable<T> {
    fn default() -> Self {
        Self::NULL
    }
}

impl<T: Number> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::new(value)
    }
}

impl<T: Number> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::new(v),
            None => Self::NULL,
        }
    }
}

impl<T: Number> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.get()
    }
}

/// Create a present [`NullableUint`]
pub fn new_nullable_uint(value: u64) -> NullableUint {
    Nullable::new(value)
}

/// Create a present [`NullableInt`]
pub fn new_nullable_int(value: i64) -> NullableInt {
    Nullable::new(value)
}

/// Create a present [`NullableFloat64`]
pub fn new_nullable_float64(value: f64) -> NullableFloat64 {
    Nullable::new(value)
}

// Absent maps to serde's none, which serde_json writes as `null`. A present
// NaN or infinity has no JSON number form; serde_json would also write `null`
// for it, so it is rejected rather than turned into an absent value.
impl<T: Number> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(v) if !v.is_finite() => Err(S::Error::custom(format!(
                "present {} value {} has no JSON number form",
                T::KIND,
                v
            ))),
            Some(v) => serializer.serialize_some(&v),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Number> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}
