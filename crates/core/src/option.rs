//! Simple option types
//!
//! An [`Opt<T>`] always holds a value. It marks a field as "explicitly set"
//! inside larger structures; absence is expressed as `Option<Opt<T>>`.
//! These types have no JSON behavior of their own.

use crate::number::Number;
use std::ops::Deref;

/// An always-bound holder for a single number
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opt<T: Number>(T);

/// Simple option for unsigned integers
pub type Uint = Opt<u64>;

/// Simple option for signed integers
pub type Int = Opt<i64>;

/// Simple option for floats
pub type Float64 = Opt<f64>;

/// A [`Uint`] holding 0
pub const ZERO_UINT: Uint = Opt::new(0);

/// An [`Int`] holding 0
pub const ZERO_INT: Int = Opt::new(0);

/// A [`Float64`] holding 0.0
pub const ZERO_FLOAT64: Float64 = Opt::new(0.0);

impl<T: Number> Opt<T> {
    /// Create an option bound to a copy of `value`
    pub const fn new(value: T) -> Self {
        Opt(value)
    }

    /// Get the held value
    pub fn get(&self) -> T {
        self.0
    }

    /// Consume the option and return the held value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Number> Deref for Opt<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Number> From<T> for Opt<T> {
    fn from(value: T) -> Self {
        Opt::new(value)
    }
}

/// Create a [`Uint`] from a `u64`
pub fn new_uint(value: u64) -> Uint {
    Opt::new(value)
}

/// Create an [`Int`] from an `i64`
pub fn new_int(value: i64) -> Int {
    Opt::new(value)
}

/// Create a [`Float64`] from an `f64`
pub fn new_float64(value: f64) -> Float64 {
    Opt::new(value)
}
