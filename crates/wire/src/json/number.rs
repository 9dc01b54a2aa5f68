//! Per-kind text conversion

use super::decode::{parse_f64, parse_i64, parse_u64};
use super::encode::format_float;
use super::error::DecodeError;
use super::mode::DecodeMode;
use jsonopt_core::{Number, NumberKind};

/// A failed parse
///
/// `fallback` is the value the number parser yields alongside the error: `0`
/// for bad syntax, the saturated bound for overflow. Compat decoding stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected<T> {
    /// Value written to the target in compat mode
    pub fallback: T,
    /// The error returned to the caller
    pub error: DecodeError,
}

impl<T> Rejected<T> {
    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> Rejected<U> {
        Rejected {
            fallback: f(self.fallback),
            error: self.error,
        }
    }
}

/// A number with a JSON text form
pub trait WireNumber: Number {
    /// Render a present value
    fn encode_text(self) -> String;

    /// Parse a non-null fragment
    fn parse_text(text: &str, mode: DecodeMode) -> Result<Self, Rejected<Self>>;
}

impl WireNumber for u64 {
    fn encode_text(self) -> String {
        self.to_string()
    }

    fn parse_text(text: &str, _mode: DecodeMode) -> Result<Self, Rejected<Self>> {
        parse_u64(text, NumberKind::Uint)
    }
}

impl WireNumber for i64 {
    fn encode_text(self) -> String {
        self.to_string()
    }

    fn parse_text(text: &str, mode: DecodeMode) -> Result<Self, Rejected<Self>> {
        if mode.signed_ints() {
            parse_i64(text)
        } else {
            // Legacy behavior: unsigned parse, wrapped into i64
            parse_u64(text, NumberKind::Int)
                .map(|v| v as i64)
                .map_err(|r| r.map(|v| v as i64))
        }
    }
}

impl WireNumber for f64 {
    fn encode_text(self) -> String {
        format_float(self)
    }

    fn parse_text(text: &str, _mode: DecodeMode) -> Result<Self, Rejected<Self>> {
        parse_f64(text)
    }
}
