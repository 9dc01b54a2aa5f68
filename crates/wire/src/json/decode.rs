//! JSON decoding for nullable numbers
//!
//! Decoding overwrites the target in place:
//! - `null` copies [`Nullable::NULL`] into the target
//! - a numeral sets `val` and `init = true`
//! - a malformed fragment returns [`DecodeError::MalformedNumericText`]; in
//!   [`DecodeMode::Compat`] the target is still marked present and holds the
//!   parser's fallback value

use super::encode::NULL_LITERAL;
use super::error::{DecodeError, NumericFault};
use super::mode::DecodeMode;
use super::number::{Rejected, WireNumber};
use jsonopt_core::{Nullable, NumberKind};
use std::num::IntErrorKind;
use tracing::trace;

/// Decode a JSON fragment into `target` using [`DecodeMode::Compat`]
pub fn decode_json<T: WireNumber>(
    target: &mut Nullable<T>,
    text: &str,
) -> Result<(), DecodeError> {
    decode_json_with(target, text, DecodeMode::Compat)
}

/// Decode a JSON fragment into `target` using the given mode
pub fn decode_json_with<T: WireNumber>(
    target: &mut Nullable<T>,
    text: &str,
    mode: DecodeMode,
) -> Result<(), DecodeError> {
    if text == NULL_LITERAL {
        target.set_null();
        return Ok(());
    }

    match T::parse_text(text, mode) {
        Ok(v) => {
            target.set(v);
            Ok(())
        }
        Err(rejected) => {
            let partial = mode.writes_on_error();
            if partial {
                target.set(rejected.fallback);
            }
            let kind = T::KIND;
            trace!(%kind, ?mode, partial, "rejected numeric fragment");
            Err(rejected.error)
        }
    }
}

fn reject<T>(fallback: T, kind: NumberKind, text: &str, fault: NumericFault) -> Rejected<T> {
    Rejected {
        fallback,
        error: DecodeError::malformed(kind, text, fault),
    }
}

fn int_fault(kind: &IntErrorKind) -> NumericFault {
    match kind {
        IntErrorKind::Empty => NumericFault::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumericFault::OutOfRange,
        _ => NumericFault::Syntax,
    }
}

/// Parse an unsigned base-10 numeral
///
/// `kind` is only used to label errors; the `i64` compat path parses through
/// here too.
pub(crate) fn parse_u64(text: &str, kind: NumberKind) -> Result<u64, Rejected<u64>> {
    // str::parse takes a leading '+', unsigned numerals take no sign
    if text.starts_with('+') {
        return Err(reject(0, kind, text, NumericFault::Syntax));
    }

    text.parse::<u64>().map_err(|e| {
        let fault = int_fault(e.kind());
        let fallback = if fault == NumericFault::OutOfRange {
            u64::MAX
        } else {
            0
        };
        reject(fallback, kind, text, fault)
    })
}

/// Parse a signed base-10 numeral
pub(crate) fn parse_i64(text: &str) -> Result<i64, Rejected<i64>> {
    if text.starts_with('+') {
        return Err(reject(0, NumberKind::Int, text, NumericFault::Syntax));
    }

    text.parse::<i64>().map_err(|e| {
        let fallback = match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        };
        reject(fallback, NumberKind::Int, text, int_fault(e.kind()))
    })
}

/// Parse a base-10 float literal
///
/// A finite literal that rounds to infinity is out of range; its fallback is
/// the signed infinity.
pub(crate) fn parse_f64(text: &str) -> Result<f64, Rejected<f64>> {
    match text.parse::<f64>() {
        Ok(f) if f.is_infinite() && !names_infinity(text) => Err(reject(
            f,
            NumberKind::Float64,
            text,
            NumericFault::OutOfRange,
        )),
        Ok(f) => Ok(f),
        Err(_) => {
            let fault = if text.is_empty() {
                NumericFault::Empty
            } else {
                NumericFault::Syntax
            };
            Err(reject(0.0, NumberKind::Float64, text, fault))
        }
    }
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(|c| c == '+' || c == '-');
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
