//! JSON fragment encoding for nullable numbers
//!
//! A fragment is a single raw JSON value: the `null` literal or a numeral.
//! Surrounding document codecs call into [`JsonFragment`] per field.

mod decode;
mod encode;
mod error;
mod mode;
mod number;

pub use decode::{decode_json, decode_json_with};
pub use encode::{encode_json, format_float, NULL_LITERAL};
pub use error::{DecodeError, NumericFault};
pub use mode::DecodeMode;
pub use number::{Rejected, WireNumber};

use jsonopt_core::Nullable;

/// Field-level JSON hook
///
/// Encoding never fails. Decoding overwrites `self` in place.
pub trait JsonFragment {
    /// Encode to a JSON fragment
    fn encode_json(&self) -> String;

    /// Decode a JSON fragment into `self` using [`DecodeMode::Compat`]
    fn decode_json(&mut self, text: &str) -> Result<(), DecodeError>;

    /// Decode a JSON fragment into `self` using the given mode
    fn decode_json_with(&mut self, text: &str, mode: DecodeMode) -> Result<(), DecodeError>;
}

impl<T: WireNumber> JsonFragment for Nullable<T> {
    fn encode_json(&self) -> String {
        encode::encode_json(self)
    }

    fn decode_json(&mut self, text: &str) -> Result<(), DecodeError> {
        decode::decode_json(self, text)
    }

    fn decode_json_with(&mut self, text: &str, mode: DecodeMode) -> Result<(), DecodeError> {
        decode::decode_json_with(self, text, mode)
    }
}
