//! Decode errors for JSON fragments
//!
//! There is one error kind, [`DecodeError::MalformedNumericText`]. It is
//! returned to the caller and never logged as an error or retried here; the
//! surrounding document decoder decides whether to abort or skip the field.

use jsonopt_core::NumberKind;
use std::fmt;
use thiserror::Error;

/// Why a numeral was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFault {
    /// The fragment was empty
    Empty,
    /// The fragment is not a base-10 numeral for the target kind
    Syntax,
    /// The numeral does not fit in 64 bits
    OutOfRange,
}

impl fmt::Display for NumericFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            NumericFault::Empty => "empty input",
            NumericFault::Syntax => "invalid syntax",
            NumericFault::OutOfRange => "value out of range",
        };
        f.write_str(msg)
    }
}

/// Decode error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Text is neither `null` nor a valid numeral for the target kind
    #[error("malformed numeric text: parsing {text:?} as {kind}: {fault}")]
    MalformedNumericText {
        /// Kind the fragment was decoded into
        kind: NumberKind,
        /// The rejected fragment
        text: String,
        /// What was wrong with it
        fault: NumericFault,
    },
}

impl DecodeError {
    pub(crate) fn malformed(kind: NumberKind, text: &str, fault: NumericFault) -> Self {
        DecodeError::MalformedNumericText {
            kind,
            text: text.to_string(),
            fault,
        }
    }

    /// The fault behind this error
    pub fn fault(&self) -> NumericFault {
        match self {
            DecodeError::MalformedNumericText { fault, .. } => *fault,
        }
    }

    /// Check if the numeral was well formed but too large
    pub fn is_overflow(&self) -> bool {
        self.fault() == NumericFault::OutOfRange
    }
}
