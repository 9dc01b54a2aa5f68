//! Decode mode selection

/// How a fragment is decoded into a nullable number
///
/// | Mode | Int wrapper parses as | On error |
/// |------|----------------------|----------|
/// | `Compat` | unsigned 64-bit | `init = true`, parser fallback stored in `val` |
/// | `Strict` | signed 64-bit | instance left unchanged |
///
/// `null` handling and the float and unsigned grammars are the same in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Reproduces the legacy adapter's decode behavior, quirks included
    ///
    /// Only decoding is affected; encoding is the same in every mode and
    /// always writes a `-` for negative `i64` values.
    #[default]
    Compat,
    /// Signed parsing for `i64` and no partial writes on failure
    Strict,
}

impl DecodeMode {
    /// Whether a failed decode still overwrites the target
    pub fn writes_on_error(&self) -> bool {
        matches!(self, DecodeMode::Compat)
    }

    /// Whether the `i64` wrapper accepts a leading `-`
    pub fn signed_ints(&self) -> bool {
        matches!(self, DecodeMode::Strict)
    }
}
