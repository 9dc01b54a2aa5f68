//! JSON encoding for nullable numbers
//!
//! Absent values encode as the literal `null`. Present values encode as:
//! - `u64` / `i64`: base-10 digits (leading `-` for negative `i64`)
//! - `f64`: shortest round-trip digits in general format (see [`format_float`])

use super::number::WireNumber;
use jsonopt_core::Nullable;

/// The JSON null literal
pub const NULL_LITERAL: &str = "null";

/// Exponents at or above this switch floats to scientific form
const MAX_PLAIN_EXPONENT: i32 = 6;

/// Exponents below this switch floats to scientific form
const MIN_PLAIN_EXPONENT: i32 = -4;

/// Encode a nullable number to a JSON fragment
pub fn encode_json<T: WireNumber>(value: &Nullable<T>) -> String {
    match value.get() {
        Some(v) => v.encode_text(),
        None => NULL_LITERAL.to_string(),
    }
}

/// Format a float in general notation with the shortest round-trip digits
///
/// Plain decimal is used when the decimal exponent is in `-4..6`, otherwise
/// `d.ddde±XX` with at least two exponent digits. Integral values carry no
/// `.0`. NaN and infinities render as `NaN`, `+Inf` and `-Inf`.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // LowerExp gives the shortest digits that parse back to the same value
    let sci = format!("{:e}", f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if f.is_sign_negative() {
        out.push('-');
    }

    if exp < MIN_PLAIN_EXPONENT || exp >= MAX_PLAIN_EXPONENT {
        push_scientific(&mut out, &digits, exp);
    } else {
        push_plain(&mut out, &digits, exp);
    }
    out
}

fn push_scientific(out: &mut String, digits: &str, exp: i32) {
    let (first, rest) = digits.split_at(1);
    out.push_str(first);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exp.unsigned_abs()));
}

fn push_plain(out: &mut String, digits: &str, exp: i32) {
    if exp < 0 {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        out.push_str(digits);
        return;
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        out.push_str(digits);
        for _ in digits.len()..int_len {
            out.push('0');
        }
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    }
}
