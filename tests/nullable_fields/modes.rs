//! Decode Mode Tests
//!
//! Compat reproduces the legacy adapter; Strict parses signed integers and
//! never half-writes the target.

use crate::*;
use jsonopt::NumericFault;

// =============================================================================
// COMPAT
// =============================================================================

#[test]
fn test_compat_is_default_mode() {
    let mut via_default = NullableInt::default();
    let mut via_compat = NullableInt::default();

    let a = via_default.decode_json("x");
    let b = via_compat.decode_json_with("x", DecodeMode::Compat);

    assert_eq!(a, b);
    assert_eq!(via_default, via_compat);
}

#[test]
fn test_compat_int_uses_unsigned_parsing() {
    let mut n = NullableInt::default();
    let err = n.decode_json("-1").unwrap_err();

    assert_eq!(err.fault(), NumericFault::Syntax);
    assert_eq!(n, new_nullable_int(0));
}

#[test]
fn test_compat_int_wraps_values_above_i64_max() {
    let mut n = NullableInt::default();
    n.decode_json("9223372036854775808").unwrap();
    assert_eq!(n, new_nullable_int(i64::MIN));
}

#[test]
fn test_compat_partial_write_on_overflow() {
    let mut n = NullableUint::default();
    let err = n.decode_json("99999999999999999999").unwrap_err();

    assert!(err.is_overflow());
    assert_eq!(n, new_nullable_uint(u64::MAX));
}

#[test]
fn test_mode_does_not_change_encoding() {
    let negative = new_nullable_int(-7);
    assert_eq!(negative.encode_json(), "-7");

    let mut compat = NULL_INT;
    assert!(compat.decode_json(&negative.encode_json()).is_err());

    let mut strict = NULL_INT;
    strict
        .decode_json_with(&negative.encode_json(), DecodeMode::Strict)
        .unwrap();
    assert_eq!(strict, negative);
}

// =============================================================================
// STRICT
// =============================================================================

#[test]
fn test_strict_int_accepts_negative() {
    let mut n = NullableInt::default();
    n.decode_json_with("-9223372036854775808", DecodeMode::Strict)
        .unwrap();
    assert_eq!(n, new_nullable_int(i64::MIN));
}

#[test]
fn test_strict_rejects_values_above_i64_max() {
    let mut n = NullableInt::default();
    let err = n
        .decode_json_with("9223372036854775808", DecodeMode::Strict)
        .unwrap_err();

    assert!(err.is_overflow());
    assert_eq!(n, NULL_INT);
}

#[test]
fn test_strict_failure_is_atomic_for_all_kinds() {
    let mut u = new_nullable_uint(1);
    let mut i = new_nullable_int(-1);
    let mut f = new_nullable_float64(1.5);

    assert!(u.decode_json_with("nope", DecodeMode::Strict).is_err());
    assert!(i.decode_json_with("nope", DecodeMode::Strict).is_err());
    assert!(f.decode_json_with("nope", DecodeMode::Strict).is_err());

    assert_eq!(u, new_nullable_uint(1));
    assert_eq!(i, new_nullable_int(-1));
    assert_eq!(f, new_nullable_float64(1.5));
}

#[test]
fn test_strict_uint_still_rejects_sign() {
    assert_eq!(accepted_kinds("+5", DecodeMode::Strict), [false, false, true]);
}
