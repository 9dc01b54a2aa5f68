//! Fragment Scenario Tests
//!
//! Concrete encode/decode cases for each nullable kind.

use crate::*;
use jsonopt::NumberKind;

// =============================================================================
// ENCODE
// =============================================================================

#[test]
fn test_encode_uint_42() {
    assert_eq!(new_nullable_uint(42).encode_json(), "42");
}

#[test]
fn test_encode_null_uint() {
    let json = NULL_UINT.encode_json();
    assert_eq!(json, "null");
    assert_eq!(json.len(), 4);
}

#[test]
fn test_encode_present_zero_differs_from_null() {
    assert_eq!(new_nullable_int(0).encode_json(), "0");
    assert_eq!(NULL_INT.encode_json(), "null");
    assert_eq!(new_nullable_float64(0.0).encode_json(), "0");
    assert_eq!(NULL_FLOAT64.encode_json(), "null");
}

#[test]
fn test_encode_negative_int_has_sign() {
    assert_eq!(new_nullable_int(-7).encode_json(), "-7");
}

// =============================================================================
// DECODE
// =============================================================================

#[test]
fn test_decode_null_into_uint() {
    let mut n = new_nullable_uint(13);
    n.decode_json("null").unwrap();
    assert_eq!(n, Nullable { val: 0, init: false });
}

#[test]
fn test_decode_float_3_14() {
    let mut n = NULL_FLOAT64;
    n.decode_json("3.14").unwrap();
    assert_eq!(n, Nullable { val: 3.14, init: true });
}

#[test]
fn test_decode_not_a_number_into_int() {
    let mut n = NULL_INT;
    let err = n.decode_json("not-a-number").unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MalformedNumericText {
            kind: NumberKind::Int,
            ..
        }
    ));
    assert!(n.init);
}

#[test]
fn test_malformed_uint_inputs() {
    for text in ["", "abc", "-1"] {
        let mut n = NullableUint::default();
        let err = n.decode_json(text).unwrap_err();
        assert!(
            matches!(err, DecodeError::MalformedNumericText { .. }),
            "expected MalformedNumericText for {text:?}"
        );
    }
}

#[test]
fn test_decode_null_never_changes_constant() {
    let mut a = new_nullable_uint(5);
    a.decode_json("null").unwrap();
    a.val = 500;
    assert_eq!(a.val, 500);

    assert_eq!(NULL_UINT, Nullable { val: 0, init: false });
    assert_eq!(NullableUint::NULL.val, 0);
}

#[test]
fn test_decode_null_from_any_state() {
    let states = [
        NULL_FLOAT64,
        new_nullable_float64(0.0),
        new_nullable_float64(-8.25),
        Nullable {
            val: 4.0,
            init: false,
        },
    ];
    for mut n in states {
        n.decode_json("null").unwrap();
        assert_eq!(n, NULL_FLOAT64);
    }
}

#[test]
fn test_accepted_kinds_for_common_fragments() {
    assert_eq!(accepted_kinds("42", DecodeMode::Compat), [true, true, true]);
    assert_eq!(accepted_kinds("-42", DecodeMode::Compat), [false, false, true]);
    assert_eq!(accepted_kinds("-42", DecodeMode::Strict), [false, true, true]);
    assert_eq!(accepted_kinds("4.2", DecodeMode::Compat), [false, false, true]);
    assert_eq!(accepted_kinds("null", DecodeMode::Strict), [true, true, true]);
    assert_eq!(accepted_kinds("true", DecodeMode::Compat), [false, false, false]);
}
