//! Simple Option Tests
//!
//! `Opt<T>` is a plain holder; it only needs to construct and dereference.

use crate::*;

#[test]
fn test_new_int_dereferences() {
    let seven = new_int(7);
    assert_eq!(*seven, 7);
}

#[test]
fn test_zero_constants_hold_zero() {
    assert_eq!(*ZERO_UINT, 0);
    assert_eq!(*ZERO_INT, 0);
    assert_eq!(*ZERO_FLOAT64, 0.0);
}

#[test]
fn test_options_inside_struct() {
    struct Limits {
        max: Option<Uint>,
        scale: Option<Float64>,
        floor: Int,
    }

    let limits = Limits {
        max: Some(new_uint(10)),
        scale: None,
        floor: new_int(-3),
    };

    assert_eq!(limits.max.map(|m| *m), Some(10));
    assert!(limits.scale.is_none());
    assert_eq!(*limits.floor + 1, -2);
    assert_eq!(*new_float64(2.5) * 2.0, 5.0);
}
