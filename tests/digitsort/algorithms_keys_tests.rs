//! Tests for float key extraction.

use digitsort::internals::algorithms::keys::{float_keys, float_repr};
use digitsort::internals::primitives::errors::RadixError;

/// Test that keys equal the float values exactly.
#[test]
fn test_float_keys_exact() {
    let keyed = float_keys(&[0.0_f64, 42.0, 9_007_199_254_740_992.0]).unwrap();

    let keys: Vec<u128> = keyed.iter().map(|&(k, _)| k).collect();
    assert_eq!(keys, vec![0, 42, 9_007_199_254_740_992]);
}

/// Test that f32 keys work as well.
#[test]
fn test_float_keys_f32() {
    let keyed = float_keys(&[16_777_216.0_f32]).unwrap();
    assert_eq!(keyed[0].0, 16_777_216);
}

/// Test that oversized values report their index.
#[test]
fn test_float_keys_unrepresentable() {
    let err = float_keys(&[1.0_f64, 2.0, 1e39]).unwrap_err();
    assert!(matches!(err, RadixError::Unrepresentable { index: 2, .. }));
}

/// Test float formatting used in error messages.
#[test]
fn test_float_repr() {
    assert_eq!(float_repr(2.5_f64), "2.5");
    assert_eq!(float_repr(-3.0_f32), "-3");
    assert_eq!(float_repr(f64::NAN), "NaN");
}
