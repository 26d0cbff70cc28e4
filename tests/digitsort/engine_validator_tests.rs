//! Tests for input validation utilities.
//!
//! These tests verify the validation functions used before sorting:
//! - Sign checks for integer inputs
//! - Finiteness, sign, and integrality checks for float inputs
//! - Place value checks for single passes
//! - Error messages
//!
//! ## Test Organization
//!
//! 1. **Integer Validation**
//! 2. **Float Validation**
//! 3. **Place Value Validation**
//! 4. **Error Messages**

use digitsort::internals::engine::validator::Validator;
use digitsort::internals::primitives::errors::RadixError;

// ============================================================================
// Integer Validation Tests
// ============================================================================

/// Test that unsigned inputs always validate.
#[test]
fn test_validate_unsigned() {
    assert!(Validator::validate_non_negative(&[0_u32, u32::MAX]).is_ok());
}

/// Test that empty inputs validate.
#[test]
fn test_validate_empty() {
    assert!(Validator::validate_non_negative::<i32>(&[]).is_ok());
    assert!(Validator::validate_float_values::<f64>(&[]).is_ok());
}

/// Test that only the first negative value is reported.
#[test]
fn test_validate_first_negative() {
    let res = Validator::validate_non_negative(&[0_i8, 1, -1, -2]);

    assert_eq!(
        res,
        Err(RadixError::NegativeValue {
            index: 2,
            value: "-1".to_string()
        })
    );
}

// ============================================================================
// Float Validation Tests
// ============================================================================

/// Test that integral non-negative floats validate.
#[test]
fn test_validate_float_ok() {
    assert!(Validator::validate_float_values(&[0.0_f64, -0.0, 1.0, 1e15]).is_ok());
}

/// Test that NaN is reported as non-finite, not fractional.
#[test]
fn test_validate_float_nan() {
    let res = Validator::validate_float_values(&[f32::NAN]);

    assert!(matches!(
        res,
        Err(RadixError::NonFiniteValue { index: 0, .. })
    ));
}

/// Test that negative fractions are reported as negative.
#[test]
fn test_validate_float_negative_before_fractional() {
    let res = Validator::validate_float_values(&[1.0_f64, -0.5]);

    assert!(matches!(
        res,
        Err(RadixError::NegativeValue { index: 1, .. })
    ));
}

/// Test that fractional values are rejected.
#[test]
fn test_validate_float_fractional() {
    let res = Validator::validate_float_values(&[0.1_f64]);

    assert_eq!(
        res,
        Err(RadixError::FractionalValue {
            index: 0,
            value: "0.1".to_string()
        })
    );
}

// ============================================================================
// Place Value Validation Tests
// ============================================================================

/// Test accepted and rejected place values.
#[test]
fn test_validate_place_value() {
    assert!(Validator::validate_place_value(1_u32).is_ok());
    assert!(Validator::validate_place_value(1000_u32).is_ok());

    assert_eq!(
        Validator::validate_place_value(0_u32),
        Err(RadixError::InvalidPlaceValue("0".to_string()))
    );
    assert_eq!(
        Validator::validate_place_value(-10_i64),
        Err(RadixError::InvalidPlaceValue("-10".to_string()))
    );
    assert!(Validator::validate_place_value(250_u8).is_err());
}

/// Test that place values above i128::MAX are rendered correctly.
#[test]
fn test_validate_place_value_u128_repr() {
    let err = Validator::validate_place_value(u128::MAX).unwrap_err();

    assert_eq!(err, RadixError::InvalidPlaceValue(u128::MAX.to_string()));
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test the Display output of each variant.
#[test]
fn test_error_messages() {
    let negative = RadixError::NegativeValue {
        index: 3,
        value: "-7".to_string(),
    };
    assert_eq!(
        negative.to_string(),
        "Negative value at index 3: -7 (must be >= 0)"
    );

    let place = RadixError::InvalidPlaceValue("20".to_string());
    assert_eq!(
        place.to_string(),
        "Invalid place value: 20 (must be a positive power of 10)"
    );

    let duplicate = RadixError::DuplicateParameter {
        parameter: "verify_output",
    };
    assert!(duplicate.to_string().contains("'verify_output'"));
    assert_eq!(duplicate.index(), None);
}

/// Test that RadixError works as a boxed std error.
#[test]
fn test_error_is_std_error() {
    let boxed: Box<dyn std::error::Error> = Box::new(RadixError::NonFiniteValue {
        index: 0,
        value: "NaN".to_string(),
    });

    assert_eq!(boxed.to_string(), "Non-finite value at index 0: NaN");
}
