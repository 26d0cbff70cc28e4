//! Tests for the radix driver.
//!
//! ## Test Organization
//!
//! 1. **Pass Counting** - Number and place values of passes
//! 2. **Tracing** - Per-pass snapshots
//! 3. **Keyed Runs** - Sorting values by an extracted key
//! 4. **Checked Passes** - Validated single passes

use digitsort::internals::engine::executor::{RadixConfig, RadixExecutor};
use digitsort::internals::primitives::errors::RadixError;

// ============================================================================
// Pass Counting Tests
// ============================================================================

/// Test that the pass count equals the digit count of the maximum.
#[test]
fn test_pass_count_matches_digits() {
    for max in [1_u64, 9, 10, 99, 100, 12_345, 10_u64.pow(12)] {
        let output = RadixExecutor::new().run(&[0, max, 1]);

        assert_eq!(output.passes(), max.to_string().len(), "max = {max}");
        assert_eq!(output.max_key, Some(max));
    }
}

/// Test that all-zero input needs no passes.
#[test]
fn test_all_zero_no_passes() {
    let output = RadixExecutor::new().run(&[0_u32, 0]);

    assert_eq!(output.passes(), 0);
    assert_eq!(output.sorted, vec![0, 0]);
}

/// Test that empty input returns immediately.
#[test]
fn test_empty_input() {
    let output = RadixExecutor::new().run::<u32>(&[]);

    assert!(output.sorted.is_empty());
    assert_eq!(output.max_key, None);
    assert!(output.place_values.is_empty());
    assert_eq!(output.trace, None);
}

// ============================================================================
// Tracing Tests
// ============================================================================

/// Test per-pass snapshots for the worked example.
#[test]
fn test_trace_snapshots() {
    let executor = RadixExecutor::from_config(&RadixConfig { trace_passes: true });
    let output = executor.run(&[170_u32, 45, 75, 90, 802, 24, 2, 66]);

    assert_eq!(output.place_values, vec![1, 10, 100]);
    assert_eq!(
        output.trace,
        Some(vec![
            vec![170, 90, 802, 2, 24, 45, 75, 66],
            vec![802, 2, 24, 45, 66, 170, 75, 90],
            vec![2, 24, 45, 66, 75, 90, 170, 802],
        ])
    );
}

/// Test that tracing can be toggled on the executor itself.
#[test]
fn test_trace_toggle() {
    let executor = RadixExecutor::new().trace_passes(true).trace_passes(false);

    assert_eq!(executor.run(&[3_u8, 1]).trace, None);
}

// ============================================================================
// Keyed Run Tests
// ============================================================================

/// Test sorting records by a numeric field, keeping ties in input order.
#[test]
fn test_run_by_key_stable() {
    let records = [("carol", 30_u32), ("alice", 25), ("bob", 30), ("dave", 7)];

    let output = RadixExecutor::new().run_by_key(&records, |&(_, age)| age);
    let names: Vec<&str> = output.sorted.iter().map(|&(name, _)| name).collect();

    assert_eq!(names, vec!["dave", "alice", "carol", "bob"]);
    assert_eq!(output.max_key, Some(30));
}

// ============================================================================
// Checked Pass Tests
// ============================================================================

/// Test a valid single pass.
#[test]
fn test_checked_pass_ok() {
    let output = RadixExecutor::checked_pass(&[21_i32, 12, 30], 1).unwrap();

    assert_eq!(output, vec![30, 21, 12]);
}

/// Test that invalid place values are rejected.
#[test]
fn test_checked_pass_bad_place() {
    let res = RadixExecutor::checked_pass(&[1_u32], 5);

    assert_eq!(res, Err(RadixError::InvalidPlaceValue("5".to_string())));
}

/// Test that negative values are rejected before the pass.
#[test]
fn test_checked_pass_negative() {
    let res = RadixExecutor::checked_pass(&[1_i32, -4], 10);

    assert!(matches!(
        res,
        Err(RadixError::NegativeValue { index: 1, .. })
    ));
}
