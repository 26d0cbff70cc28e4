//! Tests for the RadixResult output type.

use digitsort::internals::engine::output::RadixResult;

fn sample_result(trace: bool, sorted: Option<bool>) -> RadixResult<u32> {
    RadixResult {
        values: vec![2, 24, 802],
        max_value: Some(802),
        passes: 3,
        place_values: vec![1, 10, 100],
        pass_trace: trace.then(|| {
            vec![
                vec![802, 2, 24],
                vec![802, 2, 24],
                vec![2, 24, 802],
            ]
        }),
        sorted,
    }
}

/// Test the query helpers.
#[test]
fn test_query_methods() {
    let result = sample_result(true, Some(true));

    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
    assert!(result.has_trace());
    assert_eq!(result.is_sorted(), Some(true));
    assert_eq!(result.into_values(), vec![2, 24, 802]);
}

/// Test the summary-only Display output.
#[test]
fn test_display_summary() {
    let text = sample_result(false, None).to_string();

    assert!(text.starts_with("Summary:\n"));
    assert!(text.contains("  Data points: 3\n"));
    assert!(text.contains("  Max value:   802\n"));
    assert!(text.contains("  Passes:      3\n"));
    assert!(!text.contains("Verified"));
    assert!(!text.contains("Pass Trace"));
    assert!(text.ends_with("Sorted Data:\n  [2, 24, 802]\n"));
}

/// Test Display output with trace and verification.
#[test]
fn test_display_trace_and_verification() {
    let text = sample_result(true, Some(false)).to_string();

    assert!(text.contains("  Verified:    NOT sorted\n"));
    assert!(text.contains("Pass Trace:\n"));
    assert!(text.contains("  place 1     [802, 2, 24]\n"));
    assert!(text.contains("  place 100   [2, 24, 802]\n"));
}

/// Test Display output for an empty result.
#[test]
fn test_display_empty() {
    let result: RadixResult<u8> = RadixResult {
        values: vec![],
        max_value: None,
        passes: 0,
        place_values: vec![],
        pass_trace: None,
        sorted: None,
    };

    let text = result.to_string();
    assert!(text.contains("  Max value:   -\n"));
    assert!(text.contains("Sorted Data:\n  []\n"));
}
