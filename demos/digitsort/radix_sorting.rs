//! Radix Sorting Examples
//!
//! This example walks through the library's entry points:
//! - Sorting the classic eight-element example
//! - Watching each digit pass through the builder's trace
//! - Sorting signed and floating-point inputs
//! - Handling rejected inputs
//! - A quick timing comparison against `slice::sort_unstable`
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use digitsort::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), RadixError> {
    println!("{}", "=".repeat(80));
    println!("Decimal Radix Sort - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_sort();
    example_2_pass_trace()?;
    example_3_other_types()?;
    example_4_rejected_inputs();
    example_5_benchmark();

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Sort
/// The input slice is borrowed and left as it was.
fn example_1_basic_sort() {
    println!("Example 1: Basic Sort");
    println!("{}", "-".repeat(80));

    let unsorted: Vec<u32> = vec![170, 45, 75, 90, 802, 24, 2, 66];
    let sorted = radix_sort(&unsorted);

    println!("Original: {:?}", unsorted);
    println!("Sorted:   {:?}", sorted);
    // Original: [170, 45, 75, 90, 802, 24, 2, 66]
    // Sorted:   [2, 24, 45, 66, 75, 90, 170, 802]
    println!();
}

#[cfg(feature = "std")]
/// Example 2: Pass Trace
/// One counting pass per decimal digit of the largest value.
fn example_2_pass_trace() -> Result<(), RadixError> {
    println!("Example 2: Pass Trace");
    println!("{}", "-".repeat(80));

    let sorter = RadixSort::new().trace_passes().verify_output().build()?;
    let result = sorter.sort(&[10000_u32, 1, 999])?;

    println!("{}", result);
    // Summary:
    //   Data points: 3
    //   Max value:   10000
    //   Passes:      5
    //   Verified:    sorted
    //
    // Pass Trace:
    //   place 1     [10000, 1, 999]
    //   place 10    [10000, 1, 999]
    //   place 100   [10000, 1, 999]
    //   place 1000  [10000, 1, 999]
    //   place 10000 [1, 999, 10000]
    //
    // Sorted Data:
    //   [1, 999, 10000]
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Signed and Floating-Point Inputs
fn example_3_other_types() -> Result<(), RadixError> {
    println!("Example 3: Signed and Floating-Point Inputs");
    println!("{}", "-".repeat(80));

    let signed = try_radix_sort(&[3_i64, 3, 2, 1, 2])?;
    println!("i64: {:?}", signed);
    // i64: [1, 2, 2, 3, 3]

    let floats = try_radix_sort_float(&[1e12_f64, 7.0, 0.0, 4096.0])?;
    println!("f64: {:?}", floats);
    // f64: [0.0, 7.0, 4096.0, 1000000000000.0]
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Rejected Inputs
/// Values that are not non-negative integers are never sorted.
fn example_4_rejected_inputs() {
    println!("Example 4: Rejected Inputs");
    println!("{}", "-".repeat(80));

    if let Err(e) = try_radix_sort(&[5_i32, -12, 8]) {
        println!("i32:  {}", e);
        // i32:  Negative value at index 1: -12 (must be >= 0)
    }
    if let Err(e) = try_radix_sort_float(&[1.0_f64, 2.75]) {
        println!("f64:  {}", e);
        // f64:  Fractional value at index 1: 2.75 (must be an integer)
    }
    if let Err(e) = RadixSort::<u32>::new()
        .verify_output()
        .verify_output()
        .build()
    {
        println!("build: {}", e);
        // build: Parameter 'verify_output' was set multiple times. ...
    }
    println!();
}

#[cfg(feature = "std")]
/// Example 5: Benchmark
/// Pseudo-random keys from a fixed linear congruential sequence.
fn example_5_benchmark() {
    println!("Example 5: Benchmark");
    println!("{}", "-".repeat(80));

    let n = 1_000_000;
    let mut state = 0x2545_F491_4F6C_DD1D_u64;
    let data: Vec<u64> = (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            state >> 24
        })
        .collect();

    let start = Instant::now();
    let sorted = radix_sort(&data);
    let radix_time = start.elapsed();

    let mut reference = data.clone();
    let start = Instant::now();
    reference.sort_unstable();
    let std_time = start.elapsed();

    assert_eq!(sorted, reference);
    println!("n = {n}");
    println!("radix_sort:           {:?}", radix_time);
    println!("slice::sort_unstable: {:?}", std_time);
}
