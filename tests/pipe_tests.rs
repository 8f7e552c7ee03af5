//! Unit tests for the pipe! and try_pipe! macros.
//!
//! Tests for left-to-right piping of single values.

#![cfg(feature = "compose")]

use seqpipe::error::FunctionError;
use seqpipe::sequence::Sequence;
use seqpipe::stage::{filter, map, reduce};
use seqpipe::{pipe, try_pipe};

// =============================================================================
// Basic pipe! tests
// =============================================================================

#[test]
fn test_pipe_value_only_string() {
    let result = pipe!(String::from("hello"));
    assert_eq!(result, "hello");
}

#[test]
fn test_pipe_many_functions() {
    let add_one = |value: i32| value + 1;
    let double = |value: i32| value * 2;
    let square = |value: i32| value * value;
    let negate = |value: i32| -value;
    let add_hundred = |value: i32| value + 100;

    // 2 -> 3 -> 6 -> 36 -> -36 -> 64
    let result = pipe!(2, add_one, double, square, negate, add_hundred);
    assert_eq!(result, 64);
}

#[test]
fn test_pipe_with_trailing_comma() {
    fn double(value: i32) -> i32 {
        value * 2
    }

    let result = pipe!(5, double, double,);
    assert_eq!(result, 20);
}

#[test]
fn test_pipe_with_type_conversion() {
    fn to_string(value: i32) -> String {
        value.to_string()
    }
    fn get_length(text: String) -> usize {
        text.len()
    }

    let result = pipe!(12345, to_string, get_length);
    assert_eq!(result, 5);
}

#[test]
fn test_pipe_with_fn_once_closure() {
    let captured = Sequence::from([1, 2, 3]);
    let consume = move |extra: i32| {
        let mut sequence = captured;
        sequence.extend([extra]);
        sequence
    };

    let result = pipe!(4, consume);
    assert_eq!(result.into_vec(), vec![1, 2, 3, 4]);
}

// =============================================================================
// Piping sequences through stages
// =============================================================================

#[test]
fn test_pipe_through_stage_operators() {
    fn double_all(sequence: Sequence<i32>) -> Sequence<i32> {
        map(sequence, |value| value * 2)
    }
    fn keep_large(sequence: Sequence<i32>) -> Sequence<i32> {
        filter(sequence, |value| *value > 4)
    }
    fn sum(sequence: Sequence<i32>) -> i32 {
        reduce(sequence, 0, |accumulator, value| accumulator + value)
    }

    let result = pipe!(Sequence::from([1, 2, 3, 4, 5]), double_all, keep_large, sum);
    assert_eq!(result, 24);
}

// =============================================================================
// try_pipe! tests
// =============================================================================

fn checked_double(value: i32) -> Result<i32, FunctionError> {
    value
        .checked_mul(2)
        .ok_or_else(|| FunctionError::new("overflow"))
}

#[test]
fn test_try_pipe_all_ok() {
    let result = try_pipe!(3, checked_double, checked_double, checked_double);
    assert_eq!(result, Ok(24));
}

#[test]
fn test_try_pipe_stops_on_error() {
    let result = try_pipe!(i32::MAX / 2 + 1, checked_double, checked_double);
    assert_eq!(result, Err(FunctionError::new("overflow")));
}

#[test]
fn test_try_pipe_single_function() {
    let result = try_pipe!(1, checked_double,);
    assert_eq!(result, Ok(2));
}

#[test]
fn test_try_pipe_matches_and_then_chain() {
    for input in [-5, 0, 7, i32::MAX / 4, i32::MAX] {
        let piped = try_pipe!(input, checked_double, checked_double);
        let chained = checked_double(input).and_then(checked_double);
        assert_eq!(piped, chained, "Failed for input: {input}");
    }
}
