//! Stage operators over [`Sequence`].
//!
//! Each operator consumes one sequence together with a user function and
//! produces a new sequence or a single value. The input is either moved into
//! the operator and dropped once the output is built, or, for [`foreach`],
//! only borrowed, so no operator ever mutates what it was given.
//!
//! | Operator  | Output          | Length          |
//! |-----------|-----------------|-----------------|
//! | [`map`]     | `Sequence<U>` | same as input   |
//! | [`filter`]  | `Sequence<T>` | at most input   |
//! | [`foreach`] | `()`          | input untouched |
//! | [`reduce`]  | `A`           | collapses       |
//!
//! The `try_*` variants accept functions returning
//! `Result<_, FunctionError>` and stop at the first failure.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::sequence::Sequence;
//! use seqpipe::stage::{filter, map, reduce};
//!
//! let sequence = Sequence::from([1, 2, 3, 4, 5]);
//! let doubled = map(sequence, |value| value * 2);
//! let large = filter(doubled, |value| *value > 4);
//! assert_eq!(large.as_slice(), &[6, 8, 10]);
//!
//! let total = reduce(large, 0, |accumulator, value| accumulator + value);
//! assert_eq!(total, 24);
//! ```

use crate::error::{FunctionError, StageError};
use crate::sequence::Sequence;

/// Applies `function` to every element, preserving order and length.
///
/// ```rust
/// use seqpipe::sequence::Sequence;
/// use seqpipe::stage::map;
///
/// let lengths = map(Sequence::from(["a", "bcd"]), str::len);
/// assert_eq!(lengths.as_slice(), &[1, 3]);
/// ```
pub fn map<T, U, F>(sequence: Sequence<T>, function: F) -> Sequence<U>
where
    F: FnMut(T) -> U,
{
    sequence.into_iter().map(function).collect()
}

/// Keeps, in their original order, the elements for which `predicate`
/// returns `true`.
pub fn filter<T, P>(sequence: Sequence<T>, mut predicate: P) -> Sequence<T>
where
    P: FnMut(&T) -> bool,
{
    sequence
        .into_iter()
        .filter(|element| predicate(element))
        .collect()
}

/// Calls `consumer` once per element, in order, for its side effects.
///
/// The sequence is only borrowed and is left exactly as it was.
///
/// ```rust
/// use seqpipe::sequence::Sequence;
/// use seqpipe::stage::foreach;
///
/// let sequence = Sequence::from([1, 2, 3]);
/// let mut seen = Vec::new();
/// foreach(&sequence, |value| seen.push(*value));
/// assert_eq!(seen, vec![1, 2, 3]);
/// assert_eq!(sequence.len(), 3);
/// ```
pub fn foreach<T, C>(sequence: &Sequence<T>, consumer: C)
where
    C: FnMut(&T),
{
    sequence.iter().for_each(consumer);
}

/// Folds the sequence left to right starting from `initial`.
///
/// `acc_0 = initial`, `acc_i = function(acc_(i-1), sequence[i])`. An empty
/// sequence returns `initial` unchanged. The accumulator type `A` is
/// independent of the element type.
///
/// ```rust
/// use seqpipe::sequence::Sequence;
/// use seqpipe::stage::reduce;
///
/// let empty: Sequence<i32> = Sequence::new();
/// assert_eq!(reduce(empty, 7, |accumulator, value| accumulator + value), 7);
///
/// let words = Sequence::from(["a", "b", "c"]);
/// let joined = reduce(words, String::new(), |mut accumulator, word| {
///     accumulator.push_str(word);
///     accumulator
/// });
/// assert_eq!(joined, "abc");
/// ```
pub fn reduce<T, A, F>(sequence: Sequence<T>, initial: A, function: F) -> A
where
    F: FnMut(A, T) -> A,
{
    sequence.into_iter().fold(initial, function)
}

/// Fallible [`map`].
///
/// # Errors
///
/// Returns [`StageError::Allocation`] if the output cannot be allocated and
/// [`StageError::Function`] on the first failing call to `function`.
pub fn try_map<T, U, F>(sequence: Sequence<T>, function: F) -> Result<Sequence<U>, StageError>
where
    F: FnMut(T) -> Result<U, FunctionError>,
{
    try_map_with(sequence, function)
}

/// Fallible [`filter`].
///
/// # Errors
///
/// Returns [`StageError::Allocation`] if the output cannot be allocated and
/// [`StageError::Function`] on the first failing call to `predicate`.
pub fn try_filter<T, P>(sequence: Sequence<T>, predicate: P) -> Result<Sequence<T>, StageError>
where
    P: FnMut(&T) -> Result<bool, FunctionError>,
{
    try_filter_with(sequence, predicate)
}

/// Fallible [`foreach`].
///
/// # Errors
///
/// Returns [`StageError::Function`] on the first failing call to `consumer`;
/// later elements are not visited.
pub fn try_foreach<T, C>(sequence: &Sequence<T>, consumer: C) -> Result<(), StageError>
where
    C: FnMut(&T) -> Result<(), FunctionError>,
{
    try_foreach_with(sequence, consumer)
}

/// Fallible [`reduce`].
///
/// # Errors
///
/// Returns [`StageError::Function`] on the first failing call to `function`.
pub fn try_reduce<T, A, F>(sequence: Sequence<T>, initial: A, function: F) -> Result<A, StageError>
where
    F: FnMut(A, T) -> Result<A, FunctionError>,
{
    try_reduce_with(sequence, initial, function)
}

// =============================================================================
// Shared fallible loops
// =============================================================================

// Generic over the function's error so the dispatcher can feed erased
// functions that already fail with `StageError`.

pub(crate) fn try_map_with<T, U, E, F>(
    sequence: Sequence<T>,
    mut function: F,
) -> Result<Sequence<U>, StageError>
where
    F: FnMut(T) -> Result<U, E>,
    StageError: From<E>,
{
    let mut output = Sequence::create(sequence.len())?;
    for element in sequence {
        output.append(function(element)?)?;
    }
    Ok(output)
}

pub(crate) fn try_filter_with<T, E, P>(
    sequence: Sequence<T>,
    mut predicate: P,
) -> Result<Sequence<T>, StageError>
where
    P: FnMut(&T) -> Result<bool, E>,
    StageError: From<E>,
{
    let mut output = Sequence::create(sequence.len())?;
    for element in sequence {
        if predicate(&element)? {
            output.append(element)?;
        }
    }
    Ok(output)
}

pub(crate) fn try_foreach_with<T, E, C>(
    sequence: &Sequence<T>,
    mut consumer: C,
) -> Result<(), StageError>
where
    C: FnMut(&T) -> Result<(), E>,
    StageError: From<E>,
{
    for element in sequence {
        consumer(element)?;
    }
    Ok(())
}

pub(crate) fn try_reduce_with<T, A, E, F>(
    sequence: Sequence<T>,
    initial: A,
    mut function: F,
) -> Result<A, StageError>
where
    F: FnMut(A, T) -> Result<A, E>,
    StageError: From<E>,
{
    let mut accumulator = initial;
    for element in sequence {
        accumulator = function(accumulator, element)?;
    }
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Sequence<i32> {
        Sequence::from([1, 2, 3, 4, 5])
    }

    #[rstest]
    fn test_map_preserves_length_and_order() {
        let mapped = map(sample(), |value| value * 10);
        assert_eq!(mapped.as_slice(), &[10, 20, 30, 40, 50]);
    }

    #[rstest]
    fn test_map_changes_element_type() {
        let mapped = map(sample(), |value| value.to_string());
        assert_eq!(mapped.as_slice(), &["1", "2", "3", "4", "5"]);
    }

    #[rstest]
    fn test_filter_keeps_order() {
        let filtered = filter(sample(), |value| value % 2 == 1);
        assert_eq!(filtered.as_slice(), &[1, 3, 5]);
    }

    #[rstest]
    fn test_filter_rejecting_everything() {
        let filtered = filter(sample(), |_| false);
        assert!(filtered.is_empty());
    }

    #[rstest]
    fn test_foreach_visits_in_order() {
        let sequence = sample();
        let mut visited = Vec::new();
        foreach(&sequence, |value| visited.push(*value));
        assert_eq!(visited, vec![1, 2, 3, 4, 5]);
        assert_eq!(sequence, sample());
    }

    #[rstest]
    fn test_reduce_folds_left_to_right() {
        // ((((0 - 1) - 2) - 3) - 4) - 5
        let folded = reduce(sample(), 0, |accumulator, value| accumulator - value);
        assert_eq!(folded, -15);
    }

    #[rstest]
    fn test_try_map_stops_at_first_failure() {
        let mut calls = 0;
        let result = try_map(sample(), |value| {
            calls += 1;
            if value == 3 {
                Err(FunctionError::new("three"))
            } else {
                Ok(value)
            }
        });
        assert_eq!(result, Err(StageError::Function(FunctionError::new("three"))));
        assert_eq!(calls, 3);
    }

    #[rstest]
    fn test_try_filter_success_matches_filter() {
        let result = try_filter(sample(), |value| Ok(*value > 2)).unwrap();
        assert_eq!(result, filter(sample(), |value| *value > 2));
    }

    #[rstest]
    fn test_try_foreach_reports_failure() {
        let result = try_foreach(&sample(), |value| {
            if *value > 4 {
                Err(FunctionError::new("too large"))
            } else {
                Ok(())
            }
        });
        assert!(matches!(result, Err(StageError::Function(_))));
    }

    #[rstest]
    fn test_try_reduce_checked_overflow() {
        let sequence = Sequence::from([i32::MAX, 1]);
        let result = try_reduce(sequence, 0_i32, |accumulator, value| {
            accumulator
                .checked_add(value)
                .ok_or_else(|| FunctionError::new("overflow"))
        });
        assert_eq!(result, Err(StageError::Function(FunctionError::new("overflow"))));
    }
}
