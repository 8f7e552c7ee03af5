//! Integration tests for Sequence.

use rstest::rstest;
use seqpipe::error::{AllocationError, IndexError};
use seqpipe::sequence::Sequence;

// =============================================================================
// create
// =============================================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(1024)]
fn test_create_returns_empty_sequence(#[case] capacity: usize) {
    let sequence = Sequence::<String>::create(capacity).unwrap();
    assert_eq!(sequence.len(), 0);
    assert!(sequence.capacity() >= capacity);
}

#[rstest]
fn test_create_refused_capacity() {
    let error = Sequence::<[u8; 16]>::create(usize::MAX / 2).unwrap_err();
    assert_eq!(error, AllocationError::new(usize::MAX / 2));
}

#[rstest]
fn test_create_zero_sized_elements_never_fails() {
    let sequence = Sequence::<()>::create(usize::MAX).unwrap();
    assert!(sequence.is_empty());
}

// =============================================================================
// append / get
// =============================================================================

#[rstest]
fn test_append_then_get_every_index() {
    let mut sequence = Sequence::new();
    for value in 0..100 {
        sequence.append(value * 3).unwrap();
    }
    assert_eq!(sequence.len(), 100);
    for index in 0..100 {
        assert_eq!(sequence.get(index), Ok(&(index * 3)));
    }
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![1], 1)]
#[case(vec![1, 2, 3], 3)]
#[case(vec![1, 2, 3], 10)]
fn test_get_at_or_past_length_is_index_error(#[case] elements: Vec<i32>, #[case] index: usize) {
    let length = elements.len();
    let sequence = Sequence::from(elements);
    assert_eq!(sequence.get(index), Err(IndexError::new(index, length)));
}

#[rstest]
fn test_append_keeps_insertion_order() {
    let mut sequence = Sequence::create(2).unwrap();
    sequence.append("first").unwrap();
    sequence.append("second").unwrap();
    sequence.append("third").unwrap();
    let collected: Vec<&str> = sequence.iter().copied().collect();
    assert_eq!(collected, ["first", "second", "third"]);
}

#[rstest]
fn test_length_never_exceeds_capacity() {
    let mut sequence = Sequence::new();
    for value in 0..37 {
        sequence.append(value).unwrap();
        assert!(sequence.len() <= sequence.capacity());
    }
}

// =============================================================================
// Conversions and formatting
// =============================================================================

#[rstest]
fn test_collect_and_iterate_by_reference() {
    let sequence: Sequence<i32> = (1..=4).collect();
    let total: i32 = (&sequence).into_iter().sum();
    assert_eq!(total, 10);
    assert_eq!(sequence.len(), 4);
}

#[rstest]
fn test_from_slice_clones() {
    let source = [String::from("a"), String::from("b")];
    let sequence = Sequence::from(&source[..]);
    assert_eq!(sequence.as_slice(), &source);
}

#[rstest]
#[case(Sequence::new(), "[]")]
#[case(Sequence::from([7]), "[7]")]
#[case(Sequence::from([1, 2, 3]), "[1, 2, 3]")]
fn test_display(#[case] sequence: Sequence<i32>, #[case] expected: &str) {
    assert_eq!(format!("{sequence}"), expected);
}

#[rstest]
fn test_equality_ignores_capacity() {
    let mut roomy = Sequence::create(64).unwrap();
    roomy.append(1).unwrap();
    let tight = Sequence::from(vec![1]);
    assert_eq!(roomy, tight);
}
