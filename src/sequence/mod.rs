//! Owned, contiguous, growable sequences.
//!
//! This module provides [`Sequence`], the container every stage consumes and
//! produces. A sequence has exactly one owner at a time: stage operators take
//! it by value and hand back a freshly built one, so no two stages ever see
//! the same backing storage.
//!
//! # Overview
//!
//! - O(1) `len`, `is_empty` and `get`
//! - amortized O(1) `append` with fallible growth
//! - allocation failures are reported as [`AllocationError`] instead of
//!   aborting the process
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::sequence::Sequence;
//!
//! let mut sequence = Sequence::create(4)?;
//! sequence.append(1)?;
//! sequence.append(2)?;
//! sequence.append(3)?;
//!
//! assert_eq!(sequence.len(), 3);
//! assert_eq!(sequence.get(1), Ok(&2));
//! assert!(sequence.get(3).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use crate::error::{AllocationError, IndexError};

// =============================================================================
// Sequence Definition
// =============================================================================

/// An ordered, owned list of elements of one type.
///
/// Insertion order is significant. `len()` always equals the number of live
/// elements, and `capacity()` may exceed it.
///
/// # Time Complexity
///
/// | Operation  | Complexity       |
/// |------------|------------------|
/// | `create`   | O(1) + allocation |
/// | `len`      | O(1)             |
/// | `get`      | O(1)             |
/// | `append`   | amortized O(1)   |
///
/// # Examples
///
/// ```rust
/// use seqpipe::sequence::Sequence;
///
/// let sequence: Sequence<i32> = (1..=5).collect();
/// assert_eq!(format!("{sequence}"), "[1, 2, 3, 4, 5]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence without preallocating storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty sequence with room for at least `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the storage cannot be obtained,
    /// including when `capacity` elements would overflow the address space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqpipe::sequence::Sequence;
    ///
    /// let sequence = Sequence::<u64>::create(8).unwrap();
    /// assert!(sequence.is_empty());
    /// assert!(sequence.capacity() >= 8);
    ///
    /// assert!(Sequence::<u64>::create(usize::MAX).is_err());
    /// ```
    pub fn create(capacity: usize) -> Result<Self, AllocationError> {
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(capacity)
            .map_err(|_| AllocationError::new(capacity))?;
        Ok(Self { elements })
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the sequence can hold without growing.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.elements
            .get(index)
            .ok_or_else(|| IndexError::new(index, self.len()))
    }

    /// Appends `value` at the end of the sequence.
    ///
    /// Growth doubles the capacity, so a run of appends costs amortized O(1)
    /// each. On failure the sequence is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the sequence is full and more storage
    /// cannot be obtained.
    pub fn append(&mut self, value: T) -> Result<(), AllocationError> {
        if self.elements.len() == self.elements.capacity() {
            let requested = self.elements.len().saturating_add(1);
            self.elements
                .try_reserve(1)
                .map_err(|_| AllocationError::new(requested))?;
        }
        self.elements.push(value);
        Ok(())
    }

    /// Returns an iterator over references to the elements, in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the live elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the sequence and returns its backing vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(elements: &[T]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: Vec::from(elements),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Sequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        use serde::de::Error;

        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut sequence = Sequence::create(capacity).map_err(A::Error::custom)?;
        while let Some(element) = seq.next_element()? {
            sequence.append(element).map_err(A::Error::custom)?;
        }
        Ok(sequence)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
