//! Error types for sequences, stages and pipelines.
//!
//! Every failure is surfaced to the immediate caller. The leaf errors
//! ([`AllocationError`], [`IndexError`], [`FunctionError`],
//! [`TypeMismatchError`]) are combined into [`StageError`] by the stage
//! operators, and the dispatcher wraps a [`StageError`] together with the
//! position of the failing stage into a [`PipelineError`].
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::error::{PipelineError, StageError, TypeMismatchError};
//! use seqpipe::pipeline::StageKind;
//!
//! let error = PipelineError::new(
//!     1,
//!     StageKind::Map,
//!     StageError::TypeMismatch(TypeMismatchError::new("sequence", "scalar")),
//! );
//! assert_eq!(
//!     format!("{error}"),
//!     "stage 1 (map) failed: type mismatch: expected sequence, found scalar"
//! );
//! ```

use thiserror::Error;

use crate::pipeline::StageKind;

/// Storage for a sequence could not be obtained.
///
/// Raised by [`Sequence::create`](crate::sequence::Sequence::create) and
/// [`Sequence::append`](crate::sequence::Sequence::append) when the allocator
/// refuses the reservation, including capacity overflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("allocation failed: could not reserve storage for {requested} elements")]
pub struct AllocationError {
    /// The total capacity that was requested.
    pub requested: usize,
}

impl AllocationError {
    /// Creates an error for a refused reservation of `requested` elements.
    #[must_use]
    pub const fn new(requested: usize) -> Self {
        Self { requested }
    }
}

/// An index was at or beyond the length of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for sequence of length {length}")]
pub struct IndexError {
    /// The requested index.
    pub index: usize,
    /// The length of the sequence at the time of access.
    pub length: usize,
}

impl IndexError {
    /// Creates an error for `index` against a sequence of `length` elements.
    #[must_use]
    pub const fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }
}

/// A user supplied function or predicate reported a failure.
///
/// # Examples
///
/// ```rust
/// use seqpipe::error::FunctionError;
///
/// let error = FunctionError::new("division by zero");
/// assert_eq!(format!("{error}"), "function failed: division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("function failed: {message}")]
pub struct FunctionError {
    /// Description of the failure.
    pub message: String,
}

impl FunctionError {
    /// Creates an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Captures the rendered message of another error.
    ///
    /// ```rust
    /// use seqpipe::error::FunctionError;
    ///
    /// let parse_failure = "x".parse::<i32>().unwrap_err();
    /// let error = FunctionError::from_error(&parse_failure);
    /// assert_eq!(error.message, "invalid digit found in string");
    /// ```
    #[must_use]
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// A stage received a value of the wrong shape or element type.
///
/// `expected` and `found` are either shape names (`"sequence"`, `"scalar"`)
/// or Rust type names as reported by [`std::any::type_name`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type mismatch: expected {expected}, found {found}")]
pub struct TypeMismatchError {
    /// What the stage required.
    pub expected: &'static str,
    /// What it received.
    pub found: &'static str,
}

impl TypeMismatchError {
    /// Creates a mismatch between `expected` and `found`.
    #[must_use]
    pub const fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }
}

/// Any failure produced by a single stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// Output storage could not be allocated.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    /// An element was accessed out of range.
    #[error(transparent)]
    Index(#[from] IndexError),
    /// The user function failed.
    #[error(transparent)]
    Function(#[from] FunctionError),
    /// The stage input had the wrong shape or element type.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
}

/// A pipeline run aborted at `stage_index`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stage {stage_index} ({stage}) failed: {source}")]
pub struct PipelineError {
    /// Zero-based position of the failing operation.
    pub stage_index: usize,
    /// The kind of the failing operation.
    pub stage: StageKind,
    /// The underlying stage failure.
    #[source]
    pub source: StageError,
}

impl PipelineError {
    /// Wraps `source` as the failure of stage `stage_index`.
    #[must_use]
    pub const fn new(stage_index: usize, stage: StageKind, source: StageError) -> Self {
        Self {
            stage_index,
            stage,
            source,
        }
    }

    /// Returns `true` if the stage failed because of a shape or type mismatch.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.source, StageError::TypeMismatch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_allocation_error_display() {
        let error = AllocationError::new(16);
        assert_eq!(
            format!("{error}"),
            "allocation failed: could not reserve storage for 16 elements"
        );
    }

    #[test]
    fn test_index_error_display() {
        let error = IndexError::new(5, 3);
        assert_eq!(
            format!("{error}"),
            "index 5 out of range for sequence of length 3"
        );
    }

    #[test]
    fn test_stage_error_is_transparent() {
        let error = StageError::from(FunctionError::new("boom"));
        assert_eq!(format!("{error}"), "function failed: boom");
    }

    #[test]
    fn test_stage_error_from_conversions() {
        assert!(matches!(
            StageError::from(AllocationError::new(1)),
            StageError::Allocation(_)
        ));
        assert!(matches!(
            StageError::from(IndexError::new(0, 0)),
            StageError::Index(_)
        ));
        assert!(matches!(
            StageError::from(TypeMismatchError::new("i32", "u8")),
            StageError::TypeMismatch(_)
        ));
    }

    #[test]
    fn test_pipeline_error_source_is_stage_error() {
        let error = PipelineError::new(
            2,
            StageKind::Filter,
            StageError::Function(FunctionError::new("bad predicate")),
        );
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("function failed: bad predicate"));
        assert!(!error.is_type_mismatch());
    }

    #[test]
    fn test_pipeline_error_equality() {
        let first = PipelineError::new(
            1,
            StageKind::Map,
            TypeMismatchError::new("sequence", "scalar").into(),
        );
        let second = first.clone();
        assert_eq!(first, second);
        assert!(first.is_type_mismatch());
    }
}
