//! The value threaded through and returned by a pipeline run.

use std::fmt;

use crate::error::TypeMismatchError;
use crate::sequence::Sequence;

use super::element::{Element, ElementType};

/// Whether a pipeline value is a sequence or a single scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A [`Sequence`] of elements.
    Sequence,
    /// A single value produced by a reduce stage.
    Scalar,
}

impl Shape {
    /// Returns the lowercase name of the shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// The current value of a pipeline: a sequence, or the scalar left by a
/// reduce stage.
///
/// # Examples
///
/// ```rust
/// use seqpipe::pipeline::{Operation, Shape, run_pipeline};
/// use seqpipe::sequence::Sequence;
///
/// let output = run_pipeline(
///     Sequence::from([1, 2, 3]),
///     [Operation::map(|value: i32| f64::from(value) / 2.0)],
/// )?;
/// assert_eq!(output.shape(), Shape::Sequence);
/// assert_eq!(output.into_sequence::<f64>()?.into_vec(), vec![0.5, 1.0, 1.5]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub enum PipelineOutput {
    /// A sequence of type-erased elements, all of `element_type`.
    Sequence {
        /// The elements.
        elements: Sequence<Element>,
        /// The type every element holds, known even when there are none.
        element_type: ElementType,
    },
    /// A single type-erased value.
    Scalar(Element),
}

impl PipelineOutput {
    /// Erases the element type of `sequence`.
    pub fn from_sequence<T: 'static>(sequence: Sequence<T>) -> Self {
        Self::Sequence {
            elements: sequence.into_iter().map(Element::new).collect(),
            element_type: ElementType::of::<T>(),
        }
    }

    /// Returns the shape of the value.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Sequence { .. } => Shape::Sequence,
            Self::Scalar(_) => Shape::Scalar,
        }
    }

    /// Returns the element type of a sequence, or the type of a scalar.
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Sequence { element_type, .. } => *element_type,
            Self::Scalar(element) => element.element_type(),
        }
    }

    /// Returns the number of elements, or `None` for a scalar.
    #[must_use]
    pub const fn sequence_len(&self) -> Option<usize> {
        match self {
            Self::Sequence { elements, .. } => Some(elements.len()),
            Self::Scalar(_) => None,
        }
    }

    /// Recovers a typed sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the value is a scalar or its element
    /// type is not `T`, whether or not the sequence is empty.
    pub fn into_sequence<T: 'static>(self) -> Result<Sequence<T>, TypeMismatchError> {
        match self {
            Self::Sequence {
                elements,
                element_type,
            } => {
                element_type.ensure(ElementType::of::<T>())?;
                elements.into_iter().map(Element::downcast::<T>).collect()
            }
            Self::Scalar(_) => Err(TypeMismatchError::new(
                Shape::Sequence.as_str(),
                Shape::Scalar.as_str(),
            )),
        }
    }

    /// Recovers a typed scalar.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the value is a sequence or the scalar
    /// is not an `A`.
    pub fn into_scalar<A: 'static>(self) -> Result<A, TypeMismatchError> {
        match self {
            Self::Scalar(element) => element.downcast::<A>(),
            Self::Sequence { .. } => Err(TypeMismatchError::new(
                Shape::Scalar.as_str(),
                Shape::Sequence.as_str(),
            )),
        }
    }
}
