//! Tagged pipeline operations.

use std::fmt;

use crate::error::{FunctionError, StageError};

use super::element::{Element, ElementType};

/// Erased transformation carried by [`Operation::Map`].
pub type MapFunction = Box<dyn FnMut(Element) -> Result<Element, StageError>>;

/// Erased predicate carried by [`Operation::Filter`].
pub type PredicateFunction = Box<dyn FnMut(&Element) -> Result<bool, StageError>>;

/// Erased consumer carried by [`Operation::Foreach`].
pub type ConsumerFunction = Box<dyn FnMut(&Element) -> Result<(), StageError>>;

/// Erased fold step carried by [`Operation::Reduce`], called as
/// `function(accumulator, element)`.
pub type FoldFunction = Box<dyn FnMut(Element, Element) -> Result<Element, StageError>>;

/// The tag of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StageKind {
    /// Element-wise transformation.
    Map,
    /// Element selection.
    Filter,
    /// Side effects per element.
    Foreach,
    /// Left fold to a scalar.
    Reduce,
    /// End of the operation list.
    Terminate,
}

impl StageKind {
    /// Returns the lowercase name of the stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Filter => "filter",
            Self::Foreach => "foreach",
            Self::Reduce => "reduce",
            Self::Terminate => "terminate",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One stage of a pipeline.
///
/// Every stage records the [`ElementType`] it accepts, and a map stage also
/// the type it produces. The dispatcher compares these with the sequence it
/// holds before calling any function, so a stage built for the wrong type
/// fails the same way on empty and non-empty input.
///
/// # Examples
///
/// ```rust
/// use seqpipe::pipeline::{Operation, StageKind};
///
/// let operations = [
///     Operation::map(|value: i32| value * 2),
///     Operation::filter(|value: &i32| *value > 4),
///     Operation::reduce(0, |accumulator: i32, value: i32| accumulator + value),
/// ];
/// let kinds: Vec<StageKind> = operations.iter().map(Operation::kind).collect();
/// assert_eq!(kinds, [StageKind::Map, StageKind::Filter, StageKind::Reduce]);
/// ```
pub enum Operation {
    /// Replace every element with `function(element)`.
    Map {
        /// The element type consumed.
        input: ElementType,
        /// The element type produced.
        output: ElementType,
        /// The transformation.
        function: MapFunction,
    },
    /// Keep the elements for which the predicate holds.
    Filter {
        /// The element type inspected.
        input: ElementType,
        /// The predicate.
        predicate: PredicateFunction,
    },
    /// Run the consumer per element and pass the sequence on unchanged.
    Foreach {
        /// The element type visited.
        input: ElementType,
        /// The consumer.
        consumer: ConsumerFunction,
    },
    /// Fold the sequence into a scalar.
    Reduce {
        /// The element type folded.
        input: ElementType,
        /// The starting accumulator.
        initial: Element,
        /// The fold step.
        function: FoldFunction,
    },
    /// Stop dispatching; later operations are ignored.
    Terminate,
}

impl Operation {
    /// Builds a map stage from `T -> U`.
    pub fn map<T, U, F>(mut function: F) -> Self
    where
        T: 'static,
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        Self::Map {
            input: ElementType::of::<T>(),
            output: ElementType::of::<U>(),
            function: Box::new(move |element: Element| -> Result<Element, StageError> {
                let value = element.downcast::<T>()?;
                Ok(Element::new(function(value)))
            }),
        }
    }

    /// Builds a map stage from a fallible `T -> U`.
    pub fn try_map<T, U, F>(mut function: F) -> Self
    where
        T: 'static,
        U: 'static,
        F: FnMut(T) -> Result<U, FunctionError> + 'static,
    {
        Self::Map {
            input: ElementType::of::<T>(),
            output: ElementType::of::<U>(),
            function: Box::new(move |element: Element| -> Result<Element, StageError> {
                let value = element.downcast::<T>()?;
                Ok(Element::new(function(value)?))
            }),
        }
    }

    /// Builds a filter stage from a predicate over `&T`.
    pub fn filter<T, P>(mut predicate: P) -> Self
    where
        T: 'static,
        P: FnMut(&T) -> bool + 'static,
    {
        Self::Filter {
            input: ElementType::of::<T>(),
            predicate: Box::new(move |element: &Element| -> Result<bool, StageError> {
                Ok(predicate(element.downcast_ref::<T>()?))
            }),
        }
    }

    /// Builds a filter stage from a fallible predicate.
    pub fn try_filter<T, P>(mut predicate: P) -> Self
    where
        T: 'static,
        P: FnMut(&T) -> Result<bool, FunctionError> + 'static,
    {
        Self::Filter {
            input: ElementType::of::<T>(),
            predicate: Box::new(move |element: &Element| -> Result<bool, StageError> {
                Ok(predicate(element.downcast_ref::<T>()?)?)
            }),
        }
    }

    /// Builds a foreach stage from a consumer over `&T`.
    pub fn foreach<T, C>(mut consumer: C) -> Self
    where
        T: 'static,
        C: FnMut(&T) + 'static,
    {
        Self::Foreach {
            input: ElementType::of::<T>(),
            consumer: Box::new(move |element: &Element| -> Result<(), StageError> {
                consumer(element.downcast_ref::<T>()?);
                Ok(())
            }),
        }
    }

    /// Builds a foreach stage from a fallible consumer.
    pub fn try_foreach<T, C>(mut consumer: C) -> Self
    where
        T: 'static,
        C: FnMut(&T) -> Result<(), FunctionError> + 'static,
    {
        Self::Foreach {
            input: ElementType::of::<T>(),
            consumer: Box::new(move |element: &Element| -> Result<(), StageError> {
                Ok(consumer(element.downcast_ref::<T>()?)?)
            }),
        }
    }

    /// Builds a reduce stage folding `T` elements into an `A` accumulator.
    pub fn reduce<T, A, F>(initial: A, mut function: F) -> Self
    where
        T: 'static,
        A: 'static,
        F: FnMut(A, T) -> A + 'static,
    {
        Self::Reduce {
            input: ElementType::of::<T>(),
            initial: Element::new(initial),
            function: Box::new(
                move |accumulator: Element, element: Element| -> Result<Element, StageError> {
                    let accumulator = accumulator.downcast::<A>()?;
                    let value = element.downcast::<T>()?;
                    Ok(Element::new(function(accumulator, value)))
                },
            ),
        }
    }

    /// Builds a reduce stage from a fallible fold step.
    pub fn try_reduce<T, A, F>(initial: A, mut function: F) -> Self
    where
        T: 'static,
        A: 'static,
        F: FnMut(A, T) -> Result<A, FunctionError> + 'static,
    {
        Self::Reduce {
            input: ElementType::of::<T>(),
            initial: Element::new(initial),
            function: Box::new(
                move |accumulator: Element, element: Element| -> Result<Element, StageError> {
                    let accumulator = accumulator.downcast::<A>()?;
                    let value = element.downcast::<T>()?;
                    Ok(Element::new(function(accumulator, value)?))
                },
            ),
        }
    }

    /// Builds the terminator sentinel.
    #[must_use]
    pub const fn terminate() -> Self {
        Self::Terminate
    }

    /// Returns the tag of this operation.
    #[must_use]
    pub const fn kind(&self) -> StageKind {
        match self {
            Self::Map { .. } => StageKind::Map,
            Self::Filter { .. } => StageKind::Filter,
            Self::Foreach { .. } => StageKind::Foreach,
            Self::Reduce { .. } => StageKind::Reduce,
            Self::Terminate => StageKind::Terminate,
        }
    }

    /// Returns the element type the stage accepts, or `None` for the
    /// terminator.
    #[must_use]
    pub const fn input_type(&self) -> Option<ElementType> {
        match self {
            Self::Map { input, .. }
            | Self::Filter { input, .. }
            | Self::Foreach { input, .. }
            | Self::Reduce { input, .. } => Some(*input),
            Self::Terminate => None,
        }
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reduce { initial, .. } => formatter
                .debug_struct("Reduce")
                .field("initial", initial)
                .finish_non_exhaustive(),
            other => write!(formatter, "{}", other.kind()),
        }
    }
}

static_assertions::assert_not_impl_any!(Operation: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypeMismatchError;

    #[test]
    fn test_stage_kind_display() {
        assert_eq!(StageKind::Map.to_string(), "map");
        assert_eq!(StageKind::Foreach.to_string(), "foreach");
        assert_eq!(StageKind::Terminate.to_string(), "terminate");
    }

    #[test]
    fn test_map_rejects_wrong_element_type() {
        let Operation::Map { mut function, .. } = Operation::map(|value: i32| value + 1) else {
            panic!("expected a map operation");
        };
        let error = function(Element::new("text")).unwrap_err();
        assert_eq!(
            error,
            StageError::TypeMismatch(TypeMismatchError::new("i32", "&str"))
        );
    }

    #[test]
    fn test_reduce_step_applies_function() {
        let Operation::Reduce {
            initial,
            mut function,
            ..
        } = Operation::reduce(10_i64, |accumulator: i64, value: i32| {
            accumulator + i64::from(value)
        })
        else {
            panic!("expected a reduce operation");
        };
        let result = function(initial, Element::new(5_i32)).unwrap();
        assert_eq!(result.downcast::<i64>(), Ok(15));
    }

    #[test]
    fn test_try_filter_propagates_function_error() {
        let Operation::Filter { mut predicate, .. } =
            Operation::try_filter(|_: &i32| Err(FunctionError::new("refused")))
        else {
            panic!("expected a filter operation");
        };
        let error = predicate(&Element::new(1_i32)).unwrap_err();
        assert_eq!(error, StageError::Function(FunctionError::new("refused")));
    }

    #[test]
    fn test_constructors_record_element_types() {
        let Operation::Map { input, output, .. } = Operation::map(|text: String| text.len()) else {
            panic!("expected a map operation");
        };
        assert_eq!(input, ElementType::of::<String>());
        assert_eq!(output, ElementType::of::<usize>());
        assert_eq!(
            Operation::reduce(0_u64, |a: u64, b: u8| a + u64::from(b)).input_type(),
            Some(ElementType::of::<u8>())
        );
        assert_eq!(Operation::Terminate.input_type(), None);
    }

    #[test]
    fn test_debug_names_the_stage() {
        assert_eq!(format!("{:?}", Operation::Terminate), "terminate");
        let debug_string = format!("{:?}", Operation::reduce(0_u8, |a: u8, b: u8| a + b));
        assert!(debug_string.starts_with("Reduce"));
    }
}
