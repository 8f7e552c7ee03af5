//! Chainable construction of operation lists.

use smallvec::SmallVec;

use crate::error::{FunctionError, PipelineError};
use crate::sequence::Sequence;

use super::dispatcher::run_pipeline_with_observer;
use super::observer::StageObserver;
use super::operation::Operation;
use super::output::PipelineOutput;

/// Operations kept inline before spilling to the heap.
const INLINE_STAGES: usize = 4;

/// An ordered list of operations waiting for an input sequence.
///
/// Building a `Pipeline` runs nothing. [`Pipeline::run`] consumes it, so a
/// pipeline lives for exactly one execution.
///
/// # Examples
///
/// ```rust
/// use seqpipe::pipeline::Pipeline;
/// use seqpipe::sequence::Sequence;
///
/// let words = Pipeline::new()
///     .filter(|word: &String| !word.is_empty())
///     .map(|word: String| word.to_uppercase())
///     .run(Sequence::from(["a", "", "b"].map(String::from)))?
///     .into_sequence::<String>()?;
/// assert_eq!(words.into_vec(), vec!["A", "B"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct Pipeline {
    operations: SmallVec<[Operation; INLINE_STAGES]>,
}

impl Pipeline {
    /// Creates a pipeline with no operations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            operations: SmallVec::new(),
        }
    }

    /// Appends an already built operation.
    #[must_use]
    pub fn then(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Appends a map stage. See [`Operation::map`].
    #[must_use]
    pub fn map<T, U, F>(self, function: F) -> Self
    where
        T: 'static,
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        self.then(Operation::map(function))
    }

    /// Appends a fallible map stage. See [`Operation::try_map`].
    #[must_use]
    pub fn try_map<T, U, F>(self, function: F) -> Self
    where
        T: 'static,
        U: 'static,
        F: FnMut(T) -> Result<U, FunctionError> + 'static,
    {
        self.then(Operation::try_map(function))
    }

    /// Appends a filter stage. See [`Operation::filter`].
    #[must_use]
    pub fn filter<T, P>(self, predicate: P) -> Self
    where
        T: 'static,
        P: FnMut(&T) -> bool + 'static,
    {
        self.then(Operation::filter(predicate))
    }

    /// Appends a fallible filter stage. See [`Operation::try_filter`].
    #[must_use]
    pub fn try_filter<T, P>(self, predicate: P) -> Self
    where
        T: 'static,
        P: FnMut(&T) -> Result<bool, FunctionError> + 'static,
    {
        self.then(Operation::try_filter(predicate))
    }

    /// Appends a foreach stage. See [`Operation::foreach`].
    #[must_use]
    pub fn foreach<T, C>(self, consumer: C) -> Self
    where
        T: 'static,
        C: FnMut(&T) + 'static,
    {
        self.then(Operation::foreach(consumer))
    }

    /// Appends a fallible foreach stage. See [`Operation::try_foreach`].
    #[must_use]
    pub fn try_foreach<T, C>(self, consumer: C) -> Self
    where
        T: 'static,
        C: FnMut(&T) -> Result<(), FunctionError> + 'static,
    {
        self.then(Operation::try_foreach(consumer))
    }

    /// Appends a reduce stage. See [`Operation::reduce`].
    #[must_use]
    pub fn reduce<T, A, F>(self, initial: A, function: F) -> Self
    where
        T: 'static,
        A: 'static,
        F: FnMut(A, T) -> A + 'static,
    {
        self.then(Operation::reduce(initial, function))
    }

    /// Appends a fallible reduce stage. See [`Operation::try_reduce`].
    #[must_use]
    pub fn try_reduce<T, A, F>(self, initial: A, function: F) -> Self
    where
        T: 'static,
        A: 'static,
        F: FnMut(A, T) -> Result<A, FunctionError> + 'static,
    {
        self.then(Operation::try_reduce(initial, function))
    }

    /// Appends the terminator; nothing added after it will run.
    #[must_use]
    pub fn terminate(self) -> Self {
        self.then(Operation::Terminate)
    }

    /// Returns the number of operations, terminator included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if no operation has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns the operations in order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Runs the pipeline over `sequence`.
    ///
    /// # Errors
    ///
    /// See [`run_pipeline`](super::run_pipeline).
    pub fn run<T: 'static>(self, sequence: Sequence<T>) -> Result<PipelineOutput, PipelineError> {
        self.run_with_observer(sequence, &mut ())
    }

    /// Runs the pipeline over `sequence`, reporting to `observer`.
    ///
    /// # Errors
    ///
    /// See [`run_pipeline`](super::run_pipeline).
    pub fn run_with_observer<T, O>(
        self,
        sequence: Sequence<T>,
        observer: &mut O,
    ) -> Result<PipelineOutput, PipelineError>
    where
        T: 'static,
        O: StageObserver + ?Sized,
    {
        run_pipeline_with_observer(sequence, self.operations, observer)
    }
}

impl FromIterator<Operation> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl Extend<Operation> for Pipeline {
    fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        self.operations.extend(iter);
    }
}

impl IntoIterator for Pipeline {
    type Item = Operation;
    type IntoIter = smallvec::IntoIter<[Operation; INLINE_STAGES]>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

static_assertions::assert_not_impl_any!(Pipeline: Send, Sync);
