//! Left-to-right dispatch of tagged operations.

use std::ops::ControlFlow;

use crate::error::{PipelineError, StageError, TypeMismatchError};
use crate::sequence::Sequence;
use crate::stage;

use super::element::{Element, ElementType};
use super::observer::StageObserver;
use super::operation::{Operation, StageKind};
use super::output::{PipelineOutput, Shape};

/// Runs `operations` in order over `sequence`.
///
/// Each operation consumes the current value and replaces it with its
/// output. The run stops at the end of the list or at
/// [`Operation::Terminate`]; an empty list hands `sequence` back unchanged.
///
/// # Errors
///
/// The first failing stage aborts the run with a [`PipelineError`] carrying
/// its index. A map, filter, foreach or reduce stage fails with a type
/// mismatch when it receives the scalar left by an earlier reduce, or a
/// sequence whose element type differs from the one it was built for. The
/// element type check does not look at the elements, so it fails on an empty
/// sequence too.
///
/// # Examples
///
/// ```rust
/// use seqpipe::pipeline::{Operation, run_pipeline};
/// use seqpipe::sequence::Sequence;
///
/// let total = run_pipeline(
///     Sequence::from([1, 2, 3, 4, 5]),
///     [
///         Operation::map(|value: i32| value * 2),
///         Operation::filter(|value: &i32| *value > 4),
///         Operation::reduce(0, |accumulator: i32, value: i32| accumulator + value),
///     ],
/// )?
/// .into_scalar::<i32>()?;
/// assert_eq!(total, 24);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn run_pipeline<T, I>(
    sequence: Sequence<T>,
    operations: I,
) -> Result<PipelineOutput, PipelineError>
where
    T: 'static,
    I: IntoIterator<Item = Operation>,
{
    run_pipeline_with_observer(sequence, operations, &mut ())
}

/// [`run_pipeline`] reporting every stage to `observer`.
///
/// # Errors
///
/// See [`run_pipeline`].
pub fn run_pipeline_with_observer<T, I, O>(
    sequence: Sequence<T>,
    operations: I,
    observer: &mut O,
) -> Result<PipelineOutput, PipelineError>
where
    T: 'static,
    I: IntoIterator<Item = Operation>,
    O: StageObserver + ?Sized,
{
    let span = tracing::debug_span!("run_pipeline", input_length = sequence.len());
    let _entered = span.enter();

    let mut current = PipelineOutput::from_sequence(sequence);
    for (stage_index, operation) in operations.into_iter().enumerate() {
        let stage = operation.kind();
        if stage != StageKind::Terminate {
            observer.stage_started(stage_index, stage);
            tracing::trace!(stage_index, %stage, "stage started");
        }

        match apply(current, operation) {
            Ok(ControlFlow::Continue(next)) => {
                let shape = next.shape();
                let length = next.sequence_len();
                observer.stage_finished(stage_index, stage, shape, length);
                tracing::trace!(stage_index, %stage, %shape, ?length, "stage finished");
                current = next;
            }
            Ok(ControlFlow::Break(last)) => {
                tracing::trace!(stage_index, "terminator reached");
                return Ok(last);
            }
            Err(source) => {
                observer.stage_failed(stage_index, stage, &source);
                tracing::debug!(stage_index, %stage, error = %source, "stage failed");
                return Err(PipelineError::new(stage_index, stage, source));
            }
        }
    }
    Ok(current)
}

/// Runs one operation. Element types are checked before any function is
/// called, so the outcome never depends on whether the sequence is empty.
fn apply(
    current: PipelineOutput,
    operation: Operation,
) -> Result<ControlFlow<PipelineOutput, PipelineOutput>, StageError> {
    let next = match operation {
        Operation::Map {
            input,
            output,
            function,
        } => PipelineOutput::Sequence {
            elements: stage::try_map_with(expect_sequence(current, input)?, function)?,
            element_type: output,
        },
        Operation::Filter { input, predicate } => PipelineOutput::Sequence {
            elements: stage::try_filter_with(expect_sequence(current, input)?, predicate)?,
            element_type: input,
        },
        Operation::Foreach { input, consumer } => {
            let elements = expect_sequence(current, input)?;
            stage::try_foreach_with(&elements, consumer)?;
            PipelineOutput::Sequence {
                elements,
                element_type: input,
            }
        }
        Operation::Reduce {
            input,
            initial,
            function,
        } => PipelineOutput::Scalar(stage::try_reduce_with(
            expect_sequence(current, input)?,
            initial,
            function,
        )?),
        Operation::Terminate => return Ok(ControlFlow::Break(current)),
    };
    Ok(ControlFlow::Continue(next))
}

fn expect_sequence(
    current: PipelineOutput,
    expected: ElementType,
) -> Result<Sequence<Element>, TypeMismatchError> {
    match current {
        PipelineOutput::Sequence {
            elements,
            element_type,
        } => element_type.ensure(expected).map(|()| elements),
        PipelineOutput::Scalar(_) => Err(TypeMismatchError::new(
            Shape::Sequence.as_str(),
            Shape::Scalar.as_str(),
        )),
    }
}
