//! Hook for watching stages enter and leave.

use crate::error::StageError;

use super::operation::StageKind;
use super::output::Shape;

/// Receives a callback around every dispatched stage.
///
/// All methods default to doing nothing, and `()` is the observer used by
/// [`run_pipeline`](super::run_pipeline).
///
/// # Examples
///
/// ```rust
/// use seqpipe::pipeline::{Operation, StageKind, StageObserver, run_pipeline_with_observer};
/// use seqpipe::sequence::Sequence;
///
/// #[derive(Default)]
/// struct Banner(Vec<String>);
///
/// impl StageObserver for Banner {
///     fn stage_started(&mut self, _index: usize, kind: StageKind) {
///         self.0.push(format!("{kind}!"));
///     }
/// }
///
/// let mut banner = Banner::default();
/// run_pipeline_with_observer(
///     Sequence::from([1, 2]),
///     [Operation::map(|value: i32| value + 1), Operation::foreach(|_: &i32| {})],
///     &mut banner,
/// )?;
/// assert_eq!(banner.0, ["map!", "foreach!"]);
/// # Ok::<(), seqpipe::error::PipelineError>(())
/// ```
pub trait StageObserver {
    /// Called before stage `index` runs.
    fn stage_started(&mut self, index: usize, kind: StageKind) {
        let _ = (index, kind);
    }

    /// Called after stage `index` produced a value of `shape`; `length` is
    /// the element count for sequences.
    fn stage_finished(
        &mut self,
        index: usize,
        kind: StageKind,
        shape: Shape,
        length: Option<usize>,
    ) {
        let _ = (index, kind, shape, length);
    }

    /// Called when stage `index` fails. The run aborts right after.
    fn stage_failed(&mut self, index: usize, kind: StageKind, error: &StageError) {
        let _ = (index, kind, error);
    }
}

impl StageObserver for () {}
