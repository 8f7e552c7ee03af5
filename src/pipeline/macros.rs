//! The [`pipeline!`] macro.

/// Runs a sequence through a list of stages written inline.
///
/// Each stage is the name of an [`Operation`](crate::pipeline::Operation)
/// constructor followed by its arguments, so
/// `pipeline!(s, map(f), filter(p))` is
/// `run_pipeline(s, [Operation::map(f), Operation::filter(p)])`.
///
/// # Syntax
///
/// - `pipeline!(s)` - Runs no stages and hands `s` back
/// - `pipeline!(s, map(f))` - One stage
/// - `pipeline!(s, map(f), filter(p), reduce(init, g), ...)` - Stages left to right
///
/// The macro evaluates to `Result<PipelineOutput, PipelineError>`.
///
/// # Examples
///
/// ```
/// use seqpipe::pipeline;
/// use seqpipe::sequence::Sequence;
///
/// let total = pipeline!(
///     Sequence::from([1, 2, 3, 4, 5]),
///     map(|value: i32| value * 2),
///     filter(|value: &i32| *value > 4),
///     reduce(0, |accumulator: i32, value: i32| accumulator + value),
/// )?
/// .into_scalar::<i32>()?;
/// assert_eq!(total, 24);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Stages after `terminate()` never run:
///
/// ```
/// use seqpipe::pipeline;
/// use seqpipe::sequence::Sequence;
///
/// let output = pipeline!(
///     Sequence::from([1, 2]),
///     map(|value: i32| value + 1),
///     terminate(),
///     map(|_: i32| -> i32 { unreachable!() }),
/// )?;
/// assert_eq!(output.into_sequence::<i32>()?.into_vec(), vec![2, 3]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! pipeline {
    // Sequence only: run no stages
    ($sequence:expr $(,)?) => {
        $crate::pipeline::run_pipeline(
            $sequence,
            ::std::vec::Vec::<$crate::pipeline::Operation>::new(),
        )
    };

    // One or more stages, dispatched left to right
    ($sequence:expr, $($stage:ident ( $($argument:expr),* $(,)? )),+ $(,)?) => {
        $crate::pipeline::run_pipeline(
            $sequence,
            [$($crate::pipeline::Operation::$stage($($argument),*)),+],
        )
    };
}
