//! # seqpipe
//!
//! Owned sequences and a tagged pipeline of map, filter, foreach and reduce
//! stages.
//!
//! ## Overview
//!
//! - **Sequence**: [`Sequence<T>`](sequence::Sequence), an owned, growable
//!   container with fallible allocation
//! - **Stages**: generic [`map`](stage::map), [`filter`](stage::filter),
//!   [`foreach`](stage::foreach) and [`reduce`](stage::reduce) operators that
//!   consume one sequence and produce the next
//! - **Pipelines**: [`Operation`](pipeline::Operation) values dispatched left to
//!   right by [`run_pipeline`](pipeline::run_pipeline), the
//!   [`Pipeline`](pipeline::Pipeline) builder, or the [`pipeline!`] macro
//! - **Value piping**: [`pipe!`] and [`try_pipe!`] for single values
//!
//! ## Feature Flags
//!
//! - `compose`: `pipe!` and `try_pipe!` (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Sequence` and `StageKind`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqpipe::prelude::*;
//!
//! let output = Pipeline::new()
//!     .map(|value: i32| value * 2)
//!     .filter(|value: &i32| *value > 4)
//!     .run(Sequence::from([1, 2, 3, 4, 5]))?;
//! assert_eq!(output.into_sequence::<i32>()?.into_vec(), vec![6, 8, 10]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use seqpipe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{
        AllocationError, FunctionError, IndexError, PipelineError, StageError, TypeMismatchError,
    };
    pub use crate::pipeline::{
        Element, ElementType, Operation, Pipeline, PipelineOutput, Shape, StageKind, StageObserver,
        run_pipeline, run_pipeline_with_observer,
    };
    pub use crate::sequence::Sequence;
    pub use crate::stage::{
        filter, foreach, map, reduce, try_filter, try_foreach, try_map, try_reduce,
    };

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod error;
pub mod pipeline;
pub mod sequence;
pub mod stage;

#[cfg(feature = "compose")]
pub mod compose;
