//! Tagged operation pipelines.
//!
//! A pipeline is an ordered list of [`Operation`] values applied left to
//! right to an initial [`Sequence`](crate::sequence::Sequence). Every
//! operation is a tag (`map`, `filter`, `foreach`, `reduce`, or the
//! `terminate` sentinel) carrying a user function. Functions are written
//! against concrete element types and erased into [`Element`] values, so
//! consecutive stages may change the element type freely.
//!
//! # Overview
//!
//! - [`run_pipeline`] / [`run_pipeline_with_observer`]: execute a list of
//!   operations
//! - [`Pipeline`]: chainable builder consumed by a single run
//! - [`pipeline!`](crate::pipeline!): inline form of the above
//! - [`PipelineOutput`]: the final sequence or scalar
//! - [`StageObserver`]: callbacks around every stage
//! - [`ElementType`]: the element type each stage accepts, checked before
//!   the stage runs
//!
//! # Shapes
//!
//! The current value is either a sequence or a scalar. Only `reduce`
//! turns a sequence into a scalar, and no stage accepts a scalar, so any
//! stage placed after a `reduce` fails with a type mismatch naming its
//! position.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::error::StageError;
//! use seqpipe::pipeline::{Operation, run_pipeline};
//! use seqpipe::sequence::Sequence;
//!
//! let error = run_pipeline(
//!     Sequence::from([1, 2, 3]),
//!     [
//!         Operation::reduce(0, |accumulator: i32, value: i32| accumulator + value),
//!         Operation::map(|value: i32| value * 2),
//!     ],
//! )
//! .unwrap_err();
//!
//! assert_eq!(error.stage_index, 1);
//! assert!(matches!(error.source, StageError::TypeMismatch(_)));
//! ```

mod builder;
mod dispatcher;
mod element;
mod macros;
mod observer;
mod operation;
mod output;

pub use builder::Pipeline;
pub use dispatcher::{run_pipeline, run_pipeline_with_observer};
pub use element::{Element, ElementType};
pub use observer::StageObserver;
pub use operation::{
    ConsumerFunction, FoldFunction, MapFunction, Operation, PredicateFunction, StageKind,
};
pub use output::{PipelineOutput, Shape};
