//! Value piping macros.
//!
//! - [`pipe!`]: apply functions to a value left to right
//! - [`try_pipe!`]: the same for functions returning `Result`, stopping at
//!   the first error
//!
//! ```text
//! pipe!(x, f, g, h)     = h(g(f(x)))
//! try_pipe!(x, f, g, h) = f(x).and_then(g).and_then(h)
//! ```
//!
//! # Examples
//!
//! ```
//! use seqpipe::pipe;
//!
//! fn to_text(value: i32) -> String { value.to_string() }
//! fn length(text: String) -> usize { text.len() }
//!
//! assert_eq!(pipe!(12345, to_text, length), 5);
//! ```

mod pipe_macro;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::pipe;
pub use crate::try_pipe;
