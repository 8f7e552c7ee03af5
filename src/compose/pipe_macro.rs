//! The `pipe!` and `try_pipe!` macros for left-to-right value piping.
//!
//! These thread a single value through unary functions, the scalar
//! counterpart of running a sequence through a pipeline.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function is called exactly once, so [`FnOnce`] is enough.
///
/// # Examples
///
/// ```
/// use seqpipe::pipe;
///
/// fn increment(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// // double(5) = 10, increment(10) = 11
/// assert_eq!(pipe!(5, double, increment), 11);
/// ```
///
/// Piping a sequence through whole stages:
///
/// ```
/// use seqpipe::pipe;
/// use seqpipe::sequence::Sequence;
/// use seqpipe::stage::{filter, map};
///
/// let result = pipe!(
///     Sequence::from([1, 2, 3, 4, 5]),
///     |sequence: Sequence<i32>| map(sequence, |value: i32| value * 2),
///     |sequence: Sequence<i32>| filter(sequence, |value: &i32| *value > 4),
/// );
/// assert_eq!(result.as_slice(), &[6, 8, 10]);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

/// Pipes a value through fallible functions, stopping at the first `Err`.
///
/// Every function returns `Result<_, E>` with the same `E`; the first error
/// is returned as is and later functions are not called. With no functions,
/// `try_pipe!(x)` is `Ok(x)`.
///
/// # Examples
///
/// ```
/// use seqpipe::error::FunctionError;
/// use seqpipe::try_pipe;
///
/// fn parse(text: &str) -> Result<i32, FunctionError> {
///     text.parse().map_err(|error| FunctionError::from_error(&error))
/// }
/// fn halve(value: i32) -> Result<i32, FunctionError> {
///     if value % 2 == 0 {
///         Ok(value / 2)
///     } else {
///         Err(FunctionError::new("odd"))
///     }
/// }
///
/// assert_eq!(try_pipe!("8", parse, halve, halve), Ok(2));
/// assert_eq!(try_pipe!("6", parse, halve, halve), Err(FunctionError::new("odd")));
/// assert!(try_pipe!("x", parse, halve).is_err());
/// ```
#[macro_export]
macro_rules! try_pipe {
    // Value only: wrap it
    ($value:expr $(,)?) => {
        ::core::result::Result::Ok($value)
    };

    // Single function: its result is the result
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: continue only on Ok
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        match $function($value) {
            ::core::result::Result::Ok(piped) => {
                $crate::try_pipe!(piped, $($remaining_functions),+)
            }
            ::core::result::Result::Err(error) => ::core::result::Result::Err(error),
        }
    };
}
