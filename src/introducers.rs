//! Introducers build an [`Outcome`] from something that is not one yet.
//!
//! Each introducer returns a function, so it can sit at the head of a
//! pipeline or be handed straight to `Iterator::map`.
//!
//! # Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let parsed: Vec<Outcome<i64, String>> = vec!["6", "NaN"]
//!     .into_iter()
//!     .map(try_to(|s: &str| s.parse::<i64>(), |e| e.to_string()))
//!     .collect();
//!
//! assert_eq!(parsed[0], success(6));
//! assert_eq!(parsed[1], failure("invalid digit found in string".to_string()));
//! ```

use crate::outcome::Outcome;

/// Turn an `Option` into an outcome.
///
/// `Some` becomes a success. `None` becomes a failure built by `on_absent`,
/// which is only called when the value is missing.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let mut require = from_optional(|| "no value".to_string());
///
/// assert_eq!(require(Some(3)), success(3));
/// assert_eq!(require(None), failure("no value".to_string()));
/// ```
pub fn from_optional<S, F, OnAbsent>(mut on_absent: OnAbsent) -> impl FnMut(Option<S>) -> Outcome<S, F>
where
    OnAbsent: FnMut() -> F,
{
    move |value| match value {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(on_absent()),
    }
}

/// Wrap a value as a success if `predicate` holds, otherwise as a failure
/// derived from the value by `on_false`.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let mut even = from_predicate(|n: &i32| n % 2 == 0, |n| format!("{} is odd", n));
///
/// assert_eq!(even(4), success(4));
/// assert_eq!(even(5), failure("5 is odd".to_string()));
/// ```
pub fn from_predicate<S, F, P, OnFalse>(
    mut predicate: P,
    mut on_false: OnFalse,
) -> impl FnMut(S) -> Outcome<S, F>
where
    P: FnMut(&S) -> bool,
    OnFalse: FnMut(S) -> F,
{
    move |value| {
        if predicate(&value) {
            Outcome::Success(value)
        } else {
            Outcome::Failure(on_false(value))
        }
    }
}

/// Run a fallible operation and capture its error as a failure.
///
/// `Ok` becomes a success. `Err` is handed to `on_error` exactly once and the
/// converted cause becomes a failure. This is the one place where a foreign
/// error enters the pipeline; the operation is responsible for cleaning up
/// after itself.
///
/// An `Err` return is how a Rust operation reports the kind of failure other
/// languages would throw. Panics raised by `operation` are not caught.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let mut parse = try_to(|s: &str| s.parse::<u8>(), |e| e.to_string());
///
/// assert_eq!(parse("7"), success(7));
/// assert!(parse("300").is_failure());
/// ```
pub fn try_to<A, S, E, F, Op, OnError>(
    mut operation: Op,
    mut on_error: OnError,
) -> impl FnMut(A) -> Outcome<S, F>
where
    Op: FnMut(A) -> Result<S, E>,
    OnError: FnMut(E) -> F,
{
    move |input| match operation(input) {
        Ok(value) => Outcome::Success(value),
        Err(error) => {
            #[cfg(feature = "tracing")]
            ::tracing::debug!("operation returned an error; capturing it as a failure");
            Outcome::Failure(on_error(error))
        }
    }
}

/// Convert a `std` result into an outcome.
///
/// Free-function form of `Outcome::from`, handy in `Iterator::map`.
#[inline]
pub fn from_result<S, F>(result: Result<S, F>) -> Outcome<S, F> {
    Outcome::from(result)
}
