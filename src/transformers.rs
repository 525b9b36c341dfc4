//! Transformers map one [`Outcome`] to another.
//!
//! A success-side transformer hands a failure back untouched without calling
//! its function, and a failure-side transformer does the same for successes.
//! Every function here returns a closure, so a stage can be applied with
//! [`Outcome::then`], [`with`](crate::pipe::with), or passed to
//! `Iterator::map`.
//!
//! # Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let halve = |n: i64| -> Outcome<i64, String> {
//!     if n % 2 == 0 { success(n / 2) } else { failure(format!("{} is odd", n)) }
//! };
//!
//! let halved: Vec<i64> = successes(
//!     vec!["6", "5", "NaN"]
//!         .into_iter()
//!         .map(try_to(|s: &str| s.parse::<i64>(), |e| e.to_string()))
//!         .map(attempt(halve)),
//! )
//! .collect();
//!
//! assert_eq!(halved, vec![3]);
//! ```

use crate::outcome::Outcome;

/// Transform the success value of an outcome.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let six: Outcome<i32, &str> = success(6);
/// assert_eq!(six.then(on_success(|x| x * 2)), success(12));
/// ```
pub fn on_success<S, F, S2, Op>(mut f: Op) -> impl FnMut(Outcome<S, F>) -> Outcome<S2, F>
where
    Op: FnMut(S) -> S2,
{
    move |outcome| outcome.on_success(&mut f)
}

/// Transform the failure cause of an outcome.
pub fn on_failure<S, F, F2, Op>(mut f: Op) -> impl FnMut(Outcome<S, F>) -> Outcome<S, F2>
where
    Op: FnMut(F) -> F2,
{
    move |outcome| outcome.on_failure(&mut f)
}

/// Chain a step that may itself fail.
///
/// Only reached when everything before it succeeded.
pub fn attempt<S, F, S2, Op>(mut f: Op) -> impl FnMut(Outcome<S, F>) -> Outcome<S2, F>
where
    Op: FnMut(S) -> Outcome<S2, F>,
{
    move |outcome| outcome.attempt(&mut f)
}

/// Chain a step on the failure cause, which may turn it back into a success.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let missing: Outcome<u32, &str> = failure("not cached");
/// let fetched = missing.then(recover(|_| success::<u32, String>(42)));
/// assert_eq!(fetched, success(42));
/// ```
pub fn recover<S, F, F2, Op>(mut f: Op) -> impl FnMut(Outcome<S, F>) -> Outcome<S, F2>
where
    Op: FnMut(F) -> Outcome<S, F2>,
{
    move |outcome| outcome.recover(&mut f)
}

/// Observe a success value without changing the outcome.
pub fn on_success_do<S, F, Op>(mut side_effect: Op) -> impl FnMut(Outcome<S, F>) -> Outcome<S, F>
where
    Op: FnMut(&S),
{
    move |outcome| outcome.on_success_do(&mut side_effect)
}

/// Observe a failure cause without changing the outcome.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let mut logged = Vec::new();
/// let bad: Outcome<i32, &str> = failure("oops");
///
/// let same = bad.then(on_failure_do(|e: &&str| logged.push(e.to_string())));
///
/// assert_eq!(same, failure("oops"));
/// assert_eq!(logged, vec!["oops"]);
/// ```
pub fn on_failure_do<S, F, Op>(mut side_effect: Op) -> impl FnMut(Outcome<S, F>) -> Outcome<S, F>
where
    Op: FnMut(&F),
{
    move |outcome| outcome.on_failure_do(&mut side_effect)
}

/// Run a fallible `std` operation on a success value, converting its error
/// with `on_error`.
///
/// This is [`attempt`] composed with [`try_to`](crate::introducers::try_to).
pub fn on_success_try<S, F, S2, E, Op, OnError>(
    mut f: Op,
    mut on_error: OnError,
) -> impl FnMut(Outcome<S, F>) -> Outcome<S2, F>
where
    Op: FnMut(S) -> Result<S2, E>,
    OnError: FnMut(E) -> F,
{
    move |outcome| outcome.on_success_try(&mut f, &mut on_error)
}

/// Lazily yield the success values of a sequence of outcomes, in order.
///
/// Failures are skipped.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![success(6), success(5), failure("darnit")];
/// assert_eq!(successes(outcomes).collect::<Vec<_>>(), vec![6, 5]);
/// ```
pub fn successes<S, F, I>(outcomes: I) -> impl Iterator<Item = S>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    outcomes.into_iter().filter_map(Outcome::success_value)
}

/// Lazily yield the failure causes of a sequence of outcomes, in order.
///
/// Successes are skipped. Inside an existing iterator chain the same thing is
/// `flat_map(Outcome::failure_value)`, just as a plain `flatten()` keeps the
/// successes.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![success(6), failure("darnit")];
///
/// assert_eq!(failures(outcomes.clone()).collect::<Vec<_>>(), vec!["darnit"]);
/// assert_eq!(
///     outcomes.into_iter().flat_map(Outcome::failure_value).collect::<Vec<_>>(),
///     vec!["darnit"]
/// );
/// ```
pub fn failures<S, F, I>(outcomes: I) -> impl Iterator<Item = F>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    outcomes.into_iter().filter_map(Outcome::failure_value)
}
