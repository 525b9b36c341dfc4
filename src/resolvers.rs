//! Resolvers end a pipeline by turning outcomes into plain values.
//!
//! # Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let ok: Outcome<i32, &str> = success(6);
//! let bad: Outcome<i32, &str> = failure("e");
//!
//! assert_eq!(ok.then(on_success(|x| x * 2)).then(if_failed(|_| -1)), 12);
//! assert_eq!(bad.then(on_success(|x| x * 2)).then(if_failed(|_| -1)), -1);
//! ```

use crate::outcome::Outcome;
use crate::pair::Pair;

/// Resolve to the success value, computing one from the failure cause when
/// the outcome failed.
pub fn if_failed<S, F, Op>(mut f: Op) -> impl FnMut(Outcome<S, F>) -> S
where
    Op: FnMut(F) -> S,
{
    move |outcome| outcome.if_failed(&mut f)
}

/// Resolve to the success value, or a clone of `default` when the outcome
/// failed.
pub fn if_failed_with<S, F>(default: S) -> impl FnMut(Outcome<S, F>) -> S
where
    S: Clone,
{
    move |outcome| outcome.if_failed_with(default.clone())
}

/// Return whichever payload is populated, when both sides share a type.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let ok: Outcome<&str, &str> = success("x");
/// let bad: Outcome<&str, &str> = failure("x");
///
/// assert_eq!(ok.then(collapse), "x");
/// assert_eq!(bad.then(collapse), "x");
/// ```
#[inline]
pub fn collapse<T>(outcome: Outcome<T, T>) -> T {
    outcome.collapse()
}

/// Resolve into a `std` result, converting the failure cause with
/// `into_error`.
pub fn get_or_err<S, F, E, Op>(mut into_error: Op) -> impl FnMut(Outcome<S, F>) -> Result<S, E>
where
    Op: FnMut(F) -> E,
{
    move |outcome| outcome.get_or_err(&mut into_error)
}

/// Drain a sequence of outcomes into its successes (left) and failures
/// (right), keeping the relative order within each side.
///
/// Every outcome is consumed; failures do not stop the drain. To collect into
/// something other than `Vec`, `collect()` straight into a [`Pair`].
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![success(6), success(5), failure("bad")];
///
/// let Pair { left, right } = split(outcomes);
/// assert_eq!(left, vec![6, 5]);
/// assert_eq!(right, vec!["bad"]);
/// ```
pub fn split<S, F, I>(outcomes: I) -> Pair<Vec<S>, Vec<F>>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    outcomes.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use crate::transformers::on_success;

    #[test]
    fn test_if_failed() {
        let ok: Outcome<i32, &str> = success(6);
        let bad: Outcome<i32, &str> = failure("e");

        assert_eq!(ok.then(on_success(|x| x * 2)).then(if_failed(|_| -1)), 12);
        assert_eq!(bad.then(on_success(|x| x * 2)).then(if_failed(|_| -1)), -1);
    }

    #[test]
    fn test_if_failed_uses_cause() {
        let bad: Outcome<usize, &str> = failure("four");
        assert_eq!(bad.then(if_failed(|e: &str| e.len())), 4);
    }

    #[test]
    fn test_if_failed_with() {
        assert_eq!(success::<i32, &str>(1).then(if_failed_with(0)), 1);
        assert_eq!(failure::<i32, &str>("e").then(if_failed_with(0)), 0);
    }

    #[test]
    fn test_collapse() {
        assert_eq!(success::<&str, &str>("x").then(collapse), "x");
        assert_eq!(failure::<&str, &str>("x").then(collapse), "x");
    }

    #[test]
    fn test_get_or_err() {
        let ok: Outcome<i32, &str> = success(1);
        let bad: Outcome<i32, &str> = failure("nope");

        assert_eq!(ok.then(get_or_err(|e: &str| e.to_uppercase())), Ok(1));
        assert_eq!(
            bad.then(get_or_err(|e: &str| e.to_uppercase())),
            Err("NOPE".to_string())
        );
    }

    #[test]
    fn test_if_failed_handler_sees_only_failures() {
        let mut handled = Vec::new();
        let outcomes: Vec<Outcome<i32, &str>> =
            vec![success(1), failure("a"), success(2), failure("bb")];

        let resolved: Vec<i32> = outcomes
            .into_iter()
            .map(if_failed(|e: &str| {
                handled.push(e);
                0
            }))
            .collect();

        assert_eq!(resolved, vec![1, 0, 2, 0]);
        assert_eq!(handled, vec!["a", "bb"]);
    }

    #[test]
    fn test_resolvers_map_over_batches() {
        let outcomes: Vec<Outcome<i32, &str>> = vec![success(1), failure("abc"), success(3)];

        let resolved: Vec<i32> = outcomes
            .into_iter()
            .map(if_failed(|e: &str| -(e.len() as i32)))
            .collect();

        assert_eq!(resolved, vec![1, -3, 3]);
    }

    #[test]
    fn test_split_preserves_order() {
        let outcomes: Vec<Outcome<i32, &str>> = vec![success(6), success(5), failure("bad")];

        let drained = split(outcomes);

        assert_eq!(drained.left, vec![6, 5]);
        assert_eq!(drained.right, vec!["bad"]);
    }

    #[test]
    fn test_split_lazy_source() {
        let drained = split((1..=6).map(|n| {
            if n % 2 == 0 {
                success(n)
            } else {
                failure(format!("{} is odd", n))
            }
        }));

        assert_eq!(drained.left, vec![2, 4, 6]);
        assert_eq!(drained.right, vec!["1 is odd", "3 is odd", "5 is odd"]);
    }

    #[test]
    fn test_split_empty() {
        let drained = split(Vec::<Outcome<i32, String>>::new());
        assert!(drained.left.is_empty());
        assert!(drained.right.is_empty());
    }
}
