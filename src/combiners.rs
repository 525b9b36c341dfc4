//! Combiners join two independently produced outcomes.
//!
//! Joining happens in two steps: [`combine_with`] pairs the outcomes into a
//! [`Combination`], and [`Combination::using`] supplies the function that
//! merges both success values.
//!
//! The first failure wins. If the left outcome failed, its cause is returned
//! whatever the right one holds; the right cause only surfaces when the left
//! side succeeded.
//!
//! # Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let five: Outcome<i32, &str> = failure("Five is odd");
//! let seven: Outcome<i32, &str> = failure("Seven is odd");
//!
//! let product = five.then(combine_with(seven)).using(|x, y| x * y);
//! assert_eq!(product, failure("Five is odd"));
//! ```

use crate::outcome::Outcome;
use crate::pair::Pair;

/// Two outcomes waiting for a merge function.
///
/// Holds both success values in a [`Pair`] if both sides succeeded, or the
/// winning failure otherwise. Created by [`combine_with`] or
/// [`Outcome::combine_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a Combination does nothing until `using` is called"]
pub struct Combination<S, S2, F> {
    pending: Outcome<Pair<S, S2>, F>,
}

impl<S, S2, F> Combination<S, S2, F> {
    pub(crate) fn new(pending: Outcome<Pair<S, S2>, F>) -> Self {
        Combination { pending }
    }

    /// Merge the two success values.
    ///
    /// `merge` only runs when both outcomes succeeded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let six: Outcome<i32, &str> = success(6);
    /// let seven: Outcome<i32, &str> = failure("Seven is odd");
    ///
    /// assert_eq!(six.combine_with(seven).using(|x, y| x * y), failure("Seven is odd"));
    /// ```
    pub fn using<R, Merge>(self, merge: Merge) -> Outcome<R, F>
    where
        Merge: FnOnce(S, S2) -> R,
    {
        self.pending.on_success(|pair| pair.then(merge))
    }

    /// The paired outcome, before any merge.
    pub fn into_paired(self) -> Outcome<Pair<S, S2>, F> {
        self.pending
    }
}

/// Pair an outcome with `other`, to be merged by [`Combination::using`].
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let six: Outcome<i32, &str> = success(6);
/// let two: Outcome<i32, &str> = success(2);
///
/// assert_eq!(six.then(combine_with(two)).using(|x, y| x * y), success(12));
/// ```
pub fn combine_with<S, S2, F>(other: Outcome<S2, F>) -> impl FnOnce(Outcome<S, F>) -> Combination<S, S2, F> {
    move |outcome| outcome.combine_with(other)
}
