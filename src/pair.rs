//! An ordered pair of two independently-typed values.
//!
//! `Pair` is what a batch of outcomes drains into (successes on the left,
//! failures on the right), and it is the carrier inside a
//! [`Combination`](crate::combiners::Combination) while both sides wait for a
//! merge function.
//!
//! # Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let outcomes: Vec<Outcome<i32, &str>> = vec![success(6), failure("bad"), success(5)];
//!
//! let drained: Pair<Vec<i32>, Vec<&str>> = outcomes.into_iter().collect();
//! assert_eq!(drained.left, vec![6, 5]);
//! assert_eq!(drained.right, vec!["bad"]);
//! ```

use crate::outcome::Outcome;

/// Two values, `left` and `right`, kept side by side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<L, R> {
    /// The left value
    pub left: L,
    /// The right value
    pub right: R,
}

impl<L, R> Pair<L, R> {
    /// Create a pair.
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Pair { left, right }
    }

    /// Transform the left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Pair;
    ///
    /// let p = Pair::new(vec![1, 2], "x");
    /// assert_eq!(p.map_left(|v| v.len()), Pair::new(2, "x"));
    /// ```
    #[inline]
    pub fn map_left<L2, Op>(self, f: Op) -> Pair<L2, R>
    where
        Op: FnOnce(L) -> L2,
    {
        Pair::new(f(self.left), self.right)
    }

    /// Transform the right value.
    #[inline]
    pub fn map_right<R2, Op>(self, f: Op) -> Pair<L, R2>
    where
        Op: FnOnce(R) -> R2,
    {
        Pair::new(self.left, f(self.right))
    }

    /// Apply a function to both values at once.
    #[inline]
    pub fn then<T, Op>(self, f: Op) -> T
    where
        Op: FnOnce(L, R) -> T,
    {
        f(self.left, self.right)
    }

    /// Split into a tuple.
    #[inline]
    pub fn into_tuple(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    fn from((left, right): (L, R)) -> Self {
        Pair::new(left, right)
    }
}

impl<L, R> From<Pair<L, R>> for (L, R) {
    fn from(pair: Pair<L, R>) -> Self {
        pair.into_tuple()
    }
}

// Successes go left, failures go right, each side keeping input order.
impl<S, F, L, R> FromIterator<Outcome<S, F>> for Pair<L, R>
where
    L: Default + Extend<S>,
    R: Default + Extend<F>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<S, F>>>(iter: I) -> Self {
        let mut pair = Pair::new(L::default(), R::default());

        for outcome in iter {
            match outcome {
                Outcome::Success(value) => pair.left.extend(Some(value)),
                Outcome::Failure(cause) => pair.right.extend(Some(cause)),
            }
        }

        pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use std::collections::BTreeSet;

    #[test]
    fn test_map_sides() {
        let p = Pair::new(1, "a");
        assert_eq!(p.map_left(|x| x + 1), Pair::new(2, "a"));
        assert_eq!(p.map_right(|s| s.len()), Pair::new(1, 1));
    }

    #[test]
    fn test_then() {
        assert_eq!(Pair::new(6, 2).then(|x, y| x * y), 12);
    }

    #[test]
    fn test_tuple_conversion() {
        let p: Pair<i32, &str> = (1, "a").into();
        assert_eq!(p, Pair::new(1, "a"));

        let (l, r): (i32, &str) = p.into();
        assert_eq!((l, r), (1, "a"));
    }

    #[test]
    fn test_collect_preserves_order() {
        let outcomes: Vec<Outcome<i32, &str>> =
            vec![failure("first"), success(6), success(5), failure("second")];

        let drained: Pair<Vec<i32>, Vec<&str>> = outcomes.into_iter().collect();

        assert_eq!(drained.left, vec![6, 5]);
        assert_eq!(drained.right, vec!["first", "second"]);
    }

    #[test]
    fn test_collect_into_other_collections() {
        let outcomes: Vec<Outcome<i32, &str>> = vec![success(3), success(1), success(3), failure("x")];

        let drained: Pair<BTreeSet<i32>, Vec<&str>> = outcomes.into_iter().collect();

        assert_eq!(drained.left.into_iter().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(drained.right, vec!["x"]);
    }

    #[test]
    fn test_collect_empty() {
        let drained: Pair<Vec<i32>, Vec<String>> =
            std::iter::empty::<Outcome<i32, String>>().collect();
        assert_eq!(drained, Pair::default());
    }
}
