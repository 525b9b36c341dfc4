//! The two-variant outcome type.
//!
//! `Outcome<S, F>` holds either a successful value `S` or a failure cause `F`.
//! Unlike `std::result::Result`, the payload is never read with `unwrap`-style
//! accessors: it is eliminated with [`Outcome::fold`], or handed to a combinator
//! through [`Outcome::then`].
//!
//! # Examples
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let parsed: Outcome<i32, String> = success(6);
//!
//! let doubled = parsed
//!     .then(on_success(|x| x * 2))
//!     .then(if_failed(|_| -1));
//!
//! assert_eq!(doubled, 12);
//! ```

use crate::combiners::Combination;
use crate::pair::Pair;

/// A value that is either `Success(S)` or `Failure(F)`.
///
/// Every combinator consumes an outcome and produces a new one (or a plain
/// value); nothing mutates an outcome in place.
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::success(5);
/// let bad: Outcome<i32, &str> = Outcome::failure("oh no");
///
/// let describe = |o: Outcome<i32, &str>| {
///     o.fold(|n| format!("got {}", n), |e| e.to_string())
/// };
///
/// assert_eq!(describe(ok), "got 5");
/// assert_eq!(describe(bad), "oh no");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<S, F> {
    /// The computation succeeded with a value
    Success(S),
    /// The computation failed with a cause
    Failure(F),
}

/// Create a successful outcome.
///
/// Free-function form of [`Outcome::success`].
#[inline]
pub fn success<S, F>(value: S) -> Outcome<S, F> {
    Outcome::Success(value)
}

/// Create a failed outcome.
///
/// Free-function form of [`Outcome::failure`].
#[inline]
pub fn failure<S, F>(cause: F) -> Outcome<S, F> {
    Outcome::Failure(cause)
}

impl<S, F> Outcome<S, F> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let o: Outcome<i32, String> = Outcome::success(42);
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn success(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::failure("boom");
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub fn failure(cause: F) -> Self {
        Outcome::Failure(cause)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    // ========== Elimination ==========

    /// Collapse both variants into a single value.
    ///
    /// Exactly one of the two functions is invoked. Every other combinator in
    /// this crate can be expressed in terms of `fold`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(ok.fold(|n| n > 0, |_| false), true);
    /// ```
    #[inline]
    pub fn fold<R, OnSuccess, OnFailure>(self, on_success: OnSuccess, on_failure: OnFailure) -> R
    where
        OnSuccess: FnOnce(S) -> R,
        OnFailure: FnOnce(F) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(cause) => on_failure(cause),
        }
    }

    /// Apply a function to the whole outcome.
    ///
    /// This is how the free combinators plug into a pipeline: each one is a
    /// function from an outcome to something else, so user-defined stages
    /// read exactly like the built-in ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// fn describe(o: Outcome<i32, String>) -> String {
    ///     o.fold(|n| n.to_string(), |e| e)
    /// }
    ///
    /// let text = success::<_, String>(3)
    ///     .then(on_success(|x| x + 1))
    ///     .then(describe);
    /// assert_eq!(text, "4");
    /// ```
    #[inline]
    pub fn then<R, T>(self, transform: T) -> R
    where
        T: FnOnce(Self) -> R,
    {
        transform(self)
    }

    // ========== Extractors ==========

    /// Convert to `Outcome<&S, &F>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Returns the success value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(1);
    /// let bad: Outcome<i32, &str> = Outcome::failure("no");
    ///
    /// assert_eq!(ok.success_value(), Some(1));
    /// assert_eq!(bad.success_value(), None);
    /// ```
    #[inline]
    pub fn success_value(self) -> Option<S> {
        self.fold(Some, |_| None)
    }

    /// Returns the failure cause if present, consuming self.
    #[inline]
    pub fn failure_value(self) -> Option<F> {
        self.fold(|_| None, Some)
    }

    /// Returns an iterator over the success value, if present.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.as_ref().success_value().into_iter()
    }

    // ========== Transformers ==========

    /// Transform the success value, passing failures through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(6);
    /// let bad: Outcome<i32, &str> = Outcome::failure("nope");
    ///
    /// assert_eq!(ok.on_success(|x| x * 2), Outcome::success(12));
    /// assert_eq!(bad.on_success(|x| x * 2), Outcome::failure("nope"));
    /// ```
    #[inline]
    pub fn on_success<S2, Op>(self, f: Op) -> Outcome<S2, F>
    where
        Op: FnOnce(S) -> S2,
    {
        self.fold(|value| Outcome::Success(f(value)), Outcome::Failure)
    }

    /// Transform the failure cause, passing successes through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let bad: Outcome<i32, &str> = Outcome::failure("Cannot parse number");
    /// assert_eq!(
    ///     bad.on_failure(|e| e.to_lowercase()),
    ///     Outcome::failure("cannot parse number".to_string())
    /// );
    /// ```
    #[inline]
    pub fn on_failure<F2, Op>(self, f: Op) -> Outcome<S, F2>
    where
        Op: FnOnce(F) -> F2,
    {
        self.fold(Outcome::Success, |cause| Outcome::Failure(f(cause)))
    }

    /// Chain a fallible step on the success value.
    ///
    /// A failure short-circuits: `f` is never invoked and the original cause
    /// is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(6).attempt(halve), Outcome::success(3));
    /// assert_eq!(Outcome::success(5).attempt(halve), Outcome::failure("5 is odd".to_string()));
    /// ```
    #[inline]
    pub fn attempt<S2, Op>(self, f: Op) -> Outcome<S2, F>
    where
        Op: FnOnce(S) -> Outcome<S2, F>,
    {
        self.fold(f, Outcome::Failure)
    }

    /// Chain a step on the failure cause, which may rescue it.
    ///
    /// Successes pass through untouched.
    #[inline]
    pub fn recover<F2, Op>(self, f: Op) -> Outcome<S, F2>
    where
        Op: FnOnce(F) -> Outcome<S, F2>,
    {
        self.fold(Outcome::Success, f)
    }

    /// Observe the success value and return the outcome unchanged.
    #[inline]
    pub fn on_success_do<Op>(self, side_effect: Op) -> Self
    where
        Op: FnOnce(&S),
    {
        if let Outcome::Success(value) = &self {
            side_effect(value);
        }
        self
    }

    /// Observe the failure cause and return the outcome unchanged.
    #[inline]
    pub fn on_failure_do<Op>(self, side_effect: Op) -> Self
    where
        Op: FnOnce(&F),
    {
        if let Outcome::Failure(cause) = &self {
            side_effect(cause);
        }
        self
    }

    /// Run a fallible `std` operation on the success value.
    ///
    /// An `Err` from the operation is converted into this outcome's failure
    /// type with `on_error`. Existing failures pass through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let six: Outcome<&str, String> = Outcome::success("6");
    /// let nan: Outcome<&str, String> = Outcome::success("NaN");
    ///
    /// let parse = |s: &str| s.parse::<i64>();
    ///
    /// assert_eq!(six.on_success_try(parse, |e| e.to_string()), Outcome::success(6));
    /// assert_eq!(
    ///     nan.on_success_try(parse, |e| e.to_string()),
    ///     Outcome::failure("invalid digit found in string".to_string())
    /// );
    /// ```
    #[inline]
    pub fn on_success_try<S2, E, Op, OnError>(self, f: Op, on_error: OnError) -> Outcome<S2, F>
    where
        Op: FnOnce(S) -> Result<S2, E>,
        OnError: FnOnce(E) -> F,
    {
        self.attempt(|value| match f(value) {
            Ok(converted) => Outcome::Success(converted),
            Err(error) => Outcome::Failure(on_error(error)),
        })
    }

    // ========== Combiners ==========

    /// Pair this outcome with another, awaiting a merge function.
    ///
    /// See [`Combination::using`] for the precedence rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let six: Outcome<i32, &str> = Outcome::success(6);
    /// let two: Outcome<i32, &str> = Outcome::success(2);
    ///
    /// assert_eq!(six.combine_with(two).using(|x, y| x * y), Outcome::success(12));
    /// ```
    #[inline]
    pub fn combine_with<S2>(self, other: Outcome<S2, F>) -> Combination<S, S2, F> {
        let pending = self.attempt(|left| other.on_success(|right| Pair::new(left, right)));
        Combination::new(pending)
    }

    // ========== Resolvers ==========

    /// Resolve to a plain success value, computing one from the failure if
    /// necessary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let bad: Outcome<i32, &str> = Outcome::failure("e");
    /// assert_eq!(bad.if_failed(|_| -1), -1);
    /// ```
    ///
    /// Resolving consumes the outcome, so it cannot be resolved twice:
    ///
    /// ```rust,compile_fail
    /// use outcome::Outcome;
    ///
    /// let bad: Outcome<String, String> = Outcome::failure("e".to_string());
    /// let first = bad.if_failed(|e| e);
    /// let second = bad.if_failed(|e| e);
    /// ```
    #[inline]
    pub fn if_failed<Op>(self, f: Op) -> S
    where
        Op: FnOnce(F) -> S,
    {
        self.fold(|value| value, f)
    }

    /// Resolve to a plain success value, using `default` for any failure.
    #[inline]
    pub fn if_failed_with(self, default: S) -> S {
        self.if_failed(|_| default)
    }

    /// Resolve into a `std` result, converting the failure cause to an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn load() -> Result<u32, String> {
    ///     let o: Outcome<u32, &str> = Outcome::failure("missing");
    ///     let value = o.get_or_err(|cause| format!("load failed: {}", cause))?;
    ///     Ok(value + 1)
    /// }
    ///
    /// assert_eq!(load(), Err("load failed: missing".to_string()));
    /// ```
    #[inline]
    pub fn get_or_err<E, Op>(self, into_error: Op) -> Result<S, E>
    where
        Op: FnOnce(F) -> E,
    {
        self.fold(Ok, |cause| Err(into_error(cause)))
    }

    // ========== Conversions ==========

    /// Convert to a `std` result (Success becomes Ok, Failure becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.fold(Ok, Err)
    }
}

impl<T> Outcome<T, T> {
    /// Return whichever payload is populated.
    ///
    /// Only available when both variants carry the same type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::success("x").collapse(), "x");
    /// assert_eq!(Outcome::<&str, _>::failure("x").collapse(), "x");
    /// ```
    #[inline]
    pub fn collapse(self) -> T {
        self.fold(|value| value, |cause| cause)
    }
}

// ========== Trait Implementations ==========

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(cause) => Outcome::Failure(cause),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

impl<S, F> IntoIterator for Outcome<S, F> {
    type Item = S;
    type IntoIter = std::option::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.success_value().into_iter()
    }
}

impl<'a, S, F> IntoIterator for &'a Outcome<S, F> {
    type Item = &'a S;
    type IntoIter = std::option::IntoIter<&'a S>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().success_value().into_iter()
    }
}
