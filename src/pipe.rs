//! Function application helpers.
//!
//! These do nothing but call a function on a value. They exist so a pipeline
//! can be read left to right, starting from a plain value, and so the compiler
//! knows the input type before it checks the closures that follow.
//!
//! # Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let parse = try_to(|s: &str| s.parse::<i64>(), |e| e.to_string());
//!
//! let halved = with("6", parse)
//!     .then(attempt(|n: i64| {
//!         if n % 2 == 0 { success(n / 2) } else { failure(format!("{} is odd", n)) }
//!     }));
//!
//! assert_eq!(halved, success(3));
//! ```

/// Apply `f` to `value`.
///
/// `with(value, f)` is exactly `f(value)`.
#[inline]
pub fn with<T, R, Op>(value: T, f: Op) -> R
where
    Op: FnOnce(T) -> R,
{
    f(value)
}

/// Method-syntax form of [`with`], available on every sized type.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
///
/// let found = Some(4)
///     .pipe(from_optional(|| "missing"))
///     .then(on_success(|n| n * 10));
///
/// assert_eq!(found, success(40));
/// ```
pub trait Pipe: Sized {
    /// Apply `f` to `self`.
    #[inline]
    fn pipe<R, Op>(self, f: Op) -> R
    where
        Op: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_is_application() {
        assert_eq!(with(3, |x| x + 1), 4);
        assert_eq!(with("abc", str::len), 3);
    }

    #[test]
    fn test_pipe_is_application() {
        assert_eq!(3i32.pipe(|x| x * 2), 6);
        assert_eq!(String::from("a").pipe(|s| s + "b"), "ab");
    }
}
