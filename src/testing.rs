//! Testing utilities for code that produces outcomes.
//!
//! # Assertion Macros
//!
//! ```rust
//! use outcome::{assert_failure, assert_success, Outcome};
//!
//! let ok: Outcome<i32, &str> = Outcome::success(42);
//! assert_success!(ok);
//! assert_success!(ok, 42);
//!
//! let bad: Outcome<i32, &str> = Outcome::failure("error");
//! assert_failure!(bad);
//! assert_failure!(bad, "error");
//! ```
//!
//! # Property Testing
//!
//! With the `proptest` feature enabled, `Outcome<S, F>` implements
//! `proptest::arbitrary::Arbitrary` whenever both payload types do.

/// Assert that an outcome is a success, optionally with a specific value.
///
/// Panics with the failure cause if the outcome failed.
///
/// # Example
///
/// ```rust
/// use outcome::{assert_success, Outcome};
///
/// let o: Outcome<_, String> = Outcome::success(12);
/// assert_success!(o, 12);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Failure(cause) => {
                panic!("Expected Success, got Failure: {:?}", cause);
            }
        }
    };
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Outcome::Failure(cause) => {
                panic!(
                    "Expected Success of {:?}, got Failure: {:?}",
                    $expected, cause
                );
            }
        }
    };
}

/// Assert that an outcome is a failure, optionally with a specific cause.
///
/// Panics with the success value if the outcome succeeded.
///
/// # Example
///
/// ```rust
/// use outcome::{assert_failure, Outcome};
///
/// let o: Outcome<i32, _> = Outcome::failure("Five is odd");
/// assert_failure!(o, "Five is odd");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(value) => {
                panic!("Expected Failure, got Success: {:?}", value);
            }
        }
    };
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(cause) => {
                assert_eq!(cause, $expected);
            }
            $crate::Outcome::Success(value) => {
                panic!(
                    "Expected Failure of {:?}, got Success: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<S, F> Arbitrary for crate::Outcome<S, F>
where
    S: Arbitrary + 'static,
    F: Arbitrary + 'static,
{
    type Parameters = (S::Parameters, F::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (s_params, f_params) = args;
        prop_oneof![
            any_with::<S>(s_params).prop_map(crate::Outcome::Success),
            any_with::<F>(f_params).prop_map(crate::Outcome::Failure),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Outcome;

    #[test]
    fn assert_success_macro() {
        let ok: Outcome<i32, &str> = Outcome::success(42);
        assert_success!(ok);
        assert_success!(ok, 42);
    }

    #[test]
    fn assert_failure_macro() {
        let bad: Outcome<i32, &str> = Outcome::failure("error");
        assert_failure!(bad);
        assert_failure!(bad, "error");
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let bad: Outcome<i32, &str> = Outcome::failure("error");
        assert_success!(bad);
    }

    #[test]
    #[should_panic(expected = "Expected Failure of")]
    fn assert_failure_with_cause_panics_on_success() {
        let ok: Outcome<i32, &str> = Outcome::success(1);
        assert_failure!(ok, "error");
    }

    #[test]
    #[should_panic]
    fn assert_success_panics_on_wrong_value() {
        let ok: Outcome<i32, &str> = Outcome::success(1);
        assert_success!(ok, 2);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use proptest::strategy::ValueTree;
        use proptest::test_runner::TestRunner;

        #[test]
        fn outcome_arbitrary_generates_both_variants() {
            let mut runner = TestRunner::deterministic();
            let strategy = any::<Outcome<i32, String>>();

            let drawn: Vec<Outcome<i32, String>> = (0..64)
                .map(|_| {
                    strategy
                        .new_tree(&mut runner)
                        .map(|tree| tree.current())
                        .unwrap()
                })
                .collect();

            assert!(drawn.iter().any(Outcome::is_success));
            assert!(drawn.iter().any(Outcome::is_failure));
        }
    }
}
