//! Tracing support for outcome pipelines.
//!
//! This module provides the `traced` transformer, which records an event for
//! every outcome that passes through it and hands the outcome on unchanged.
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use std::fmt::Debug;

use crate::outcome::Outcome;

/// Record an outcome as a tracing event and return it unchanged.
///
/// Successes are recorded at `DEBUG`, failures at `WARN`. Both carry the
/// `stage` label and the payload rendered with `Debug`.
///
/// # Example
///
/// ```rust
/// use outcome::prelude::*;
/// use outcome::trace::traced;
///
/// let parsed = with("42", try_to(|s: &str| s.parse::<u32>(), |e| e.to_string()))
///     .then(traced("parse"));
///
/// assert_eq!(parsed, success(42));
/// ```
pub fn traced<S, F>(stage: &'static str) -> impl FnMut(Outcome<S, F>) -> Outcome<S, F>
where
    S: Debug,
    F: Debug,
{
    move |outcome| outcome.traced(stage)
}

/// Extension trait for recording outcomes in tracing spans.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait OutcomeTracingExt: Sized {
    /// Record this outcome under `stage` and return it unchanged.
    fn traced(self, stage: &'static str) -> Self;
}

impl<S, F> OutcomeTracingExt for Outcome<S, F>
where
    S: Debug,
    F: Debug,
{
    fn traced(self, stage: &'static str) -> Self {
        self.on_success_do(|value| ::tracing::debug!(stage, ?value, "stage succeeded"))
            .on_failure_do(|cause| ::tracing::warn!(stage, ?cause, "stage failed"))
    }
}
