//! # Outcome
//!
//! A two-variant outcome type and a small algebra of combinators for building
//! fallible pipelines.
//!
//! ## Vocabulary
//!
//! - **Introducers** build an [`Outcome`] from something else: an `Option`, a
//!   predicate, or a fallible `std` operation.
//! - **Transformers** map an outcome to another outcome, touching only one
//!   side and passing the other through.
//! - **Combiners** join two independent outcomes; the first failure wins.
//! - **Resolvers** end a pipeline by turning outcomes into plain values.
//!
//! Every combinator is a free function returning a closure, so library stages
//! and your own functions plug into a pipeline the same way, through
//! [`Outcome::then`], [`with`](pipe::with) or iterator adapters.
//!
//! ## Quick Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn halve(n: i64) -> Outcome<i64, String> {
//!     if n % 2 == 0 {
//!         success(n / 2)
//!     } else {
//!         failure(format!("{} is odd", n))
//!     }
//! }
//!
//! let Pair { left: halved, right: problems } = split(
//!     vec!["6", "5", "NaN"]
//!         .into_iter()
//!         .map(try_to(|s: &str| s.parse::<i64>(), |e| e.to_string()))
//!         .map(attempt(halve)),
//! );
//!
//! assert_eq!(halved, vec![3]);
//! assert_eq!(problems, vec!["5 is odd", "invalid digit found in string"]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combiners;
pub mod introducers;
pub mod outcome;
pub mod pair;
pub mod pipe;
pub mod resolvers;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;
pub mod transformers;

// Re-exports
pub use combiners::{combine_with, Combination};
pub use introducers::{from_optional, from_predicate, from_result, try_to};
pub use outcome::{failure, success, Outcome};
pub use pair::Pair;
pub use pipe::{with, Pipe};
pub use resolvers::{collapse, get_or_err, if_failed, if_failed_with, split};
pub use transformers::{
    attempt, failures, on_failure, on_failure_do, on_success, on_success_do, on_success_try,
    recover, successes,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combiners::{combine_with, Combination};
    pub use crate::introducers::{from_optional, from_predicate, from_result, try_to};
    pub use crate::outcome::{failure, success, Outcome};
    pub use crate::pair::Pair;
    pub use crate::pipe::{with, Pipe};
    pub use crate::resolvers::{collapse, get_or_err, if_failed, if_failed_with, split};
    #[cfg(feature = "tracing")]
    pub use crate::trace::OutcomeTracingExt;
    pub use crate::transformers::{
        attempt, failures, on_failure, on_failure_do, on_success, on_success_do,
        on_success_try, recover, successes,
    };
}
