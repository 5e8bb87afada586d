//! # resultflow
//!
//! A tagged `Outcome` type with its combinator algebra, and `ResultFlow`, a
//! deferred early-exit builder over outcomes.
//!
//! ## Overview
//!
//! - **Outcome**: `Success(A)` or `Failure(E)`, with `map`, `flat_map`,
//!   `fold`, `bind`, `try_catch`, async variants and more
//! - **Sequencing**: collect many outcomes into one, keeping every error
//! - **Pipeable functions**: curried twins of every combinator, for use with
//!   `pipe!` and `pipe_async!`
//! - **`ResultFlow`**: straight-line async code that stops at the first failure
//!   and can be replayed any number of times
//!
//! ## Feature Flags
//!
//! - `async`: async combinators and [`flow`] (enabled by default)
//! - `compose`: the `pipe!` and `pipe_async!` macros (enabled by default)
//! - `serde`: the tagged wire representation of outcomes
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use resultflow::prelude::*;
//!
//! fn find_player(id: u32) -> Outcome<String, &'static str> {
//!     Outcome::from_nullable((id == 1).then_some("ada"), format!("player {id} not found"))
//! }
//!
//! let status = find_player(2).fold(|_| 404, |_| 200);
//! assert_eq!(status, 404);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
// Generic async combinators are Send exactly when their inputs are.
#![allow(clippy::future_not_send)]

/// Prelude module for convenient imports.
///
/// Re-exports the types most pipelines need.
///
/// # Usage
///
/// ```rust
/// use resultflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::non_empty::NonEmptyVec;
    pub use crate::outcome::{
        Outcome, Record, Sequence, first_error_combinator, sequence, sequence_outcomes,
        to_failure, to_success,
    };

    #[cfg(feature = "async")]
    pub use crate::flow::{FlowHelpers, ResultFlow, Step};
}

pub mod non_empty;
pub mod outcome;

#[cfg(feature = "async")]
pub mod flow;

#[cfg(feature = "compose")]
pub mod compose;
