//! The `Outcome` type and its combinator algebra.
//!
//! This module provides:
//!
//! - [`Outcome`]: a `Success` or a `Failure`, with constructors, inspectors,
//!   transformations and chaining operations
//! - [`Record`]: the named accumulator built by `bind_to`, `bind` and
//!   `bind_all`
//! - [`sequence_outcomes`] / [`sequence`]: turning many outcomes into one
//! - [`Thrown`]: the payload handed to `on_throw` by `try_catch`
//! - [`pipeable`]: curried, outcome-last twins of every combinator
//!
//! # Propagation
//!
//! Three policies coexist:
//!
//! 1. **Short-circuit** (`flat_map`, `bind`): the first failure wins and
//!    later steps are never called.
//! 2. **Aggregate** (`sequence_outcomes`): every failure is kept, in order.
//! 3. **Recover** (`flat_map_error`): a failure can become a success again.
//!
//! # Examples
//!
//! ```rust
//! use resultflow::outcome::Outcome;
//!
//! fn find_boardgame(id: u32) -> Outcome<String, &'static str> {
//!     match id {
//!         1 => Outcome::success("Azul"),
//!         _ => Outcome::failure(format!("boardgame {id} not found")),
//!     }
//! }
//!
//! let status = find_boardgame(7)
//!     .map(str::to_uppercase)
//!     .fold(|_| 404, |_| 200);
//! assert_eq!(status, 404);
//! ```

#[cfg(feature = "async")]
mod asynchronous;
mod bind;
mod catch;
mod core;
pub mod pipeable;
mod record;
mod sequence;
mod tag;

#[cfg(feature = "async")]
pub use asynchronous::{async_unwrap_or_throw, async_unwrap_or_throw_with};
pub use catch::Thrown;
pub use self::core::{Outcome, to_failure, to_success};
pub use record::Record;
pub use sequence::{Sequence, first_error_combinator, sequence, sequence_outcomes};
#[cfg(feature = "serde")]
pub use tag::is_tagged_outcome;
pub use tag::{Tag, TagParseError};

static_assertions::assert_impl_all!(Record: Send, Sync);
static_assertions::assert_impl_all!(Thrown: Send);
static_assertions::assert_impl_all!(Outcome<String, Record>: Send, Sync);
