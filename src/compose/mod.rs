//! Left-to-right composition for outcome pipelines.
//!
//! - [`pipe!`](crate::pipe): apply functions left to right
//! - [`pipe_async!`](crate::pipe_async): the same, awaiting steps marked
//!   with `=>>`
//!
//! Both pair with the curried functions of
//! [`outcome::pipeable`](crate::outcome::pipeable), which take every argument
//! except the outcome and return a function waiting for it.
//!
//! ```text
//! pipe!(x, f, g, h) = h(g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```
//! use resultflow::outcome::{Outcome, pipeable};
//! use resultflow::pipe;
//!
//! let status = pipe!(
//!     Outcome::<&str, u32>::failure("player not found"),
//!     pipeable::map(|id: u32| id + 1),
//!     pipeable::fold(|_| 404, |_| 200),
//! );
//! assert_eq!(status, 404);
//! ```

mod pipe_async_macro;
mod pipe_macro;
