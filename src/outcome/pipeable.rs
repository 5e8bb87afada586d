//! Curried, outcome-last twins of the outcome combinators.
//!
//! Every function here takes the arguments of the method of the same name
//! and returns a function waiting for the outcome, so that
//! `pipeable::map(f)(outcome)` behaves exactly like `outcome.map(f)`.
//! They exist for left-to-right pipelines built with [`pipe!`](crate::pipe)
//! and [`pipe_async!`](crate::pipe_async).
//!
//! Async twins return a boxed `Send` future, which requires every captured
//! type to be `Send + 'static`.
//!
//! # Examples
//!
//! ```rust
//! use resultflow::outcome::{Outcome, pipeable};
//! use resultflow::pipe;
//!
//! fn parse(input: &str) -> Outcome<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = pipe!(
//!     parse("21"),
//!     pipeable::map(|n: i32| n * 2),
//!     pipeable::fold(|error: String| error, |n: i32| n.to_string()),
//! );
//! assert_eq!(doubled, "42");
//! ```

use std::any::Any;

#[cfg(feature = "async")]
use std::future::Future;

#[cfg(feature = "async")]
use futures::future::{BoxFuture, FutureExt};

use super::core::Outcome;
use super::record::Record;
use crate::non_empty::NonEmptyVec;

// =============================================================================
// Constructors
// =============================================================================

/// Curried [`Outcome::from_nullable`].
pub fn from_nullable<E, A>(error: E) -> impl FnOnce(Option<A>) -> Outcome<E, A> {
    move |value| Outcome::from_nullable(value, error)
}

/// Curried [`Outcome::to_non_empty_vec`].
pub fn to_non_empty_vec<E, T>(error: E) -> impl FnOnce(Vec<T>) -> Outcome<E, NonEmptyVec<T>> {
    move |elements| Outcome::to_non_empty_vec(elements, error)
}

// =============================================================================
// Transformations
// =============================================================================

/// Curried [`Outcome::map`].
pub fn map<E, A, B, F>(function: F) -> impl FnOnce(Outcome<E, A>) -> Outcome<E, B>
where
    F: FnOnce(A) -> B,
{
    move |outcome| outcome.map(function)
}

/// Curried [`Outcome::map_error`].
pub fn map_error<E, E2, A, F>(function: F) -> impl FnOnce(Outcome<E, A>) -> Outcome<E2, A>
where
    F: FnOnce(E) -> E2,
{
    move |outcome| outcome.map_error(function)
}

/// Curried [`Outcome::bimap`].
pub fn bimap<E, E2, A, B, F, G>(
    on_failure: F,
    on_success: G,
) -> impl FnOnce(Outcome<E, A>) -> Outcome<E2, B>
where
    F: FnOnce(E) -> E2,
    G: FnOnce(A) -> B,
{
    move |outcome| outcome.bimap(on_failure, on_success)
}

/// Curried [`Outcome::fold`].
pub fn fold<E, A, T, F, G>(on_failure: F, on_success: G) -> impl FnOnce(Outcome<E, A>) -> T
where
    F: FnOnce(E) -> T,
    G: FnOnce(A) -> T,
{
    move |outcome| outcome.fold(on_failure, on_success)
}

// =============================================================================
// Chaining
// =============================================================================

/// Curried [`Outcome::flat_map`].
pub fn flat_map<E, E2, A, B, F>(function: F) -> impl FnOnce(Outcome<E, A>) -> Outcome<E, B>
where
    F: FnOnce(A) -> Outcome<E2, B>,
    E2: Into<E>,
{
    move |outcome| outcome.flat_map(function)
}

/// Curried [`Outcome::flat_map_first`].
pub fn flat_map_first<E, E2, A, B, F>(function: F) -> impl FnOnce(Outcome<E, A>) -> Outcome<E, A>
where
    F: FnOnce(&A) -> Outcome<E2, B>,
    E2: Into<E>,
{
    move |outcome| outcome.flat_map_first(function)
}

/// Curried [`Outcome::flat_map_error`].
pub fn flat_map_error<E, E2, A, B, F>(function: F) -> impl FnOnce(Outcome<E, A>) -> Outcome<E2, A>
where
    F: FnOnce(E) -> Outcome<E2, B>,
    B: Into<A>,
{
    move |outcome| outcome.flat_map_error(function)
}

// =============================================================================
// Unwrap Operations
// =============================================================================

/// Curried [`Outcome::unwrap_or_throw`].
///
/// # Panics
///
/// The returned function panics with the error as payload on a `Failure`.
pub fn unwrap_or_throw<E, A>() -> impl FnOnce(Outcome<E, A>) -> A
where
    E: Any + Send,
{
    Outcome::<E, A>::unwrap_or_throw
}

/// Curried [`Outcome::unwrap_or_throw_with`].
///
/// # Panics
///
/// The returned function panics with `get_throwable(error)` on a `Failure`.
pub fn unwrap_or_throw_with<E, A, T, F>(get_throwable: F) -> impl FnOnce(Outcome<E, A>) -> A
where
    F: FnOnce(E) -> T,
    T: Any + Send,
{
    move |outcome| outcome.unwrap_or_throw_with(get_throwable)
}

// =============================================================================
// Bind
// =============================================================================

/// Curried [`Outcome::bind_to`].
pub fn bind_to<E, A>(name: &'static str) -> impl FnOnce(Outcome<E, A>) -> Outcome<E, Record>
where
    A: Any + Send + Sync,
{
    move |outcome| outcome.bind_to(name)
}

/// Curried [`Outcome::bind`].
///
/// # Examples
///
/// ```rust
/// use resultflow::outcome::{Outcome, Record, pipeable};
/// use resultflow::pipe;
///
/// let record = pipe!(
///     Outcome::<String, u32>::success(7),
///     pipeable::bind_to("id"),
///     pipeable::bind("label", |record: &Record| {
///         Outcome::<String, String>::success(format!("#{}", record.get::<u32>("id").unwrap_or(&0)))
///     }),
/// )
/// .unwrap_success();
/// assert_eq!(record.get::<String>("label").map(String::as_str), Some("#7"));
/// ```
pub fn bind<E, E2, B, F>(
    name: &'static str,
    function: F,
) -> impl FnOnce(Outcome<E, Record>) -> Outcome<E, Record>
where
    F: FnOnce(&Record) -> Outcome<E2, B>,
    E2: Into<E>,
    B: Any + Send + Sync,
{
    move |outcome| outcome.bind(name, function)
}

/// Curried [`Outcome::bind_all`].
pub fn bind_all<E, E2, F>(function: F) -> impl FnOnce(Outcome<E, Record>) -> Outcome<E, Record>
where
    F: FnOnce(&Record) -> Outcome<E2, Record>,
    E2: Into<E>,
{
    move |outcome| outcome.bind_all(function)
}

// =============================================================================
// Sequencing
// =============================================================================

/// Curried [`sequence`](super::sequence::sequence), waiting for the outcomes.
pub fn sequence<E, A, I, C>(error_combinator: C) -> impl FnOnce(I) -> Outcome<E, Vec<A>>
where
    I: IntoIterator<Item = Outcome<E, A>>,
    C: FnMut(E, E) -> E,
{
    move |outcomes| super::sequence::sequence(outcomes, error_combinator)
}

// =============================================================================
// Async Variants
// =============================================================================

/// Curried [`Outcome::async_flat_map`].
#[cfg(feature = "async")]
pub fn async_flat_map<E, E2, A, B, F, Fut>(
    function: F,
) -> impl FnOnce(Outcome<E, A>) -> BoxFuture<'static, Outcome<E, B>>
where
    F: FnOnce(A) -> Fut + Send + 'static,
    Fut: Future<Output = Outcome<E2, B>> + Send + 'static,
    E: Send + 'static,
    E2: Into<E> + Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
{
    move |outcome| outcome.async_flat_map(function).boxed()
}

/// Curried [`Outcome::async_flat_map_first`].
#[cfg(feature = "async")]
pub fn async_flat_map_first<E, E2, A, B, F, Fut>(
    function: F,
) -> impl FnOnce(Outcome<E, A>) -> BoxFuture<'static, Outcome<E, A>>
where
    F: FnOnce(&A) -> Fut + Send + 'static,
    Fut: Future<Output = Outcome<E2, B>> + Send + 'static,
    E: Send + 'static,
    E2: Into<E> + Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
{
    move |outcome| outcome.async_flat_map_first(function).boxed()
}

/// Curried [`Outcome::async_flat_map_error`].
#[cfg(feature = "async")]
pub fn async_flat_map_error<E, E2, A, B, F, Fut>(
    function: F,
) -> impl FnOnce(Outcome<E, A>) -> BoxFuture<'static, Outcome<E2, A>>
where
    F: FnOnce(E) -> Fut + Send + 'static,
    Fut: Future<Output = Outcome<E2, B>> + Send + 'static,
    E: Send + 'static,
    E2: Send + 'static,
    A: Send + 'static,
    B: Into<A> + Send + 'static,
{
    move |outcome| outcome.async_flat_map_error(function).boxed()
}

/// Curried [`async_unwrap_or_throw_with`](super::asynchronous::async_unwrap_or_throw_with).
///
/// # Panics
///
/// The returned future panics with the awaited `get_throwable(error)` on a
/// `Failure`.
#[cfg(feature = "async")]
pub fn async_unwrap_or_throw_with<E, A, T, F, Fut>(
    get_throwable: F,
) -> impl FnOnce(Outcome<E, A>) -> BoxFuture<'static, A>
where
    F: FnOnce(E) -> Fut + Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
    T: Any + Send,
    E: Send + 'static,
    A: Send + 'static,
{
    move |outcome| super::asynchronous::async_unwrap_or_throw_with(outcome, get_throwable).boxed()
}

/// Curried [`Outcome::async_bind`].
#[cfg(feature = "async")]
pub fn async_bind<E, E2, B, F, Fut>(
    name: &'static str,
    function: F,
) -> impl FnOnce(Outcome<E, Record>) -> BoxFuture<'static, Outcome<E, Record>>
where
    F: FnOnce(&Record) -> Fut + Send + 'static,
    Fut: Future<Output = Outcome<E2, B>> + Send + 'static,
    E: Send + 'static,
    E2: Into<E> + Send + 'static,
    B: Any + Send + Sync,
{
    move |outcome| outcome.async_bind(name, function).boxed()
}

/// Curried [`Outcome::async_bind_all`].
#[cfg(feature = "async")]
pub fn async_bind_all<E, E2, F, Fut>(
    function: F,
) -> impl FnOnce(Outcome<E, Record>) -> BoxFuture<'static, Outcome<E, Record>>
where
    F: FnOnce(&Record) -> Fut + Send + 'static,
    Fut: Future<Output = Outcome<E2, Record>> + Send + 'static,
    E: Send + 'static,
    E2: Into<E> + Send + 'static,
{
    move |outcome| outcome.async_bind_all(function).boxed()
}
