//! The early-exit sentinel and the helpers handed to flow builders.
//!
//! A builder returns a [`Step`], which is either the produced value or a
//! [`Halt`] carrying a failure. A `Halt` can only be obtained from
//! [`FlowHelpers::try_to`], [`FlowHelpers::try_to_with`] or
//! [`FlowHelpers::fail`], so a halted flow is always a business failure and
//! never a disguised fault.

use std::fmt;
use std::future::IntoFuture;
use std::marker::PhantomData;

use crate::outcome::Outcome;

/// The sentinel that stops a flow early, carrying its failure.
///
/// Builders propagate it with `?` or return it directly; it is turned back
/// into [`Outcome::Failure`] by [`ResultFlow::run`](super::ResultFlow::run).
#[must_use = "a Halt only stops the flow when it is returned"]
pub struct Halt<E> {
    error: E,
}

impl<E> Halt<E> {
    pub(crate) const fn new(error: E) -> Self {
        Self { error }
    }

    /// Borrows the carried error.
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Takes the carried error.
    pub fn into_error(self) -> E {
        self.error
    }
}

impl<E: fmt::Debug> fmt::Debug for Halt<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Halt").field(&self.error).finish()
    }
}

impl<E, A> From<Halt<E>> for Outcome<E, A> {
    fn from(halt: Halt<E>) -> Self {
        Self::Failure(halt.error)
    }
}

/// What a flow builder produces: a value, or a [`Halt`].
pub type Step<A, E> = Result<A, Halt<E>>;

/// Turns a settled outcome into a step.
pub(crate) fn into_step<E, A>(outcome: Outcome<E, A>) -> Step<A, E> {
    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::Failure(error) => Err(Halt::new(error)),
    }
}

// =============================================================================
// FlowHelpers
// =============================================================================

/// Helpers available inside a [`ResultFlow::of`](super::ResultFlow::of)
/// builder.
///
/// # Examples
///
/// ```rust
/// use resultflow::flow::ResultFlow;
/// use resultflow::outcome::Outcome;
///
/// fn find_player(id: u32) -> Outcome<String, &'static str> {
///     if id == 1 { Outcome::success("ada") } else { Outcome::failure(format!("no player {id}")) }
/// }
///
/// let flow = ResultFlow::<String, usize>::of(|helpers| async move {
///     let player = helpers.try_to(find_player(1)).await?;
///     if player.is_empty() {
///         return helpers.fail("empty name".to_string());
///     }
///     Ok(player.len())
/// });
///
/// assert_eq!(futures::executor::block_on(flow.run()), Outcome::Success(3));
/// ```
pub struct FlowHelpers<E> {
    error: PhantomData<fn() -> E>,
}

#[allow(clippy::unused_self)]
impl<E> FlowHelpers<E> {
    pub(crate) const fn new() -> Self {
        Self { error: PhantomData }
    }

    /// Awaits an outcome (or a future of one) and unwraps it.
    ///
    /// A success yields `Ok(value)`; a failure yields the [`Halt`] that stops
    /// the flow when propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns a [`Halt`] carrying the error of a `Failure`.
    pub async fn try_to<A, R>(&self, outcome: R) -> Step<A, E>
    where
        R: IntoFuture<Output = Outcome<E, A>>,
    {
        into_step(outcome.await)
    }

    /// Like [`try_to`](Self::try_to), converting the error with `map_error`
    /// before it halts the flow.
    ///
    /// Passing `Into::into` adapts any error that converts into the flow's
    /// error type.
    ///
    /// # Errors
    ///
    /// Returns a [`Halt`] carrying `map_error(error)` for a `Failure(error)`.
    pub async fn try_to_with<E2, A, R, F>(&self, outcome: R, map_error: F) -> Step<A, E>
    where
        R: IntoFuture<Output = Outcome<E2, A>>,
        F: FnOnce(E2) -> E,
    {
        into_step(outcome.await.map_error(map_error))
    }

    /// Halts the flow with `error`.
    ///
    /// Return the result (`return helpers.fail(error);`) or propagate it with
    /// `?`; nothing after that point in the builder runs.
    ///
    /// # Errors
    ///
    /// Always returns a [`Halt`] carrying `error`.
    pub fn fail<T>(&self, error: E) -> Step<T, E> {
        Err(Halt::new(error))
    }

    /// Helpers that turn plain futures into outcomes.
    pub const fn futures(&self) -> FutureHelpers {
        FutureHelpers
    }
}

impl<E> Clone for FlowHelpers<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FlowHelpers<E> {}

impl<E> fmt::Debug for FlowHelpers<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FlowHelpers")
    }
}

// =============================================================================
// FutureHelpers
// =============================================================================

/// Adapters from plain futures to futures of outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FutureHelpers;

#[allow(clippy::unused_self)]
impl FutureHelpers {
    /// Awaits an optional value, failing with `error` when it is `None`.
    ///
    /// ```rust
    /// use resultflow::flow::FutureHelpers;
    /// use resultflow::outcome::Outcome;
    ///
    /// let lookup = async { None::<u32> };
    /// let outcome = futures::executor::block_on(FutureHelpers.from_nullable(lookup, "unknown id"));
    /// assert_eq!(outcome, Outcome::Failure("unknown id"));
    /// ```
    pub async fn from_nullable<E, A, R>(self, value: R, error: E) -> Outcome<E, A>
    where
        R: IntoFuture<Output = Option<A>>,
    {
        Outcome::from_nullable(value.await, error)
    }

    /// Awaits an outcome and maps its error.
    pub async fn map_error<E, E2, A, R, F>(self, outcome: R, mapper: F) -> Outcome<E2, A>
    where
        R: IntoFuture<Output = Outcome<E, A>>,
        F: FnOnce(E) -> E2,
    {
        outcome.await.map_error(mapper)
    }
}
