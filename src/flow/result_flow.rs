//! `ResultFlow`: a deferred, replayable, early-exit computation over outcomes.
//!
//! A `ResultFlow` "describes" a computation; nothing runs until
//! [`run`](ResultFlow::run) is awaited. Every call to `run` executes the
//! whole chain again from scratch, so a flow can be run any number of times
//! and combinators never affect the flow they were built from.
//!
//! # Examples
//!
//! ```rust
//! use resultflow::flow::ResultFlow;
//! use resultflow::outcome::Outcome;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let base = ResultFlow::lift(Outcome::<String, i32>::success(10));
//! let plus_ten = base.map(|n| n + 10);
//!
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&seen);
//! let observed = plus_ten.if_success(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! futures::executor::block_on(async {
//!     assert_eq!(base.run().await, Outcome::Success(10));
//!     assert_eq!(base.run().await, Outcome::Success(10));
//!     assert_eq!(observed.run().await, Outcome::Success(20));
//!     assert_eq!(observed.run().await, Outcome::Success(20));
//! });
//! assert_eq!(seen.load(Ordering::SeqCst), 2);
//! ```

use std::any::Any;
use std::fmt;
use std::future::{Future, IntoFuture, ready};
use std::pin::Pin;
use std::sync::Arc;

use futures::FutureExt;

use super::helpers::{FlowHelpers, Step, into_step};
use crate::outcome::Outcome;

type BoxedStep<A, E> = Pin<Box<dyn Future<Output = Step<A, E>> + Send>>;

type Producer<E, A> = dyn Fn(FlowHelpers<E>) -> BoxedStep<A, E> + Send + Sync;

/// A deferred computation that produces an [`Outcome<E, A>`] each time it is
/// run.
///
/// Cloning is cheap: clones share the producer, and since the producer is
/// re-executed on every run, sharing is unobservable.
///
/// # Type Parameters
///
/// * `E` - The error of a failed run
/// * `A` - The value of a successful run
pub struct ResultFlow<E, A> {
    producer: Arc<Producer<E, A>>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<E, A> ResultFlow<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Creates a flow from a builder receiving the [`FlowHelpers`].
    ///
    /// The builder is called anew on every run. It produces the value with
    /// `Ok(value)` and stops early by returning or `?`-propagating the
    /// [`Halt`](super::Halt) obtained from the helpers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::flow::ResultFlow;
    /// use resultflow::outcome::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Early { reason: &'static str }
    ///
    /// let flow = ResultFlow::<Early, &str>::of(|helpers| async move {
    ///     helpers.fail::<()>(Early { reason: "early" })?;
    ///     Ok("unreachable")
    /// });
    ///
    /// let outcome = futures::executor::block_on(flow.run());
    /// assert_eq!(outcome, Outcome::Failure(Early { reason: "early" }));
    /// ```
    pub fn of<F, Fut>(builder: F) -> Self
    where
        F: Fn(FlowHelpers<E>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Step<A, E>> + Send + 'static,
    {
        Self {
            producer: Arc::new(move |helpers: FlowHelpers<E>| -> BoxedStep<A, E> {
                Box::pin(builder(helpers))
            }),
        }
    }

    /// Lifts a replayable outcome source, such as an [`Outcome`] or another
    /// `ResultFlow`, into a flow.
    ///
    /// `value` is cloned and awaited on every run.
    pub fn lift<R>(value: R) -> Self
    where
        R: IntoFuture<Output = Outcome<E, A>> + Clone + Send + Sync + 'static,
        R::IntoFuture: Send + 'static,
    {
        Self::lift_with(move || value.clone())
    }

    /// Lifts a zero-argument function returning an outcome or a future of
    /// one. The function is called on every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::flow::ResultFlow;
    /// use resultflow::outcome::Outcome;
    ///
    /// let flow = ResultFlow::lift_with(|| async { Outcome::<String, u8>::success(7) });
    /// assert_eq!(futures::executor::block_on(flow.run()), Outcome::Success(7));
    /// ```
    pub fn lift_with<F, R>(factory: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoFuture<Output = Outcome<E, A>>,
        R::IntoFuture: Send + 'static,
    {
        Self::of(move |helpers| {
            let pending = factory().into_future();
            async move { helpers.try_to(pending).await }
        })
    }

    /// Lifts a one-shot future of an outcome.
    ///
    /// The future is awaited at most once, by the first run; later runs
    /// observe the same settled outcome.
    pub fn lift_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<E, A>> + Send + 'static,
        E: Clone + Sync,
        A: Clone + Sync,
    {
        let shared = future.boxed().shared();
        Self::lift_with(move || shared.clone())
    }
}

impl<E: 'static, A: 'static> ResultFlow<E, A> {
    /// Runtime guard: returns `true` only when `value` is a `ResultFlow<E, A>`.
    pub fn is_result_flow(value: &dyn Any) -> bool {
        value.is::<Self>()
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<E, A> ResultFlow<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Executes the whole chain and settles it into an [`Outcome`].
    ///
    /// A halted builder becomes a `Failure`. A panic raised anywhere in the
    /// chain is not caught: it propagates to whoever polls the returned
    /// future.
    pub fn run(&self) -> impl Future<Output = Outcome<E, A>> + Send + use<E, A> {
        let producer = Arc::clone(&self.producer);
        async move {
            match producer(FlowHelpers::new()).await {
                Ok(value) => Outcome::Success(value),
                Err(halt) => {
                    tracing::trace!("result flow halted with a failure");
                    Outcome::Failure(halt.into_error())
                }
            }
        }
    }

    /// Runs this flow, then hands the settled outcome to `next`.
    fn continue_with<E2, B, F, Fut>(&self, next: F) -> ResultFlow<E2, B>
    where
        F: Fn(Outcome<E, A>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Outcome<E2, B>> + Send + 'static,
        E2: Send + 'static,
        B: Send + 'static,
    {
        let previous = self.clone();
        let next = Arc::new(next);
        ResultFlow::of(move |_| {
            let pending = previous.run();
            let next = Arc::clone(&next);
            async move { into_step(next(pending.await).await) }
        })
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<E, A> ResultFlow<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Transforms the value of a successful run. `function` is not called on
    /// a failure.
    pub fn map<B, F>(&self, function: F) -> ResultFlow<E, B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.continue_with(move |outcome| ready(outcome.map(&function)))
    }

    /// Transforms the error of a failed run. `function` is not called on a
    /// success.
    pub fn map_error<E2, F>(&self, function: F) -> ResultFlow<E2, A>
    where
        F: Fn(E) -> E2 + Send + Sync + 'static,
        E2: Send + 'static,
    {
        self.continue_with(move |outcome| ready(outcome.map_error(&function)))
    }

    /// Continues a successful run with `function`, which may return a
    /// `ResultFlow`, an [`Outcome`] or any future of an outcome.
    ///
    /// `function` is never called on a failure. The next step's error
    /// converts into this flow's error type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::flow::ResultFlow;
    /// use resultflow::outcome::Outcome;
    ///
    /// let player = ResultFlow::lift(Outcome::<String, u32>::success(1));
    /// let plays = player.chain(|id| ResultFlow::lift(Outcome::<String, u32>::success(id * 3)));
    /// let doubled = plays.chain(|count| async move { Outcome::<String, u32>::success(count * 2) });
    ///
    /// assert_eq!(futures::executor::block_on(doubled.run()), Outcome::Success(6));
    /// ```
    pub fn chain<E2, B, F, R>(&self, function: F) -> ResultFlow<E, B>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        R: IntoFuture<Output = Outcome<E2, B>> + Send + 'static,
        R::IntoFuture: Send + 'static,
        E2: Into<E>,
        B: Send + 'static,
    {
        self.continue_with(move |outcome| {
            let pending = outcome.map(&function);
            async move {
                match pending {
                    Outcome::Success(next) => next.await.map_error(Into::into),
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }
        })
    }

    /// Calls `hook` with the value once per successful run, leaving the
    /// outcome unchanged.
    pub fn if_success<F>(&self, hook: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        self.continue_with(move |outcome| {
            if let Outcome::Success(value) = &outcome {
                hook(value);
            }
            ready(outcome)
        })
    }

    /// Calls `hook` with the error once per failed run, leaving the outcome
    /// unchanged.
    pub fn if_failure<F>(&self, hook: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.continue_with(move |outcome| {
            if let Outcome::Failure(error) = &outcome {
                hook(error);
            }
            ready(outcome)
        })
    }

    /// Recovers a failed run with `alternative`, which may return a
    /// `ResultFlow`, an [`Outcome`] or any future of an outcome.
    ///
    /// `alternative` is only called on a failure. If the recovery fails too,
    /// its failure is the result; the original error is gone by then, so the
    /// new flow carries the recovery's error type.
    pub fn or_else<E2, F, R>(&self, alternative: F) -> ResultFlow<E2, A>
    where
        F: Fn(E) -> R + Send + Sync + 'static,
        R: IntoFuture<Output = Outcome<E2, A>> + Send + 'static,
        R::IntoFuture: Send + 'static,
        E2: Send + 'static,
    {
        self.continue_with(move |outcome| {
            let pending = outcome.map_error(&alternative);
            async move {
                match pending {
                    Outcome::Success(value) => Outcome::Success(value),
                    Outcome::Failure(recovery) => recovery.await,
                }
            }
        })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<E, A> Clone for ResultFlow<E, A> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<E, A> IntoFuture for ResultFlow<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    type Output = Outcome<E, A>;
    type IntoFuture = Pin<Box<dyn Future<Output = Outcome<E, A>> + Send>>;

    /// Awaiting a flow runs it.
    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.run())
    }
}

impl<E, A> fmt::Display for ResultFlow<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<ResultFlow>")
    }
}

impl<E, A> fmt::Debug for ResultFlow<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ResultFlow(<deferred>)")
    }
}

static_assertions::assert_impl_all!(ResultFlow<String, i32>: Send, Sync, Clone);
