//! Bridging panics into outcomes.
//!
//! [`Outcome::try_catch`] and [`Outcome::async_try_catch`] are the only
//! sanctioned place where a fault raised by foreign code becomes a
//! `Failure`. The caller always decides what the failure holds through an
//! explicit `on_throw` function, which receives the raw panic payload as a
//! [`Thrown`]. The payload can be anything passed to `panic!` or
//! `std::panic::panic_any`, not only strings.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::core::Outcome;

/// The payload of a caught panic, preserved exactly as it was raised.
pub struct Thrown {
    payload: Box<dyn Any + Send>,
}

impl Thrown {
    /// Wraps a raw panic payload.
    pub const fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Returns the panic message when the payload is a `&str` or a `String`,
    /// which is what `panic!` produces.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Borrows the payload as `T` if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Takes the payload as `T`, or gives back `self` if the type differs.
    ///
    /// # Errors
    ///
    /// Returns the unchanged `Thrown` when the payload is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        self.payload
            .downcast::<T>()
            .map(|payload| *payload)
            .map_err(Self::new)
    }

    /// Gives back the raw payload, for example to resume the unwind with
    /// [`std::panic::resume_unwind`].
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => formatter.debug_tuple("Thrown").field(&message).finish(),
            None => formatter.write_str("Thrown(<opaque payload>)"),
        }
    }
}

impl<E, A> Outcome<E, A> {
    /// Runs `function`, turning a normal return into a `Success` and a panic
    /// into a `Failure` built by `on_throw`.
    ///
    /// # Notes
    ///
    /// The global panic hook still runs before the panic is caught, so the
    /// message (and a backtrace, when enabled) reaches stderr. Keep this for
    /// exceptional boundaries around foreign code, not for routine control
    /// flow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::{Outcome, Thrown};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Wrapped(&'static str);
    ///
    /// let outcome: Outcome<Wrapped, i32> = Outcome::try_catch(
    ///     || std::panic::panic_any("🍌"),
    ///     |thrown: Thrown| Wrapped(thrown.downcast::<&'static str>().unwrap_or("?")),
    /// );
    /// assert_eq!(outcome, Outcome::Failure(Wrapped("🍌")));
    ///
    /// let outcome: Outcome<Wrapped, i32> = Outcome::try_catch(|| 42, |_| Wrapped("unused"));
    /// assert_eq!(outcome, Outcome::Success(42));
    /// ```
    pub fn try_catch<F, G>(function: F, on_throw: G) -> Self
    where
        F: FnOnce() -> A,
        G: FnOnce(Thrown) -> E,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let thrown = Thrown::new(payload);
                tracing::debug!(thrown = ?thrown, "converted a panic into a failure");
                Self::Failure(on_throw(thrown))
            }
        }
    }

    /// Async counterpart of [`try_catch`](Self::try_catch).
    ///
    /// Panics raised while calling `function` and while polling the future it
    /// returns are both converted through `on_throw`.
    ///
    /// # Notes
    ///
    /// As with [`try_catch`](Self::try_catch), the global panic hook reports
    /// every caught panic on stderr; reserve this for exceptional boundaries.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use resultflow::outcome::Outcome;
    ///
    /// let outcome: Outcome<String, u32> = Outcome::async_try_catch(
    ///     || async { fetch_play_count().await },
    ///     |thrown| thrown.message().unwrap_or("unknown failure").to_string(),
    /// )
    /// .await;
    /// ```
    #[cfg(feature = "async")]
    pub async fn async_try_catch<F, Fut, G>(function: F, on_throw: G) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = A>,
        G: FnOnce(Thrown) -> E,
    {
        use futures::FutureExt;

        let caught = match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(future) => AssertUnwindSafe(future).catch_unwind().await,
            Err(payload) => Err(payload),
        };
        match caught {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let thrown = Thrown::new(payload);
                tracing::debug!(thrown = ?thrown, "converted a panic into a failure");
                Self::Failure(on_throw(thrown))
            }
        }
    }
}
