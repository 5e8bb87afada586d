//! Async combinators for outcomes.
//!
//! These mirror the synchronous chaining operations, awaiting the given
//! async function. When the short-circuit condition holds the function is
//! never called, so no future is created and nothing is scheduled.

use std::any::Any;
use std::future::{Future, IntoFuture};

use super::core::Outcome;

impl<E, A> Outcome<E, A> {
    /// Async version of [`flat_map`](Self::flat_map).
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use resultflow::outcome::Outcome;
    ///
    /// async fn load_score(player: u32) -> Outcome<String, u32> {
    ///     Outcome::success(player * 10)
    /// }
    ///
    /// let score = Outcome::<String, u32>::success(4).async_flat_map(load_score).await;
    /// assert_eq!(score, Outcome::Success(40));
    /// ```
    pub async fn async_flat_map<E2, B, F, Fut>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = Outcome<E2, B>>,
        E2: Into<E>,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => function(value).await.map_error(Into::into),
        }
    }

    /// Async version of [`flat_map_first`](Self::flat_map_first).
    ///
    /// The returned future of `function` must not borrow the value; clone
    /// what it needs before the `async` block.
    pub async fn async_flat_map_first<E2, B, F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> Fut,
        Fut: Future<Output = Outcome<E2, B>>,
        E2: Into<E>,
    {
        match self {
            Self::Failure(error) => Self::Failure(error),
            Self::Success(value) => match function(&value).await {
                Outcome::Failure(error) => Self::Failure(error.into()),
                Outcome::Success(_) => Self::Success(value),
            },
        }
    }

    /// Async version of [`flat_map_error`](Self::flat_map_error).
    pub async fn async_flat_map_error<E2, B, F, Fut>(self, function: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<E2, B>>,
        B: Into<A>,
    {
        match self {
            Self::Failure(error) => function(error).await.map(Into::into),
            Self::Success(value) => Outcome::Success(value),
        }
    }
}

/// Awaits an outcome (or a future of one) and returns its value, panicking
/// with the error itself as payload on failure.
///
/// # Panics
///
/// Panics with payload `error` when the awaited outcome is `Failure(error)`.
pub async fn async_unwrap_or_throw<E, A, R>(outcome: R) -> A
where
    R: IntoFuture<Output = Outcome<E, A>>,
    E: Any + Send,
{
    outcome.await.unwrap_or_throw()
}

/// Awaits an outcome (or a future of one) and returns its value; on failure,
/// awaits `get_throwable(error)` and panics with the result as payload.
///
/// # Panics
///
/// Panics with the awaited `get_throwable(error)` when the outcome is
/// `Failure(error)`.
pub async fn async_unwrap_or_throw_with<E, A, T, R, F, Fut>(outcome: R, get_throwable: F) -> A
where
    R: IntoFuture<Output = Outcome<E, A>>,
    F: FnOnce(E) -> Fut,
    Fut: Future<Output = T>,
    T: Any + Send,
{
    match outcome.await {
        Outcome::Success(value) => value,
        Outcome::Failure(error) => std::panic::panic_any(get_throwable(error).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test]
    async fn async_flat_map_does_not_call_function_on_failure() {
        let calls = AtomicUsize::new(0);
        let outcome: Outcome<&str, i32> = Outcome::failure("offline");
        let result = outcome
            .async_flat_map(|value| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Outcome::<&str, i32>::success(value) }
            })
            .await;
        assert_eq!(result, Outcome::Failure("offline"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn async_flat_map_first_keeps_first_value() {
        let outcome: Outcome<&str, i32> = Outcome::success(2);
        let result = outcome
            .async_flat_map_first(|value| {
                let even = value % 2 == 0;
                async move {
                    if even {
                        Outcome::success(())
                    } else {
                        Outcome::<&str, ()>::failure("odd")
                    }
                }
            })
            .await;
        assert_eq!(result, Outcome::Success(2));
    }

    #[rstest]
    #[tokio::test]
    async fn async_flat_map_error_recovers() {
        let outcome: Outcome<&str, i32> = Outcome::failure("stale");
        let result: Outcome<String, i32> = outcome
            .async_flat_map_error(|error| async move {
                Outcome::<String, i32>::success(error.len() as i32)
            })
            .await;
        assert_eq!(result, Outcome::Success(5));
    }

    #[rstest]
    #[tokio::test]
    async fn async_unwrap_or_throw_returns_value_from_future() {
        let value = async_unwrap_or_throw(async { Outcome::<&str, i32>::success(9) }).await;
        assert_eq!(value, 9);
    }
}
