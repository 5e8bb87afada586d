//! The `pipe_async!` macro for left-to-right pipelines with async steps.
//!
//! `pipe_async!` builds a future that threads a value through a series of
//! steps, awaiting the ones marked as async. Nothing runs until the future
//! is awaited.
//!
//! # Operators
//!
//! - **Comma** or **lift operator** (`=>`): apply a plain function
//! - **Await operator** (`=>>`): apply a function and await what it returns,
//!   which may be any future or an [`Outcome`](crate::outcome::Outcome)
//!
//! # Examples
//!
//! ```rust
//! use resultflow::outcome::{Outcome, pipeable};
//! use resultflow::pipe_async;
//!
//! fn double(n: i32) -> i32 { n * 2 }
//! async fn add(n: i32) -> i32 { n + 3 }
//!
//! let result = futures::executor::block_on(pipe_async!(1, double, =>> add, double));
//! assert_eq!(result, 10);
//!
//! async fn find_score(player: &'static str) -> Outcome<String, u32> {
//!     if player == "ada" { Outcome::success(12) } else { Outcome::failure(format!("no {player}")) }
//! }
//!
//! let outcome = futures::executor::block_on(pipe_async!(
//!     "ada",
//!     =>> find_score,
//!     =>> pipeable::async_flat_map(|score: u32| async move { Outcome::<String, u32>::success(score + 1) }),
//!     => pipeable::map(|score: u32| score * 10),
//! ));
//! assert_eq!(outcome, Outcome::Success(130));
//! ```

/// Pipes a value through plain and async steps, producing a future.
///
/// # Syntax
///
/// - `pipe_async!(value)` - A future resolving to `value`
/// - `pipe_async!(value, f)` - Applies `f` (comma syntax)
/// - `pipe_async!(value, => f)` - Applies `f` (explicit lift operator)
/// - `pipe_async!(value, =>> f)` - Applies `f` and awaits the result
/// - `pipe_async!(value, f, => g, =>> h, ...)` - Chains any mix of steps
///
/// A step after `=>>` may return any [`IntoFuture`](std::future::IntoFuture),
/// so a function returning a plain [`Outcome`](crate::outcome::Outcome)
/// works there as well as an `async fn`.
///
/// The resulting future is an `async move` block: it captures the initial
/// value and the steps by value.
#[macro_export]
macro_rules! pipe_async {
    (@apply $current:ident $(,)?) => {
        $current
    };

    (@apply $current:ident, =>> $function:expr $(,)?) => {
        $function($current).await
    };

    (@apply $current:ident, =>> $function:expr, $($rest:tt)+) => {{
        let __pipe_async_intermediate = $function($current).await;
        $crate::pipe_async!(@apply __pipe_async_intermediate, $($rest)+)
    }};

    (@apply $current:ident, => $function:expr $(,)?) => {
        $function($current)
    };

    (@apply $current:ident, => $function:expr, $($rest:tt)+) => {{
        let __pipe_async_intermediate = $function($current);
        $crate::pipe_async!(@apply __pipe_async_intermediate, $($rest)+)
    }};

    (@apply $current:ident, $function:expr $(,)?) => {
        $function($current)
    };

    (@apply $current:ident, $function:expr, $($rest:tt)+) => {{
        let __pipe_async_intermediate = $function($current);
        $crate::pipe_async!(@apply __pipe_async_intermediate, $($rest)+)
    }};

    ($value:expr $(,)?) => {
        async move { $value }
    };

    ($value:expr, $($steps:tt)+) => {
        async move {
            let __pipe_async_initial = $value;
            $crate::pipe_async!(@apply __pipe_async_initial, $($steps)+)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::outcome::Outcome;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn halve(n: i32) -> Outcome<String, i32> {
        if n % 2 == 0 {
            Outcome::success(n / 2)
        } else {
            Outcome::failure(format!("{n} is odd"))
        }
    }

    #[rstest]
    #[tokio::test]
    async fn value_only() {
        assert_eq!(pipe_async!(42).await, 42);
    }

    #[rstest]
    #[tokio::test]
    async fn mixes_plain_and_async_steps() {
        async fn add_ten(n: i32) -> i32 {
            n + 10
        }

        let result = pipe_async!(
            10,
            |n: i32| n / 2,
            =>> add_ten,
            => |n: i32| n * 2,
        )
        .await;
        assert_eq!(result, 30);
    }

    #[rstest]
    #[tokio::test]
    async fn awaits_plain_outcomes() {
        let result = pipe_async!(8, =>> halve, => |outcome: Outcome<String, i32>| outcome.map(|n| n + 1)).await;
        assert_eq!(result, Outcome::Success(5));
    }

    #[rstest]
    #[tokio::test]
    async fn nothing_runs_before_the_future_is_awaited() {
        let executed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&executed);

        let pipeline = pipe_async!(5, move |n: i32| {
            flag.store(true, Ordering::SeqCst);
            n * 2
        });

        assert!(!executed.load(Ordering::SeqCst));
        assert_eq!(pipeline.await, 10);
        assert!(executed.load(Ordering::SeqCst));
    }
}
