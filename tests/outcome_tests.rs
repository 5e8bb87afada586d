//! Integration tests for the Outcome core.

use resultflow::non_empty::NonEmptyVec;
use resultflow::outcome::{Outcome, Tag, Thrown, to_failure, to_success};
use rstest::rstest;
use std::panic::{AssertUnwindSafe, catch_unwind};

#[derive(Debug, Clone, PartialEq)]
struct NotFound {
    id: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct InvalidScore;

#[derive(Debug, Clone, PartialEq)]
enum PlayError {
    NotFound(NotFound),
    InvalidScore(InvalidScore),
}

impl From<NotFound> for PlayError {
    fn from(error: NotFound) -> Self {
        Self::NotFound(error)
    }
}

impl From<InvalidScore> for PlayError {
    fn from(error: InvalidScore) -> Self {
        Self::InvalidScore(error)
    }
}

fn is_even(value: &i32) -> Outcome<&'static str, ()> {
    if value % 2 == 0 {
        Outcome::success(())
    } else {
        Outcome::failure("odd")
    }
}

mod constructors {
    use super::*;

    #[rstest]
    fn free_constructors_match_associated_ones() {
        assert_eq!(to_success::<String, _>(1), Outcome::<String, i32>::success(1));
        assert_eq!(to_failure::<_, i32>("e"), Outcome::<&str, i32>::failure("e"));
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(-1))]
    fn from_nullable_treats_falsy_values_as_present(#[case] value: Option<i32>) {
        assert!(Outcome::from_nullable(value, "missing").is_success());
    }

    #[rstest]
    #[case(Some(""), Outcome::Success(""))]
    #[case(None, Outcome::Failure("missing"))]
    fn from_nullable_fails_only_on_none(
        #[case] value: Option<&'static str>,
        #[case] expected: Outcome<&'static str, &'static str>,
    ) {
        assert_eq!(Outcome::from_nullable(value, "missing"), expected);
    }

    #[rstest]
    fn to_non_empty_vec_keeps_elements() {
        let outcome = Outcome::to_non_empty_vec(vec![3, 4], "empty");
        assert_eq!(outcome.value().map(NonEmptyVec::into_vec), Some(vec![3, 4]));
    }

    #[rstest]
    fn to_non_empty_vec_rejects_empty_vectors() {
        let outcome = Outcome::to_non_empty_vec(Vec::<i32>::new(), "empty");
        assert_eq!(outcome.error(), Some("empty"));
    }
}

mod inspection {
    use super::*;

    #[rstest]
    fn is_outcome_rejects_other_types() {
        let outcome: Outcome<String, u8> = Outcome::success(1);
        assert!(Outcome::<String, u8>::is_outcome(&outcome));
        assert!(!Outcome::<String, u8>::is_outcome(&Some(1_u8)));
        assert!(!Outcome::<String, u8>::is_outcome(&Ok::<u8, String>(1)));
        assert!(!Outcome::<String, u16>::is_outcome(&outcome));
    }

    #[rstest]
    #[case(Outcome::Success(1), Tag::Success, true)]
    #[case(Outcome::Failure("e"), Tag::Failure, false)]
    fn tag_and_predicates_agree(
        #[case] outcome: Outcome<&str, i32>,
        #[case] tag: Tag,
        #[case] success: bool,
    ) {
        assert_eq!(outcome.tag(), tag);
        assert_eq!(outcome.is_success(), success);
        assert_eq!(outcome.is_failure(), !success);
    }

    #[rstest]
    fn as_ref_borrows_both_sides() {
        let outcome: Outcome<String, Vec<u8>> = Outcome::success(vec![1, 2]);
        assert_eq!(outcome.as_ref().map(Vec::len), Outcome::Success(2));
        assert!(outcome.is_success());
    }
}

mod chaining {
    use super::*;

    fn find_player(id: u32) -> Outcome<NotFound, u32> {
        if id == 1 {
            Outcome::success(id)
        } else {
            Outcome::failure(NotFound { id })
        }
    }

    fn check_score(score: u32) -> Outcome<InvalidScore, u32> {
        if score <= 100 {
            Outcome::success(score)
        } else {
            Outcome::failure(InvalidScore)
        }
    }

    #[rstest]
    fn flat_map_widens_errors_into_a_union() {
        let missing = find_player(2)
            .map_error(PlayError::from)
            .flat_map(|_| check_score(10));
        assert_eq!(missing, Outcome::Failure(PlayError::NotFound(NotFound { id: 2 })));

        let invalid = find_player(1)
            .map_error(PlayError::from)
            .flat_map(|_| check_score(101));
        assert_eq!(invalid, Outcome::Failure(PlayError::InvalidScore(InvalidScore)));
    }

    #[rstest]
    fn flat_map_first_keeps_the_first_value() {
        assert_eq!(
            Outcome::<&str, i32>::success(2).flat_map_first(is_even),
            Outcome::Success(2)
        );
    }

    #[rstest]
    fn flat_map_first_lets_the_step_failure_win() {
        assert_eq!(
            Outcome::<&str, i32>::success(3).flat_map_first(is_even),
            Outcome::Failure("odd")
        );
    }

    #[rstest]
    fn flat_map_error_recovery_can_fail_again() {
        let outcome: Outcome<&str, i32> = Outcome::failure("cache miss");
        let recovered = outcome.flat_map_error(|error| Outcome::<String, i32>::failure(format!("{error}, then db down")));
        assert_eq!(recovered, Outcome::Failure("cache miss, then db down".to_string()));
    }
}

mod throwing {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Wrapped {
        tag: &'static str,
        error: &'static str,
    }

    #[rstest]
    fn try_catch_preserves_non_error_payloads() {
        let outcome: Outcome<Wrapped, ()> = Outcome::try_catch(
            || std::panic::panic_any("🍌"),
            |thrown: Thrown| Wrapped {
                tag: "wrapped",
                error: thrown.downcast::<&'static str>().unwrap_or("lost"),
            },
        );
        assert_eq!(
            outcome,
            Outcome::Failure(Wrapped {
                tag: "wrapped",
                error: "🍌"
            })
        );
    }

    #[rstest]
    fn unwrap_or_throw_raises_the_error_itself() {
        let outcome: Outcome<&str, i32> = Outcome::failure("boom");
        let payload = catch_unwind(AssertUnwindSafe(|| outcome.unwrap_or_throw())).unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
        assert!(payload.downcast_ref::<String>().is_none());
    }

    #[rstest]
    fn unwrap_or_throw_with_raises_the_mapped_value() {
        let outcome: Outcome<&str, i32> = Outcome::failure("boom");
        let payload = catch_unwind(AssertUnwindSafe(|| {
            outcome.unwrap_or_throw_with(|error| NotFound { id: error.len() as u32 })
        }))
        .unwrap_err();
        assert_eq!(payload.downcast_ref::<NotFound>(), Some(&NotFound { id: 4 }));
    }

    #[rstest]
    fn unwrap_or_throw_returns_success_values() {
        assert_eq!(Outcome::<&str, i32>::success(3).unwrap_or_throw(), 3);
    }
}

#[cfg(feature = "async")]
mod asynchronous {
    use super::*;
    use futures::FutureExt;
    use resultflow::outcome::{async_unwrap_or_throw, async_unwrap_or_throw_with};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test]
    async fn async_flat_map_widens_errors() {
        let outcome: Outcome<PlayError, u32> = Outcome::success(150);
        let result = outcome
            .async_flat_map(|score| async move {
                if score > 100 {
                    Outcome::<InvalidScore, u32>::failure(InvalidScore)
                } else {
                    Outcome::success(score)
                }
            })
            .await;
        assert_eq!(result, Outcome::Failure(PlayError::InvalidScore(InvalidScore)));
    }

    #[rstest]
    #[tokio::test]
    async fn async_flat_map_error_is_not_called_on_success() {
        let calls = AtomicUsize::new(0);
        let outcome: Outcome<&str, i32> = Outcome::success(1);
        let result = outcome
            .async_flat_map_error(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Outcome::<&str, i32>::success(0) }
            })
            .await;
        assert_eq!(result, Outcome::Success(1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn async_flat_map_first_is_not_called_on_failure() {
        let calls = AtomicUsize::new(0);
        let outcome: Outcome<&str, i32> = Outcome::failure("x");
        let result = outcome
            .async_flat_map_first(|value| {
                calls.fetch_add(1, Ordering::SeqCst);
                let even = is_even(value);
                async move { even }
            })
            .await;
        assert_eq!(result, Outcome::Failure("x"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn async_try_catch_wraps_driver_panics() {
        async fn flaky_driver() -> u32 {
            tokio::task::yield_now().await;
            std::panic::panic_any(503_u16)
        }

        let outcome: Outcome<Option<u16>, u32> =
            Outcome::async_try_catch(flaky_driver, |thrown| thrown.downcast::<u16>().ok()).await;
        assert_eq!(outcome, Outcome::Failure(Some(503)));
    }

    #[rstest]
    #[tokio::test]
    async fn async_unwrap_or_throw_accepts_plain_outcomes() {
        assert_eq!(async_unwrap_or_throw(Outcome::<&str, i32>::success(4)).await, 4);
    }

    #[rstest]
    #[tokio::test]
    async fn async_unwrap_or_throw_with_raises_the_awaited_value() {
        let pending = async { Outcome::<&str, i32>::failure("boom") };
        let payload = AssertUnwindSafe(async_unwrap_or_throw_with(pending, |error| async move {
            format!("wrapped {error}")
        }))
        .catch_unwind()
        .await
        .unwrap_err();

        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("wrapped boom")
        );
    }
}
