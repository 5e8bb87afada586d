//! Integration tests for `bind_to`, `bind` and `bind_all`.

use resultflow::outcome::{Outcome, Record};
use rstest::rstest;
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq)]
struct Player {
    id: u32,
    name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct Boardgame {
    title: &'static str,
}

#[derive(Debug, PartialEq)]
enum LookupError {
    PlayerNotFound(u32),
    BoardgameNotFound(&'static str),
}

fn find_player(id: u32) -> Outcome<LookupError, Player> {
    match id {
        1 => Outcome::success(Player { id, name: "ada" }),
        _ => Outcome::failure(LookupError::PlayerNotFound(id)),
    }
}

fn find_favourite(player: &Player) -> Outcome<LookupError, Boardgame> {
    match player.name {
        "ada" => Outcome::success(Boardgame { title: "Azul" }),
        other => Outcome::failure(LookupError::BoardgameNotFound(other)),
    }
}

#[rstest]
fn bind_builds_a_record_step_by_step() {
    let record = find_player(1)
        .bind_to("player")
        .bind("boardgame", |record| match record.get::<Player>("player") {
            Some(player) => find_favourite(player),
            None => Outcome::failure(LookupError::PlayerNotFound(0)),
        })
        .unwrap_success();

    assert_eq!(record.get::<Player>("player").map(|player| player.id), Some(1));
    assert_eq!(
        record.get::<Boardgame>("boardgame"),
        Some(&Boardgame { title: "Azul" })
    );
    assert_eq!(record.names().collect::<Vec<_>>(), vec!["player", "boardgame"]);
}

#[rstest]
fn bind_never_calls_the_function_after_a_failure() {
    let called = Cell::new(false);
    let outcome = find_player(7).bind_to("player").bind("boardgame", |_| {
        called.set(true);
        Outcome::<LookupError, Boardgame>::success(Boardgame { title: "never" })
    });

    assert!(!called.get());
    assert_eq!(outcome.error(), Some(LookupError::PlayerNotFound(7)));
}

#[rstest]
fn bind_on_a_failed_record_returns_it_unchanged() {
    let outcome: Outcome<&str, Record> = Outcome::failure("x");
    let result = outcome.bind("k", |_| Outcome::<&str, i32>::success(1));
    assert_eq!(result.error(), Some("x"));
}

#[rstest]
fn bind_accepts_narrower_step_errors() {
    #[derive(Debug, PartialEq)]
    struct Timeout;

    #[derive(Debug, PartialEq)]
    enum AppError {
        Timeout(Timeout),
    }

    impl From<Timeout> for AppError {
        fn from(error: Timeout) -> Self {
            Self::Timeout(error)
        }
    }

    let outcome: Outcome<AppError, Record> = Outcome::success(Record::new());
    let result = outcome.bind("rating", |_| Outcome::<Timeout, u8>::failure(Timeout));
    assert_eq!(result.error(), Some(AppError::Timeout(Timeout)));
}

#[rstest]
fn bind_all_merges_with_last_write_wins() {
    let outcome: Outcome<String, Record> =
        Outcome::success(Record::new().with("value1", 5).with("label", "old"));

    let record = outcome
        .bind_all(|record| {
            let value1 = record.get::<i32>("value1").copied().unwrap_or_default();
            Outcome::<String, Record>::success(
                Record::new()
                    .with("value2", value1 + 2)
                    .with("label", "new"),
            )
        })
        .unwrap_success();

    assert_eq!(record.get::<i32>("value1"), Some(&5));
    assert_eq!(record.get::<i32>("value2"), Some(&7));
    assert_eq!(record.get::<&str>("label"), Some(&"new"));
    assert_eq!(record.len(), 3);
}

#[rstest]
fn bind_all_never_calls_the_function_after_a_failure() {
    let called = Cell::new(false);
    let outcome: Outcome<&str, Record> = Outcome::failure("x");
    let result = outcome.bind_all(|_| {
        called.set(true);
        Outcome::<&str, Record>::success(Record::singleton("never", 1))
    });

    assert!(!called.get());
    assert_eq!(result.error(), Some("x"));
}

#[rstest]
fn bind_all_propagates_step_failures() {
    let outcome: Outcome<String, Record> = Outcome::success(Record::singleton("value1", 5));
    let result = outcome.bind_all(|_| Outcome::<String, Record>::failure("bad".to_string()));
    assert_eq!(result.error(), Some("bad".to_string()));
}

#[cfg(feature = "async")]
mod asynchronous {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[rstest]
    #[tokio::test]
    async fn async_bind_is_skipped_after_a_failure() {
        let called = AtomicBool::new(false);
        let outcome = find_player(3)
            .bind_to("player")
            .async_bind("boardgame", |_| {
                called.store(true, Ordering::SeqCst);
                async { Outcome::<LookupError, Boardgame>::success(Boardgame { title: "never" }) }
            })
            .await;

        assert!(!called.load(Ordering::SeqCst));
        assert_eq!(outcome.error(), Some(LookupError::PlayerNotFound(3)));
    }

    #[rstest]
    #[tokio::test]
    async fn async_bind_all_is_skipped_after_a_failure() {
        let called = AtomicBool::new(false);
        let outcome: Outcome<&str, Record> = Outcome::failure("x");
        let result = outcome
            .async_bind_all(|_| {
                called.store(true, Ordering::SeqCst);
                async { Outcome::<&str, Record>::success(Record::singleton("never", 1)) }
            })
            .await;

        assert!(!called.load(Ordering::SeqCst));
        assert_eq!(result.error(), Some("x"));
    }

    #[rstest]
    #[tokio::test]
    async fn async_bind_all_merges_fields() {
        let outcome: Outcome<String, Record> = Outcome::success(Record::singleton("value1", 5));
        let record = outcome
            .async_bind_all(|record| {
                let value1 = record.get::<i32>("value1").copied().unwrap_or_default();
                async move {
                    Outcome::<String, Record>::success(
                        Record::new()
                            .with("value2", value1 + 2)
                            .with("value3", value1 - 3),
                    )
                }
            })
            .await
            .unwrap_success();

        assert_eq!(record.get::<i32>("value2"), Some(&7));
        assert_eq!(record.get::<i32>("value3"), Some(&2));
    }
}
