//! Accumulating named results with `bind_to`, `bind` and `bind_all`.
//!
//! These operations build up a [`Record`] of named intermediate values while
//! short-circuiting on the first failure. They avoid the deeply nested
//! closures that chained `flat_map` calls need when later steps depend on
//! several earlier ones.
//!
//! # Examples
//!
//! ```rust
//! use resultflow::outcome::{Outcome, Record};
//!
//! fn find_player(id: u32) -> Outcome<String, String> {
//!     if id == 1 { Outcome::success("ada".to_string()) } else { Outcome::failure(format!("no player {id}")) }
//! }
//!
//! fn find_boardgame(name: &str) -> Outcome<String, String> {
//!     Outcome::success(format!("{name}'s favourite game"))
//! }
//!
//! let outcome = find_player(1)
//!     .bind_to("player")
//!     .bind("boardgame", |record: &Record| {
//!         find_boardgame(record.get::<String>("player").map_or("", String::as_str))
//!     });
//!
//! let record = outcome.unwrap_success();
//! assert_eq!(record.get::<String>("player").map(String::as_str), Some("ada"));
//! assert_eq!(
//!     record.get::<String>("boardgame").map(String::as_str),
//!     Some("ada's favourite game")
//! );
//! ```

use std::any::Any;
#[cfg(feature = "async")]
use std::future::Future;

use super::core::Outcome;
use super::record::Record;

impl<E, A> Outcome<E, A> {
    /// Wraps the success value into a [`Record`] with a single field called
    /// `name`. A failure passes through.
    pub fn bind_to(self, name: &'static str) -> Outcome<E, Record>
    where
        A: Any + Send + Sync,
    {
        self.map(|value| Record::singleton(name, value))
    }
}

impl<E> Outcome<E, Record> {
    /// Runs `function` on the accumulated record and stores its success value
    /// under `name`, keeping every earlier field.
    ///
    /// A failure of either the incoming outcome or the step is returned as
    /// is; on an incoming failure `function` is not called. Binding a name
    /// that already exists replaces that field.
    pub fn bind<E2, B, F>(self, name: &'static str, function: F) -> Self
    where
        F: FnOnce(&Record) -> Outcome<E2, B>,
        E2: Into<E>,
        B: Any + Send + Sync,
    {
        self.flat_map(|record| {
            let bound = function(&record);
            bound.map(|value| record.with(name, value))
        })
    }

    /// Runs `function` on the accumulated record and merges every field of
    /// the record it returns.
    ///
    /// Fields returned by `function` overwrite accumulated fields of the
    /// same name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::{Outcome, Record};
    ///
    /// let outcome: Outcome<String, Record> = Outcome::success(Record::singleton("value1", 5));
    /// let record = outcome
    ///     .bind_all(|record| {
    ///         let value1 = *record.get::<i32>("value1").unwrap_or(&0);
    ///         Outcome::<String, Record>::success(
    ///             Record::new().with("value2", value1 + 2).with("value3", value1 - 3),
    ///         )
    ///     })
    ///     .unwrap_success();
    ///
    /// assert_eq!(record.get::<i32>("value2"), Some(&7));
    /// assert_eq!(record.get::<i32>("value3"), Some(&2));
    /// ```
    pub fn bind_all<E2, F>(self, function: F) -> Self
    where
        F: FnOnce(&Record) -> Outcome<E2, Record>,
        E2: Into<E>,
    {
        self.flat_map(|record| {
            let bound = function(&record);
            bound.map(|fields| record.merge(fields))
        })
    }

    /// Async version of [`bind`](Self::bind).
    ///
    /// `function` must return a future that does not borrow the record.
    #[cfg(feature = "async")]
    pub async fn async_bind<E2, B, F, Fut>(self, name: &'static str, function: F) -> Self
    where
        F: FnOnce(&Record) -> Fut,
        Fut: Future<Output = Outcome<E2, B>>,
        E2: Into<E>,
        B: Any + Send + Sync,
    {
        self.async_flat_map(|record| async move {
            let bound = function(&record).await;
            bound.map(|value| record.with(name, value))
        })
        .await
    }

    /// Async version of [`bind_all`](Self::bind_all).
    #[cfg(feature = "async")]
    pub async fn async_bind_all<E2, F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(&Record) -> Fut,
        Fut: Future<Output = Outcome<E2, Record>>,
        E2: Into<E>,
    {
        self.async_flat_map(|record| async move {
            let bound = function(&record).await;
            bound.map(|fields| record.merge(fields))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bind_on_failure_skips_function() {
        let mut called = false;
        let outcome: Outcome<&str, Record> = Outcome::failure("x");
        let result = outcome.bind("k", |_| {
            called = true;
            Outcome::<&str, i32>::success(1)
        });
        assert_eq!(result.error(), Some("x"));
        assert!(!called);
    }

    #[rstest]
    fn bind_propagates_step_failure() {
        let outcome: Outcome<&str, Record> = Outcome::success(Record::singleton("id", 1));
        let result = outcome.bind("name", |_| Outcome::<&str, String>::failure("missing"));
        assert_eq!(result.error(), Some("missing"));
    }

    #[rstest]
    fn bind_to_wraps_value() {
        let outcome: Outcome<&str, i32> = Outcome::success(5);
        let record = outcome.bind_to("myResult").unwrap_success();
        assert_eq!(record.get::<i32>("myResult"), Some(&5));
        assert_eq!(record.len(), 1);
    }

    #[rstest]
    fn bind_all_overwrites_shared_fields() {
        let outcome: Outcome<&str, Record> =
            Outcome::success(Record::new().with("value", 1).with("kept", true));
        let record = outcome
            .bind_all(|_| Outcome::<&str, Record>::success(Record::singleton("value", 2)))
            .unwrap_success();
        assert_eq!(record.get::<i32>("value"), Some(&2));
        assert_eq!(record.get::<bool>("kept"), Some(&true));
    }

    #[cfg(feature = "async")]
    #[rstest]
    #[tokio::test]
    async fn async_bind_adds_field() {
        let outcome: Outcome<&str, Record> = Outcome::success(Record::singleton("value1", 5));
        let record = outcome
            .async_bind("value2", |record| {
                let value1 = record.get::<i32>("value1").copied().unwrap_or_default();
                async move { Outcome::<&str, i32>::success(value1 + 2) }
            })
            .await
            .unwrap_success();
        assert_eq!(record.get::<i32>("value2"), Some(&7));
        assert_eq!(record.get::<i32>("value1"), Some(&5));
    }
}
