//! Turning many outcomes into one.
//!
//! - [`sequence_outcomes`] keeps **every** error, in input order, in a
//!   [`NonEmptyVec`].
//! - [`sequence`] folds the errors left to right with a caller-provided
//!   combinator, starting from the first failure's error.
//!
//! Both inspect every element in order; neither stops at the first failure.
//! Heterogeneous tuples are supported through the [`Sequence`] trait, which
//! preserves each position's value type.
//!
//! # Examples
//!
//! ```rust
//! use resultflow::outcome::{Outcome, sequence_outcomes};
//!
//! let all_good: Vec<Outcome<&str, i32>> = vec![Outcome::Success(1), Outcome::Success(2)];
//! assert_eq!(sequence_outcomes(all_good).value(), Some(vec![1, 2]));
//!
//! let mixed: Vec<Outcome<&str, i32>> = vec![
//!     Outcome::Success(1),
//!     Outcome::Failure("e2"),
//!     Outcome::Success(5),
//!     Outcome::Failure("e1"),
//! ];
//! let errors = sequence_outcomes(mixed).error().unwrap();
//! assert_eq!(errors, vec!["e2", "e1"]);
//! ```

use super::core::Outcome;
use crate::non_empty::NonEmptyVec;

/// Folds errors as they are found.
///
/// The combinator only ever sees two real errors: the first failure seeds
/// the accumulator and each later failure is combined into it.
struct ErrorFold<E, C> {
    accumulated: Option<E>,
    combinator: C,
}

impl<E, C> ErrorFold<E, C>
where
    C: FnMut(E, E) -> E,
{
    const fn new(combinator: C) -> Self {
        Self {
            accumulated: None,
            combinator,
        }
    }

    fn push(&mut self, error: E) {
        self.accumulated = Some(match self.accumulated.take() {
            Some(accumulated) => (self.combinator)(accumulated, error),
            None => error,
        });
    }

    /// Keeps the value of a success, records the error of a failure.
    fn absorb<A>(&mut self, outcome: Outcome<E, A>) -> Option<A> {
        match outcome {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(error) => {
                self.push(error);
                None
            }
        }
    }

    fn finish(self) -> Option<E> {
        self.accumulated
    }
}

/// Appends every error to a non-empty vector, in order.
fn collect_errors<E>(accumulated: NonEmptyVec<E>, next: NonEmptyVec<E>) -> NonEmptyVec<E> {
    accumulated.concat(next)
}

/// Combines outcomes into one, collecting all errors.
///
/// - With at least one `Failure`, returns a single `Failure` holding the
///   errors of all failures in their original order.
/// - Otherwise, returns a `Success` with all values in order. Empty input
///   yields `Success(vec![])`.
pub fn sequence_outcomes<E, A, I>(outcomes: I) -> Outcome<NonEmptyVec<E>, Vec<A>>
where
    I: IntoIterator<Item = Outcome<E, A>>,
{
    sequence(
        outcomes
            .into_iter()
            .map(|outcome| outcome.map_error(NonEmptyVec::singleton)),
        collect_errors,
    )
}

/// Combines outcomes into one, folding the errors with `error_combinator`.
///
/// Failures are combined left to right as `error_combinator(accumulated,
/// next)`, starting from the first failure's error, so the combinator is not
/// called at all when there are fewer than two failures. The success case is
/// identical to [`sequence_outcomes`].
///
/// # Examples
///
/// ```rust
/// use resultflow::outcome::{Outcome, first_error_combinator, sequence};
///
/// let outcomes: Vec<Outcome<&str, i32>> =
///     vec![Outcome::Failure("first"), Outcome::Success(2), Outcome::Failure("second")];
/// assert_eq!(sequence(outcomes, first_error_combinator), Outcome::Failure("first"));
///
/// let outcomes: Vec<Outcome<String, i32>> =
///     vec![Outcome::Failure("a".into()), Outcome::Failure("b".into())];
/// let joined = sequence(outcomes, |left, right| format!("{left}, {right}"));
/// assert_eq!(joined, Outcome::Failure("a, b".to_string()));
/// ```
pub fn sequence<E, A, I, C>(outcomes: I, error_combinator: C) -> Outcome<E, Vec<A>>
where
    I: IntoIterator<Item = Outcome<E, A>>,
    C: FnMut(E, E) -> E,
{
    let mut errors = ErrorFold::new(error_combinator);
    let mut values = Vec::new();
    for outcome in outcomes {
        if let Some(value) = errors.absorb(outcome) {
            values.push(value);
        }
    }
    errors
        .finish()
        .map_or_else(|| Outcome::Success(values), Outcome::Failure)
}

/// An error combinator that always keeps the earliest error.
pub fn first_error_combinator<E>(first: E, _second: E) -> E {
    first
}

impl<E, A, V> FromIterator<Outcome<E, A>> for Outcome<NonEmptyVec<E>, V>
where
    V: FromIterator<A>,
{
    /// Collects like [`sequence_outcomes`], into any collection of values.
    ///
    /// ```rust
    /// use resultflow::non_empty::NonEmptyVec;
    /// use resultflow::outcome::Outcome;
    /// use std::collections::BTreeSet;
    ///
    /// let collected: Outcome<NonEmptyVec<&str>, BTreeSet<i32>> =
    ///     [3, 1, 3].into_iter().map(Outcome::Success).collect();
    /// assert_eq!(collected.value().map(|set| set.len()), Some(2));
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<E, A>>>(outcomes: I) -> Self {
        sequence_outcomes(outcomes).map(|values| values.into_iter().collect())
    }
}

// =============================================================================
// Heterogeneous Tuples
// =============================================================================

/// Sequencing for fixed-size groups of outcomes sharing an error type.
///
/// Implemented for tuples of one to eight outcomes; each position keeps its
/// own value type.
///
/// # Examples
///
/// ```rust
/// use resultflow::outcome::{Outcome, Sequence};
///
/// let player: Outcome<&str, String> = Outcome::success("ada".to_string());
/// let score: Outcome<&str, u32> = Outcome::success(12);
/// let (name, points) = (player, score).sequence_outcomes().unwrap_success();
/// assert_eq!((name.as_str(), points), ("ada", 12));
/// ```
pub trait Sequence {
    /// The shared error type.
    type Error;
    /// The tuple of success values.
    type Values;

    /// Tuple form of [`sequence_outcomes`](self::sequence_outcomes).
    fn sequence_outcomes(self) -> Outcome<NonEmptyVec<Self::Error>, Self::Values>;

    /// Tuple form of [`sequence`](self::sequence).
    fn sequence<C>(self, error_combinator: C) -> Outcome<Self::Error, Self::Values>
    where
        C: FnMut(Self::Error, Self::Error) -> Self::Error;
}

macro_rules! impl_sequence_for_tuple {
    ($($value:ident),+) => {
        paste::paste! {
            impl<E, $($value),+> Sequence for ($(Outcome<E, $value>,)+) {
                type Error = E;
                type Values = ($($value,)+);

                fn sequence_outcomes(self) -> Outcome<NonEmptyVec<E>, Self::Values> {
                    let ($([<$value:lower>],)+) = self;
                    (
                        $([<$value:lower>].map_error(NonEmptyVec::singleton),)+
                    )
                        .sequence(collect_errors)
                }

                fn sequence<C>(self, error_combinator: C) -> Outcome<E, Self::Values>
                where
                    C: FnMut(E, E) -> E,
                {
                    let ($([<$value:lower>],)+) = self;
                    let mut errors = ErrorFold::new(error_combinator);
                    $(let [<$value:lower>] = errors.absorb([<$value:lower>]);)+
                    match (errors.finish(), ($([<$value:lower>],)+)) {
                        (Some(error), _) => Outcome::Failure(error),
                        (None, ($(Some([<$value:lower>]),)+)) => {
                            Outcome::Success(($([<$value:lower>],)+))
                        }
                        (None, _) => unreachable!("a missing value always records an error"),
                    }
                }
            }
        }
    };
}

impl_sequence_for_tuple!(A1);
impl_sequence_for_tuple!(A1, A2);
impl_sequence_for_tuple!(A1, A2, A3);
impl_sequence_for_tuple!(A1, A2, A3, A4);
impl_sequence_for_tuple!(A1, A2, A3, A4, A5);
impl_sequence_for_tuple!(A1, A2, A3, A4, A5, A6);
impl_sequence_for_tuple!(A1, A2, A3, A4, A5, A6, A7);
impl_sequence_for_tuple!(A1, A2, A3, A4, A5, A6, A7, A8);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_input_is_success() {
        let outcomes: Vec<Outcome<&str, i32>> = Vec::new();
        assert_eq!(sequence_outcomes(outcomes), Outcome::Success(Vec::new()));
    }

    #[rstest]
    fn combinator_is_never_called_for_a_single_failure() {
        let mut calls = 0;
        let outcomes: Vec<Outcome<&str, i32>> = vec![Outcome::Success(1), Outcome::Failure("only")];
        let result = sequence(outcomes, |left, _| {
            calls += 1;
            left
        });
        assert_eq!(result, Outcome::Failure("only"));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn combinator_sees_failures_in_order() {
        let mut seen = Vec::new();
        let outcomes: Vec<Outcome<&str, i32>> = vec![
            Outcome::Failure("a"),
            Outcome::Success(1),
            Outcome::Failure("b"),
            Outcome::Failure("c"),
        ];
        let _ = sequence(outcomes, |left, right| {
            seen.push((left, right));
            right
        });
        assert_eq!(seen, vec![("a", "b"), ("b", "c")]);
    }

    #[rstest]
    fn tuple_collects_all_errors() {
        let outcomes = (
            Outcome::<&str, i32>::failure("first"),
            Outcome::<&str, String>::success("ok".to_string()),
            Outcome::<&str, bool>::failure("third"),
        );
        assert_eq!(
            outcomes.sequence_outcomes().error(),
            NonEmptyVec::from_vec(vec!["first", "third"])
        );
    }

    #[rstest]
    fn tuple_with_first_error_combinator() {
        let outcomes = (
            Outcome::<&str, i32>::success(1),
            Outcome::<&str, u8>::failure("second"),
            Outcome::<&str, u8>::failure("third"),
        );
        assert_eq!(outcomes.sequence(first_error_combinator), Outcome::Failure("second"));
    }
}
