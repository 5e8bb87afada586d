//! The `Outcome` type and its core combinators.
//!
//! An [`Outcome<E, A>`] is either a `Success(A)` or a `Failure(E)`. It is
//! the standard way to represent the result of an operation that can fail,
//! such as a repository lookup, a decoding step or a validation check.
//!
//! Every combinator consumes its input and returns a new outcome; nothing is
//! mutated in place.
//!
//! # Error widening
//!
//! Chaining operations (`flat_map`, `flat_map_first`, `bind`, ...) keep the
//! error type of the outcome they are called on and accept any step whose
//! error converts into it through [`Into`]. Declare the union of the errors a
//! pipeline can produce once, as an enum with `From` impls, and every step's
//! specific error flows into it.
//!
//! ```rust
//! use resultflow::outcome::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! struct NotFound;
//! #[derive(Debug, PartialEq)]
//! struct Invalid;
//!
//! #[derive(Debug, PartialEq)]
//! enum PlayError {
//!     NotFound(NotFound),
//!     Invalid(Invalid),
//! }
//!
//! impl From<NotFound> for PlayError {
//!     fn from(error: NotFound) -> Self { Self::NotFound(error) }
//! }
//! impl From<Invalid> for PlayError {
//!     fn from(error: Invalid) -> Self { Self::Invalid(error) }
//! }
//!
//! fn find_player(id: u32) -> Outcome<NotFound, u32> {
//!     if id == 1 { Outcome::Success(id) } else { Outcome::Failure(NotFound) }
//! }
//! fn validate(id: u32) -> Outcome<Invalid, u32> {
//!     if id % 2 == 1 { Outcome::Success(id) } else { Outcome::Failure(Invalid) }
//! }
//!
//! let outcome = find_player(1).map_error(PlayError::from).flat_map(validate);
//! assert_eq!(outcome, Outcome::Success(1));
//!
//! let outcome = find_player(2).map_error(PlayError::from).flat_map(validate);
//! assert_eq!(outcome, Outcome::Failure(PlayError::NotFound(NotFound)));
//! ```

use std::any::Any;
use std::future::{IntoFuture, Ready, ready};

use super::tag::Tag;
use crate::non_empty::NonEmptyVec;

/// Either a `Success` holding a value of type `A`, or a `Failure` holding an
/// error of type `E`.
///
/// The variant is the only discriminant: there is no inheritance and no
/// "empty" state.
///
/// # Type Parameters
///
/// * `E` - The type of the error carried by a `Failure`
/// * `A` - The type of the value carried by a `Success`
///
/// # Examples
///
/// ```rust
/// use resultflow::outcome::Outcome;
///
/// let found: Outcome<String, u32> = Outcome::success(42);
/// let missing: Outcome<String, u32> = Outcome::failure("player not found".to_string());
///
/// assert!(found.is_success());
/// assert!(missing.is_failure());
///
/// let status = missing.fold(|_| 404, |_| 200);
/// assert_eq!(status, 404);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[must_use = "an Outcome may be a Failure, which should be handled"]
pub enum Outcome<E, A> {
    /// The failed variant, holding the error.
    Failure(E),
    /// The successful variant, holding the value.
    Success(A),
}

/// Lifts a value into a `Success`.
///
/// Free-function form of [`Outcome::success`].
#[inline]
pub const fn to_success<E, A>(value: A) -> Outcome<E, A> {
    Outcome::Success(value)
}

/// Lifts an error into a `Failure`.
///
/// Free-function form of [`Outcome::failure`].
#[inline]
pub const fn to_failure<E, A>(error: E) -> Outcome<E, A> {
    Outcome::Failure(error)
}

impl<E, A> Outcome<E, A> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Lifts a value into a `Success`.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Lifts an error into a `Failure`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Builds an outcome from an optional value.
    ///
    /// `Some(value)` becomes a `Success`, `None` becomes a `Failure` holding
    /// `error`. Values that are merely falsy, such as `0`, `false` or an
    /// empty string, are present and therefore successes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::from_nullable(Some(0), "missing"), Outcome::Success(0));
    /// assert_eq!(Outcome::<_, i32>::from_nullable(None, "missing"), Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>, error: E) -> Self {
        value.map_or_else(|| Self::Failure(error), Self::Success)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the tag naming the variant.
    #[inline]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Failure(_) => Tag::Failure,
            Self::Success(_) => Tag::Success,
        }
    }

    /// Runtime guard: returns `true` only when `value` is an `Outcome<E, A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Outcome;
    ///
    /// let outcome: Outcome<String, i32> = Outcome::success(1);
    /// assert!(Outcome::<String, i32>::is_outcome(&outcome));
    /// assert!(!Outcome::<String, i32>::is_outcome(&1));
    /// assert!(!Outcome::<String, i32>::is_outcome(&()));
    /// ```
    pub fn is_outcome(value: &dyn Any) -> bool
    where
        E: 'static,
        A: 'static,
    {
        value.is::<Self>()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value of a `Success`, or `None`.
    #[inline]
    pub fn value(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error of a `Failure`, or `None`.
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Borrows the content of the outcome.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &A> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Converts into the standard library's `Result`, so `?` can be used.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` for a `Failure(error)`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }

    // =========================================================================
    // Destructors
    // =========================================================================

    /// Gets rid of the wrapper, calling exactly one of the two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Outcome;
    ///
    /// let outcome: Outcome<&str, i32> = Outcome::success(3);
    /// assert_eq!(outcome.fold(|error| error.len() as i32, |value| value * 2), 6);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to the value of a `Success`; a `Failure` is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Outcome;
    ///
    /// let outcome: Outcome<String, i32> = Outcome::success(20);
    /// assert_eq!(outcome.map(|n| n + 1), Outcome::Success(21));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }

    /// Applies `function` to the error of a `Failure`; a `Success` is left
    /// untouched.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(function(error)),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Transforms whichever side is present.
    #[inline]
    pub fn bimap<E2, B, F, G>(self, on_failure: F, on_success: G) -> Outcome<E2, B>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(on_failure(error)),
            Self::Success(value) => Outcome::Success(on_success(value)),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// On `Success`, runs `function` and returns its outcome; a `Failure` is
    /// passed along and `function` is never called.
    ///
    /// The step's error converts into this outcome's error type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<String, i32> {
    ///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure(format!("{n} is odd")) }
    /// }
    ///
    /// assert_eq!(Outcome::<String, i32>::success(8).flat_map(halve), Outcome::Success(4));
    /// assert_eq!(
    ///     Outcome::<String, i32>::success(3).flat_map(halve),
    ///     Outcome::Failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<E2, B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E2, B>,
        E2: Into<E>,
    {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => function(value).map_error(Into::into),
        }
    }

    /// Like [`flat_map`](Self::flat_map), but when both steps succeed the
    /// original value is kept and the step's value is discarded.
    ///
    /// A failure of the step wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Outcome;
    ///
    /// let check_even = |n: &i32| -> Outcome<&str, ()> {
    ///     if n % 2 == 0 { Outcome::success(()) } else { Outcome::failure("odd") }
    /// };
    ///
    /// assert_eq!(Outcome::<&str, i32>::success(2).flat_map_first(check_even), Outcome::Success(2));
    /// assert_eq!(Outcome::<&str, i32>::success(3).flat_map_first(check_even), Outcome::Failure("odd"));
    /// ```
    pub fn flat_map_first<E2, B, F>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> Outcome<E2, B>,
        E2: Into<E>,
    {
        match self {
            Self::Failure(error) => Self::Failure(error),
            Self::Success(value) => match function(&value) {
                Outcome::Failure(error) => Self::Failure(error.into()),
                Outcome::Success(_) => Self::Success(value),
            },
        }
    }

    /// On `Failure`, runs the recovery `function` and returns its outcome; a
    /// `Success` is passed along and `function` is never called.
    ///
    /// The recovered value converts into this outcome's value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Outcome;
    ///
    /// let outcome: Outcome<&str, i32> = Outcome::failure("cache miss");
    /// let recovered: Outcome<String, i32> = outcome.flat_map_error(|_| Outcome::<String, i32>::success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    pub fn flat_map_error<E2, B, F>(self, function: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> Outcome<E2, B>,
        B: Into<A>,
    {
        match self {
            Self::Failure(error) => function(error).map(Into::into),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the value of a `Success`, otherwise panics with the error
    /// itself as the panic payload.
    ///
    /// The error is not wrapped or formatted: a caller catching the unwind
    /// can downcast the payload back to `E`.
    ///
    /// # Panics
    ///
    /// Panics with payload `error` if this is a `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Outcome;
    ///
    /// let outcome: Outcome<&str, i32> = Outcome::failure("boom");
    /// let payload = std::panic::catch_unwind(|| outcome.unwrap_or_throw()).unwrap_err();
    /// assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
    /// ```
    pub fn unwrap_or_throw(self) -> A
    where
        E: Any + Send,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => std::panic::panic_any(error),
        }
    }

    /// Returns the value of a `Success`, otherwise panics with
    /// `get_throwable(error)` as the panic payload.
    ///
    /// # Panics
    ///
    /// Panics with payload `get_throwable(error)` if this is a
    /// `Failure(error)`.
    pub fn unwrap_or_throw_with<T, F>(self, get_throwable: F) -> A
    where
        F: FnOnce(E) -> T,
        T: Any + Send,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => std::panic::panic_any(get_throwable(error)),
        }
    }

    /// Returns the value of a `Success`.
    ///
    /// # Panics
    ///
    /// Panics with a message containing the debug rendering of the error if
    /// this is a `Failure`.
    #[track_caller]
    pub fn unwrap_success(self) -> A
    where
        E: std::fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("expected a Success, found Failure({error:?})")
            }
        }
    }

    /// Returns the error of a `Failure`.
    ///
    /// # Panics
    ///
    /// Panics with a message containing the debug rendering of the value if
    /// this is a `Success`.
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        A: std::fmt::Debug,
    {
        match self {
            Self::Failure(error) => error,
            Self::Success(value) => {
                panic!("expected a Failure, found Success({value:?})")
            }
        }
    }
}

impl<E, T> Outcome<E, NonEmptyVec<T>> {
    /// Converts a vector into a [`NonEmptyVec`], failing with `error` when it
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Outcome;
    ///
    /// let players = Outcome::to_non_empty_vec(vec!["ada", "grace"], "no players");
    /// assert!(players.is_success());
    ///
    /// let nobody = Outcome::to_non_empty_vec(Vec::<&str>::new(), "no players");
    /// assert_eq!(nobody.error(), Some("no players"));
    /// ```
    pub fn to_non_empty_vec(elements: Vec<T>, error: E) -> Self {
        Outcome::from_nullable(NonEmptyVec::from_vec(elements), error)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    /// `Ok(value)` becomes `Success(value)`, `Err(error)` becomes
    /// `Failure(error)`.
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    #[inline]
    fn from(outcome: Outcome<E, A>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<E, A> IntoFuture for Outcome<E, A> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    /// An outcome is an already settled computation, so it awaits to itself.
    /// This lets APIs accept "an outcome or a future of one" uniformly.
    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}
