//! Non-empty vectors.
//!
//! [`NonEmptyVec`] is a vector that is guaranteed by construction to hold at
//! least one element. It is the error container produced by
//! [`sequence_outcomes`](crate::outcome::sequence_outcomes) and the success
//! value of [`Outcome::to_non_empty_vec`](crate::outcome::Outcome::to_non_empty_vec).
//!
//! # Examples
//!
//! ```rust
//! use resultflow::non_empty::NonEmptyVec;
//!
//! let errors = NonEmptyVec::from_vec(vec!["e2", "e1"]).unwrap();
//! assert_eq!(*errors.head(), "e2");
//! assert_eq!(errors.len(), 2);
//!
//! assert!(NonEmptyVec::<i32>::from_vec(Vec::new()).is_none());
//! ```

use std::fmt;
use std::ops::Index;

/// A vector with at least one element.
///
/// The inner vector is private, so every constructor upholds the invariant
/// and every accessor can return a value without `Option`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyVec<A> {
    elements: Vec<A>,
}

#[allow(clippy::len_without_is_empty)]
impl<A> NonEmptyVec<A> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Converts a vector, returning `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::non_empty::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2, 3]).is_some());
    /// assert!(NonEmptyVec::<u8>::from_vec(vec![]).is_none());
    /// ```
    #[inline]
    pub fn from_vec(elements: Vec<A>) -> Option<Self> {
        if elements.is_empty() {
            None
        } else {
            Some(Self { elements })
        }
    }

    /// Lifts a single element into a non-empty vector.
    #[inline]
    pub fn singleton(element: A) -> Self {
        Self {
            elements: vec![element],
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the first element.
    #[inline]
    pub fn head(&self) -> &A {
        &self.elements[0]
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> &A {
        &self.elements[self.elements.len() - 1]
    }

    /// Returns the number of elements, which is never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.elements.iter()
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.elements
    }

    /// Gives back the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<A> {
        self.elements
    }

    /// Splits into the first element and the remaining ones.
    pub fn split_first(self) -> (A, Vec<A>) {
        let mut elements = self.elements.into_iter();
        let Some(head) = elements.next() else {
            unreachable!("NonEmptyVec always holds at least one element")
        };
        (head, elements.collect())
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to every element, keeping the non-empty guarantee.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::non_empty::NonEmptyVec;
    ///
    /// let lengths = NonEmptyVec::singleton("boardgame").map(str::len);
    /// assert_eq!(*lengths.head(), 9);
    /// ```
    pub fn map<B, F>(self, function: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> B,
    {
        NonEmptyVec {
            elements: self.elements.into_iter().map(function).collect(),
        }
    }

    /// Appends an element at the end.
    #[inline]
    pub fn push(&mut self, element: A) {
        self.elements.push(element);
    }

    /// Appends every element of `other` after the elements of `self`.
    #[must_use]
    pub fn concat(mut self, other: impl IntoIterator<Item = A>) -> Self {
        self.elements.extend(other);
        self
    }
}

impl<A> Index<usize> for NonEmptyVec<A> {
    type Output = A;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a NonEmptyVec<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(non_empty: NonEmptyVec<A>) -> Self {
        non_empty.elements
    }
}

impl<A> TryFrom<Vec<A>> for NonEmptyVec<A> {
    type Error = EmptyVecError;

    fn try_from(elements: Vec<A>) -> Result<Self, Self::Error> {
        Self::from_vec(elements).ok_or(EmptyVecError)
    }
}

impl<A: PartialEq> PartialEq<Vec<A>> for NonEmptyVec<A> {
    fn eq(&self, other: &Vec<A>) -> bool {
        &self.elements == other
    }
}

impl<A: fmt::Debug> fmt::Debug for NonEmptyVec<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.elements).finish()
    }
}

/// Returned when an empty vector is converted into a [`NonEmptyVec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected at least one element, found an empty sequence")]
pub struct EmptyVecError;

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for NonEmptyVec<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.elements.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptyVec<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<A>::deserialize(deserializer)?;
        Self::try_from(elements).map_err(serde::de::Error::custom)
    }
}
