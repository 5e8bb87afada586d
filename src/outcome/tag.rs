//! Variant tags and the tagged wire representation of outcomes.
//!
//! Outcomes cross process boundaries as objects discriminated by a `_tag`
//! field:
//!
//! ```json
//! { "_tag": "success", "value": 42 }
//! { "_tag": "failure", "error": "player not found" }
//! ```
//!
//! With the `serde` feature, [`Outcome`] serializes to and deserializes from
//! exactly that shape, and [`is_tagged_outcome`] recognizes it in untyped
//! JSON.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use super::core::Outcome;

/// The discriminant of an [`Outcome`](super::Outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Tag of the `Success` variant, rendered `"success"`.
    Success,
    /// Tag of the `Failure` variant, rendered `"failure"`.
    Failure,
}

impl Tag {
    /// Returns the wire name of the tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the recognized tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown outcome tag `{found}`, expected `success` or `failure`")]
pub struct TagParseError {
    /// The rejected input.
    pub found: String,
}

impl FromStr for Tag {
    type Err = TagParseError;

    /// Parses the exact wire names; matching is case-sensitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultflow::outcome::Tag;
    ///
    /// assert_eq!("success".parse::<Tag>(), Ok(Tag::Success));
    /// assert!("Success".parse::<Tag>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            other => Err(TagParseError {
                found: other.to_string(),
            }),
        }
    }
}

/// Returns `true` only for JSON objects whose `_tag` field is a recognized
/// tag.
///
/// Anything else, `null` and plain objects included, is rejected.
///
/// # Examples
///
/// ```rust
/// use resultflow::outcome::is_tagged_outcome;
/// use serde_json::json;
///
/// assert!(is_tagged_outcome(&json!({ "_tag": "failure", "error": "boom" })));
/// assert!(!is_tagged_outcome(&json!({ "_tag": "pending" })));
/// assert!(!is_tagged_outcome(&json!({ "value": 1 })));
/// assert!(!is_tagged_outcome(&serde_json::Value::Null));
/// ```
#[cfg(feature = "serde")]
pub fn is_tagged_outcome(value: &serde_json::Value) -> bool {
    value
        .get("_tag")
        .and_then(serde_json::Value::as_str)
        .is_some_and(|tag| tag.parse::<Tag>().is_ok())
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
#[serde(tag = "_tag", rename_all = "lowercase")]
enum TaggedRef<'a, E, A> {
    Failure { error: &'a E },
    Success { value: &'a A },
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(tag = "_tag", rename_all = "lowercase")]
enum Tagged<E, A> {
    Failure { error: E },
    Success { value: A },
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize, A: serde::Serialize> serde::Serialize for Outcome<E, A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let tagged = match self {
            Self::Failure(error) => TaggedRef::Failure { error },
            Self::Success(value) => TaggedRef::Success { value },
        };
        tagged.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E, A> serde::Deserialize<'de> for Outcome<E, A>
where
    E: serde::Deserialize<'de>,
    A: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Tagged::deserialize(deserializer)? {
            Tagged::Failure { error } => Self::Failure(error),
            Tagged::Success { value } => Self::Success(value),
        })
    }
}
