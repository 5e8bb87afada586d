//! Named, heterogeneous accumulators for `bind`-style pipelines.
//!
//! A [`Record`] plays the part of the growing object that `bind_to`,
//! `bind` and `bind_all` build up: every step adds a named field, and later
//! steps read earlier fields back by name and type.

use std::any::Any;
use std::fmt;

use smallvec::SmallVec;

type Entry = (&'static str, Box<dyn Any + Send + Sync>);

/// An insertion-ordered map from field names to values of any type.
///
/// Inserting a name that already exists replaces the value in place, so the
/// latest write wins and the field keeps its original position.
///
/// # Examples
///
/// ```rust
/// use resultflow::outcome::Record;
///
/// let record = Record::new()
///     .with("player", "ada".to_string())
///     .with("score", 12_u32);
///
/// assert_eq!(record.get::<String>("player").map(String::as_str), Some("ada"));
/// assert_eq!(record.get::<u32>("score"), Some(&12));
/// // Wrong type or unknown name.
/// assert_eq!(record.get::<i64>("score"), None);
/// assert_eq!(record.get::<u32>("rank"), None);
/// ```
#[derive(Default)]
pub struct Record {
    entries: SmallVec<[Entry; 4]>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record with a single field.
    pub fn singleton<T>(name: &'static str, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::new().with(name, value)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with<T>(mut self, name: &'static str, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.insert(name, value);
        self
    }

    /// Sets the field `name`, replacing any previous value of that name.
    pub fn insert<T>(&mut self, name: &'static str, value: T)
    where
        T: Any + Send + Sync,
    {
        self.insert_boxed(name, Box::new(value));
    }

    fn insert_boxed(&mut self, name: &'static str, value: Box<dyn Any + Send + Sync>) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Borrows the field `name` if it exists and holds a `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value.downcast_ref::<T>())
    }

    /// Removes the field `name` and returns it if it holds a `T`.
    ///
    /// A field of another type is left in place.
    pub fn take<T: Any>(&mut self, name: &str) -> Option<T> {
        let position = self
            .entries
            .iter()
            .position(|(key, value)| *key == name && value.is::<T>())?;
        let (_, value) = self.entries.remove(position);
        value.downcast::<T>().ok().map(|value| *value)
    }

    /// Returns `true` if a field called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == name)
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves every field of `other` into `self`; fields of `other` overwrite
    /// fields of `self` with the same name.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (name, value) in other.entries {
            self.insert_boxed(name, value);
        }
        self
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.names()).finish()
    }
}
