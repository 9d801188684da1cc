//! Ordered key-value pair map for INI scopes.
//!
//! This module provides [`PairMap`], a wrapper around [`IndexMap`] that keeps
//! pairs in insertion order and rejects blank keys at its single insertion
//! entry point. Both the global scope of a [`Document`](crate::Document) and
//! every [`Section`](crate::Section) store their pairs in one of these.
//!
//! ## Why IndexMap?
//!
//! Serialization must reproduce pairs in the order they were inserted, so the
//! backing map is an `IndexMap` rather than a `HashMap`:
//!
//! - **Stable output**: pairs serialize in a consistent order
//! - **Iteration order**: pairs are iterated in insertion order
//! - **Duplicate handling**: re-inserting a key keeps its original position
//!   while replacing its value and comment
//!
//! ## Examples
//!
//! ```rust
//! use inikeep::{Key, PairMap, Value};
//!
//! let mut map = PairMap::new();
//! map.insert(Key::new("name"), Value::from("Alice")).unwrap();
//! map.insert(Key::new("age"), Value::from("30")).unwrap();
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::error::{Error, Result};
use crate::{Key, Value};
use indexmap::map::MutableKeys;
use indexmap::IndexMap;

/// An ordered map of [`Key`]s to [`Value`]s that does not allow blank keys.
///
/// Lookups accept a bare `&str`, so callers never need to construct a [`Key`]
/// just to read a value.
///
/// # Examples
///
/// ```rust
/// use inikeep::{Key, PairMap, Value};
///
/// let mut map = PairMap::new();
/// map.insert(Key::new("first"), Value::from("1")).unwrap();
/// map.insert(Key::new("second"), Value::from("2")).unwrap();
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().map(|k| k.name().to_string()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairMap(IndexMap<Key, Value>);

impl PairMap {
    /// Creates an empty `PairMap`.
    #[must_use]
    pub fn new() -> Self {
        PairMap(IndexMap::new())
    }

    /// Creates an empty `PairMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PairMap(IndexMap::with_capacity(capacity))
    }

    /// Associates the given value with the given key.
    ///
    /// If the map already contained an equal key, its value is replaced and
    /// returned, and the stored key itself is replaced so the new key's
    /// comment wins over the old one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlankKey`] if the key string is empty or
    /// all-whitespace. This is the single place the key invariant is checked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inikeep::{Key, PairMap, Value};
    ///
    /// let mut map = PairMap::new();
    /// assert!(map.insert(Key::new("key"), Value::from("a")).unwrap().is_none());
    /// assert!(map.insert(Key::new("key"), Value::from("b")).unwrap().is_some());
    /// assert!(map.insert(Key::new("  "), Value::from("c")).is_err());
    /// ```
    pub fn insert(&mut self, key: Key, value: Value) -> Result<Option<Value>> {
        if key.name().trim().is_empty() {
            return Err(Error::BlankKey);
        }

        // IndexMap keeps the original key on plain insert; a duplicate must
        // also carry over the new key's comment, so swap the stored key too.
        // The names are equal, so the map's hash invariant is untouched.
        if let Some((_, stored, slot)) = self.0.get_full_mut2(key.name()) {
            let previous = std::mem::replace(slot, value);
            *stored = key;
            return Ok(Some(previous));
        }

        self.0.insert(key, value);
        Ok(None)
    }

    /// Returns a reference to the value stored under the given key string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the stored [`Key`] for the given key string, giving access to
    /// its comment.
    #[must_use]
    pub fn key(&self, key: &str) -> Option<&Key> {
        self.0.get_key_value(key).map(|(k, _)| k)
    }

    /// Removes the pair stored under the given key string and returns its
    /// value, preserving the order of the remaining pairs.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if a pair is stored under the given key string.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of pairs in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion
    /// order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }
}

impl IntoIterator for PairMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PairMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
