//! Key and value wrappers for INI pairs.
//!
//! This module provides the two halves of an INI assignment:
//!
//! - [`Key`]: a comment-carrying wrapper around the key string
//! - [`Value`]: a wrapper around the value string, which may be absent
//!   (`key=` with nothing after the operator), with lossy scalar coercions
//!
//! ## Equality Semantics
//!
//! Key equality and hashing are based solely on the key string; the comment
//! is excluded. A key also compares equal to a bare `&str` of the same value,
//! so map lookups succeed without constructing a wrapper:
//!
//! ```rust
//! use inikeep::{Commentable, Key};
//!
//! let mut key = Key::new("timeout");
//! key.set_comment(Some("seconds".to_string()));
//! assert_eq!(key, Key::new("timeout"));
//! assert_eq!(key, "timeout");
//! ```
//!
//! ## Typed Coercions
//!
//! Values are stored as text and coerced on demand. Each coercion fails with
//! a conversion error carrying the raw string and the target type name:
//!
//! ```rust
//! use inikeep::Value;
//!
//! let value = Value::from("42");
//! assert_eq!(value.as_i32().unwrap(), 42);
//! assert!(value.as_bool().is_err());
//! ```

use crate::comment::Commentable;
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A commentable INI key.
///
/// When parsing
///
/// ```text
/// [my_section]
/// ; upper limit in seconds
/// timeout=30
/// ```
///
/// the key `timeout` carries the comment `upper limit in seconds`.
///
/// Keys are case-sensitive and exact-match; no normalization is applied.
/// Validity (non-empty, non-blank) is enforced when the key enters a
/// [`PairMap`](crate::PairMap), not at construction.
#[derive(Debug, Clone)]
pub struct Key {
    name: String,
    comment: Option<String>,
}

impl Key {
    /// Creates a key from the given string, with no comment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inikeep::Key;
    ///
    /// let key = Key::new("name");
    /// assert_eq!(key.name(), "name");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Key {
            name: name.into(),
            comment: None,
        }
    }

    /// Creates a key with an attached comment.
    pub fn with_comment(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Key {
            name: name.into(),
            comment: Some(comment.into()),
        }
    }

    /// Returns the key string.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Commentable for Key {
    fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Comments are excluded from equality and hashing so that a key looked up by
// its raw string finds the stored entry regardless of attached comments.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Key {}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with str's hash for Borrow<str> lookups.
        self.name.hash(state);
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::new(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::new(name)
    }
}

/// The value of an INI key.
///
/// The value is stored as text but can be coerced to a scalar type on
/// demand. A value may be absent, representing a key whose assignment
/// operator is the last character of its line (`key=`); the distinguished
/// [`Value::EMPTY`] singleton covers that state.
///
/// Equality and hashing are based on the raw text only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Value {
    text: Option<String>,
}

impl Value {
    /// The absent value: a key with nothing after the assignment operator.
    pub const EMPTY: Value = Value { text: None };

    /// Creates a value from the given text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inikeep::Value;
    ///
    /// let value = Value::new("production");
    /// assert_eq!(value.as_str(), Some("production"));
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        Value {
            text: Some(text.into()),
        }
    }

    /// Returns the raw text, or `None` for the absent value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns `true` if this is the absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inikeep::Value;
    ///
    /// assert!(Value::EMPTY.is_empty());
    /// assert!(!Value::new("").is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none()
    }

    /// Coerces the value to an `i32`.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the text is not a valid integer.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn as_i32(&self) -> Result<i32> {
        self.coerce("i32", str::parse)
    }

    /// Coerces the value to an `i64`.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the text is not a valid 64-bit integer.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn as_i64(&self) -> Result<i64> {
        self.coerce("i64", str::parse)
    }

    /// Coerces the value to an `f64`.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the text is not a valid floating-point
    /// number.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn as_f64(&self) -> Result<f64> {
        self.coerce("f64", str::parse)
    }

    /// Coerces the value to a `bool`.
    ///
    /// Exactly four literals are recognized: `True` and `Yes` are true,
    /// `False` and `No` are false. Anything else, including lowercase
    /// `true`/`false`, fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inikeep::Value;
    ///
    /// assert!(Value::new("Yes").as_bool().unwrap());
    /// assert!(!Value::new("No").as_bool().unwrap());
    /// assert!(Value::new("true").as_bool().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the text is not one of the four
    /// recognized literals.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn as_bool(&self) -> Result<bool> {
        self.coerce("bool", |text| match text {
            "True" | "Yes" => Ok(true),
            "False" | "No" => Ok(false),
            _ => Err(()),
        })
    }

    fn coerce<T, E>(&self, target: &'static str, parse: impl Fn(&str) -> std::result::Result<T, E>) -> Result<T> {
        let text = self.text.as_deref().unwrap_or("");
        parse(text).map_err(|_| Error::convert(text, target))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The absent value renders as nothing, so serialization emits `key=`.
        f.write_str(self.as_str().unwrap_or(""))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::new(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_equality_ignores_comment() {
        let plain = Key::new("key1");
        let commented = Key::with_comment("key1", "a comment");
        assert_eq!(plain, commented);
    }

    #[test]
    fn test_key_equals_raw_string() {
        let key = Key::new("key1");
        assert_eq!(key, "key1");
        assert_ne!(key, "Key1");
    }

    #[test]
    fn test_key_hash_matches_str() {
        use std::collections::hash_map::DefaultHasher;

        let mut key_hasher = DefaultHasher::new();
        Key::with_comment("key1", "ignored").hash(&mut key_hasher);

        let mut str_hasher = DefaultHasher::new();
        "key1".hash(&mut str_hasher);

        assert_eq!(key_hasher.finish(), str_hasher.finish());
    }

    #[test]
    fn test_value_coercions() {
        let value = Value::new("42");
        assert_eq!(value.as_i32().unwrap(), 42);
        assert_eq!(value.as_i64().unwrap(), 42);
        assert_eq!(value.as_f64().unwrap(), 42.0);

        let value = Value::new("3.5");
        assert_eq!(value.as_f64().unwrap(), 3.5);
        assert!(value.as_i32().is_err());
    }

    #[test]
    fn test_value_conversion_error_payload() {
        match Value::new("not a number").as_i64() {
            Err(Error::Convert { value, target }) => {
                assert_eq!(value, "not a number");
                assert_eq!(target, "i64");
            }
            other => panic!("expected conversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_bool_literals_exhaustive() {
        assert!(Value::new("True").as_bool().unwrap());
        assert!(Value::new("Yes").as_bool().unwrap());
        assert!(!Value::new("False").as_bool().unwrap());
        assert!(!Value::new("No").as_bool().unwrap());

        assert!(Value::new("true").as_bool().is_err());
        assert!(Value::new("1").as_bool().is_err());
        assert!(Value::new("").as_bool().is_err());
    }

    #[test]
    fn test_empty_value() {
        assert!(Value::EMPTY.is_empty());
        assert_eq!(Value::EMPTY.as_str(), None);
        assert_eq!(Value::EMPTY.to_string(), "");
        assert!(Value::EMPTY.as_i32().is_err());
        // Present-but-empty text is not the absent value.
        assert_ne!(Value::new(""), Value::EMPTY);
    }
}
