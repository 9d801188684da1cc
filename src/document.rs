//! The in-memory INI document model.
//!
//! A [`Document`] holds global (sectionless) key-value pairs plus named
//! [`Section`]s, both in insertion order. Global pairs are the ones that
//! appear before any section header:
//!
//! ```text
//! name=Anna Appleseed
//! age=25
//!
//! [johnappleseed]
//! name=John Appleseed
//! age=25
//! ```
//!
//! Here `name` and `age` at the top are global; the pairs below
//! `[johnappleseed]` belong to that section.
//!
//! A document is created empty, populated incrementally (by the reader or by
//! calling code), optionally mutated, and handed to a writer or discarded. It
//! owns its sections and pairs exclusively.

use crate::comment::Commentable;
use crate::map::PairMap;
use indexmap::IndexMap;

/// A named, ordered collection of key-value pairs, optionally
/// comment-annotated.
///
/// Section equality compares only the pair map; the section's own comment is
/// ignored.
///
/// # Examples
///
/// ```rust
/// use inikeep::{Key, Section, Value};
///
/// let mut section = Section::new();
/// section.pairs_mut().insert(Key::new("host"), Value::from("localhost")).unwrap();
/// assert_eq!(section.pairs().get("host"), Some(&Value::from("localhost")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Section {
    comment: Option<String>,
    pairs: PairMap,
}

impl Section {
    /// Creates a new empty section with no comment.
    #[must_use]
    pub fn new() -> Self {
        Section::default()
    }

    /// Creates a new empty section with the given comment.
    pub fn with_comment(comment: impl Into<String>) -> Self {
        Section {
            comment: Some(comment.into()),
            pairs: PairMap::new(),
        }
    }

    /// Returns the key-value pairs of this section.
    #[must_use]
    pub fn pairs(&self) -> &PairMap {
        &self.pairs
    }

    /// Returns the key-value pairs of this section for mutation.
    pub fn pairs_mut(&mut self) -> &mut PairMap {
        &mut self.pairs
    }
}

impl Commentable for Section {
    fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

/// An INI document: global key-value pairs plus named sections.
///
/// Section insertion order is preserved for serialization. Section names are
/// trimmed of surrounding whitespace before storage and lookup but not
/// otherwise normalized; matching is exact and case-sensitive.
///
/// # Examples
///
/// ```rust
/// use inikeep::{Document, Key, Section, Value};
///
/// let mut document = Document::new();
/// document.globals_mut().insert(Key::new("version"), Value::from("1")).unwrap();
///
/// let mut section = Section::new();
/// section.pairs_mut().insert(Key::new("host"), Value::from("localhost")).unwrap();
/// document.insert_section("server", section);
///
/// assert_eq!(document.section("server").unwrap().pairs().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    globals: PairMap,
    sections: IndexMap<String, Section>,
}

impl Document {
    /// Creates an empty document with no global pairs and no sections.
    #[must_use]
    pub fn new() -> Self {
        Document::default()
    }

    /// Returns the global (sectionless) key-value pairs.
    #[must_use]
    pub fn globals(&self) -> &PairMap {
        &self.globals
    }

    /// Returns the global key-value pairs for mutation.
    pub fn globals_mut(&mut self) -> &mut PairMap {
        &mut self.globals
    }

    /// Registers a section under the given name, trimmed of surrounding
    /// whitespace.
    ///
    /// If a section of the same name already exists it is displaced and
    /// returned, its contents discarded from the document.
    pub fn insert_section(&mut self, name: impl Into<String>, section: Section) -> Option<Section> {
        let name = name.into();
        self.sections.insert(name.trim().to_string(), section)
    }

    /// Returns the section stored under the given name, if any. The name is
    /// trimmed before lookup.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name.trim())
    }

    /// Returns the section stored under the given name for mutation.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name.trim())
    }

    /// Removes the section stored under the given name and returns it,
    /// preserving the order of the remaining sections.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.shift_remove(name.trim())
    }

    /// Returns `true` if a section is stored under the given name.
    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name.trim())
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Returns an iterator over `(name, section)` entries, in insertion
    /// order.
    pub fn sections(&self) -> indexmap::map::Iter<'_, String, Section> {
        self.sections.iter()
    }

    /// Returns `true` if the document has no global pairs and no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.globals.is_empty() && self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, Value};

    #[test]
    fn test_section_equality_ignores_comment() {
        let mut a = Section::with_comment("first");
        let mut b = Section::with_comment("second");
        a.pairs_mut().insert(Key::new("k"), Value::from("v")).unwrap();
        b.pairs_mut().insert(Key::new("k"), Value::from("v")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_section_names_trimmed() {
        let mut document = Document::new();
        document.insert_section("  server  ", Section::new());

        assert!(document.contains_section("server"));
        assert!(document.contains_section(" server "));
        assert!(!document.contains_section("Server"));
    }

    #[test]
    fn test_section_overwrite_discards_previous() {
        let mut document = Document::new();
        let mut first = Section::new();
        first
            .pairs_mut()
            .insert(Key::new("old"), Value::from("1"))
            .unwrap();
        document.insert_section("s", first);

        let displaced = document.insert_section("s", Section::new()).unwrap();
        assert_eq!(displaced.pairs().len(), 1);
        assert!(document.section("s").unwrap().pairs().is_empty());
        assert_eq!(document.section_count(), 1);
    }

    #[test]
    fn test_section_order_preserved() {
        let mut document = Document::new();
        document.insert_section("z", Section::new());
        document.insert_section("a", Section::new());
        document.insert_section("m", Section::new());

        let names: Vec<_> = document.sections().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
