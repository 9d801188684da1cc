//! # inikeep
//!
//! An INI parser and serializer that keeps comments, ordering, and global
//! key-value pairs intact.
//!
//! ## What does inikeep keep?
//!
//! Most INI libraries throw away everything but the raw values. This one
//! parses INI text into a [`Document`] model that preserves:
//!
//! - **Comments**: `#` and `;` lines attach to the section or key below them
//! - **Ordering**: global pairs and sections serialize in insertion order
//! - **Global pairs**: key-value pairs above the first section header are
//!   first-class, not folded into a fake section
//! - **Absent values**: `key=` with nothing after the operator is
//!   distinguishable from `key=` followed by an empty string
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! inikeep = "0.1"
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use inikeep::{parse_str, Commentable};
//!
//! let ini = "\
//! version=3
//!
//! ; primary listener
//! [server]
//! host=localhost
//! port=8080
//! tls=Yes
//! ";
//!
//! let document = parse_str(ini).unwrap();
//!
//! // Global pairs live above the first section header.
//! assert_eq!(document.globals().get("version").unwrap().as_i32().unwrap(), 3);
//!
//! let server = document.section("server").unwrap();
//! assert_eq!(server.trimmed_comment(), "primary listener");
//! assert_eq!(server.pairs().get("host").and_then(|v| v.as_str()), Some("localhost"));
//! assert!(server.pairs().get("tls").unwrap().as_bool().unwrap());
//! ```
//!
//! ### Building and Writing
//!
//! ```rust
//! use inikeep::{to_string, Document, Key, Section, Value};
//!
//! let mut document = Document::new();
//! let mut section = Section::with_comment("primary listener");
//! section.pairs_mut().insert(Key::new("port"), Value::from("8080")).unwrap();
//! document.insert_section("server", section);
//!
//! let ini = to_string(&document).unwrap();
//! assert_eq!(ini, "# primary listener\n[server]\nport=8080\n");
//! ```
//!
//! ### Typed Values
//!
//! Values are stored as text and coerced on demand. Boolean coercion
//! recognizes exactly `True`/`Yes` and `False`/`No`:
//!
//! ```rust
//! use inikeep::Value;
//!
//! assert_eq!(Value::from("42").as_i64().unwrap(), 42);
//! assert!(Value::from("true").as_bool().is_err());
//! ```
//!
//! ## Format
//!
//! Each line matches exactly one of four rules, checked in order:
//!
//! 1. Blank (empty or all-whitespace): skipped
//! 2. Comment (`#...` or `;...`): content after the marker accumulates and
//!    attaches to the next section or key
//! 3. Section header (`[name]`, exactly one pair of brackets, name must not
//!    start with `.`): opens a section
//! 4. Assignment (contains `=`): key before the first `=`, value after, both
//!    trimmed
//!
//! Anything else is a fatal syntax error citing the line. Duplicate keys
//! within one scope keep only the last value; duplicate section names keep
//! only the last section.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API (except for logic errors that indicate bugs)
//! - Proper error propagation with `Result` types

pub mod comment;
pub mod document;
pub mod error;
pub mod map;
pub mod options;
pub mod reader;
pub mod symbols;
pub mod value;
pub mod writer;

pub use comment::Commentable;
pub use document::{Document, Section};
pub use error::{Error, Result};
pub use map::PairMap;
pub use options::{ReadOptions, WriteOptions};
pub use reader::Reader;
pub use value::{Key, Value};
pub use writer::Writer;

use reader::ParseContext;
use std::io;

/// Parses a string of INI text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use inikeep::parse_str;
///
/// let document = parse_str("key=value\n").unwrap();
/// assert_eq!(document.globals().get("key").and_then(|v| v.as_str()), Some("value"));
/// ```
///
/// # Errors
///
/// Returns a syntax error at the first line that matches no grammar rule.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(s: &str) -> Result<Document> {
    parse_str_with_options(s, ReadOptions::default())
}

/// Parses a string of INI text into a [`Document`] with custom options.
///
/// # Examples
///
/// ```rust
/// use inikeep::{parse_str_with_options, Commentable, ReadOptions};
///
/// let options = ReadOptions::new().with_parse_comments(false);
/// let document = parse_str_with_options("# note\n[s]\n", options).unwrap();
/// assert!(!document.section("s").unwrap().has_comment());
/// ```
///
/// # Errors
///
/// Returns a syntax error at the first line that matches no grammar rule.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str_with_options(s: &str, options: ReadOptions) -> Result<Document> {
    let mut context = ParseContext::new(options.parse_comments);

    for (index, line) in s.lines().enumerate() {
        context.handle_line(index + 1, line)?;
    }

    Ok(context.into_document())
}

/// Parses INI text from an I/O stream into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use inikeep::parse_reader;
/// use std::io::Cursor;
///
/// let document = parse_reader(Cursor::new(b"key=value\n")).unwrap();
/// assert_eq!(document.globals().len(), 1);
/// ```
///
/// # Errors
///
/// Returns the original I/O error if reading fails, or a syntax error at the
/// first invalid line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(reader: R) -> Result<Document> {
    parse_reader_with_options(reader, ReadOptions::default())
}

/// Parses INI text from an I/O stream into a [`Document`] with custom
/// options.
///
/// # Errors
///
/// Returns the original I/O error if reading fails, or a syntax error at the
/// first invalid line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader_with_options<R: io::Read>(reader: R, options: ReadOptions) -> Result<Document> {
    Reader::with_options(io::BufReader::new(reader), options).parse()
}

/// Serializes a [`Document`] to an INI string.
///
/// # Examples
///
/// ```rust
/// use inikeep::{to_string, Document, Key, Value};
///
/// let mut document = Document::new();
/// document.globals_mut().insert(Key::new("key1"), Value::from("value1")).unwrap();
/// assert_eq!(to_string(&document).unwrap(), "key1=value1\n");
/// ```
///
/// # Errors
///
/// Serialization into a string cannot fail in practice; the `Result` keeps
/// the signature uniform with [`to_writer`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(document: &Document) -> Result<String> {
    to_string_with_options(document, WriteOptions::default())
}

/// Serializes a [`Document`] to an INI string with custom options.
///
/// # Examples
///
/// ```rust
/// use inikeep::{to_string_with_options, Document, Section, WriteOptions};
///
/// let mut document = Document::new();
/// document.insert_section("s", Section::new());
///
/// let options = WriteOptions::new().with_newline_at_section_end(true);
/// assert_eq!(to_string_with_options(&document, options).unwrap(), "[s]\n\n");
/// ```
///
/// # Errors
///
/// Serialization into a string cannot fail in practice.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(document: &Document, options: WriteOptions) -> Result<String> {
    let mut writer = Writer::with_options(Vec::new(), options);
    writer.write(document)?;

    String::from_utf8(writer.into_inner())
        .map_err(|err| Error::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}

/// Serializes a [`Document`] to a writer in INI format.
///
/// # Examples
///
/// ```rust
/// use inikeep::{to_writer, Document, Key, Value};
///
/// let mut document = Document::new();
/// document.globals_mut().insert(Key::new("key1"), Value::from("value1")).unwrap();
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &document).unwrap();
/// assert_eq!(buffer, b"key1=value1\n");
/// ```
///
/// # Errors
///
/// Returns the original I/O error if writing to the sink fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, document: &Document) -> Result<()> {
    to_writer_with_options(writer, document, WriteOptions::default())
}

/// Serializes a [`Document`] to a writer in INI format with custom options.
///
/// # Errors
///
/// Returns the original I/O error if writing to the sink fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W: io::Write>(
    writer: W,
    document: &Document,
    options: WriteOptions,
) -> Result<()> {
    Writer::with_options(writer, options).write(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_write_round_trip() {
        let ini = "key1=value1\n# note\n[section1]\nkey2=value2\n";
        let document = parse_str(ini).unwrap();
        assert_eq!(to_string(&document).unwrap(), ini);
    }

    #[test]
    fn test_parse_str_matches_parse_reader() {
        let ini = "a=1\n[s]\nb=2\n";
        let from_str = parse_str(ini).unwrap();
        let from_reader = parse_reader(io::Cursor::new(ini)).unwrap();
        assert_eq!(from_str, from_reader);
    }

    #[test]
    fn test_empty_input() {
        let document = parse_str("").unwrap();
        assert!(document.is_empty());
        assert_eq!(to_string(&document).unwrap(), "");
    }

    #[test]
    fn test_to_writer_appends_only() {
        let mut document = Document::new();
        document
            .globals_mut()
            .insert(Key::new("key"), Value::from("value"))
            .unwrap();

        let mut buffer = b"existing".to_vec();
        to_writer(&mut buffer, &document).unwrap();
        assert_eq!(buffer, b"existingkey=value\n");
    }
}
