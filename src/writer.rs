//! INI serialization.
//!
//! This module provides the [`Writer`] that renders a [`Document`] back to
//! INI text.
//!
//! ## Overview
//!
//! Output order is fixed: global pairs first, in their stored order, then
//! each section in its stored order. Every pair and section is preceded by
//! its comment when one is attached. The writer only ever appends to the
//! sink and never fails except for a sink-level I/O failure, which
//! propagates unchanged.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use inikeep::{to_string, Document, Key, Value};
//!
//! let mut document = Document::new();
//! document.globals_mut().insert(Key::new("key1"), Value::from("value1")).unwrap();
//!
//! assert_eq!(to_string(&document).unwrap(), "key1=value1\n");
//! ```
//!
//! For stream output, construct a [`Writer`] over any [`io::Write`] sink:
//!
//! ```rust
//! use inikeep::{Document, Writer};
//!
//! let document = Document::new();
//! let mut writer = Writer::new(Vec::new());
//! writer.write(&document).unwrap();
//! assert!(writer.into_inner().is_empty());
//! ```

use crate::comment::Commentable;
use crate::error::Result;
use crate::options::WriteOptions;
use crate::symbols::{ASSIGN, COMMENT_HASH, NEWLINE, SECTION_CLOSE, SECTION_OPEN};
use crate::{Document, Key, Section, Value};
use std::io;

/// The INI writer.
///
/// Renders a [`Document`] to any [`io::Write`] sink. By default sections are
/// written back to back; [`WriteOptions::with_newline_at_section_end`]
/// inserts one blank line after each section's pairs.
///
/// # Examples
///
/// ```rust
/// use inikeep::{Document, Section, WriteOptions, Writer};
///
/// let mut document = Document::new();
/// document.insert_section("a", Section::new());
/// document.insert_section("b", Section::new());
///
/// let options = WriteOptions::new().with_newline_at_section_end(true);
/// let mut writer = Writer::with_options(Vec::new(), options);
/// writer.write(&document).unwrap();
///
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text, "[a]\n\n[b]\n\n");
/// ```
pub struct Writer<W> {
    out: W,
    options: WriteOptions,
}

impl<W: io::Write> Writer<W> {
    /// Constructs a writer over the given sink with default options.
    pub fn new(out: W) -> Self {
        Writer::with_options(out, WriteOptions::default())
    }

    /// Constructs a writer over the given sink with the given options.
    pub fn with_options(out: W, options: WriteOptions) -> Self {
        Writer { out, options }
    }

    /// Sets whether a blank line follows each section. Disabled by default.
    pub fn set_newline_at_section_end(&mut self, newline_at_section_end: bool) {
        self.options.newline_at_section_end = newline_at_section_end;
    }

    /// Renders the given document: global pairs first, then each section in
    /// stored order.
    ///
    /// # Errors
    ///
    /// Returns the original I/O error if writing to the sink fails.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn write(&mut self, document: &Document) -> Result<()> {
        for (key, value) in document.globals() {
            self.write_pair(key, value)?;
        }

        for (name, section) in document.sections() {
            self.write_section(name, section)?;
        }

        Ok(())
    }

    /// Writes the section comment, the header line, the section's pairs, and
    /// the optional trailing blank line.
    fn write_section(&mut self, name: &str, section: &Section) -> Result<()> {
        self.write_comment(section)?;
        write!(
            self.out,
            "{}{}{}{}",
            SECTION_OPEN,
            name.trim(),
            SECTION_CLOSE,
            NEWLINE
        )?;

        for (key, value) in section.pairs() {
            self.write_pair(key, value)?;
        }

        if self.options.newline_at_section_end {
            write!(self.out, "{}", NEWLINE)?;
        }

        Ok(())
    }

    /// Writes one `key=value` line, preceded by the key's comment when one
    /// is attached. The absent value renders as nothing after the operator.
    fn write_pair(&mut self, key: &Key, value: &Value) -> Result<()> {
        self.write_comment(key)?;
        write!(self.out, "{}{}{}{}", key, ASSIGN, value, NEWLINE)?;
        Ok(())
    }

    /// Writes the comment of the given object as a `# `-prefixed line.
    /// The comment is trimmed and embedded line terminators collapse away,
    /// so re-parsing the output reproduces the same comment line. Objects
    /// without a comment produce no output.
    fn write_comment(&mut self, commentable: &impl Commentable) -> Result<()> {
        if commentable.has_comment() {
            let comment = commentable.trimmed_comment().replace(NEWLINE, "");
            write!(self.out, "{} {}{}", COMMENT_HASH, comment, NEWLINE)?;
        }

        Ok(())
    }

    /// Flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns the original I/O error if flushing fails.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
