//! INI parsing.
//!
//! This module provides the [`Reader`] that parses INI text into a
//! [`Document`], line by line.
//!
//! ## Overview
//!
//! - **Line-oriented**: each physical line is classified independently as
//!   blank, comment, section header, or key-value assignment
//! - **Single-pass**: one forward scan, no backtracking
//! - **Fail-fast**: the first unrecognized line raises a syntax error citing
//!   its 1-based line number and raw text
//! - **Comment accumulation**: consecutive comment lines collect into a
//!   pending buffer that attaches to the next section or key
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use inikeep::parse_str;
//!
//! let document = parse_str("[server]\nhost=localhost\nport=8080\n").unwrap();
//! let server = document.section("server").unwrap();
//! assert_eq!(server.pairs().get("port").unwrap().as_i32().unwrap(), 8080);
//! ```
//!
//! For stream input, construct a [`Reader`] over any [`BufRead`]:
//!
//! ```rust
//! use inikeep::Reader;
//! use std::io::Cursor;
//!
//! let mut reader = Reader::new(Cursor::new("key=value\n"));
//! let document = reader.parse().unwrap();
//! assert_eq!(document.globals().get("key").and_then(|v| v.as_str()), Some("value"));
//! ```

use crate::comment::Commentable;
use crate::error::{Error, Result};
use crate::options::ReadOptions;
use crate::symbols::{ASSIGN, COMMENT_HASH, COMMENT_SEMICOLON, SECTION_CLOSE, SECTION_OPEN};
use crate::{Document, Key, Section, Value};
use std::io::BufRead;

/// The mutable state threaded through each line-classification step.
///
/// Holds the document under construction, the section currently receiving
/// pairs, and the pending comment buffer. Keeping this separate from stream
/// I/O makes the state machine testable on raw lines.
#[derive(Debug)]
pub(crate) struct ParseContext {
    document: Document,
    current: Option<(String, Section)>,
    pending_comment: String,
    parse_comments: bool,
}

impl ParseContext {
    pub(crate) fn new(parse_comments: bool) -> Self {
        ParseContext {
            document: Document::new(),
            current: None,
            pending_comment: String::new(),
            parse_comments,
        }
    }

    /// Classifies one line and applies its effect. `line_num` is 1-based and
    /// `line` carries no trailing terminator.
    pub(crate) fn handle_line(&mut self, line_num: usize, line: &str) -> Result<()> {
        // Fast path: blank lines never touch the buffer or current section.
        if line.trim().is_empty() {
            return Ok(());
        }

        if is_comment(line) {
            self.handle_comment(line);
            return Ok(());
        }

        if is_section_header(line) {
            return self.handle_section(line_num, line);
        }

        if line.contains(ASSIGN) {
            return self.handle_assignment(line);
        }

        Err(Error::syntax(line_num, line))
    }

    /// Finishes parsing and yields the populated document.
    pub(crate) fn into_document(mut self) -> Document {
        self.flush_current();
        self.document
    }

    /// Appends the comment content after the marker character to the pending
    /// buffer. Consecutive comment lines concatenate with no separator.
    fn handle_comment(&mut self, line: &str) {
        self.pending_comment.push_str(&line[1..]);
    }

    fn handle_section(&mut self, line_num: usize, line: &str) -> Result<()> {
        let name = line[1..line.len() - 1].trim();

        // A leading dot is reserved for child-section syntax this version
        // does not implement.
        if name.starts_with('.') {
            return Err(Error::syntax_with_detail(
                line_num,
                line,
                "child section without parent",
            ));
        }

        self.flush_current();

        let mut section = Section::new();
        section.set_comment(Some(self.take_comment()));
        self.current = Some((name.to_string(), section));
        Ok(())
    }

    fn handle_assignment(&mut self, line: &str) -> Result<()> {
        let (key, value) = split_assignment(line);
        let mut key = Key::new(key);
        key.set_comment(Some(self.take_comment()));

        match &mut self.current {
            Some((_, section)) => section.pairs_mut().insert(key, value)?,
            None => self.document.globals_mut().insert(key, value)?,
        };
        Ok(())
    }

    /// Registers the section being built, overwriting any prior section of
    /// the same name and discarding that section's contents.
    fn flush_current(&mut self) {
        if let Some((name, section)) = self.current.take() {
            self.document.insert_section(name, section);
        }
    }

    /// Takes the pending comment, clearing the buffer. With comment parsing
    /// disabled an empty string is returned and the buffer is left alone;
    /// only attachment is suppressed.
    fn take_comment(&mut self) -> String {
        if !self.parse_comments {
            return String::new();
        }

        std::mem::take(&mut self.pending_comment)
    }
}

/// A line is a comment when it is blank or starts with one of the two
/// comment markers. Blank lines are consumed before this test, so the
/// comment handler only ever sees marker lines.
fn is_comment(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(COMMENT_HASH) || line.starts_with(COMMENT_SEMICOLON)
}

/// A section header starts with `[`, ends with `]`, and contains exactly one
/// of each bracket in the whole line.
fn is_section_header(line: &str) -> bool {
    line.starts_with(SECTION_OPEN)
        && line.ends_with(SECTION_CLOSE)
        && line.matches(SECTION_OPEN).count() == 1
        && line.matches(SECTION_CLOSE).count() == 1
}

/// Splits on the first assignment operator: key is everything before,
/// trimmed; value is everything after, trimmed, or the absent singleton when
/// the operator is the last character of the line.
fn split_assignment(line: &str) -> (&str, Value) {
    // The caller guarantees an operator is present.
    let index = line.find(ASSIGN).unwrap_or(line.len());
    let key = line[..index].trim();

    let value = if index < line.len() - 1 {
        Value::new(line[index + 1..].trim())
    } else {
        Value::EMPTY
    };

    (key, value)
}

/// The INI reader.
///
/// Parses INI text from any [`BufRead`] source into a [`Document`]. Comment
/// parsing is enabled by default and can be toggled with
/// [`set_parse_comments`](Reader::set_parse_comments). Each call to
/// [`parse`](Reader::parse) starts from fresh state, but the underlying
/// stream is consumed, so one reader parses one document.
///
/// # Examples
///
/// ```rust
/// use inikeep::{Commentable, Reader};
/// use std::io::Cursor;
///
/// let ini = "; defaults for every host\n[server]\nport=8080\n";
/// let mut reader = Reader::new(Cursor::new(ini));
/// let document = reader.parse().unwrap();
///
/// let server = document.section("server").unwrap();
/// assert_eq!(server.trimmed_comment(), "defaults for every host");
/// ```
pub struct Reader<R> {
    input: R,
    options: ReadOptions,
}

impl<R: BufRead> Reader<R> {
    /// Constructs a reader over the given input with default options.
    pub fn new(input: R) -> Self {
        Reader::with_options(input, ReadOptions::default())
    }

    /// Constructs a reader over the given input with the given options.
    pub fn with_options(input: R, options: ReadOptions) -> Self {
        Reader { input, options }
    }

    /// Returns `true` if comments are attached to parsed keys and sections.
    #[must_use]
    pub fn parse_comments(&self) -> bool {
        self.options.parse_comments
    }

    /// Toggles comment parsing. With comments disabled, writing the parsed
    /// document back to the file the input came from loses all comments.
    pub fn set_parse_comments(&mut self, parse_comments: bool) {
        self.options.parse_comments = parse_comments;
    }

    /// Parses the input into a [`Document`].
    ///
    /// Internal state (current section, pending comment buffer, line
    /// counter) is reset before processing, so a failed parse leaves no
    /// residue in the reader.
    ///
    /// # Errors
    ///
    /// Returns a syntax error at the first line matching no grammar rule, a
    /// blank-key error for an assignment with an empty key, or the original
    /// I/O error if the underlying stream fails.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn parse(&mut self) -> Result<Document> {
        let mut context = ParseContext::new(self.options.parse_comments);
        let mut line_num = 0;
        let mut buf = String::new();

        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                break;
            }
            line_num += 1;

            let line = buf.strip_suffix('\n').unwrap_or(&buf);
            let line = line.strip_suffix('\r').unwrap_or(line);
            context.handle_line(line_num, line)?;
        }

        Ok(context.into_document())
    }

    /// Consumes the reader, returning the underlying input.
    pub fn into_inner(self) -> R {
        self.input
    }
}
