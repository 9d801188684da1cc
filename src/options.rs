//! Configuration options for INI reading and writing.
//!
//! Two small builder structs cover the whole configuration surface:
//!
//! - [`ReadOptions`]: whether comments are attached to parsed keys/sections
//! - [`WriteOptions`]: whether a blank line follows each section
//!
//! ## Examples
//!
//! ```rust
//! use inikeep::{parse_str_with_options, Commentable, ReadOptions};
//!
//! let options = ReadOptions::new().with_parse_comments(false);
//! let document = parse_str_with_options("# note\n[s]\nkey=value\n", options).unwrap();
//! assert!(!document.section("s").unwrap().has_comment());
//! ```

/// Configuration options for the reader.
///
/// # Examples
///
/// ```rust
/// use inikeep::ReadOptions;
///
/// let options = ReadOptions::new();
/// assert!(options.parse_comments);
///
/// let options = ReadOptions::new().with_parse_comments(false);
/// assert!(!options.parse_comments);
/// ```
#[derive(Clone, Debug)]
pub struct ReadOptions {
    /// When disabled, pending comment text is never attached to keys or
    /// sections; writing the parsed document back out then loses all
    /// comments. Enabled by default.
    pub parse_comments: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            parse_comments: true,
        }
    }
}

impl ReadOptions {
    /// Creates default options (comment parsing enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether comments are attached to parsed keys and sections.
    #[must_use]
    pub fn with_parse_comments(mut self, parse_comments: bool) -> Self {
        self.parse_comments = parse_comments;
        self
    }
}

/// Configuration options for the writer.
///
/// # Examples
///
/// ```rust
/// use inikeep::WriteOptions;
///
/// let options = WriteOptions::new().with_newline_at_section_end(true);
/// assert!(options.newline_at_section_end);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WriteOptions {
    /// When enabled, one extra blank line is emitted after each section's
    /// pairs. Disabled by default.
    pub newline_at_section_end: bool,
}

impl WriteOptions {
    /// Creates default options (no blank line after sections).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether a blank line is emitted after each section.
    #[must_use]
    pub fn with_newline_at_section_end(mut self, newline_at_section_end: bool) -> Self {
        self.newline_at_section_end = newline_at_section_end;
        self
    }
}
