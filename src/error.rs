//! Error types for INI parsing, serialization, and value coercion.
//!
//! The error surface is deliberately small: a syntax error raised by the
//! reader at the first offending line, a conversion error raised lazily when
//! a typed view of a [`Value`](crate::Value) is requested, a blank-key
//! rejection raised at map insertion, and an I/O passthrough.
//!
//! ## Examples
//!
//! ```rust
//! use inikeep::{parse_str, Error};
//!
//! let result = parse_str("[section]\nnot an assignment\n");
//! match result {
//!     Err(Error::Syntax { line, text, .. }) => {
//!         assert_eq!(line, 2);
//!         assert_eq!(text, "not an assignment");
//!     }
//!     _ => panic!("expected a syntax error"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Represents all errors that can occur while reading, writing, or coercing
/// INI data.
#[derive(Debug, Error)]
pub enum Error {
    /// A line that matches none of the INI grammar rules, or a section header
    /// that violates a naming rule. Line numbers are 1-based.
    #[error("{}", syntax_message(*.line, .text, .detail.as_deref()))]
    Syntax {
        line: usize,
        text: String,
        detail: Option<String>,
    },

    /// A value whose stored text does not match the requested scalar type.
    #[error("cannot convert '{value}' to {target}")]
    Convert {
        value: String,
        target: &'static str,
    },

    /// A key that is empty or all-whitespace was inserted into a pair map.
    #[error("key must be non-empty and non-blank")]
    BlankKey,

    /// An I/O failure on the underlying stream, propagated with its original
    /// kind intact.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates a syntax error citing a 1-based line number and the raw
    /// offending line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inikeep::Error;
    ///
    /// let err = Error::syntax(3, "invalid_line");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, text: &str) -> Self {
        Error::Syntax {
            line,
            text: text.to_string(),
            detail: None,
        }
    }

    /// Creates a syntax error with a short machine-readable detail string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inikeep::Error;
    ///
    /// let err = Error::syntax_with_detail(1, "[.child]", "child section without parent");
    /// assert!(err.to_string().contains("child section without parent"));
    /// ```
    pub fn syntax_with_detail(line: usize, text: &str, detail: &str) -> Self {
        Error::Syntax {
            line,
            text: text.to_string(),
            detail: Some(detail.to_string()),
        }
    }

    /// Creates a conversion error carrying the offending raw string and the
    /// target type name.
    pub fn convert(value: &str, target: &'static str) -> Self {
        Error::Convert {
            value: value.to_string(),
            target,
        }
    }
}

fn syntax_message(line: usize, text: &str, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("error '{detail}' in line {line}: '{text}'"),
        None => format!("error in line {line}: '{text}'"),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
