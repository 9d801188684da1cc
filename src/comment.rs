//! Comment attachment for INI objects.
//!
//! Keys and sections can both carry a comment parsed from the lines directly
//! above them:
//!
//! ```text
//! ; this is a section comment
//! [my_section]
//! ; this is a key comment
//! key=value
//! ```
//!
//! The capability is a trait rather than a base type so that [`Key`] and
//! [`Section`] stay independent structs sharing only the comment contract.
//!
//! [`Key`]: crate::Key
//! [`Section`]: crate::Section

/// The shared comment-attachment capability of keys and sections.
///
/// An absent comment (`None`) is distinct from an empty string: both report
/// `has_comment() == false`, but only `None` means no comment line was ever
/// seen.
pub trait Commentable {
    /// Returns the comment exactly as stored, without trimming.
    fn comment(&self) -> Option<&str>;

    /// Sets or clears the comment.
    fn set_comment(&mut self, comment: Option<String>);

    /// Returns `true` if a comment is present and not blank after trimming.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inikeep::{Commentable, Section};
    ///
    /// let mut section = Section::new();
    /// assert!(!section.has_comment());
    ///
    /// section.set_comment(Some("   ".to_string()));
    /// assert!(!section.has_comment());
    ///
    /// section.set_comment(Some(" note ".to_string()));
    /// assert!(section.has_comment());
    /// ```
    fn has_comment(&self) -> bool {
        self.comment().is_some_and(|c| !c.trim().is_empty())
    }

    /// Returns the comment without leading or trailing whitespace, or the
    /// empty string when no comment is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inikeep::{Commentable, Section};
    ///
    /// let mut section = Section::new();
    /// assert_eq!(section.trimmed_comment(), "");
    ///
    /// section.set_comment(Some("  note  ".to_string()));
    /// assert_eq!(section.trimmed_comment(), "note");
    /// ```
    fn trimmed_comment(&self) -> &str {
        self.comment().map_or("", str::trim)
    }
}
