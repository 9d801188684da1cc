//! The fixed lexical vocabulary of the INI format.
//!
//! Every character the reader classifies on and the writer emits is defined
//! here, so the grammar lives in one place instead of scattered literals.

/// Opens a section header line.
pub const SECTION_OPEN: char = '[';

/// Closes a section header line.
pub const SECTION_CLOSE: char = ']';

/// Separates a key from its value.
pub const ASSIGN: char = '=';

/// Introduces a comment line (also the marker the writer emits).
pub const COMMENT_HASH: char = '#';

/// Alternative comment marker, accepted on input only.
pub const COMMENT_SEMICOLON: char = ';';

/// Line terminator used by the writer.
pub const NEWLINE: char = '\n';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_cover_the_grammar() {
        assert_eq!(SECTION_OPEN, '[');
        assert_eq!(SECTION_CLOSE, ']');
        assert_eq!(ASSIGN, '=');
        assert_eq!(COMMENT_HASH, '#');
        assert_eq!(COMMENT_SEMICOLON, ';');
        assert_eq!(NEWLINE, '\n');
    }
}
