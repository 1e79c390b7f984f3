//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette validation.
///
/// Returned when a palette would violate its uniqueness rules: every color
/// and every label may appear only once, and labels must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Duplicate label found at the specified index
    DuplicateLabel {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Blank label at the specified index
    EmptyLabel {
        /// Index of the entry with the blank label
        index: usize,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
            PaletteError::DuplicateLabel { index } => {
                write!(f, "duplicate label found at index {}", index)
            }
            PaletteError::EmptyLabel { index } => {
                write!(f, "empty label at index {}", index)
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_error_messages() {
        assert_eq!(
            PaletteError::DuplicateColor { index: 3 }.to_string(),
            "duplicate color found at index 3"
        );
        assert_eq!(
            PaletteError::DuplicateLabel { index: 1 }.to_string(),
            "duplicate label found at index 1"
        );
        assert_eq!(
            PaletteError::EmptyLabel { index: 0 }.to_string(),
            "empty label at index 0"
        );
        assert_eq!(
            PaletteError::ParseColor(ParseColorError::InvalidLength).to_string(),
            "invalid color: invalid hex color length (expected 3 or 6 characters)"
        );
        assert_eq!(
            ParseColorError::InvalidHex('+').to_string(),
            "invalid hex character: '+'"
        );
    }

    #[test]
    fn test_parse_error_has_source() {
        use std::error::Error;

        let err = PaletteError::from(ParseColorError::InvalidHex('z'));
        assert!(err.source().is_some());
        assert!(PaletteError::EmptyLabel { index: 0 }.source().is_none());
    }
}
