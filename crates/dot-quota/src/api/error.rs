//! Unified error type for the dot-quota public API.
//!
//! [`PlanError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::allocate::AllocateError;
use crate::palette::{PaletteError, ParseColorError};
use crate::sample::SampleError;
use std::fmt;

/// Unified error type for the dot-quota public API.
///
/// Every variant is a configuration problem detected before any sample is
/// processed. A color running out is not an error.
///
/// # Example
///
/// ```
/// use dot_quota::{Palette, PlanError};
///
/// fn create_palette() -> Result<Palette, PlanError> {
///     let palette = Palette::from_hex(&[("#000000", "black"), ("#ffffff", "white")])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Palette validation error (duplicate color or label, blank label, parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Allocation configuration error (quota of zero)
    Allocate(AllocateError),
    /// Pixel buffer does not match the image dimensions
    Sample(SampleError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Palette(err) => write!(f, "palette error: {}", err),
            PlanError::ParseColor(err) => write!(f, "color parse error: {}", err),
            PlanError::Allocate(err) => write!(f, "allocation error: {}", err),
            PlanError::Sample(err) => write!(f, "sample error: {}", err),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Palette(err) => Some(err),
            PlanError::ParseColor(err) => Some(err),
            PlanError::Allocate(err) => Some(err),
            PlanError::Sample(err) => Some(err),
        }
    }
}

impl From<PaletteError> for PlanError {
    fn from(err: PaletteError) -> Self {
        PlanError::Palette(err)
    }
}

impl From<ParseColorError> for PlanError {
    fn from(err: ParseColorError) -> Self {
        PlanError::ParseColor(err)
    }
}

impl From<AllocateError> for PlanError {
    fn from(err: AllocateError) -> Self {
        PlanError::Allocate(err)
    }
}

impl From<SampleError> for PlanError {
    fn from(err: SampleError) -> Self {
        PlanError::Sample(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_prefixes_category() {
        let err = PlanError::from(AllocateError::InvalidQuota { quota: 0 });
        assert_eq!(
            err.to_string(),
            "allocation error: quota per color must be positive, got 0"
        );

        let err = PlanError::from(PaletteError::DuplicateColor { index: 3 });
        assert!(err.to_string().starts_with("palette error: "));

        let err = PlanError::from(SampleError::PixelCountMismatch {
            width: 2,
            height: 1,
            actual: 3,
        });
        assert_eq!(
            err.to_string(),
            "sample error: pixel count (3) must match width * height (2x1)"
        );
    }

    #[test]
    fn test_source_is_wrapped_error() {
        let err = PlanError::from(ParseColorError::InvalidLength);
        let source = err.source().expect("wrapped error is the source");
        assert_eq!(source.to_string(), ParseColorError::InvalidLength.to_string());
    }
}
