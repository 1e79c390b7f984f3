use std::fmt;

/// Error type for building samples from a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The buffer does not hold exactly `width * height` pixels
    PixelCountMismatch {
        width: u32,
        height: u32,
        /// Number of pixels actually given
        actual: usize,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::PixelCountMismatch {
                width,
                height,
                actual,
            } => write!(
                f,
                "pixel count ({}) must match width * height ({}x{})",
                actual, width, height
            ),
        }
    }
}

impl std::error::Error for SampleError {}
