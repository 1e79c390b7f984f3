//! Pixel samples and processing order
//!
//! A [`Sample`] is one pixel of the source image. The allocator consumes
//! samples strictly in sequence, so this module also provides the
//! [`shuffle()`] that decides that sequence.

mod error;
mod shuffle;

pub use error::SampleError;
pub use shuffle::{shuffle, shuffle_with_rng};

use crate::color::Rgb;

/// One pixel of the source image: its coordinate and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sample {
    /// Column, `0..width`
    pub x: u32,
    /// Row, `0..height`
    pub y: u32,
    /// Pixel color
    pub color: Rgb,
}

impl Sample {
    /// Create a sample at `(x, y)`.
    #[inline]
    pub const fn new(x: u32, y: u32, color: Rgb) -> Self {
        Self { x, y, color }
    }
}

/// Enumerate every pixel of a row-major image as a sample.
///
/// Yields one sample per coordinate in `[0, width) x [0, height)`, in raster
/// order.
///
/// # Errors
///
/// Returns [`SampleError::PixelCountMismatch`] unless `pixels` holds exactly
/// `width * height` colors.
///
/// # Example
///
/// ```
/// use dot_quota::{samples_from_pixels, Rgb};
///
/// let pixels = [Rgb::new(1, 1, 1), Rgb::new(2, 2, 2), Rgb::new(3, 3, 3), Rgb::new(4, 4, 4)];
/// let samples = samples_from_pixels(2, 2, &pixels).unwrap();
/// assert_eq!(samples[3].x, 1);
/// assert_eq!(samples[3].y, 1);
/// assert_eq!(samples[3].color, Rgb::new(4, 4, 4));
/// ```
pub fn samples_from_pixels(
    width: u32,
    height: u32,
    pixels: &[Rgb],
) -> Result<Vec<Sample>, SampleError> {
    if pixels.len() != width as usize * height as usize {
        return Err(SampleError::PixelCountMismatch {
            width,
            height,
            actual: pixels.len(),
        });
    }
    if width == 0 {
        return Ok(Vec::new());
    }
    Ok(pixels
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            Sample::new(x, y, color)
        })
        .collect())
}
