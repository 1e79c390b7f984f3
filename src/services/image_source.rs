//! PNG decoding into pixel samples.

use std::io::Cursor;
use std::path::Path;

use dot_quota::{samples_from_pixels, Rgb, Sample, SampleError};

use crate::error::ImageError;

/// A decoded source image, one opaque color per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl SourceImage {
    /// Read and decode a PNG file
    pub fn open(path: &Path) -> Result<Self, ImageError> {
        let data = std::fs::read(path)?;
        let image = Self::decode_png(&data)?;
        tracing::debug!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            "Decoded source image"
        );
        Ok(image)
    }

    /// Decode PNG bytes of any bit depth and color type.
    ///
    /// Palettes and low bit depths are expanded, 16-bit channels are
    /// stripped to 8 bits, and transparent pixels are composited against
    /// white.
    pub fn decode_png(data: &[u8]) -> Result<Self, ImageError> {
        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf)?;
        buf.truncate(frame.buffer_size());

        if frame.bit_depth != png::BitDepth::Eight {
            return Err(ImageError::UnsupportedFormat(format!(
                "{:?} bit depth after expansion",
                frame.bit_depth
            )));
        }

        let pixels: Vec<Rgb> = match frame.color_type {
            png::ColorType::Rgb => buf
                .chunks_exact(3)
                .map(|p| Rgb::new(p[0], p[1], p[2]))
                .collect(),
            png::ColorType::Rgba => buf
                .chunks_exact(4)
                .map(|p| composite_over_white(p[0], p[1], p[2], p[3]))
                .collect(),
            png::ColorType::Grayscale => buf.iter().map(|&v| Rgb::new(v, v, v)).collect(),
            png::ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .map(|p| composite_over_white(p[0], p[0], p[0], p[1]))
                .collect(),
            png::ColorType::Indexed => {
                return Err(ImageError::UnsupportedFormat(
                    "indexed color was not expanded".to_string(),
                ))
            }
        };

        let expected = frame.width as usize * frame.height as usize;
        if pixels.len() != expected {
            return Err(ImageError::UnsupportedFormat(format!(
                "decoded {} pixels, expected {}x{}",
                pixels.len(),
                frame.width,
                frame.height
            )));
        }

        Ok(Self {
            width: frame.width,
            height: frame.height,
            pixels,
        })
    }

    /// One sample per pixel, in raster order
    pub fn samples(&self) -> Result<Vec<Sample>, SampleError> {
        samples_from_pixels(self.width, self.height, &self.pixels)
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

/// Alpha composite a pixel against white
fn composite_over_white(r: u8, g: u8, b: u8, a: u8) -> Rgb {
    match a {
        255 => Rgb::new(r, g, b),
        0 => Rgb::new(255, 255, 255),
        _ => {
            let af = a as u16;
            let blend = |c: u8| ((c as u16 * af + 255 * (255 - af)) / 255) as u8;
            Rgb::new(blend(r), blend(g), blend(b))
        }
    }
}
