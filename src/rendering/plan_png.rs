use crate::error::RenderError;
use dot_quota::{AllocationResult, Palette};
use std::io::Cursor;

/// Color of unassigned dots in the plan map
const UNASSIGNED: [u8; 3] = [255, 255, 255];

/// Render the plan as an indexed PNG, one pixel per dot.
///
/// The PLTE chunk holds the palette colors in order, followed by white for
/// dots that were left unassigned, so a pixel's index is its palette entry.
/// Bit depth follows the color count (1, 2, 4 or 8 bits). The encoded image
/// is re-compressed with oxipng.
pub fn render_plan_png(
    result: &AllocationResult,
    palette: &Palette,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, RenderError> {
    let colors = palette.len() + 1;
    if colors > 256 {
        return Err(RenderError::PngEncode(format!(
            "indexed PNG holds at most 255 palette colors, got {}",
            palette.len()
        )));
    }

    let unassigned = palette.len() as u8;
    let mut indices = vec![unassigned; width as usize * height as usize];
    for dot in result.dots() {
        if dot.x < width && dot.y < height {
            if let Some(entry) = dot.entry {
                indices[dot.y as usize * width as usize + dot.x as usize] = entry as u8;
            }
        }
    }

    let (depth, bits) = match colors {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    };
    let plte: Vec<u8> = palette
        .colors()
        .iter()
        .flat_map(|c| c.to_bytes())
        .chain(UNASSIGNED)
        .collect();
    let packed = if bits == 8 {
        indices
    } else {
        pack_nbits(&indices, width, bits)
    };

    // Encode PNG (fast settings, oxipng re-compresses optimally)
    let png_bytes = encode_png(width, height, depth, &plte, &packed)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);

    tracing::debug!(width, height, bytes = optimized.len(), "Encoded plan PNG");
    Ok(optimized)
}

/// Encode packed indexed pixel data as a PNG.
fn encode_png(
    width: u32,
    height: u32,
    bit_depth: png::BitDepth,
    plte: &[u8],
    packed: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack palette indices into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width.max(1) as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width.max(1) as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
