//! Test fixtures and constants.

/// Colors of the test palette
pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    /// Closest to red under the channel sum
    pub const DARK_RED: [u8; 3] = [250, 0, 0];
}

/// Three color palette with room for two dots of each color
pub const SMALL_CONFIG: &str = r##"
quota: 2
layout:
  spacing: 8
  dot_size: 8
  font_size: 4
palette:
  - { color: "#000000", label: black }
  - { color: "#ff0000", label: red }
  - { color: "#ffffff", label: white }
"##;

/// Config whose palette names two entries the same
pub const DUPLICATE_LABEL_CONFIG: &str = r##"
quota: 2
palette:
  - { color: "#000000", label: black }
  - { color: "#111111", label: black }
"##;

pub const EMPTY_PALETTE_CONFIG: &str = r##"
quota: 2
palette: []
"##;

/// 4x2 image: four black, two dark red and two white pixels.
///
/// ```text
/// B B R W
/// B B R W
/// ```
pub fn four_by_two() -> (u32, u32, Vec<[u8; 3]>) {
    use colors::*;
    let row = [BLACK, BLACK, DARK_RED, WHITE];
    (4, 2, row.iter().chain(row.iter()).copied().collect())
}

/// Encode an 8-bit RGB PNG
pub fn encode_rgb_png(width: u32, height: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
    }
    buf
}
