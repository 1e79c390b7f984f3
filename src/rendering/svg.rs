//! View models for the SVG templates.
//!
//! Everything geometric is computed here in millimetres; the templates only
//! place the values. A dot at grid position `(x, y)` is centered at
//! `spacing * x + spacing / 2`, with radius `dot_size / 2`.

use dot_quota::{AllocationResult, Dot, Palette};
use serde::Serialize;

use crate::models::{LayoutConfig, TileGrid};
use crate::services::template_service::escape_xml;

/// Fill used for dots whose color ran out
pub const UNASSIGNED_FILL: &str = "#ffffff";
/// Template mark for dots whose color ran out
pub const UNASSIGNED_MARK: &str = "X";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DotView {
    pub cx: f64,
    pub cy: f64,
    /// Text baseline, slightly below the center so numbers look centered
    pub ty: f64,
    pub fill: String,
    /// 1-based palette number, or [`UNASSIGNED_MARK`]
    pub number: String,
}

/// A grid of dots: the preview, the full template and each tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DotSheet {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub font_size: f64,
    pub dots: Vec<DotView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRow {
    pub number: usize,
    pub fill: String,
    pub label: String,
    pub used: usize,
    pub missing: usize,
    pub swatch_x: f64,
    pub number_x: f64,
    pub label_x: f64,
    pub cy: f64,
    pub ty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSheet {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub font_size: f64,
    pub rows: Vec<LegendRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileColor {
    pub number: String,
    pub label: String,
    pub y: f64,
}

/// One printable part of the template, in its own coordinate system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileSheet {
    /// 1-based part number, column-major
    pub part: usize,
    pub column: u32,
    pub row: u32,
    /// Inclusive grid bounds of this part in the full image
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
    #[serde(flatten)]
    pub sheet: DotSheet,
    /// Baseline of the "Part N" heading under the grid
    pub list_y: f64,
    /// Colors needed for this part, by palette number
    pub colors: Vec<TileColor>,
}

/// Geometry shared by all sheets
#[derive(Debug, Clone, Copy)]
struct Geometry {
    spacing: f64,
    radius: f64,
    font_size: f64,
}

impl Geometry {
    fn new(layout: &LayoutConfig) -> Self {
        Self {
            spacing: layout.spacing,
            radius: layout.dot_size / 2.0,
            font_size: layout.font_size,
        }
    }

    fn center(&self, i: u32) -> f64 {
        self.spacing * i as f64 + self.spacing / 2.0
    }

    fn baseline(&self, cy: f64) -> f64 {
        cy + self.font_size / 4.0
    }

    fn line_height(&self) -> f64 {
        self.font_size * 1.5
    }

    fn dot(&self, dot: &Dot, palette: &Palette, origin: (u32, u32)) -> DotView {
        let cx = self.center(dot.x - origin.0);
        let cy = self.center(dot.y - origin.1);
        let (fill, number) = match dot.entry {
            Some(idx) => (palette.entry(idx).color.to_hex(), (idx + 1).to_string()),
            None => (UNASSIGNED_FILL.to_string(), UNASSIGNED_MARK.to_string()),
        };
        DotView {
            cx,
            cy,
            ty: self.baseline(cy),
            fill,
            number,
        }
    }

    fn sheet(&self, columns: u32, rows: u32, dots: Vec<DotView>) -> DotSheet {
        DotSheet {
            width: self.spacing * columns as f64,
            height: self.spacing * rows as f64,
            radius: self.radius,
            font_size: self.font_size,
            dots,
        }
    }
}

/// Dots in raster order, independent of the processing order
fn raster_order(result: &AllocationResult) -> Vec<&Dot> {
    let mut dots: Vec<&Dot> = result.dots().iter().collect();
    dots.sort_by_key(|d| (d.y, d.x));
    dots
}

/// Build the sheet shared by the preview and the numbered template
pub fn dot_sheet(
    result: &AllocationResult,
    palette: &Palette,
    width: u32,
    height: u32,
    layout: &LayoutConfig,
) -> DotSheet {
    let geometry = Geometry::new(layout);
    let dots = raster_order(result)
        .into_iter()
        .map(|d| geometry.dot(d, palette, (0, 0)))
        .collect();
    geometry.sheet(width, height, dots)
}

/// Build the legend: swatch, numbered circle, label and used count per entry
pub fn legend_sheet(
    result: &AllocationResult,
    palette: &Palette,
    layout: &LayoutConfig,
) -> LegendSheet {
    let geometry = Geometry::new(layout);
    let spacing = geometry.spacing;
    let rows: Vec<LegendRow> = result
        .summary(palette)
        .into_iter()
        .map(|entry| {
            let cy = geometry.center(entry.index as u32);
            LegendRow {
                number: entry.index + 1,
                fill: entry.color.to_hex(),
                label: escape_xml(&entry.label),
                used: entry.used,
                missing: entry.missing,
                swatch_x: spacing / 2.0,
                number_x: spacing + spacing / 2.0,
                label_x: spacing * 2.0 + geometry.font_size / 2.0,
                cy,
                ty: geometry.baseline(cy),
            }
        })
        .collect();

    LegendSheet {
        width: spacing * 16.0,
        height: spacing * rows.len().max(1) as f64,
        radius: geometry.radius,
        font_size: geometry.font_size,
        rows,
    }
}

/// Split the template into `grid.columns x grid.rows` parts.
///
/// Parts are `ceil(width / columns)` dots wide and `ceil(height / rows)`
/// dots high; the last column and row take what is left. Parts that would
/// fall entirely outside the image are not produced. Numbering runs down
/// each column first.
pub fn tile_sheets(
    result: &AllocationResult,
    palette: &Palette,
    width: u32,
    height: u32,
    layout: &LayoutConfig,
    grid: TileGrid,
) -> Vec<TileSheet> {
    let geometry = Geometry::new(layout);
    let tile_w = width.div_ceil(grid.columns.max(1)).max(1);
    let tile_h = height.div_ceil(grid.rows.max(1)).max(1);
    let dots = raster_order(result);

    let mut tiles = Vec::new();
    for column in 0..grid.columns {
        let min_x = column * tile_w;
        if min_x >= width {
            break;
        }
        let max_x = (min_x + tile_w).min(width) - 1;

        for row in 0..grid.rows {
            let min_y = row * tile_h;
            if min_y >= height {
                break;
            }
            let max_y = (min_y + tile_h).min(height) - 1;

            let inside: Vec<&Dot> = dots
                .iter()
                .copied()
                .filter(|d| (min_x..=max_x).contains(&d.x) && (min_y..=max_y).contains(&d.y))
                .collect();

            let views = inside
                .iter()
                .map(|d| geometry.dot(d, palette, (min_x, min_y)))
                .collect();
            let mut sheet = geometry.sheet(max_x - min_x + 1, max_y - min_y + 1, views);

            let list_y = sheet.height + geometry.spacing;
            let colors: Vec<TileColor> = tile_colors(&inside, palette)
                .into_iter()
                .enumerate()
                .map(|(i, (number, label))| TileColor {
                    number,
                    label,
                    y: list_y + geometry.line_height() * (i + 1) as f64,
                })
                .collect();

            sheet.height = list_y + geometry.line_height() * (colors.len() + 1) as f64;

            tiles.push(TileSheet {
                part: tiles.len() + 1,
                column,
                row,
                min_x,
                max_x,
                min_y,
                max_y,
                sheet,
                list_y,
                colors,
            });
        }
    }
    tiles
}

/// Entries used by `dots`, by palette number, then the unassigned mark
fn tile_colors(dots: &[&Dot], palette: &Palette) -> Vec<(String, String)> {
    let mut used = vec![false; palette.len()];
    let mut missing = false;
    for dot in dots {
        match dot.entry {
            Some(idx) => used[idx] = true,
            None => missing = true,
        }
    }

    let mut colors: Vec<(String, String)> = used
        .iter()
        .enumerate()
        .filter(|&(_, &u)| u)
        .map(|(idx, _)| ((idx + 1).to_string(), escape_xml(&palette.entry(idx).label)))
        .collect();
    if missing {
        colors.push((UNASSIGNED_MARK.to_string(), "missing".to_string()));
    }
    colors
}
