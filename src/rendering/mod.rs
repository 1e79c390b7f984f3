pub mod plan_png;
pub mod svg;

pub use plan_png::render_plan_png;
pub use svg::{dot_sheet, legend_sheet, tile_sheets, DotSheet, LegendSheet, TileSheet};
