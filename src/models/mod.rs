pub mod config;

pub use config::{AppConfig, DistanceSetting, LayoutConfig, PaletteColor, TileGrid};
