use crate::assets::AssetLoader;
use crate::error::ConfigError;
use dot_quota::{DistanceMetric, Palette, PaletteEntry, Rgb, DEFAULT_QUOTA};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Dots available per palette color
    #[serde(default = "default_quota")]
    pub quota: u32,

    /// Sheet geometry
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Optional split of the template into printable parts
    #[serde(default)]
    pub tiles: Option<TileGrid>,

    /// Color distance used for matching
    #[serde(default)]
    pub distance: DistanceSetting,

    /// Available colors, in template numbering order
    #[serde(default = "default_palette")]
    pub palette: Vec<PaletteColor>,
}

fn default_quota() -> u32 {
    DEFAULT_QUOTA
}

/// The sticker colors the tool ships with, as listed in the embedded config.yaml
fn default_palette() -> Vec<PaletteColor> {
    #[derive(Deserialize)]
    struct Shipped {
        palette: Vec<PaletteColor>,
    }

    AssetLoader::default()
        .read_config_string()
        .map_err(|e| e.to_string())
        .and_then(|yaml| serde_yaml::from_str::<Shipped>(&yaml).map_err(|e| e.to_string()))
        .map(|shipped| shipped.palette)
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Embedded config has no usable palette");
            Vec::new()
        })
}

/// Physical sheet geometry, in millimetres
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Distance between neighbouring dot centers
    #[serde(default = "default_spacing")]
    pub spacing: f64,

    /// Dot diameter
    #[serde(default = "default_dot_size")]
    pub dot_size: f64,

    /// Font size of the numbers on the template
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

fn default_spacing() -> f64 {
    8.0
}

fn default_dot_size() -> f64 {
    8.0
}

fn default_font_size() -> f64 {
    4.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            dot_size: default_dot_size(),
            font_size: default_font_size(),
        }
    }
}

/// Grid of printable parts, `columns` across and `rows` down
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub columns: u32,
    pub rows: u32,
}

impl TileGrid {
    pub fn new(columns: u32, rows: u32) -> Result<Self, String> {
        if columns == 0 || rows == 0 {
            return Err(format!(
                "tile grid needs at least one column and one row, got {columns}x{rows}"
            ));
        }
        Ok(Self { columns, rows })
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Parse `"<columns>x<rows>"`, e.g. `"2x4"`
impl FromStr for TileGrid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (columns, rows) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected COLUMNSxROWS, got '{s}'"))?;
        let columns = columns
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid column count '{columns}': {e}"))?;
        let rows = rows
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid row count '{rows}': {e}"))?;
        Self::new(columns, rows)
    }
}

/// Config spelling of [`DistanceMetric`]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceSetting {
    #[default]
    ChannelSum,
    Manhattan,
}

impl From<DistanceSetting> for DistanceMetric {
    fn from(setting: DistanceSetting) -> Self {
        match setting {
            DistanceSetting::ChannelSum => DistanceMetric::ChannelSum,
            DistanceSetting::Manhattan => DistanceMetric::Manhattan,
        }
    }
}

/// One palette color as written in config.yaml
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PaletteColor {
    /// Hex color, `#rrggbb` or `#rgb`
    pub color: String,
    pub label: String,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// A config that cannot be read or parsed is an error, never replaced by
    /// the defaults.
    pub fn load_from_assets(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let content = loader.read_config_string()?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            colors = config.palette.len(),
            quota = config.quota,
            tiles = ?config.tiles,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quota == 0 {
            return Err(ConfigError::Invalid(
                "quota must be at least one dot per color".to_string(),
            ));
        }
        if let Some(tiles) = self.tiles {
            TileGrid::new(tiles.columns, tiles.rows).map_err(ConfigError::Invalid)?;
        }
        let layout = &self.layout;
        if !(layout.spacing > 0.0 && layout.dot_size > 0.0 && layout.font_size > 0.0) {
            return Err(ConfigError::Invalid(
                "layout spacing, dot_size and font_size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the validated core palette
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let entries = self
            .palette
            .iter()
            .map(|c| {
                let color: Rgb = c
                    .color
                    .parse()
                    .map_err(dot_quota::PaletteError::ParseColor)?;
                Ok(PaletteEntry::new(color, c.label.trim()))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Palette::new(entries)?.with_distance_metric(self.distance.into()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quota: default_quota(),
            layout: LayoutConfig::default(),
            tiles: None,
            distance: DistanceSetting::default(),
            palette: default_palette(),
        }
    }
}
