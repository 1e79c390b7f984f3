use std::collections::HashMap;
use tera::{Context, Tera};

use crate::assets::AssetLoader;

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}

/// Colored dot preview
pub const PREVIEW: &str = "preview.svg";
/// Numbered outline template
pub const TEMPLATE: &str = "template.svg";
/// Palette legend with used counts
pub const LEGEND: &str = "legend.svg";
/// One part of a tiled template
pub const TILE: &str = "tile.svg";

const TEMPLATE_NAMES: [&str; 4] = [PREVIEW, TEMPLATE, LEGEND, TILE];

/// Service for rendering SVG templates with Tera
pub struct TemplateService {
    tera: Tera,
}

impl TemplateService {
    /// Load and compile every template once
    ///
    /// Templates from the configured directory override the embedded ones
    /// file by file.
    pub fn new(loader: &AssetLoader) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        for name in TEMPLATE_NAMES {
            let content = loader.read_template_string(name).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TemplateError::NotFound(name.to_string())
                } else {
                    TemplateError::Io(e)
                }
            })?;
            tera.add_raw_template(name, &content)?;
        }
        Self::register_filters(&mut tera);

        tracing::info!(
            templates = tera.get_template_names().count(),
            "Template service initialized"
        );

        Ok(Self { tera })
    }

    /// Register custom Tera filters
    fn register_filters(tera: &mut Tera) {
        // mm filter: compact number for SVG attributes ("4" not "4.0")
        tera.register_filter(
            "mm",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let n = tera::try_get_value!("mm", "value", f64, value);
                Ok(tera::Value::String(format_mm(n)))
            },
        );
    }

    /// Render a template with the given data
    pub fn render(
        &self,
        template_name: &str,
        data: &serde_json::Value,
    ) -> Result<String, TemplateError> {
        let context = Context::from_serialize(data)?;
        let svg = self.tera.render(template_name, &context)?;
        Ok(svg)
    }
}

/// Format a length with at most two decimals and no trailing zeros.
fn format_mm(n: f64) -> String {
    let s = format!("{n:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Simple XML escape for labels placed in SVG text
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_mm() {
        assert_eq!(format_mm(4.0), "4");
        assert_eq!(format_mm(12.5), "12.5");
        assert_eq!(format_mm(1.0 / 3.0), "0.33");
        assert_eq!(format_mm(0.0), "0");
        assert_eq!(format_mm(120.0), "120");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("salt & pepper <3"), "salt &amp; pepper &lt;3");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_embedded_templates_compile_and_render() {
        let service = TemplateService::new(&AssetLoader::default()).unwrap();
        let data = json!({
            "width": 16.0,
            "height": 8.0,
            "radius": 4.0,
            "font_size": 4.0,
            "dots": [
                { "cx": 4.0, "cy": 4.0, "ty": 5.0, "fill": "#000000", "number": "1" },
                { "cx": 12.0, "cy": 4.0, "ty": 5.0, "fill": "#ffffff", "number": "X" },
            ],
        });

        let svg = service.render(TEMPLATE, &data).unwrap();
        assert!(svg.contains(r#"width="16mm""#));
        assert!(svg.contains(r#"<text x="12" y="5">X</text>"#));

        let svg = service.render(PREVIEW, &data).unwrap();
        assert!(svg.contains(r##"<circle fill="#000000" cx="4" cy="4" r="4"/>"##));
    }

    #[test]
    fn test_unknown_template_is_error() {
        let service = TemplateService::new(&AssetLoader::default()).unwrap();
        assert!(service.render("missing.svg", &json!({})).is_err());
    }
}
