//! Image to sticker template, end to end.
//!
//! The pipeline decodes a PNG, plans it with [`DotPlanner`], renders every
//! output in memory, and only then writes files, so a planning or rendering
//! failure leaves the output directory untouched.

use std::fs;
use std::path::{Path, PathBuf};

use dot_quota::{AllocationResult, DotPlanner, EntrySummary, Palette};

use crate::assets::AssetLoader;
use crate::error::{PipelineError, RenderError};
use crate::models::{AppConfig, TileGrid};
use crate::rendering::{dot_sheet, legend_sheet, render_plan_png, tile_sheets};
use crate::services::image_source::SourceImage;
use crate::services::template_service::{self, TemplateService};

/// Per-run overrides of the config (CLI flags)
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Dots per color, overriding `quota` in the config
    pub quota: Option<u32>,
    /// Seed for a reproducible shuffle
    pub seed: Option<u64>,
    /// Tile grid, overriding `tiles` in the config
    pub tiles: Option<TileGrid>,
    /// Also write the indexed PNG plan map
    pub png: bool,
}

/// Every output of one run, rendered but not yet written
#[derive(Debug)]
pub struct RenderedPlan {
    pub width: u32,
    pub height: u32,
    pub result: AllocationResult,
    pub preview: String,
    pub template: String,
    pub legend: String,
    /// One template per tile, in part order
    pub parts: Vec<String>,
    pub plan_png: Option<Vec<u8>>,
}

/// What a run produced, for the CLI report
#[derive(Debug, Clone)]
pub struct PlanReport {
    pub width: u32,
    pub height: u32,
    pub quota: u32,
    pub summary: Vec<EntrySummary>,
    pub total_used: usize,
    pub total_missing: usize,
    pub unattributed: usize,
    pub written: Vec<PathBuf>,
}

pub struct PlanPipeline {
    config: AppConfig,
    palette: Palette,
    templates: TemplateService,
}

impl PlanPipeline {
    /// Validate the config and compile the templates
    pub fn new(config: AppConfig, loader: &AssetLoader) -> Result<Self, PipelineError> {
        config.validate()?;
        let palette = config.palette()?;
        let templates = TemplateService::new(loader).map_err(RenderError::from)?;
        Ok(Self {
            config,
            palette,
            templates,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Plan and render an already decoded image
    pub fn render(
        &self,
        image: &SourceImage,
        options: &PlanOptions,
    ) -> Result<RenderedPlan, PipelineError> {
        let quota = options.quota.unwrap_or(self.config.quota);
        let mut planner = DotPlanner::new(self.palette.clone()).quota(quota);
        if let Some(seed) = options.seed {
            planner = planner.seed(seed);
        }

        tracing::info!(
            width = image.width,
            height = image.height,
            samples = image.pixel_count(),
            colors = self.palette.len(),
            quota,
            "Planning dots"
        );
        let result = planner.plan_pixels(&image.pixels, image.width, image.height)?;
        tracing::info!(
            used = result.total_used(),
            missing = result.total_missing(),
            "Allocation finished"
        );

        let layout = &self.config.layout;
        let (width, height) = (image.width, image.height);

        let sheet = to_json(&dot_sheet(&result, &self.palette, width, height, layout))?;
        let preview = self.render_template(template_service::PREVIEW, &sheet)?;
        let template = self.render_template(template_service::TEMPLATE, &sheet)?;

        let legend = to_json(&legend_sheet(&result, &self.palette, layout))?;
        let legend = self.render_template(template_service::LEGEND, &legend)?;

        let mut parts = Vec::new();
        if let Some(grid) = options.tiles.or(self.config.tiles) {
            for tile in tile_sheets(&result, &self.palette, width, height, layout, grid) {
                parts.push(self.render_template(template_service::TILE, &to_json(&tile)?)?);
            }
            tracing::debug!(parts = parts.len(), grid = %grid, "Rendered tiles");
        }

        let plan_png = if options.png {
            Some(render_plan_png(&result, &self.palette, width, height)?)
        } else {
            None
        };

        Ok(RenderedPlan {
            width,
            height,
            result,
            preview,
            template,
            legend,
            parts,
            plan_png,
        })
    }

    /// Decode `input`, plan it and write the outputs into `out_dir`.
    ///
    /// Files are named after the input stem: `<stem>.svg`,
    /// `<stem>.template.svg`, `<stem>.colors.svg`, `<stem>.part-N.template.svg`
    /// and `<stem>.plan.png`.
    pub fn run(
        &self,
        input: &Path,
        out_dir: &Path,
        options: &PlanOptions,
    ) -> Result<PlanReport, PipelineError> {
        let image = SourceImage::open(input)?;
        let rendered = self.render(&image, options)?;

        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let mut outputs: Vec<(PathBuf, Vec<u8>)> = vec![
            (out_dir.join(format!("{stem}.svg")), rendered.preview.into_bytes()),
            (
                out_dir.join(format!("{stem}.template.svg")),
                rendered.template.into_bytes(),
            ),
            (
                out_dir.join(format!("{stem}.colors.svg")),
                rendered.legend.into_bytes(),
            ),
        ];
        for (i, part) in rendered.parts.into_iter().enumerate() {
            outputs.push((
                out_dir.join(format!("{stem}.part-{}.template.svg", i + 1)),
                part.into_bytes(),
            ));
        }
        if let Some(png) = rendered.plan_png {
            outputs.push((out_dir.join(format!("{stem}.plan.png")), png));
        }

        fs::create_dir_all(out_dir)?;
        let mut written = Vec::with_capacity(outputs.len());
        for (path, data) in outputs {
            fs::write(&path, data)?;
            tracing::debug!(path = %path.display(), "Wrote output");
            written.push(path);
        }

        let result = &rendered.result;
        Ok(PlanReport {
            width: rendered.width,
            height: rendered.height,
            quota: result.quota(),
            summary: result.summary(&self.palette),
            total_used: result.total_used(),
            total_missing: result.total_missing(),
            unattributed: result.unattributed_shortage(),
            written,
        })
    }

    fn render_template(
        &self,
        name: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        Ok(self.templates.render(name, data)?)
    }
}

fn to_json<T: serde::Serialize>(view: &T) -> Result<serde_json::Value, RenderError> {
    Ok(serde_json::to_value(view)?)
}
