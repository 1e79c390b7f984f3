pub mod image_source;
pub mod plan_pipeline;
pub mod template_service;

pub use image_source::SourceImage;
pub use plan_pipeline::{PlanOptions, PlanPipeline, PlanReport, RenderedPlan};
pub use template_service::{TemplateError, TemplateService};
