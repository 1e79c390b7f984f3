//! A scratch directory holding a config, input images and outputs.

use std::path::{Path, PathBuf};

use dotterizer::assets::AssetLoader;
use dotterizer::error::PipelineError;
use dotterizer::models::AppConfig;
use dotterizer::services::{PlanOptions, PlanPipeline, PlanReport};
use tempfile::TempDir;

use super::fixtures;

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Workspace with [`fixtures::SMALL_CONFIG`]
    pub fn new() -> Self {
        Self::with_config(fixtures::SMALL_CONFIG)
    }

    pub fn with_config(yaml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("config.yaml"), yaml).expect("Failed to write config");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.yaml")
    }

    pub fn out_dir(&self) -> PathBuf {
        self.path().join("out")
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.out_dir().join(name)
    }

    /// Loader reading the workspace config and the embedded templates
    pub fn loader(&self) -> AssetLoader {
        AssetLoader::new(None, Some(self.config_path()))
    }

    pub fn pipeline(&self) -> Result<PlanPipeline, PipelineError> {
        let config = AppConfig::load_from_assets(&self.loader())?;
        PlanPipeline::new(config, &self.loader())
    }

    /// Write an input PNG into the workspace
    pub fn write_image(&self, name: &str, width: u32, height: u32, pixels: &[[u8; 3]]) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, fixtures::encode_rgb_png(width, height, pixels))
            .expect("Failed to write image");
        path
    }

    /// Write the 4x2 fixture image as `photo.png`
    pub fn write_fixture_image(&self) -> PathBuf {
        let (width, height, pixels) = fixtures::four_by_two();
        self.write_image("photo.png", width, height, &pixels)
    }

    /// Plan `image` into [`Self::out_dir`]
    pub fn run(&self, image: &Path, options: &PlanOptions) -> Result<PlanReport, PipelineError> {
        self.pipeline()?.run(image, &self.out_dir(), options)
    }
}
