use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dotterizer::assets::{AssetCategory, AssetLoader};
use dotterizer::models::{AppConfig, TileGrid};
use dotterizer::services::{PlanOptions, PlanPipeline, PlanReport};

#[derive(Parser)]
#[command(name = "dotterizer")]
#[command(about = "Paint by dots - plan a picture for a limited supply of dot stickers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan an image and write the sticker templates
    Plan {
        /// Source PNG, one dot per pixel
        image: PathBuf,

        /// Directory for the generated files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Dots available per color (overrides the config)
        #[arg(short, long)]
        quota: Option<u32>,

        /// Seed the shuffle for a reproducible plan
        #[arg(short, long)]
        seed: Option<u64>,

        /// Split the template into COLUMNSxROWS parts (e.g. 2x4)
        #[arg(short, long)]
        tiles: Option<TileGrid>,

        /// Also write an indexed PNG plan map
        #[arg(long)]
        png: bool,

        /// Config file (overrides CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the numbered palette
    Palette {
        /// Config file (overrides CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract SVG templates
        #[arg(long)]
        templates: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dotterizer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Plan {
            image,
            out_dir,
            quota,
            seed,
            tiles,
            png,
            config,
        }) => {
            let options = PlanOptions {
                quota,
                seed,
                tiles,
                png,
            };
            run_plan_command(&image, &out_dir, &options, config)
        }
        Some(Commands::Palette { config }) => run_palette_command(config),
        Some(Commands::Init {
            config,
            templates,
            all,
            force,
            list,
        }) => run_init_command(config, templates, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn load_config(config_file: Option<PathBuf>) -> anyhow::Result<(AssetLoader, AppConfig)> {
    let loader = AssetLoader::from_env().with_config_file(config_file);
    let config = AppConfig::load_from_assets(&loader)?;
    Ok((loader, config))
}

/// Plan an image and write every output file
fn run_plan_command(
    image: &Path,
    out_dir: &Path,
    options: &PlanOptions,
    config_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let (loader, config) = load_config(config_file)?;
    let pipeline = PlanPipeline::new(config, &loader)?;
    let report = pipeline.run(image, out_dir, options)?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &PlanReport) {
    println!(
        "Planned {}x{} dots ({} per color)\n",
        report.width, report.height, report.quota
    );
    println!("  #  color    {:<16} {:>6} {:>8}", "label", "used", "missing");
    for entry in &report.summary {
        println!(
            "{:>3}  {}  {:<16} {:>6} {:>8}",
            entry.index + 1,
            entry.color,
            entry.label,
            entry.used,
            entry.missing
        );
    }
    println!(
        "\nUsed {} dots, {} missing",
        report.total_used, report.total_missing
    );
    if report.unattributed > 0 {
        println!(
            "{} dots had no palette color to ask for",
            report.unattributed
        );
    }

    println!("\nWrote {} files:", report.written.len());
    for path in &report.written {
        println!("  + {}", path.display());
    }
}

/// Print the palette in template numbering
fn run_palette_command(config_file: Option<PathBuf>) -> anyhow::Result<()> {
    let (_, config) = load_config(config_file)?;
    let palette = config.palette()?;

    println!(
        "{} colors, {} dots each ({:?} distance)\n",
        palette.len(),
        config.quota,
        palette.distance_metric()
    );
    for (i, entry) in palette.entries().iter().enumerate() {
        println!("{:>3}  {}  {}", i + 1, entry.color, entry.label);
    }
    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    config: bool,
    templates: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Templates:");
        for f in AssetLoader::list_embedded(AssetCategory::Templates) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if all || templates {
        categories.push(AssetCategory::Templates);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --templates, or --config");
        eprintln!("\nRun 'dotterizer init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let report = AssetLoader::from_env().init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let templates_dir = std::env::var("TEMPLATES_DIR").ok();

    println!("Dotterizer v{VERSION} - paint by dots");
    println!("Sticker templates for a limited supply of colored dots\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  TEMPLATES_DIR = {}",
        templates_dir.as_deref().unwrap_or("(not set)")
    );

    println!("\nAsset Sources:");

    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "missing (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:    {config_source}");

    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "file"
        } else {
            "files"
        }
    }

    let loader = AssetLoader::new(templates_dir.clone().map(PathBuf::from), None);
    let embedded_count = AssetLoader::list_embedded(AssetCategory::Templates).len();
    match templates_dir {
        Some(ref path) if PathBuf::from(path).exists() => {
            let count = loader.list_templates().len();
            println!(
                "  Templates: {path} ({count} {}, {embedded_count} embedded)",
                plural(count)
            );
        }
        _ => println!(
            "  Templates: embedded ({embedded_count} {})",
            plural(embedded_count)
        ),
    }

    println!("\nCommands:");
    println!("  dotterizer plan      Plan an image and write the templates");
    println!("  dotterizer palette   Print the numbered palette");
    println!("  dotterizer init      Extract embedded assets");
    println!("\nRun 'dotterizer --help' for more details.");
}
