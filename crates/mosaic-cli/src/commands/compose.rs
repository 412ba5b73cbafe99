use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mosaic_core::compose::compose_reported;
use mosaic_core::config::ComposeConfig;
use mosaic_core::io::image_io::save_composed_reported;
use tracing::info;

use crate::progress::BarReporter;
use crate::summary::print_compose_summary;

#[derive(Args)]
pub struct ComposeArgs {
    /// Input image files, placed in the grid in the order given
    pub files: Vec<PathBuf>,

    /// Compose config file (TOML); flags given here override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of grid columns [default: round(sqrt(N))]
    #[arg(short, long)]
    pub cols: Option<u32>,

    /// Margin in pixels between and around cells [default: 5]
    #[arg(short, long)]
    pub spacing: Option<u32>,

    /// Output file path; format follows the extension [default: saved_image.jpg]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ComposeArgs) -> Result<()> {
    let config = build_config(args)?;
    config.validate()?;
    if config.inputs.is_empty() {
        anyhow::bail!("No input images given (pass files or a config with `inputs`)");
    }

    let cols = config.resolve_columns();
    let reporter = BarReporter::new()?;
    let composed = compose_reported(&config.inputs, cols, config.spacing, &reporter);
    reporter.finish();
    let composed = composed.context("Failed to compose images")?;

    print_compose_summary(&config, &composed.layout);

    let reporter = BarReporter::new()?;
    let saved = save_composed_reported(&composed.raster, &config.output, &reporter);
    reporter.finish();
    saved.with_context(|| format!("Failed to save {}", config.output.display()))?;
    info!("Saved {}", config.output.display());
    println!("Saved to {}", config.output.display());

    Ok(())
}

fn build_config(args: &ComposeArgs) -> Result<ComposeConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let mut config: ComposeConfig =
            toml::from_str(&contents).context("Invalid compose config")?;
        if let Some(dir) = config_path.parent() {
            config.rebase(dir);
        }
        config
    } else {
        ComposeConfig::default()
    };

    if !args.files.is_empty() {
        config.inputs = args.files.clone();
    }
    if args.cols.is_some() {
        config.columns = args.cols;
    }
    if let Some(spacing) = args.spacing {
        config.spacing = spacing;
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }

    Ok(config)
}
