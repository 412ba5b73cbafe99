use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mosaic_core::consts::DEFAULT_SPACING;
use mosaic_core::io::image_io::image_dimensions;
use mosaic_core::layout::{auto_columns, GridLayout};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Number of grid columns [default: round(sqrt(N))]
    #[arg(short, long)]
    pub cols: Option<u32>,

    /// Margin in pixels between and around cells
    #[arg(short, long, default_value_t = DEFAULT_SPACING)]
    pub spacing: u32,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let mut sizes = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let (w, h) = image_dimensions(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        println!("{:<40} {}x{}", path.display(), w, h);
        sizes.push((w, h));
    }

    let cols = args.cols.unwrap_or_else(|| auto_columns(sizes.len()));
    let layout = GridLayout::from_sizes(&sizes, cols, args.spacing)?;

    println!();
    println!("Grid:        {} cols x {} rows", layout.cols, layout.rows);
    println!("Cell:        {}x{}", layout.cell_width, layout.cell_height);
    println!("Spacing:     {} px", layout.spacing);
    println!("Output:      {}x{}", layout.total_width, layout.total_height);
    if layout.empty_slots() > 0 {
        println!("Empty slots: {}", layout.empty_slots());
    }

    Ok(())
}
