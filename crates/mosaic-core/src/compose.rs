use std::path::Path;

use image::{imageops, Rgb, RgbImage};
use tracing::{debug, info};

use crate::consts::BACKGROUND_RGB;
use crate::error::Result;
use crate::io::image_io::{load_sources, SourceImage};
use crate::layout::{check_inputs, GridLayout};
use crate::progress::{ComposeStage, NoOpReporter, ProgressReporter};

/// The composed output raster and the grid it was laid out on.
#[derive(Clone, Debug)]
pub struct ComposedImage {
    pub raster: RgbImage,
    pub layout: GridLayout,
}

impl ComposedImage {
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }
}

/// Decode `paths` and lay them out in a grid of `cols` columns.
///
/// Fails with `InvalidLayout` for an empty path list or `cols == 0`, before
/// anything is decoded, and with `Decode` if any file cannot be read.
pub fn compose<P: AsRef<Path>>(paths: &[P], cols: u32, spacing: u32) -> Result<ComposedImage> {
    compose_reported(paths, cols, spacing, &NoOpReporter)
}

/// [`compose`] with stage and per-file progress sent to `reporter`.
pub fn compose_reported<P: AsRef<Path>>(
    paths: &[P],
    cols: u32,
    spacing: u32,
    reporter: &dyn ProgressReporter,
) -> Result<ComposedImage> {
    check_inputs(paths.len(), cols)?;
    let sources = load_sources(paths, reporter)?;
    compose_images_reported(&sources, cols, spacing, reporter)
}

/// Lay already-decoded sources out in a grid of `cols` columns.
pub fn compose_images(sources: &[SourceImage], cols: u32, spacing: u32) -> Result<ComposedImage> {
    compose_images_reported(sources, cols, spacing, &NoOpReporter)
}

fn compose_images_reported(
    sources: &[SourceImage],
    cols: u32,
    spacing: u32,
    reporter: &dyn ProgressReporter,
) -> Result<ComposedImage> {
    let sizes: Vec<(u32, u32)> = sources.iter().map(SourceImage::dimensions).collect();
    let layout = GridLayout::from_sizes(&sizes, cols, spacing)?;
    debug!(
        "Grid {}x{} of {}x{} cells, spacing {} -> {}x{}",
        layout.cols,
        layout.rows,
        layout.cell_width,
        layout.cell_height,
        layout.spacing,
        layout.total_width,
        layout.total_height
    );

    reporter.begin_stage(ComposeStage::Compositing, Some(sources.len()));
    let mut canvas =
        RgbImage::from_pixel(layout.total_width, layout.total_height, Rgb(BACKGROUND_RGB));

    for (i, source) in sources.iter().enumerate() {
        // Alpha is dropped, not blended against the background.
        let rgb = source.raster.to_rgb8();
        let (x, y) = layout.slot_origin(i);
        imageops::replace(&mut canvas, &rgb, i64::from(x), i64::from(y));
        reporter.advance(i + 1);
    }
    reporter.finish_stage();

    info!(
        "Composed {} image(s) into {}x{}",
        sources.len(),
        layout.total_width,
        layout.total_height
    );

    Ok(ComposedImage {
        raster: canvas,
        layout,
    })
}
