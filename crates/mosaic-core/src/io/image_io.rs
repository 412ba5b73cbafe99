use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage};
use tracing::debug;

use crate::error::{MosaicError, Result};
use crate::progress::{ComposeStage, NoOpReporter, ProgressReporter};

/// A decoded source raster together with the path it was read from.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub path: PathBuf,
    pub raster: DynamicImage,
}

impl SourceImage {
    pub fn new(path: impl Into<PathBuf>, raster: DynamicImage) -> Self {
        Self {
            path: path.into(),
            raster,
        }
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Decode one image file. Any open or decode failure names the path.
pub fn load_source(path: &Path) -> Result<SourceImage> {
    let raster = image::open(path).map_err(|source| MosaicError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        raster.width(),
        raster.height(),
        raster.color()
    );
    Ok(SourceImage::new(path, raster))
}

/// Decode every file in order, stopping at the first failure.
pub fn load_sources<P: AsRef<Path>>(
    paths: &[P],
    reporter: &dyn ProgressReporter,
) -> Result<Vec<SourceImage>> {
    reporter.begin_stage(ComposeStage::Decoding, Some(paths.len()));
    let mut sources = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        sources.push(load_source(path.as_ref())?);
        reporter.advance(i + 1);
    }
    reporter.finish_stage();
    Ok(sources)
}

/// Read only the header of an image file to get its dimensions.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|source| MosaicError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Output format for `path`, chosen from its extension. Defaults to PNG.
pub fn output_format(path: &Path) -> ImageFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        Some("tiff" | "tif") => ImageFormat::Tiff,
        Some("bmp") => ImageFormat::Bmp,
        _ => ImageFormat::Png,
    }
}

/// Encode the composed raster and write it to `path`.
pub fn save_composed(image: &RgbImage, path: &Path) -> Result<()> {
    save_composed_reported(image, path, &NoOpReporter)
}

/// [`save_composed`] reported as a one-item `Writing` stage.
pub fn save_composed_reported(
    image: &RgbImage,
    path: &Path,
    reporter: &dyn ProgressReporter,
) -> Result<()> {
    reporter.begin_stage(ComposeStage::Writing, Some(1));
    let format = output_format(path);
    image
        .save_with_format(path, format)
        .map_err(|source| MosaicError::Save {
            path: path.to_path_buf(),
            source,
        })?;
    reporter.advance(1);
    reporter.finish_stage();
    debug!("Wrote {} as {:?}", path.display(), format);
    Ok(())
}
