use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use image::{DynamicImage, RgbImage};
use mosaic_core::compose::ComposedImage;
use mosaic_core::progress::ComposeStage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode one source file for the input preview.
    PreviewSource { path: PathBuf },

    /// Compose the listed files into a grid.
    Compose {
        paths: Vec<PathBuf>,
        cols: u32,
        spacing: u32,
    },

    /// Encode and write the given output raster.
    SaveImage { image: Arc<RgbImage>, path: PathBuf },
}

/// Results sent back to the UI thread, by the worker or by dialog threads.
pub enum WorkerResult {
    /// Paths chosen in the open dialog, in selection order.
    FilesSelected { paths: Vec<PathBuf> },

    SourcePreview { path: PathBuf, image: DynamicImage },

    /// A source could not be decoded for the input preview.
    PreviewFailed { path: PathBuf, message: String },

    ComposeComplete {
        composed: ComposedImage,
        elapsed: Duration,
    },

    /// Progress update during a compose.
    Progress {
        stage: ComposeStage,
        items_done: Option<usize>,
        items_total: Option<usize>,
    },

    ImageSaved { path: PathBuf },

    SaveFailed { path: PathBuf, message: String },

    /// A compose attempt failed; no output was produced.
    ComposeFailed { message: String },

    Log { message: String },
}
