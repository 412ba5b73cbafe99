use std::path::Path;
use std::sync::mpsc;

use image::RgbImage;
use mosaic_core::io::image_io::{load_source, save_composed};
use tracing::warn;

use crate::messages::WorkerResult;

use super::send;

pub(super) fn handle_preview_source(
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_source(path) {
        Ok(source) => send(
            tx,
            ctx,
            WorkerResult::SourcePreview {
                path: path.to_path_buf(),
                image: source.raster,
            },
        ),
        Err(e) => {
            warn!("Preview failed: {e}");
            send(
                tx,
                ctx,
                WorkerResult::PreviewFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                },
            );
        }
    }
}

pub(super) fn handle_save_image(
    image: &RgbImage,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_composed(image, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::ImageSaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => {
            warn!("Save failed: {e}");
            send(
                tx,
                ctx,
                WorkerResult::SaveFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                },
            );
        }
    }
}
