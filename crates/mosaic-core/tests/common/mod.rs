#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use mosaic_core::io::image_io::SourceImage;
use mosaic_core::progress::{ComposeStage, ProgressReporter};

/// Solid-color RGB image of the given size.
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Write a solid-color RGB PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    solid(width, height, color).save(&path).expect("write test PNG");
    path
}

/// Write a solid-color RGBA PNG into `dir` and return its path.
pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(&path)
        .expect("write test PNG");
    path
}

/// In-memory source with a solid color.
pub fn source(name: &str, width: u32, height: u32, color: [u8; 3]) -> SourceImage {
    SourceImage::new(name, DynamicImage::ImageRgb8(solid(width, height, color)))
}

/// True if every pixel in the `width`x`height` block at `(x, y)` equals `color`.
pub fn block_is(img: &RgbImage, x: u32, y: u32, width: u32, height: u32, color: [u8; 3]) -> bool {
    (y..y + height).all(|py| (x..x + width).all(|px| img.get_pixel(px, py).0 == color))
}

/// Reporter that records every event as a short string.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn take(self) -> Vec<String> {
        self.events.into_inner().expect("reporter lock")
    }

    fn push(&self, event: String) {
        self.events.lock().expect("reporter lock").push(event);
    }
}

impl ProgressReporter for RecordingReporter {
    fn begin_stage(&self, stage: ComposeStage, total_items: Option<usize>) {
        self.push(format!("begin {stage:?} {total_items:?}"));
    }

    fn advance(&self, items_done: usize) {
        self.push(format!("advance {items_done}"));
    }

    fn finish_stage(&self) {
        self.push("finish".into());
    }
}
