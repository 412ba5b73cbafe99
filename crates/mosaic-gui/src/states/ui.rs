use std::path::PathBuf;
use std::sync::Arc;

use image::RgbImage;
use mosaic_core::consts::DEFAULT_SPACING;
use mosaic_core::layout::{auto_columns, GridLayout};
use mosaic_core::progress::ComposeStage;

/// Overall UI state.
pub struct UIState {
    /// Files in the list, in selection order.
    pub files: Vec<PathBuf>,
    pub selected: Option<usize>,

    /// Last successfully composed raster and its layout.
    pub output: Option<Arc<RgbImage>>,
    pub output_layout: Option<GridLayout>,

    /// Column override; `None` uses `round(sqrt(N))`.
    pub columns: Option<u32>,
    pub spacing: u32,

    pub running_stage: Option<ComposeStage>,
    pub progress_items_done: Option<usize>,
    pub progress_items_total: Option<usize>,
    pub saving: bool,

    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            selected: None,
            output: None,
            output_layout: None,
            columns: None,
            spacing: DEFAULT_SPACING,
            running_stage: None,
            progress_items_done: None,
            progress_items_total: None,
            saving: false,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.running_stage.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn effective_columns(&self) -> u32 {
        self.columns.unwrap_or_else(|| auto_columns(self.files.len()))
    }

    /// Replace the file list. The output preview is kept until the next combine.
    pub fn set_files(&mut self, files: Vec<PathBuf>) {
        self.files = files;
        self.selected = None;
    }

    pub fn finish_running(&mut self) {
        self.running_stage = None;
        self.progress_items_done = None;
        self.progress_items_total = None;
    }
}
