use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};

use image::DynamicImage;

use mosaic_core::consts::DEFAULT_OUTPUT_FILE;
use mosaic_core::progress::ComposeStage;
use tracing::info;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{PreviewState, UIState};
use crate::workers;

pub struct MosaicApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    /// Kept so dialog threads can post results back to the UI.
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub input_preview: PreviewState,
    pub output_preview: PreviewState,
    pub show_about: bool,
}

impl MosaicApp {
    pub fn new(ctx: &egui::Context) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone())?;

        Ok(Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            input_preview: PreviewState::default(),
            output_preview: PreviewState::default(),
            show_about: false,
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FilesSelected { paths } => {
                    self.ui_state
                        .add_log(format!("Opened {} file(s)", paths.len()));
                    self.ui_state.set_files(paths);
                }
                WorkerResult::SourcePreview { path, image } => {
                    self.input_preview.set(
                        ctx,
                        "input_preview",
                        &image,
                        display_name(&path),
                    );
                }
                WorkerResult::ComposeComplete { composed, elapsed } => {
                    self.ui_state.finish_running();
                    let layout = composed.layout;
                    let display = DynamicImage::ImageRgb8(composed.raster);
                    self.output_preview.set(
                        ctx,
                        "output_preview",
                        &display,
                        format!(
                            "{}x{} ({} x {})",
                            layout.total_width, layout.total_height, layout.cols, layout.rows
                        ),
                    );
                    self.ui_state.output = Some(Arc::new(display.into_rgb8()));
                    self.ui_state.output_layout = Some(layout);
                    self.ui_state.add_log(format!(
                        "Combined {} image(s) in {}",
                        layout.count,
                        format_duration(elapsed)
                    ));
                }
                WorkerResult::Progress {
                    stage,
                    items_done,
                    items_total,
                } => {
                    self.ui_state.running_stage = Some(stage);
                    self.ui_state.progress_items_done = items_done;
                    self.ui_state.progress_items_total = items_total;
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.saving = false;
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                    info!("Saved {}", path.display());
                    acknowledge(
                        rfd::MessageLevel::Info,
                        "Info",
                        format!("Image saved to {}", path.display()),
                    );
                }
                WorkerResult::SaveFailed { path, message } => {
                    self.ui_state.saving = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    acknowledge(
                        rfd::MessageLevel::Error,
                        "Save failed",
                        format!("Could not save {}:\n{message}", path.display()),
                    );
                }
                WorkerResult::PreviewFailed { path, message } => {
                    // A running compose is unaffected.
                    self.ui_state
                        .add_log(format!("ERROR: cannot preview {}: {message}", path.display()));
                }
                WorkerResult::ComposeFailed { message } => {
                    // Previews are left as they were.
                    self.ui_state.finish_running();
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Show the open dialog off the UI thread; the chosen paths come back as
    /// `WorkerResult::FilesSelected`.
    pub fn open_files(&self, ctx: &egui::Context) {
        let result_tx = self.result_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("PNG files", &["png"])
                .pick_files()
            {
                let _ = result_tx.send(WorkerResult::FilesSelected { paths });
                ctx.request_repaint();
            }
        });
    }

    pub fn preview_file(&mut self, index: usize) {
        if let Some(path) = self.ui_state.files.get(index) {
            self.ui_state.selected = Some(index);
            self.send_command(WorkerCommand::PreviewSource { path: path.clone() });
        }
    }

    pub fn combine(&mut self) {
        if self.ui_state.is_busy() {
            return;
        }
        if self.ui_state.files.is_empty() {
            self.ui_state.add_log("Nothing to combine: open some images first".into());
            return;
        }
        self.ui_state.running_stage = Some(ComposeStage::Decoding);
        self.send_command(WorkerCommand::Compose {
            paths: self.ui_state.files.clone(),
            cols: self.ui_state.effective_columns(),
            spacing: self.ui_state.spacing,
        });
    }

    pub fn save(&mut self) {
        if self.ui_state.saving {
            return;
        }
        let Some(image) = self.ui_state.output.clone() else {
            self.ui_state.add_log("Nothing to save: combine first".into());
            return;
        };
        self.ui_state.saving = true;
        self.send_command(WorkerCommand::SaveImage {
            image,
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        });
    }
}

impl eframe::App for MosaicApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::file_list::show(ctx, self);
        panels::workspace::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Image Composer")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Image Composer");
                        ui.label("Arrange images into a grid");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

/// Blocking message box, shown from its own thread so the UI keeps painting.
fn acknowledge(level: rfd::MessageLevel, title: &'static str, text: String) {
    std::thread::spawn(move || {
        let _ = rfd::MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(text)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    });
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
