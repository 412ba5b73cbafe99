use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Mutex};

use mosaic_core::progress::{ComposeStage, ProgressReporter};

use crate::messages::WorkerResult;

/// Progress reporter that sends updates over an mpsc channel to the UI thread.
pub struct ChannelProgressReporter {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    current_stage: Mutex<ComposeStage>,
    current_total: AtomicUsize,
}

impl ChannelProgressReporter {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) -> Self {
        Self {
            tx,
            ctx,
            current_stage: Mutex::new(ComposeStage::Decoding),
            current_total: AtomicUsize::new(0),
        }
    }

    fn send(&self, result: WorkerResult) {
        let _ = self.tx.send(result);
        self.ctx.request_repaint();
    }

    fn stage(&self) -> ComposeStage {
        self.current_stage
            .lock()
            .map(|s| *s)
            .unwrap_or(ComposeStage::Compositing)
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn begin_stage(&self, stage: ComposeStage, total_items: Option<usize>) {
        self.current_total.store(total_items.unwrap_or(0), Ordering::Relaxed);
        if let Ok(mut current) = self.current_stage.lock() {
            *current = stage;
        }
        self.send(WorkerResult::Progress {
            stage,
            items_done: Some(0),
            items_total: total_items,
        });
    }

    fn advance(&self, items_done: usize) {
        let total = self.current_total.load(Ordering::Relaxed);
        self.send(WorkerResult::Progress {
            stage: self.stage(),
            items_done: Some(items_done),
            items_total: if total > 0 { Some(total) } else { None },
        });
    }
}
