use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use mosaic_core::compose::compose_reported;
use tracing::warn;

use crate::messages::WorkerResult;
use crate::progress::ChannelProgressReporter;

use super::{send, send_compose_failed, send_log};

pub(super) fn handle_compose(
    paths: &[PathBuf],
    cols: u32,
    spacing: u32,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    send_log(
        tx,
        ctx,
        format!("Combining {} image(s) in {cols} column(s)", paths.len()),
    );

    let reporter = ChannelProgressReporter::new(tx.clone(), ctx.clone());
    match compose_reported(paths, cols, spacing, &reporter) {
        Ok(composed) => send(
            tx,
            ctx,
            WorkerResult::ComposeComplete {
                composed,
                elapsed: start.elapsed(),
            },
        ),
        Err(e) => {
            warn!("Compose failed: {e}");
            send_compose_failed(tx, ctx, format!("Combine failed: {e}"));
        }
    }
}
