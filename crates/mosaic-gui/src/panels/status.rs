use crate::app::MosaicApp;

/// Visible log lines under the status row.
const LOG_LINES: usize = 3;

pub fn show(ctx: &egui::Context, app: &mut MosaicApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            summary(ui, app);
            ui.separator();
            progress(ui, app);
        });
        ui.separator();
        log(ui, app);
        ui.add_space(2.0);
    });
}

/// File count and, once combined, the grid and output size.
fn summary(ui: &mut egui::Ui, app: &MosaicApp) {
    let state = &app.ui_state;
    ui.label(format!("{} file(s)", state.files.len()));
    if let Some(layout) = state.output_layout {
        ui.label(format!(
            "{} x {} grid, {}x{} px",
            layout.cols, layout.rows, layout.total_width, layout.total_height
        ));
    }
    if state.saving {
        ui.spinner();
        ui.weak("Saving");
    }
}

fn progress(ui: &mut egui::Ui, app: &MosaicApp) {
    let state = &app.ui_state;
    let Some(stage) = state.running_stage else {
        ui.weak("Idle");
        return;
    };

    let bar = match (state.progress_items_done, state.progress_items_total) {
        (Some(done), Some(total)) if total > 0 => egui::ProgressBar::new(done as f32 / total as f32)
            .text(format!("{stage} {done}/{total}")),
        _ => egui::ProgressBar::new(0.0)
            .text(stage.to_string())
            .animate(true),
    };
    ui.add(bar.desired_width(ui.available_width()));
}

fn log(ui: &mut egui::Ui, app: &MosaicApp) {
    let row = ui.text_style_height(&egui::TextStyle::Monospace);
    let messages = &app.ui_state.log_messages;
    let error_color = ui.visuals().error_fg_color;
    egui::ScrollArea::vertical()
        .id_salt("status_log")
        .max_height(row * LOG_LINES as f32 + ui.spacing().item_spacing.y * (LOG_LINES - 1) as f32)
        .auto_shrink([false, true])
        .stick_to_bottom(true)
        .show_rows(ui, row, messages.len().max(LOG_LINES), |ui, range| {
            for i in range {
                match messages.get(i) {
                    Some(msg) if msg.starts_with("ERROR") => {
                        ui.colored_label(error_color, egui::RichText::new(msg).monospace());
                    }
                    Some(msg) => {
                        ui.monospace(msg);
                    }
                    None => {
                        ui.monospace("");
                    }
                }
            }
        });
}
