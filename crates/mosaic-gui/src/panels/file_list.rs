use crate::app::{display_name, MosaicApp};

pub fn show(ctx: &egui::Context, app: &mut MosaicApp) {
    egui::SidePanel::left("file_list")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.strong("Image Files");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("{}", app.ui_state.files.len()));
                });
            });
            ui.separator();

            if app.ui_state.files.is_empty() {
                ui.weak("File > Open... to add PNG images");
                return;
            }

            let mut clicked = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (i, path) in app.ui_state.files.iter().enumerate() {
                    let selected = app.ui_state.selected == Some(i);
                    let response = ui
                        .selectable_label(selected, display_name(path))
                        .on_hover_text(path.display().to_string());
                    if response.clicked() {
                        clicked = Some(i);
                    }
                }
            });

            if let Some(i) = clicked {
                app.preview_file(i);
            }
        });
}
