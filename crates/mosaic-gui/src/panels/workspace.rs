use crate::app::MosaicApp;
use crate::states::PreviewState;

/// Fraction of the central area given to the input preview.
const INPUT_PREVIEW_SHARE: f32 = 0.35;

pub fn show(ctx: &egui::Context, app: &mut MosaicApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_height();
        let input_height = (available * INPUT_PREVIEW_SHARE).max(80.0);

        preview_pane(ui, &app.input_preview, input_height, "Select a file to preview it");
        ui.add_space(4.0);
        actions_row(ui, app);
        ui.add_space(4.0);

        let output_height = ui.available_height().max(80.0);
        preview_pane(ui, &app.output_preview, output_height, "Combine to see the grid");
    });
}

fn actions_row(ui: &mut egui::Ui, app: &mut MosaicApp) {
    ui.horizontal(|ui| {
        let busy = app.ui_state.is_busy();
        if ui
            .add_enabled(!busy, egui::Button::new("Combine"))
            .clicked()
        {
            app.combine();
        }
        let can_save = app.ui_state.output.is_some() && !app.ui_state.saving;
        if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
            app.save();
        }

        ui.separator();

        let auto_cols = app.ui_state.effective_columns();
        let mut auto = app.ui_state.columns.is_none();
        if ui.checkbox(&mut auto, "Auto columns").changed() {
            app.ui_state.columns = if auto { None } else { Some(auto_cols) };
        }
        match app.ui_state.columns {
            Some(ref mut cols) => {
                ui.add(egui::DragValue::new(cols).range(1..=64).prefix("Columns: "));
            }
            None => {
                ui.weak(format!("Columns: {auto_cols}"));
            }
        }

        ui.separator();
        ui.add(
            egui::DragValue::new(&mut app.ui_state.spacing)
                .range(0..=200)
                .prefix("Spacing: ")
                .suffix(" px"),
        );
    });
}

/// Draw `preview` centered in a full-width region of `height`, scaled down
/// only if it does not fit.
fn preview_pane(ui: &mut egui::Ui, preview: &PreviewState, height: f32, placeholder: &str) {
    let size = egui::vec2(ui.available_width(), height);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(30));

    let Some(texture) = preview.texture.as_ref() else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            placeholder,
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(100),
        );
        return;
    };

    let tex_size = texture.size_vec2();
    let scale = (rect.width() / tex_size.x)
        .min(rect.height() / tex_size.y)
        .min(1.0);
    let img_rect = egui::Rect::from_center_size(rect.center(), tex_size * scale);
    painter.image(
        texture.id(),
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    if !preview.label.is_empty() {
        painter.text(
            rect.left_top() + egui::vec2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            &preview.label,
            egui::FontId::proportional(14.0),
            egui::Color32::from_white_alpha(200),
        );
    }
}
