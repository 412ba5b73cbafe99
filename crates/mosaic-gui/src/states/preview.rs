use image::DynamicImage;
use tracing::debug;

use crate::convert::{fit_to_texture, to_color_image};

/// One preview pane: the uploaded texture and what it shows.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
    pub label: String,
}

impl PreviewState {
    /// Upload `image` for display. Rasters larger than the renderer's
    /// texture limit are shown downscaled; `image` itself is left untouched.
    pub fn set(&mut self, ctx: &egui::Context, name: &str, image: &DynamicImage, label: String) {
        let max_side = u32::try_from(ctx.input(|i| i.max_texture_side)).unwrap_or(u32::MAX);
        let color_image = match fit_to_texture(image, max_side) {
            Some(scaled) => {
                debug!(
                    "Preview {name}: {}x{} scaled to {}x{} (max texture side {max_side})",
                    image.width(),
                    image.height(),
                    scaled.width(),
                    scaled.height()
                );
                to_color_image(&scaled)
            }
            None => to_color_image(image),
        };
        self.texture = Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR));
        self.label = label;
    }
}
