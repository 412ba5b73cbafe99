use image::DynamicImage;

/// Convert a decoded raster to an egui ColorImage.
pub fn to_color_image(image: &DynamicImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    match image {
        DynamicImage::ImageRgb8(rgb) => egui::ColorImage::from_rgb(size, rgb.as_raw()),
        other => egui::ColorImage::from_rgba_unmultiplied(size, other.to_rgba8().as_raw()),
    }
}

/// Display copy of `image` that fits in a `max_side` square texture.
///
/// Returns `None` when the image already fits.
pub fn fit_to_texture(image: &DynamicImage, max_side: u32) -> Option<DynamicImage> {
    if image.width() <= max_side && image.height() <= max_side {
        return None;
    }
    Some(image.thumbnail(max_side, max_side))
}
