/// Default margin in pixels between cells and around the outer border.
pub const DEFAULT_SPACING: u32 = 5;

/// File name the composed image is saved under when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "saved_image.jpg";

/// Fill color for the canvas and for empty cells of a ragged last row.
pub const BACKGROUND_RGB: [u8; 3] = [0, 0, 0];
