mod preview;
mod ui;

pub use preview::PreviewState;
pub use ui::UIState;
