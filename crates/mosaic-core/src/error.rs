use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MosaicError {
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, MosaicError>;
