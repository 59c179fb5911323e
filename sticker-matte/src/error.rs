use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while loading or saving a sticker image
///
/// A missing or unreadable input file is reported as `Decode` with an
/// `ImageError::IoError` source.
#[derive(Debug, Error)]
pub enum MatteError {
    #[error("Failed to decode image at {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode PNG to {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
