use super::ImageSource;
use crate::error::MatteError;
use anyhow::Result;
use image::{ImageError, ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

/// Reads a raster image from disk
///
/// The format is guessed from the file contents rather than the extension,
/// so a JPEG saved as `.png` still decodes.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn decode_error(&self, source: ImageError) -> MatteError {
        MatteError::Decode {
            path: self.path.clone(),
            source,
        }
    }
}

impl ImageSource for FileSource {
    fn load(&mut self) -> Result<RgbaImage> {
        tracing::info!("Loading {}", self.path.display());

        let reader = ImageReader::open(&self.path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| self.decode_error(ImageError::IoError(e)))?;

        let format = reader.format();
        let decoded = reader.decode().map_err(|e| self.decode_error(e))?;

        tracing::debug!(
            "Decoded {:?} image, color type {:?}",
            format,
            decoded.color()
        );

        // Palette, grayscale and 16-bit inputs all end up as RGBA8 here
        let rgba = decoded.to_rgba8();
        tracing::info!("Size: {}x{}", rgba.width(), rgba.height());

        Ok(rgba)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
