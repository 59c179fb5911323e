use super::ImageSink;
use crate::error::MatteError;
use anyhow::Result;
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes RGBA images as PNG, whatever extension the path carries
///
/// An existing file at the path is overwritten without confirmation.
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSink for PngFileSink {
    fn write_image(&mut self, image: &RgbaImage) -> Result<()> {
        let _span = tracing::debug_span!("encode_png").entered();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| MatteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        image
            .save_with_format(&self.path, ImageFormat::Png)
            .map_err(|source| MatteError::Encode {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!("Saved: {}", self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn sample() -> RgbaImage {
        RgbaImage::from_fn(4, 3, |x, y| {
            Rgba([x as u8 * 60, y as u8 * 80, 7, (x * y) as u8 * 20])
        })
    }

    #[test]
    fn round_trips_rgba_without_loss() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");
        let img = sample();

        PngFileSink::new(&path).write_image(&img).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(reloaded, img);
    }

    #[test]
    fn writes_png_even_with_other_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.jpg");

        PngFileSink::new(&path).write_image(&sample()).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");

        PngFileSink::new(&path).write_image(&sample()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");
        fs::write(&path, b"stale").unwrap();

        PngFileSink::new(&path).write_image(&sample()).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(reloaded, sample());
    }

    #[test]
    fn parent_that_is_a_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let path = blocker.join("out.png");

        let err = PngFileSink::new(&path).write_image(&sample()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatteError>(),
            Some(MatteError::CreateDir { .. })
        ));
    }
}
