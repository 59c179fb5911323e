mod png_file;

pub use png_file::PngFileSink;

use anyhow::Result;
use image::RgbaImage;
use std::path::Path;

/// Trait for output destinations
pub trait ImageSink {
    /// Write the filtered image
    fn write_image(&mut self, image: &RgbaImage) -> Result<()>;

    /// Location the image is written to
    fn path(&self) -> &Path;
}
