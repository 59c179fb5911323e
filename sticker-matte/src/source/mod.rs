mod file_source;

pub use file_source::FileSource;

use anyhow::Result;
use image::RgbaImage;
use std::path::Path;

/// Trait for places a sticker image can be loaded from
pub trait ImageSource {
    /// Decode the image and normalize it to 8-bit RGBA
    fn load(&mut self) -> Result<RgbaImage>;

    /// Location the image is read from
    fn path(&self) -> &Path;
}
