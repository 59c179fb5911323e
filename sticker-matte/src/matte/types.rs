use image::RgbaImage;

/// Pixel counts from a single matte pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatteStats {
    /// Pixels visited
    pub total: usize,
    /// Pixels classified as background and made transparent
    pub cleared: usize,
}

impl MatteStats {
    /// Fraction of the image that was cleared, 0.0 for an empty image
    pub fn cleared_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.cleared as f64 / self.total as f64
        }
    }
}

/// Trait for background matte filters
///
/// Implementations consume the owned buffer and hand back one of identical
/// dimensions where only alpha values may differ.
pub trait MatteFilter {
    /// Classify every pixel and zero the alpha of background pixels
    fn apply(&self, image: RgbaImage) -> (RgbaImage, MatteStats);
}
