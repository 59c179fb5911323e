use super::types::{MatteFilter, MatteStats};
use image::RgbaImage;
use rayon::prelude::*;

/// Luminance must be strictly below this for a pixel to count as background
const LUMINANCE_THRESHOLD: f64 = 95.0;
/// Red must be strictly below this
const RED_THRESHOLD: u8 = 100;
/// Green must be strictly below this
const GREEN_THRESHOLD: u8 = 100;

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Perceptual brightness with BT.601 weights, on the 0-255 scale
#[inline]
fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Whether a color belongs to the dark navy/black sticker background
///
/// Red and green are gated as well as luminance so the match leans toward
/// navy rather than any dark color. Near-black subject pixels still match.
#[inline]
fn is_background(r: u8, g: u8, b: u8) -> bool {
    luminance(r, g, b) < LUMINANCE_THRESHOLD && r < RED_THRESHOLD && g < GREEN_THRESHOLD
}

/// Background keeps its color but loses alpha; returns true when cleared
#[inline]
fn matte_in_place(pixel: &mut [u8]) -> bool {
    let cleared = is_background(pixel[0], pixel[1], pixel[2]);
    if cleared {
        pixel[3] = 0;
    }
    cleared
}

/// Removes the dark navy background behind the compass sticker
///
/// Every pixel is classified on its own from RGB only; existing alpha is
/// never consulted, which makes the pass idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DarkBackgroundMatte;

impl DarkBackgroundMatte {
    pub fn new() -> Self {
        Self
    }
}

impl MatteFilter for DarkBackgroundMatte {
    fn apply(&self, mut image: RgbaImage) -> (RgbaImage, MatteStats) {
        let (width, height) = image.dimensions();
        let total = width as usize * height as usize;
        let parallel = total >= PARALLEL_PIXEL_THRESHOLD;

        let _span =
            tracing::debug_span!("dark_background_matte", width, height, parallel).entered();

        let raw: &mut [u8] = &mut image;
        let cleared = if parallel {
            raw.par_chunks_exact_mut(4)
                .map(matte_in_place)
                .filter(|&cleared| cleared)
                .count()
        } else {
            raw.chunks_exact_mut(4)
                .map(matte_in_place)
                .filter(|&cleared| cleared)
                .count()
        };

        tracing::debug!("Cleared {} of {} pixels", cleared, total);

        (image, MatteStats { total, cleared })
    }
}
