mod dark_background;
mod types;

pub use dark_background::DarkBackgroundMatte;
pub use types::{MatteFilter, MatteStats};

use crate::sink::ImageSink;
use crate::source::ImageSource;
use anyhow::{Context, Result};

/// Load, strip the dark background, and save
///
/// Any failure aborts the whole run; nothing is written unless decoding and
/// filtering both succeed.
pub fn remove_dark_background<S, F, O>(
    source: &mut S,
    filter: &F,
    sink: &mut O,
) -> Result<MatteStats>
where
    S: ImageSource,
    F: MatteFilter,
    O: ImageSink,
{
    let image = source
        .load()
        .with_context(|| format!("Failed to load sticker from {}", source.path().display()))?;

    let (image, stats) = filter.apply(image);
    tracing::info!(
        "Cleared {} of {} pixels ({:.1}%)",
        stats.cleared,
        stats.total,
        stats.cleared_ratio() * 100.0
    );

    sink.write_image(&image)
        .with_context(|| format!("Failed to write sticker to {}", sink.path().display()))?;

    Ok(stats)
}
