use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;

use crate::assets::decode::unpremultiply_rgba8_in_place;
use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::{TarotError, TarotResult};
use crate::render::backend::FrameRGBA;

/// Encode a frame as a lossless PNG with straight alpha.
pub fn encode_png(frame: &FrameRGBA) -> TarotResult<Vec<u8>> {
    let mut rgba = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut rgba);
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .ok_or_else(|| TarotError::encode("frame data does not match width*height*4"))?;

    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

/// Encode and write a frame to `path`, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> TarotResult<()> {
    write_png_bytes(path, &encode_png(frame)?)
}

/// Write already-encoded PNG bytes to `path`, creating parent directories.
pub fn write_png_bytes(path: &Path, bytes: &[u8]) -> TarotResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Download name for an exported card: `tarot-{name}-{unix_ms}.png`.
///
/// The name is lowercased and each whitespace run becomes a single `-`.
pub fn suggested_file_name(card_name: &str, unix_ms: u64) -> String {
    let slug = card_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("tarot-{slug}-{unix_ms}.png")
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
