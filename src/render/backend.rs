use crate::foundation::core::{CARD_HEIGHT, CARD_WIDTH};
use crate::foundation::error::{TarotError, TarotResult};

/// A rendered frame in RGBA8 format.
///
/// Frames are **premultiplied alpha** by default; the flag makes this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent frame.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
            premultiplied: true,
        }
    }

    /// Pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Raster settings shared by every pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Pixels per logical unit.
    pub device_pixel_ratio: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
        }
    }
}

impl RenderSettings {
    /// Pixel size of the 400x700 card at this ratio.
    pub fn pixel_size(&self) -> TarotResult<(u16, u16)> {
        let dpr = self.device_pixel_ratio;
        if !dpr.is_finite() || dpr <= 0.0 {
            return Err(TarotError::validation(
                "device_pixel_ratio must be finite and > 0",
            ));
        }
        let to_px = |logical: f64, what: &str| -> TarotResult<u16> {
            let px = (logical * dpr).round();
            if px < 1.0 || px > f64::from(u16::MAX) {
                return Err(TarotError::validation(format!(
                    "card {what} of {px} pixels is out of range"
                )));
            }
            Ok(px as u16)
        };
        Ok((to_px(CARD_WIDTH, "width")?, to_px(CARD_HEIGHT, "height")?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
