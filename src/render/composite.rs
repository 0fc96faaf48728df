use crate::foundation::error::{TarotError, TarotResult};
use crate::foundation::math::mul_div255_u16;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of one pixel at `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u16(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }
    let inv = 255 - sa;

    let mut out = [0u8; 4];
    out[3] = sat_u8(sa + mul_div255_u16(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u16(u16::from(src[i]), op);
        let dc = mul_div255_u16(u16::from(dst[i]), inv);
        out[i] = sat_u8(sc + dc);
    }
    out
}

/// Source-over of a whole buffer.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> TarotResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(TarotError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Replace every pixel's color with `color` (premultiplied), scaling by the pixel's coverage.
///
/// Turns a rendered shape into its silhouette before blurring it into a glow.
pub fn tint_coverage_in_place(buf: &mut [u8], color: PremulRgba8) {
    for px in buf.chunks_exact_mut(4) {
        let cov = u16::from(px[3]);
        for (c, &v) in px.iter_mut().zip(color.iter()) {
            *c = sat_u8(mul_div255_u16(u16::from(v), cov));
        }
    }
}

/// Flatten premultiplied RGBA8 into opaque RGBA8 over a straight-alpha background.
pub fn flatten_over_opaque(dst: &mut [u8], src_premul: &[u8], bg: [u8; 3]) -> TarotResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(TarotError::encode(
            "flatten_over_opaque expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let inv = 255 - u16::from(s[3]);
        for i in 0..3 {
            d[i] = sat_u8(u16::from(s[i]) + mul_div255_u16(u16::from(bg[i]), inv));
        }
        d[3] = 255;
    }
    Ok(())
}

fn sat_u8(v: u16) -> u8 {
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
