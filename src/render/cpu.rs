use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape;

use crate::assets::decode::DecodedImage;
use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
use crate::foundation::error::{TarotError, TarotResult};
use crate::render::backend::{FrameRGBA, RenderSettings};
use crate::render::blur::{blur_rgba8_premul, glow_kernel};
use crate::render::composite::{over_in_place, tint_coverage_in_place};
use crate::render::plan::{CardScene, DrawOp, FontRole, Glow, Paint, StrokeStyle, TextStyle};
use crate::text::layout::{FontBook, TextBrushRgba8, TextLayoutEngine, TextMeasure};

/// Executes [`CardScene`]s with `vello_cpu`.
///
/// Ops are drawn in order into layers; an op carrying a [`Glow`] splits the layer so its blurred
/// silhouette can be composited underneath it first.
pub struct CpuRasterizer {
    settings: RenderSettings,
    text: TextLayoutEngine,
    font_cache: HashMap<FontRole, vello_cpu::peniko::FontData>,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
    warned_missing_font: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    center: [u64; 2],
    radius: u64,
    stops: Vec<(u32, Rgba8)>,
    width: u16,
    height: u16,
}

impl CpuRasterizer {
    /// Rasterizer with its own text engine over `fonts`.
    pub fn new(settings: RenderSettings, fonts: FontBook) -> Self {
        Self {
            settings,
            text: TextLayoutEngine::new(fonts),
            font_cache: HashMap::new(),
            gradient_cache: HashMap::new(),
            warned_missing_font: false,
        }
    }

    /// Active settings.
    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    /// Rasterize `scene` into a premultiplied frame.
    #[tracing::instrument(skip(self, scene), fields(ops = scene.ops.len()))]
    pub fn rasterize(&mut self, scene: &CardScene) -> TarotResult<FrameRGBA> {
        let (w, h) = self.settings.pixel_size()?;
        let mut acc = vec![0u8; usize::from(w) * usize::from(h) * 4];

        let mut start = 0;
        for (i, op) in scene.ops.iter().enumerate() {
            let Some(glow) = op.glow() else {
                continue;
            };
            self.composite_layer(&mut acc, &scene.ops[start..i], w, h)?;
            self.composite_glow(&mut acc, op, glow, w, h)?;
            start = i;
        }
        self.composite_layer(&mut acc, &scene.ops[start..], w, h)?;

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data: acc,
            premultiplied: true,
        })
    }

    fn composite_layer(
        &mut self,
        acc: &mut [u8],
        ops: &[DrawOp],
        w: u16,
        h: u16,
    ) -> TarotResult<()> {
        if ops.is_empty() {
            return Ok(());
        }
        let pixmap = self.render_layer(ops, w, h)?;
        over_in_place(acc, pixmap.data_as_u8_slice(), 1.0)
    }

    fn composite_glow(
        &mut self,
        acc: &mut [u8],
        op: &DrawOp,
        glow: Glow,
        w: u16,
        h: u16,
    ) -> TarotResult<()> {
        let pixmap = self.render_layer(std::slice::from_ref(op), w, h)?;
        let mut silhouette = pixmap.data_as_u8_slice().to_vec();
        let p = glow.color.to_premul();
        tint_coverage_in_place(&mut silhouette, [p.r, p.g, p.b, p.a]);

        let (radius, sigma) = glow_kernel(glow.blur, self.settings.device_pixel_ratio);
        let blurred = blur_rgba8_premul(&silhouette, u32::from(w), u32::from(h), radius, sigma)?;
        over_in_place(acc, &blurred, 1.0)
    }

    fn render_layer(&mut self, ops: &[DrawOp], w: u16, h: u16) -> TarotResult<vello_cpu::Pixmap> {
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        for op in ops {
            self.draw_op(&mut ctx, op, w, h)?;
        }
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        Ok(pixmap)
    }

    fn draw_op(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        op: &DrawOp,
        w: u16,
        h: u16,
    ) -> TarotResult<()> {
        let base = Affine::scale(self.settings.device_pixel_ratio);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillRect {
                rect,
                paint: Paint::Solid(color),
            } => {
                ctx.set_transform(affine_to_cpu(base));
                ctx.set_paint(color_to_cpu(*color));
                ctx.fill_rect(&rect_to_cpu(*rect));
            }
            DrawOp::FillRect {
                rect,
                paint:
                    Paint::Radial {
                        center,
                        radius,
                        stops,
                    },
            } => {
                let image = self.radial_paint(*center, *radius, stops, w, h)?;
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(image);
                ctx.fill_rect(&rect_to_cpu(base.transform_rect_bbox(*rect)));
            }
            DrawOp::StrokeRect {
                rect, color, style, ..
            } => {
                ctx.set_transform(affine_to_cpu(base));
                ctx.set_paint(color_to_cpu(*color));
                ctx.set_stroke(stroke_to_cpu(*style));
                ctx.stroke_path(&bezpath_to_cpu(&rect.to_path(0.1)));
            }
            DrawOp::FillPath { path, color } => {
                ctx.set_transform(affine_to_cpu(base));
                ctx.set_paint(color_to_cpu(*color));
                ctx.fill_path(&bezpath_to_cpu(path));
            }
            DrawOp::StrokePath {
                path, color, style, ..
            } => {
                ctx.set_transform(affine_to_cpu(base));
                ctx.set_paint(color_to_cpu(*color));
                ctx.set_stroke(stroke_to_cpu(*style));
                ctx.stroke_path(&bezpath_to_cpu(path));
            }
            DrawOp::Text {
                text,
                style,
                anchor,
                color,
                ..
            } => self.draw_text(ctx, base, text, *style, *anchor, *color)?,
            DrawOp::Image {
                image,
                rect,
                opacity,
            } => draw_image(ctx, base, image, *rect, *opacity)?,
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        base: Affine,
        text: &str,
        style: TextStyle,
        anchor: Point,
        color: Rgba8,
    ) -> TarotResult<()> {
        let layout = self
            .text
            .layout_line(text, style, TextBrushRgba8::from(color))?;
        let (Some(layout), Some(font)) = (layout, self.font_for(style.role)) else {
            if !self.warned_missing_font {
                tracing::warn!("no font configured; card text is not rasterized");
                self.warned_missing_font = true;
            }
            return Ok(());
        };

        let width = f64::from(layout.width());
        let baseline = layout
            .lines()
            .next()
            .map(|line| f64::from(line.metrics().baseline))
            .unwrap_or(0.0);
        let origin = base * Affine::translate((anchor.x - width / 2.0, anchor.y - baseline));
        ctx.set_transform(affine_to_cpu(origin));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn font_for(&mut self, role: FontRole) -> Option<vello_cpu::peniko::FontData> {
        if let Some(font) = self.font_cache.get(&role) {
            return Some(font.clone());
        }
        let bytes = self.text.fonts().bytes(role)?.as_ref().clone();
        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        self.font_cache.insert(role, font.clone());
        Some(font)
    }

    fn radial_paint(
        &mut self,
        center: Point,
        radius: f64,
        stops: &[(f32, Rgba8)],
        w: u16,
        h: u16,
    ) -> TarotResult<vello_cpu::Image> {
        let key = GradientKey {
            center: [center.x.to_bits(), center.y.to_bits()],
            radius: radius.to_bits(),
            stops: stops.iter().map(|(o, c)| (o.to_bits(), *c)).collect(),
            width: w,
            height: h,
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }
        if stops.is_empty() || !radius.is_finite() || radius <= 0.0 {
            return Err(TarotError::render(
                "radial gradient needs stops and a positive radius",
            ));
        }

        let dpr = self.settings.device_pixel_ratio;
        let mut bytes = Vec::with_capacity(usize::from(w) * usize::from(h) * 4);
        for y in 0..h {
            for x in 0..w {
                let p = Point::new(
                    (f64::from(x) + 0.5) / dpr,
                    (f64::from(y) + 0.5) / dpr,
                );
                let t = (p.distance(center) / radius).clamp(0.0, 1.0) as f32;
                bytes.extend_from_slice(&sample_stops(stops, t));
            }
        }

        let pixmap = image_premul_bytes_to_pixmap(&bytes, u32::from(w), u32::from(h))?;
        let img = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }
}

impl TextMeasure for CpuRasterizer {
    fn measure(&mut self, text: &str, style: TextStyle) -> f64 {
        self.text.measure(text, style)
    }
}

/// Premultiplied color at `t` along sorted gradient `stops`, interpolating straight channels.
fn sample_stops(stops: &[(f32, Rgba8)], t: f32) -> [u8; 4] {
    let pick = match stops.iter().position(|(o, _)| *o >= t) {
        Some(0) => stops[0].1,
        None => stops[stops.len() - 1].1,
        Some(i) => {
            let (o0, c0) = stops[i - 1];
            let (o1, c1) = stops[i];
            let span = o1 - o0;
            let f = if span <= f32::EPSILON {
                1.0
            } else {
                (t - o0) / span
            };
            let lerp = |a: u8, b: u8| -> u8 {
                let (af, bf) = (f32::from(a), f32::from(b));
                (af + (bf - af) * f).round().clamp(0.0, 255.0) as u8
            };
            Rgba8 {
                r: lerp(c0.r, c1.r),
                g: lerp(c0.g, c1.g),
                b: lerp(c0.b, c1.b),
                a: lerp(c0.a, c1.a),
            }
        }
    };
    let p = pick.to_premul();
    [p.r, p.g, p.b, p.a]
}

fn draw_image(
    ctx: &mut vello_cpu::RenderContext,
    base: Affine,
    image: &DecodedImage,
    rect: Rect,
    opacity: f32,
) -> TarotResult<()> {
    if image.width == 0 || image.height == 0 || opacity <= 0.0 {
        return Ok(());
    }
    let pixmap = image_premul_bytes_to_pixmap(&image.rgba8_premul, image.width, image.height)?;
    let (iw, ih) = (f64::from(image.width), f64::from(image.height));
    let place = Affine::translate((rect.x0, rect.y0))
        * Affine::scale_non_uniform(rect.width() / iw, rect.height() / ih);

    ctx.set_transform(affine_to_cpu(base * place));
    ctx.set_paint(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    });
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
    }
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, iw, ih));
    if opacity < 1.0 {
        ctx.pop_layer();
    }
    Ok(())
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn stroke_to_cpu(style: StrokeStyle) -> vello_cpu::kurbo::Stroke {
    use vello_cpu::kurbo::{Cap, Join, Stroke};

    let (cap, join) = if style.round {
        (Cap::Round, Join::Round)
    } else {
        (Cap::Butt, Join::Miter)
    };
    Stroke::new(style.width).with_caps(cap).with_join(join)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> TarotResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| TarotError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| TarotError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(TarotError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
