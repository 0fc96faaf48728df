use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::config::FontsConfig;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{TarotError, TarotResult};
use crate::render::plan::{FontRole, TextStyle};

/// Advance used per character when no font is available, as a fraction of the font size.
const APPROX_ADVANCE_EM: f64 = 0.55;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layouts.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Measures the advance width of a single line.
pub trait TextMeasure {
    /// Width of `text` set in `style`, in logical units.
    fn measure(&mut self, text: &str, style: TextStyle) -> f64;
}

/// Font-free width estimate: a fixed advance per character.
pub fn approximate_width(text: &str, size_px: f32) -> f64 {
    text.chars().count() as f64 * f64::from(size_px) * APPROX_ADVANCE_EM
}

/// Measurer that never touches font data.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMeasure;

impl TextMeasure for ApproxMeasure {
    fn measure(&mut self, text: &str, style: TextStyle) -> f64 {
        approximate_width(text, style.size_px)
    }
}

/// Raw font bytes for each role.
///
/// Missing roles borrow from the others: italic and display fall back to body, body falls back to
/// display.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    display: Option<Arc<Vec<u8>>>,
    body: Option<Arc<Vec<u8>>>,
    italic: Option<Arc<Vec<u8>>>,
}

impl FontBook {
    /// Book with no fonts; text ops are measured approximately and not rasterized.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read every configured font file.
    pub fn load(cfg: &FontsConfig) -> TarotResult<Self> {
        Ok(Self {
            display: read_font(cfg.display.as_deref())?,
            body: read_font(cfg.body.as_deref())?,
            italic: read_font(cfg.italic.as_deref())?,
        })
    }

    /// Install bytes for one role.
    pub fn with_font(mut self, role: FontRole, bytes: Vec<u8>) -> Self {
        let slot = Some(Arc::new(bytes));
        match role {
            FontRole::Display => self.display = slot,
            FontRole::Body => self.body = slot,
            FontRole::Italic => self.italic = slot,
        }
        self
    }

    /// Bytes used to set `role`, after fallbacks.
    pub fn bytes(&self, role: FontRole) -> Option<&Arc<Vec<u8>>> {
        match role {
            FontRole::Display => self.display.as_ref().or(self.body.as_ref()),
            FontRole::Body => self.body.as_ref().or(self.display.as_ref()),
            FontRole::Italic => self.italic.as_ref().or(self.body.as_ref()),
        }
    }

    /// Whether any font is available.
    pub fn is_empty(&self) -> bool {
        self.display.is_none() && self.body.is_none() && self.italic.is_none()
    }
}

fn read_font(path: Option<&Path>) -> TarotResult<Option<Arc<Vec<u8>>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    Ok(Some(Arc::new(bytes)))
}

/// Stateful helper for shaping single lines with Parley.
///
/// Font families are registered lazily, once per role.
pub struct TextLayoutEngine {
    fonts: FontBook,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    families: HashMap<FontRole, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new(FontBook::empty())
    }
}

impl TextLayoutEngine {
    /// Engine over `fonts` with fresh Parley contexts.
    pub fn new(fonts: FontBook) -> Self {
        Self {
            fonts,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Fonts this engine shapes with.
    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    fn family_for(&mut self, role: FontRole) -> TarotResult<Option<String>> {
        if let Some(name) = self.families.get(&role) {
            return Ok(Some(name.clone()));
        }
        let Some(bytes) = self.fonts.bytes(role) else {
            return Ok(None);
        };

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.as_ref().clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TarotError::validation(format!("no font families registered for {role:?} font"))
        })?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TarotError::validation("registered font family has no name"))?
            .to_string();

        self.families.insert(role, name.clone());
        Ok(Some(name))
    }

    /// Shape one unbroken line. Returns `None` when no font is available for the role.
    pub fn layout_line(
        &mut self,
        text: &str,
        style: TextStyle,
        brush: TextBrushRgba8,
    ) -> TarotResult<Option<parley::Layout<TextBrushRgba8>>> {
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(TarotError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let Some(family_name) = self.family_for(style.role)? else {
            return Ok(None);
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        let (weight, slant) = role_attributes(style.role);
        builder.push_default(parley::style::StyleProperty::FontWeight(weight));
        builder.push_default(parley::style::StyleProperty::FontStyle(slant));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(Some(layout))
    }
}

/// Weight and slant requested for a role. Titles are set bold and imagery italic; a face file
/// lacking that variant is matched to its nearest weight or synthesized.
pub(crate) fn role_attributes(
    role: FontRole,
) -> (parley::style::FontWeight, parley::style::FontStyle) {
    use parley::style::{FontStyle, FontWeight};
    match role {
        FontRole::Display => (FontWeight::BOLD, FontStyle::Normal),
        FontRole::Body => (FontWeight::NORMAL, FontStyle::Normal),
        FontRole::Italic => (FontWeight::NORMAL, FontStyle::Italic),
    }
}

impl TextMeasure for TextLayoutEngine {
    fn measure(&mut self, text: &str, style: TextStyle) -> f64 {
        match self.layout_line(text, style, TextBrushRgba8::default()) {
            Ok(Some(layout)) => f64::from(layout.width()),
            Ok(None) => approximate_width(text, style.size_px),
            Err(e) => {
                tracing::warn!(error = %e, "text measurement fell back to estimate");
                approximate_width(text, style.size_px)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
