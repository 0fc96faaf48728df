use std::sync::Arc;

use crate::assets::decode::DecodedImage;
use crate::foundation::core::{BezPath, CARD_HEIGHT, CARD_WIDTH, Point, Rect, Rgba8};

/// Font slot a text op is set in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    /// Decorative face for titles and the back emblem, set bold.
    Display,
    /// Regular face for subtitles, keywords and the footer.
    Body,
    /// Italic face for the imagery description; falls back to `Body` with an italic slant.
    Italic,
}

/// Text styling for one line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font slot.
    pub role: FontRole,
    /// Size in logical pixels.
    pub size_px: f32,
}

impl TextStyle {
    /// Shorthand constructor.
    pub const fn new(role: FontRole, size_px: f32) -> Self {
        Self { role, size_px }
    }
}

/// Soft shadow drawn underneath an op, like a canvas `shadowBlur`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Shadow color.
    pub color: Rgba8,
    /// Blur extent in logical units.
    pub blur: f64,
}

/// Stroke parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in logical units.
    pub width: f64,
    /// Round caps and joins (miter/butt otherwise).
    pub round: bool,
}

impl StrokeStyle {
    /// Butt-capped, miter-joined stroke.
    pub const fn plain(width: f64) -> Self {
        Self {
            width,
            round: false,
        }
    }

    /// Round-capped, round-joined stroke.
    pub const fn round(width: f64) -> Self {
        Self { width, round: true }
    }
}

/// Fill paint.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Flat color.
    Solid(Rgba8),
    /// Radial gradient from `center` with inner radius 0.
    Radial {
        /// Gradient center.
        center: Point,
        /// Outer radius.
        radius: f64,
        /// `(offset, color)` stops in increasing offset order.
        stops: Vec<(f32, Rgba8)>,
    },
}

/// Backend-agnostic draw operation in logical card units.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle.
        rect: Rect,
        /// Paint.
        paint: Paint,
    },
    /// Stroke an axis-aligned rectangle.
    StrokeRect {
        /// Rectangle.
        rect: Rect,
        /// Stroke color.
        color: Rgba8,
        /// Stroke parameters.
        style: StrokeStyle,
        /// Optional shadow.
        glow: Option<Glow>,
    },
    /// Fill a closed path (non-zero winding).
    FillPath {
        /// Path.
        path: BezPath,
        /// Fill color.
        color: Rgba8,
    },
    /// Stroke a path.
    StrokePath {
        /// Path.
        path: BezPath,
        /// Stroke color.
        color: Rgba8,
        /// Stroke parameters.
        style: StrokeStyle,
        /// Optional shadow.
        glow: Option<Glow>,
    },
    /// One line of text, horizontally centered on `anchor.x` with its baseline at `anchor.y`.
    Text {
        /// Content.
        text: String,
        /// Font slot and size.
        style: TextStyle,
        /// Center/baseline anchor.
        anchor: Point,
        /// Fill color.
        color: Rgba8,
        /// Optional shadow.
        glow: Option<Glow>,
    },
    /// Decoded image stretched into `rect`.
    Image {
        /// Pixels.
        image: Arc<DecodedImage>,
        /// Destination rectangle.
        rect: Rect,
        /// Layer opacity.
        opacity: f32,
    },
}

impl DrawOp {
    /// Shadow attached to this op, if any.
    pub fn glow(&self) -> Option<Glow> {
        match self {
            Self::StrokeRect { glow, .. }
            | Self::StrokePath { glow, .. }
            | Self::Text { glow, .. } => *glow,
            Self::FillRect { .. } | Self::FillPath { .. } | Self::Image { .. } => None,
        }
    }
}

/// Ordered display list for one layer of a card (face, back or particle overlay).
///
/// Later ops occlude earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub struct CardScene {
    /// Logical width.
    pub width: f64,
    /// Logical height.
    pub height: f64,
    /// Draw operations in paint order.
    pub ops: Vec<DrawOp>,
}

impl Default for CardScene {
    fn default() -> Self {
        Self::new()
    }
}

impl CardScene {
    /// Empty 400x700 scene.
    pub fn new() -> Self {
        Self {
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            ops: Vec::new(),
        }
    }

    /// Append one op.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Append many ops.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = DrawOp>) {
        self.ops.extend(ops);
    }

    /// Text ops in paint order, for inspection.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
