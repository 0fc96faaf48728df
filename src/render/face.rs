//! Face-up card composition.
//!
//! [`render_face`] is a pure function from card inputs to a [`CardScene`]; it never touches
//! pixels. Draw order matters: later ops occlude earlier ones.

use std::sync::Arc;

use crate::assets::decode::DecodedImage;
use crate::deck::card::CardDescriptor;
use crate::deck::colors::CardColors;
use crate::foundation::core::{
    BezPath, CARD_CENTER, CARD_HEIGHT, CARD_WIDTH, Point, Rect, Rgba8,
};
use crate::foundation::error::TarotResult;
use crate::geometry::shapes::{design_to_canvas, polyline, sigil_to_canvas};
use crate::render::plan::{CardScene, DrawOp, FontRole, Glow, Paint, StrokeStyle, TextStyle};
use crate::sigil::model::{CardDesign, NormalizedPath, SigilData};
use crate::text::layout::TextMeasure;
use crate::text::wrap::wrap;

/// Inset panel holding the face image and imagery tint.
pub const IMAGERY_RECT: Rect = Rect::new(40.0, 100.0, 360.0, 550.0);

/// Opacity of the face image inside [`IMAGERY_RECT`].
pub const FACE_IMAGE_OPACITY: f32 = 0.8;

const IMAGERY_WRAP_WIDTH: f64 = 340.0;
const LINE_STEP: f64 = 18.0;
const MAX_KEYWORDS: usize = 3;

const TITLE: TextStyle = TextStyle::new(FontRole::Display, 28.0);
const SUBTITLE: TextStyle = TextStyle::new(FontRole::Body, 18.0);
const IMAGERY: TextStyle = TextStyle::new(FontRole::Italic, 14.0);
const KEYWORD: TextStyle = TextStyle::new(FontRole::Body, 14.0);
const FOOTER: TextStyle = TextStyle::new(FontRole::Body, 12.0);

/// Everything a face pass reads.
#[derive(Clone, Debug)]
pub struct FaceInputs<'a> {
    /// Card being drawn.
    pub card: &'a CardDescriptor,
    /// Sigil strokes in unit space; absent sigils are simply not drawn.
    pub sigil: Option<&'a SigilData>,
    /// Resolved colors.
    pub colors: CardColors,
    /// Decorations in normalized full-card space.
    pub design: &'a CardDesign,
    /// Phrase printed under the imagery panel.
    pub imagery: &'a str,
    /// Face image, only when its decode already finished.
    pub face_image: Option<Arc<DecodedImage>>,
}

/// Compose the face of a card.
///
/// Fails only on malformed path data; missing optional fields are omitted.
#[tracing::instrument(skip_all, fields(card = %inputs.card.name))]
pub fn render_face(
    inputs: &FaceInputs<'_>,
    measure: &mut dyn TextMeasure,
) -> TarotResult<CardScene> {
    if let Some(sigil) = inputs.sigil {
        sigil.validate()?;
    }
    inputs.design.validate()?;

    let FaceInputs {
        card,
        colors,
        design,
        ..
    } = inputs;
    let accent = colors.accent;
    let mut scene = CardScene::new();

    scene.push(background_gradient(
        colors.primary.with_alpha(0xE6),
        colors.secondary.with_alpha(0x80),
        accent.with_alpha(0x20),
    ));

    if let Some(image) = &inputs.face_image {
        scene.push(DrawOp::Image {
            image: Arc::clone(image),
            rect: IMAGERY_RECT,
            opacity: FACE_IMAGE_OPACITY,
        });
    }

    scene.push(border(*colors));

    let background = accent.with_alpha(0x60);
    scene.extend(design.background.paths.iter().map(|path| DrawOp::StrokePath {
        path: design_path(path),
        color: background,
        style: StrokeStyle::plain(1.5),
        glow: None,
    }));

    scene.push(DrawOp::Text {
        text: card.name.to_uppercase(),
        style: TITLE,
        anchor: Point::new(200.0, 60.0),
        color: accent,
        glow: Some(Glow {
            color: accent.with_alpha(0x60),
            blur: 10.0,
        }),
    });
    scene.push(DrawOp::Text {
        text: card.subtitle(),
        style: SUBTITLE,
        anchor: Point::new(200.0, 90.0),
        color: accent,
        glow: None,
    });

    scene.push(DrawOp::FillRect {
        rect: IMAGERY_RECT,
        paint: Paint::Solid(colors.secondary.with_alpha(0x10)),
    });

    if let Some(sigil) = inputs.sigil {
        let glow = Glow {
            color: accent.with_alpha(0xCC),
            blur: 12.0,
        };
        scene.extend(sigil.paths.iter().map(|path| DrawOp::StrokePath {
            path: polyline(path.iter().copied().map(sigil_to_canvas)),
            color: accent,
            style: StrokeStyle::round(4.0),
            glow: Some(glow),
        }));
    }

    for set in &design.symbols {
        push_decoration(&mut scene, &set.paths, colors.primary);
    }
    for set in &design.corners {
        push_decoration(&mut scene, &set.paths, accent);
    }

    let soft = accent.with_alpha(0x80);
    let lines = wrap(inputs.imagery, IMAGERY_WRAP_WIDTH, |line| {
        measure.measure(line, IMAGERY)
    });
    scene.extend(text_column(lines, IMAGERY, 570.0, soft));

    let keywords = card
        .keyword_list()
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(str::to_uppercase);
    scene.extend(text_column(keywords, KEYWORD, 620.0, soft));

    let deck = card.deck();
    scene.push(DrawOp::Text {
        text: format!("{} ({})", deck.name, deck.year),
        style: FOOTER,
        anchor: Point::new(200.0, 690.0),
        color: accent.with_alpha(0x60),
        glow: None,
    });

    Ok(scene)
}

/// Full-card radial gradient shared by face and back, stops at 0, 0.5 and 1.
pub(crate) fn background_gradient(inner: Rgba8, middle: Rgba8, outer: Rgba8) -> DrawOp {
    DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT),
        paint: Paint::Radial {
            center: CARD_CENTER,
            radius: 400.0,
            stops: vec![(0.0, inner), (0.5, middle), (1.0, outer)],
        },
    }
}

/// Glowing 8-unit border inset 4 units from each edge.
pub(crate) fn border(colors: CardColors) -> DrawOp {
    DrawOp::StrokeRect {
        rect: Rect::new(4.0, 4.0, 396.0, 696.0),
        color: colors.accent,
        style: StrokeStyle::plain(8.0),
        glow: Some(Glow {
            color: colors.accent.with_alpha(0x80),
            blur: 15.0,
        }),
    }
}

fn design_path(path: &NormalizedPath) -> BezPath {
    polyline(path.iter().copied().map(design_to_canvas))
}

fn push_decoration(scene: &mut CardScene, paths: &[NormalizedPath], color: Rgba8) {
    for path in paths {
        let path = design_path(path);
        scene.push(DrawOp::StrokePath {
            path: path.clone(),
            color,
            style: StrokeStyle::plain(2.0),
            glow: None,
        });
        scene.push(DrawOp::FillPath {
            path,
            color: color.with_alpha(0x40),
        });
    }
}

fn text_column(
    lines: impl IntoIterator<Item = String>,
    style: TextStyle,
    top: f64,
    color: Rgba8,
) -> impl Iterator<Item = DrawOp> {
    lines.into_iter().enumerate().map(move |(i, text)| DrawOp::Text {
        text,
        style,
        anchor: Point::new(200.0, top + LINE_STEP * i as f64),
        color,
        glow: None,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/face.rs"]
mod tests;
