use crate::deck::card::CardDescriptor;
use crate::deck::colors::CardColors;
use crate::foundation::core::{CARD_CENTER, Point};
use crate::geometry::patterns::back_pattern_ops;
use crate::geometry::shapes::circle;
use crate::render::face::{background_gradient, border};
use crate::render::plan::{CardScene, DrawOp, FontRole, StrokeStyle, TextStyle};

const EMBLEM_RADIUS: f64 = 60.0;
const EMBLEM_CAPTION: &str = "TAROT";

/// Compose the face-down side.
///
/// The motif comes from the card's deck; unknown deck keys use the default deck's motif.
#[tracing::instrument(skip_all, fields(variant = %card.variant))]
pub fn render_back(card: &CardDescriptor, colors: CardColors) -> CardScene {
    let accent = colors.accent;
    let mut scene = CardScene::new();

    scene.push(background_gradient(
        colors.secondary.with_alpha(0xE6),
        colors.primary.with_alpha(0x80),
        accent.with_alpha(0x20),
    ));
    scene.push(border(colors));

    scene.extend(back_pattern_ops(Some(card.deck().back_pattern), accent));

    let emblem = circle(CARD_CENTER, EMBLEM_RADIUS);
    scene.push(DrawOp::FillPath {
        path: emblem.clone(),
        color: accent.with_alpha(0x40),
    });
    scene.push(DrawOp::StrokePath {
        path: emblem,
        color: accent,
        style: StrokeStyle::plain(3.0),
        glow: None,
    });
    scene.push(DrawOp::Text {
        text: EMBLEM_CAPTION.to_owned(),
        style: TextStyle::new(FontRole::Display, 24.0),
        anchor: Point::new(200.0, 360.0),
        color: accent,
        glow: None,
    });

    scene
}

#[cfg(test)]
#[path = "../../tests/unit/render/back.rs"]
mod tests;
