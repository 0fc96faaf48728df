use crate::foundation::core::{CARD_HEIGHT, CARD_WIDTH, Point, Rect, Rgba8};
use crate::foundation::error::{TarotError, TarotResult};
use crate::render::plan::{CardScene, DrawOp, FontRole, Paint, StrokeStyle, TextStyle};

/// Headline of the placeholder drawn when a pass fails.
pub const PLACEHOLDER_TITLE: &str = "Cosmic Disruption";

const PANEL: Rgba8 = Rgba8::rgb(0x0F, 0x17, 0x2A).with_alpha(0x99);
const FRAME: Rgba8 = Rgba8::rgb(0xEF, 0x44, 0x44).with_alpha(0x4D);
const HEADLINE: Rgba8 = Rgba8::rgb(0xF8, 0x71, 0x71);
const BODY: Rgba8 = Rgba8::rgb(0xE5, 0xE7, 0xEB);
const DETAIL: Rgba8 = Rgba8::rgb(0x9C, 0xA3, 0xAF);

/// Run a render pass, substituting the placeholder scene if it fails.
///
/// The failure is logged in full; the scene only carries a short summary of its kind.
pub fn guarded(pass: impl FnOnce() -> TarotResult<CardScene>) -> CardScene {
    match pass() {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!(error = %e, "card render failed; drawing placeholder");
            placeholder_scene(short_message(&e))
        }
    }
}

/// One-line, user-facing summary of an error.
pub fn short_message(e: &TarotError) -> &'static str {
    match e {
        TarotError::Validation(_) => "The card's inputs were not understood.",
        TarotError::Render(_) => "The card's shapes could not be traced.",
        TarotError::Animation(_) => "The card's aura faltered.",
        TarotError::Encode(_) => "The card could not be captured.",
        TarotError::Other(_) => "Something unexpected stirred.",
    }
}

/// Visible stand-in for a card that failed to render.
pub fn placeholder_scene(message: &str) -> CardScene {
    let mut scene = CardScene::new();
    scene.push(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT),
        paint: Paint::Solid(PANEL),
    });
    scene.push(DrawOp::StrokeRect {
        rect: Rect::new(4.0, 4.0, CARD_WIDTH - 4.0, CARD_HEIGHT - 4.0),
        color: FRAME,
        style: StrokeStyle::plain(2.0),
        glow: None,
    });

    let lines = [
        (PLACEHOLDER_TITLE, TextStyle::new(FontRole::Display, 24.0), 320.0, HEADLINE),
        (
            "An error occurred while rendering the card.",
            TextStyle::new(FontRole::Body, 14.0),
            356.0,
            BODY,
        ),
        ("Please try again.", TextStyle::new(FontRole::Body, 14.0), 374.0, BODY),
        (message, TextStyle::new(FontRole::Body, 12.0), 400.0, DETAIL),
    ];
    scene.extend(lines.into_iter().map(|(text, style, y, color)| DrawOp::Text {
        text: text.to_owned(),
        style,
        anchor: Point::new(200.0, y),
        color,
        glow: None,
    }));
    scene
}

#[cfg(test)]
#[path = "../../tests/unit/render/guard.rs"]
mod tests;
