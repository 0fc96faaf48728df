use crate::deck::card::CardDescriptor;
use crate::foundation::core::Rgba8;
use crate::sigil::collaborators::CardDesigner;

/// Color triple used by every layer of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CardColors {
    /// Background gradient core, symbol strokes.
    pub primary: Rgba8,
    /// Gradient midpoint, imagery panel tint.
    pub secondary: Rgba8,
    /// Border, title, sigil, particles.
    pub accent: Rgba8,
}

impl CardColors {
    /// Triple used whenever the card or its deck cannot be resolved.
    pub const FALLBACK: CardColors = CardColors {
        primary: Rgba8::rgb(0x8B, 0x45, 0x13),
        secondary: Rgba8::rgb(0xDA, 0xA5, 0x20),
        accent: Rgba8::rgb(0x46, 0x82, 0xB4),
    };
}

impl Default for CardColors {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Resolve the card's colors through the designer, falling back when the card is absent or its
/// deck key is unknown.
pub fn resolve_colors(card: Option<&CardDescriptor>, designer: &dyn CardDesigner) -> CardColors {
    let Some(card) = card else {
        return CardColors::FALLBACK;
    };
    let Some(key) = card.deck_key() else {
        return CardColors::FALLBACK;
    };
    designer.colors_for(card, key.variant())
}

#[cfg(test)]
#[path = "../../tests/unit/deck/colors.rs"]
mod tests;
