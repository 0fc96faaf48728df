use super::*;
use crate::deck::card::{MAJOR_ARCANA, the_fool};
use crate::sigil::collaborators::OrnamentDesigner;

#[test]
fn missing_card_or_deck_yields_exact_fallback() {
    let designer = OrnamentDesigner;
    assert_eq!(resolve_colors(None, &designer), CardColors::FALLBACK);

    let card = CardDescriptor::major(the_fool(), "mystery-deck", "x", 0);
    assert_eq!(resolve_colors(Some(&card), &designer), CardColors::FALLBACK);
    assert_eq!(CardColors::FALLBACK.primary.to_string(), "#8B4513");
    assert_eq!(CardColors::FALLBACK.secondary.to_string(), "#DAA520");
    assert_eq!(CardColors::FALLBACK.accent.to_string(), "#4682B4");
}

#[test]
fn known_deck_colors_are_opaque_and_non_empty() {
    let designer = OrnamentDesigner;
    for key in ["rider-waite", "marseilles", "thoth", "visconti"] {
        let card = CardDescriptor::major(&MAJOR_ARCANA[3], key, "x", 0);
        let colors = resolve_colors(Some(&card), &designer);
        for c in [colors.primary, colors.secondary, colors.accent] {
            assert_eq!(c.a, 255);
        }
    }
}
