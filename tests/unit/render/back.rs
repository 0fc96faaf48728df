use super::*;
use crate::deck::card::the_fool;
use crate::render::plan::Paint;

fn card(variant: &str) -> CardDescriptor {
    CardDescriptor::major(the_fool(), variant, "x", 0)
}

#[test]
fn gradient_starts_with_secondary() {
    let colors = CardColors::FALLBACK;
    let scene = render_back(&card("rider-waite"), colors);
    let DrawOp::FillRect {
        paint: Paint::Radial { stops, .. },
        ..
    } = &scene.ops[0]
    else {
        panic!("expected gradient first");
    };
    assert_eq!(stops[0].1, colors.secondary.with_alpha(0xE6));
    assert_eq!(stops[1].1, colors.primary.with_alpha(0x80));
    assert!(matches!(scene.ops[1], DrawOp::StrokeRect { .. }));
}

#[test]
fn each_deck_dispatches_its_motif() {
    let colors = CardColors::FALLBACK;
    // gradient, border, emblem fill, emblem stroke, caption
    let base = 5;
    for (variant, motif_ops) in [
        ("rider-waite", 18),
        ("marseilles", 20),
        ("thoth", 12),
        ("visconti", 16),
    ] {
        assert_eq!(
            render_back(&card(variant), colors).ops.len(),
            base + motif_ops,
            "{variant}"
        );
    }
}

#[test]
fn caption_is_tarot_and_comes_last() {
    let scene = render_back(&card("thoth"), CardColors::FALLBACK);
    assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["TAROT"]);
    assert!(matches!(scene.ops.last(), Some(DrawOp::Text { .. })));
}

#[test]
fn unknown_deck_draws_default_motif() {
    let colors = CardColors::FALLBACK;
    let default = render_back(&card("rider-waite"), colors);
    let unknown = render_back(&card("nowhere"), colors);
    assert_eq!(unknown.ops.len(), default.ops.len());
    assert_eq!(unknown, default);
}
