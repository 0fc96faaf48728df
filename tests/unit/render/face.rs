use super::*;
use crate::deck::card::{Suit, the_fool};
use crate::foundation::core::Rgba8;
use crate::sigil::model::PathSet;
use crate::text::layout::ApproxMeasure;

fn fool() -> CardDescriptor {
    CardDescriptor::major(the_fool(), "rider-waite", "begin again", 0)
}

fn triangle_sigil() -> SigilData {
    SigilData::from_paths(
        vec![vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 1.0),
            Point::new(1.0, 0.0),
        ]],
        "test",
    )
}

fn inputs<'a>(
    card: &'a CardDescriptor,
    sigil: Option<&'a SigilData>,
    design: &'a CardDesign,
) -> FaceInputs<'a> {
    FaceInputs {
        card,
        sigil,
        colors: CardColors::FALLBACK,
        design,
        imagery: "The eternal child, divine madness, leap of faith",
        face_image: None,
    }
}

#[test]
fn texts_follow_documented_order() {
    let card = fool();
    let design = CardDesign::default();
    let scene = render_face(&inputs(&card, None, &design), &mut ApproxMeasure).unwrap();
    let texts: Vec<_> = scene.texts().collect();
    assert_eq!(texts[0], "THE FOOL");
    assert_eq!(texts[1], "Arcanum 0");
    assert_eq!(
        &texts[texts.len() - 4..],
        &[
            "NEW BEGINNINGS",
            "INNOCENCE",
            "SPONTANEITY",
            "Rider-Waite-Smith (1909)"
        ]
    );
}

#[test]
fn minor_subtitle_names_capitalized_suit() {
    let card = CardDescriptor::minor(Suit::Cups, "Queen", "thoth", "love", 0);
    let design = CardDesign::default();
    let scene = render_face(&inputs(&card, None, &design), &mut ApproxMeasure).unwrap();
    let texts: Vec<_> = scene.texts().collect();
    assert_eq!(texts[0], "QUEEN OF CUPS");
    assert_eq!(texts[1], "Queen of Cups");
    assert_eq!(*texts.last().unwrap(), "Thoth Tarot (1944)");
}

#[test]
fn unknown_deck_falls_back_to_default_footer() {
    let mut card = fool();
    card.variant = "tarot-of-nowhere".into();
    let design = CardDesign::default();
    let scene = render_face(&inputs(&card, None, &design), &mut ApproxMeasure).unwrap();
    assert_eq!(scene.texts().last(), Some("Rider-Waite-Smith (1909)"));
}

#[test]
fn imagery_wraps_to_340_and_stacks_every_18() {
    let card = fool();
    let design = CardDesign::default();
    let scene = render_face(&inputs(&card, None, &design), &mut ApproxMeasure).unwrap();
    let imagery: Vec<_> = scene
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text {
                text,
                style,
                anchor,
                ..
            } if style.role == FontRole::Italic => Some((text.clone(), anchor.y)),
            _ => None,
        })
        .collect();
    assert!(imagery.len() >= 2);
    for (i, (text, y)) in imagery.iter().enumerate() {
        assert_eq!(*y, 570.0 + 18.0 * i as f64);
        assert!(ApproxMeasure.measure(text, IMAGERY) <= 340.0);
    }
}

#[test]
fn sigil_is_mapped_into_the_250_square_with_glow() {
    let card = fool();
    let sigil = triangle_sigil();
    let design = CardDesign::default();
    let scene = render_face(&inputs(&card, Some(&sigil), &design), &mut ApproxMeasure).unwrap();
    let strokes: Vec<_> = scene
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::StrokePath {
                path,
                style,
                glow: Some(g),
                ..
            } if style.round => Some((path.clone(), *g)),
            _ => None,
        })
        .collect();
    assert_eq!(strokes.len(), 1);
    let (path, glow) = &strokes[0];
    assert_eq!(glow.blur, 12.0);
    let bbox = kurbo::Shape::bounding_box(path);
    assert_eq!((bbox.x0, bbox.y0, bbox.x1, bbox.y1), (75.0, 200.0, 325.0, 450.0));
}

#[test]
fn face_image_is_drawn_right_after_gradient_when_ready() {
    let card = fool();
    let design = CardDesign::default();
    let mut inp = inputs(&card, None, &design);
    inp.face_image = Some(Arc::new(DecodedImage {
        width: 1,
        height: 1,
        rgba8_premul: vec![1, 2, 3, 255],
    }));
    let scene = render_face(&inp, &mut ApproxMeasure).unwrap();
    assert!(matches!(scene.ops[0], DrawOp::FillRect { paint: Paint::Radial { .. }, .. }));
    assert!(matches!(
        scene.ops[1],
        DrawOp::Image { rect, opacity, .. } if rect == IMAGERY_RECT && opacity == 0.8
    ));
    assert!(matches!(scene.ops[2], DrawOp::StrokeRect { .. }));

    let without = render_face(&inputs(&card, None, &design), &mut ApproxMeasure).unwrap();
    assert!(!without.ops.iter().any(|op| matches!(op, DrawOp::Image { .. })));
}

#[test]
fn decorations_stroke_then_fill_in_their_colors() {
    let card = fool();
    let design = CardDesign {
        background: PathSet::default(),
        symbols: vec![PathSet {
            paths: vec![vec![Point::new(0.5, 0.5), Point::new(0.6, 0.6)]],
        }],
        corners: vec![PathSet {
            paths: vec![vec![Point::new(0.0, 0.0), Point::new(0.1, 0.0)]],
        }],
    };
    let scene = render_face(&inputs(&card, None, &design), &mut ApproxMeasure).unwrap();
    let colors = CardColors::FALLBACK;
    let deco: Vec<(bool, Rgba8)> = scene
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::StrokePath { color, style, .. } if style.width == 2.0 => Some((true, *color)),
            DrawOp::FillPath { color, .. } => Some((false, *color)),
            _ => None,
        })
        .collect();
    assert_eq!(
        deco,
        vec![
            (true, colors.primary),
            (false, colors.primary.with_alpha(0x40)),
            (true, colors.accent),
            (false, colors.accent.with_alpha(0x40)),
        ]
    );
}

#[test]
fn malformed_sigil_is_an_error() {
    let card = fool();
    let bad = SigilData::from_paths(vec![vec![Point::new(f64::INFINITY, 0.0)]], "x");
    let design = CardDesign::default();
    assert!(render_face(&inputs(&card, Some(&bad), &design), &mut ApproxMeasure).is_err());
}
