use super::*;
use crate::assets::decode::DecodedImage;
use crate::deck::card::the_fool;
use crate::deck::colors::resolve_colors;
use crate::forge::summon::SummonState;
use crate::foundation::core::Point;
use crate::render::backend::RenderSettings;
use crate::render::guard::PLACEHOLDER_TITLE;
use crate::sigil::collaborators::OrnamentDesigner;
use crate::text::layout::FontBook;

const CREATED: u64 = 1_000_000;

fn summoned(face_image: Option<FaceImage>) -> Summoned {
    let card = CardDescriptor::major(the_fool(), "rider-waite", "begin", CREATED);
    let sigil = SigilData::from_paths(
        vec![vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 1.0),
            Point::new(1.0, 0.0),
        ]],
        "test",
    );
    let colors = resolve_colors(Some(&card), &OrnamentDesigner);
    Summoned {
        card,
        sigil,
        colors,
        face_image,
        state: SummonState::Complete,
    }
}

fn view(face_image: Option<FaceImage>) -> CardView {
    let raster = CpuRasterizer::new(
        RenderSettings {
            device_pixel_ratio: 0.25,
        },
        FontBook::empty(),
    );
    CardView::new(summoned(face_image), &OrnamentDesigner, raster)
}

#[test]
fn export_is_none_before_first_render() {
    let v = view(None);
    assert!(v.needs_redraw());
    assert!(v.export_png().unwrap().is_none());
}

#[test]
fn export_after_render_is_a_png_of_raster_size() {
    let mut v = view(None);
    v.render().unwrap();
    assert!(!v.needs_redraw());
    let bytes = v.export_png().unwrap().unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (100, 175));
}

#[test]
fn export_is_none_while_flipped() {
    let mut v = view(None);
    v.render().unwrap();
    v.toggle_flip();
    assert!(v.export_png().unwrap().is_none());
}

#[test]
fn flipping_twice_restores_face_pixels() {
    let mut v = view(None);
    let face = v.render().unwrap().clone();
    assert!(v.toggle_flip());
    let back = v.render().unwrap().clone();
    assert_ne!(face, back);
    assert!(!v.toggle_flip());
    assert_eq!(v.render().unwrap(), &face);
    assert_eq!(v.card().name, "The Fool");
    assert!(v.sigil().is_some());
}

#[test]
fn face_scene_carries_title_and_footer() {
    let mut v = view(None);
    let scene = v.scene();
    let texts: Vec<_> = scene.texts().collect();
    assert_eq!(texts[0], "THE FOOL");
    assert_eq!(texts.last(), Some(&"Rider-Waite-Smith (1909)"));
}

#[test]
fn malformed_sigil_renders_placeholder() {
    let mut s = summoned(None);
    s.sigil.paths.push(vec![Point::new(f64::NAN, 0.5)]);
    let raster = CpuRasterizer::new(
        RenderSettings {
            device_pixel_ratio: 0.25,
        },
        FontBook::empty(),
    );
    let mut v = CardView::new(s, &OrnamentDesigner, raster);
    let scene = v.scene();
    assert_eq!(scene.texts().next(), Some(PLACEHOLDER_TITLE));
    assert!(v.render().is_ok());
}

#[test]
fn late_image_requests_redraw() {
    let img = FaceImage::ready(DecodedImage {
        width: 1,
        height: 1,
        rgba8_premul: vec![255, 255, 255, 255],
    });
    let mut v = view(Some(img));
    assert!(v.needs_redraw());
    v.render().unwrap();
    assert!(!v.needs_redraw());

    let pending = FaceImage::decode_in_background(b"not an image".to_vec());
    let mut v = view(Some(pending.clone()));
    v.render().unwrap();
    pending.wait(std::time::Duration::from_secs(5));
    assert!(!v.needs_redraw());
}

#[test]
fn headline_reveals_after_delay() {
    let mut v = view(None);
    assert_eq!(v.headline(CREATED + 10), "Revealing...");
    assert_eq!(v.headline(CREATED + REVEAL_DELAY_MS), "The Fool");
    v.toggle_flip();
    assert_eq!(v.headline(CREATED + REVEAL_DELAY_MS), "Card Back");
}

#[test]
fn file_name_uses_card_name() {
    assert_eq!(
        view(None).suggested_file_name(42),
        "tarot-the-fool-42.png"
    );
}
