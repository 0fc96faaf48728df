use super::*;
use crate::render::plan::Glow;

fn rasterizer() -> CpuRasterizer {
    CpuRasterizer::new(RenderSettings::default(), FontBook::empty())
}

fn scene(ops: Vec<DrawOp>) -> CardScene {
    let mut s = CardScene::new();
    s.extend(ops);
    s
}

#[test]
fn empty_scene_is_transparent_card_sized() {
    let frame = rasterizer().rasterize(&CardScene::new()).unwrap();
    assert_eq!((frame.width, frame.height), (400, 700));
    assert!(frame.premultiplied);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn solid_rect_fills_its_pixels_only() {
    let frame = rasterizer()
        .rasterize(&scene(vec![DrawOp::FillRect {
            rect: Rect::new(10.0, 10.0, 20.0, 20.0),
            paint: Paint::Solid(Rgba8::rgb(255, 0, 0)),
        }]))
        .unwrap();
    assert_eq!(frame.pixel(15, 15), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(30, 30), Some([0, 0, 0, 0]));
}

#[test]
fn dpr_scales_raster() {
    let mut r = CpuRasterizer::new(
        RenderSettings {
            device_pixel_ratio: 0.5,
        },
        FontBook::empty(),
    );
    let frame = r
        .rasterize(&scene(vec![DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            paint: Paint::Solid(Rgba8::rgb(0, 0, 255)),
        }]))
        .unwrap();
    assert_eq!((frame.width, frame.height), (200, 350));
    assert_eq!(frame.pixel(25, 25), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(75, 75), Some([0, 0, 0, 0]));
}

#[test]
fn radial_gradient_runs_from_first_to_last_stop() {
    let frame = rasterizer()
        .rasterize(&scene(vec![DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 400.0, 700.0),
            paint: Paint::Radial {
                center: Point::new(200.0, 350.0),
                radius: 400.0,
                stops: vec![
                    (0.0, Rgba8::rgb(255, 0, 0)),
                    (1.0, Rgba8::rgb(0, 0, 255)),
                ],
            },
        }]))
        .unwrap();
    let c = frame.pixel(200, 350).unwrap();
    assert!(c[0] > 250 && c[2] < 5, "center {c:?}");
    let corner = frame.pixel(0, 0).unwrap();
    assert!(corner[2] > corner[0], "corner {corner:?}");
    assert_eq!(corner[3], 255);
}

#[test]
fn glow_spills_outside_the_shape() {
    let rect = Rect::new(100.0, 100.0, 300.0, 300.0);
    let plain = DrawOp::StrokeRect {
        rect,
        color: Rgba8::rgb(255, 255, 255),
        style: StrokeStyle::plain(2.0),
        glow: None,
    };
    let glowing = DrawOp::StrokeRect {
        rect,
        color: Rgba8::rgb(255, 255, 255),
        style: StrokeStyle::plain(2.0),
        glow: Some(Glow {
            color: Rgba8::rgb(0, 255, 0),
            blur: 15.0,
        }),
    };
    let a = rasterizer().rasterize(&scene(vec![plain])).unwrap();
    let b = rasterizer().rasterize(&scene(vec![glowing])).unwrap();
    assert_eq!(a.pixel(100, 106), Some([0, 0, 0, 0]));
    let halo = b.pixel(100, 106).unwrap();
    assert!(halo[1] > 0 && halo[3] > 0, "halo {halo:?}");
}

#[test]
fn text_without_fonts_is_skipped() {
    let frame = rasterizer()
        .rasterize(&scene(vec![DrawOp::Text {
            text: "THE FOOL".into(),
            style: TextStyle::new(FontRole::Display, 28.0),
            anchor: Point::new(200.0, 60.0),
            color: Rgba8::rgb(255, 255, 255),
            glow: None,
        }]))
        .unwrap();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn image_is_stretched_into_rect_at_opacity() {
    let image = Arc::new(DecodedImage {
        width: 1,
        height: 1,
        rgba8_premul: vec![0, 255, 0, 255],
    });
    let frame = rasterizer()
        .rasterize(&scene(vec![DrawOp::Image {
            image,
            rect: Rect::new(40.0, 100.0, 360.0, 550.0),
            opacity: 0.8,
        }]))
        .unwrap();
    let px = frame.pixel(200, 300).unwrap();
    assert!((i32::from(px[3]) - 204).abs() <= 2, "{px:?}");
    assert_eq!(frame.pixel(20, 20), Some([0, 0, 0, 0]));
}

#[test]
fn sample_stops_clamps_and_interpolates() {
    let stops = [(0.0, Rgba8::rgb(0, 0, 0)), (1.0, Rgba8::rgb(200, 100, 0))];
    assert_eq!(sample_stops(&stops, 0.0), [0, 0, 0, 255]);
    assert_eq!(sample_stops(&stops, 1.0), [200, 100, 0, 255]);
    assert_eq!(sample_stops(&stops, 0.5), [100, 50, 0, 255]);
}
