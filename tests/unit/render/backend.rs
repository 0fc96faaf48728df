use super::*;

#[test]
fn pixel_size_rounds_scaled_card() {
    assert_eq!(RenderSettings::default().pixel_size().unwrap(), (400, 700));
    let hi = RenderSettings {
        device_pixel_ratio: 1.5,
    };
    assert_eq!(hi.pixel_size().unwrap(), (600, 1050));
    let bad = RenderSettings {
        device_pixel_ratio: f64::NAN,
    };
    assert!(bad.pixel_size().is_err());
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = FrameRGBA::transparent(2, 2);
    assert_eq!(f.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(f.pixel(2, 0), None);
}
