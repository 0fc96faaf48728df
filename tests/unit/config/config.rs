use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = ForgeConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ForgeConfig::default());
    assert_eq!(cfg.generation_delay_ms, 1500);
    assert_eq!(cfg.fps, Fps { num: 60, den: 1 });
}

#[test]
fn partial_document_overrides_fields() {
    let cfg = ForgeConfig::from_json_str(
        r#"{"device_pixel_ratio": 2.0, "fonts": {"body": "fonts/body.ttf"}, "seed": 7}"#,
    )
    .unwrap();
    assert_eq!(cfg.device_pixel_ratio, 2.0);
    assert_eq!(cfg.fonts.body.as_deref(), Some(Path::new("fonts/body.ttf")));
    assert_eq!(cfg.seed, Some(7));
}

#[test]
fn rejects_bad_values_and_unknown_fields() {
    assert!(ForgeConfig::from_json_str(r#"{"device_pixel_ratio": 0}"#).is_err());
    assert!(ForgeConfig::from_json_str(r#"{"fps": {"num": 0, "den": 1}}"#).is_err());
    assert!(ForgeConfig::from_json_str(r#"{"colour": "red"}"#).is_err());
}

#[test]
fn dpr_override_parses_and_validates() {
    let cfg = ForgeConfig::default().with_dpr_override(Some("1.5")).unwrap();
    assert_eq!(cfg.device_pixel_ratio, 1.5);
    assert!(ForgeConfig::default().with_dpr_override(Some("-1")).is_err());
    assert!(ForgeConfig::default().with_dpr_override(Some("wide")).is_err());
    let untouched = ForgeConfig::default().with_dpr_override(None).unwrap();
    assert_eq!(untouched.device_pixel_ratio, 1.0);
}
