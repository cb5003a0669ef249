use serde_json::json;

use super::*;

#[test]
fn infrared_table_is_a_linear_ramp() {
    let t = Palette::Infrared.table(0.0);
    assert_eq!(t[0], [0, 255, 128]);
    assert_eq!(t[255], [255, 0, 128]);
    assert_eq!(t[100], [100, 155, 128]);
}

#[test]
fn only_cyberpunk_drifts_with_time() {
    assert_ne!(Palette::Cyberpunk.table(0.0), Palette::Cyberpunk.table(2.5));
    assert_eq!(Palette::Vaporwave.table(0.0), Palette::Vaporwave.table(2.5));
}

#[test]
fn full_intensity_replaces_color_by_luma() {
    let frame = Frame::filled(4, 4, [255, 255, 255, 77]).unwrap();
    let mut fx = Lut::from_params(Params::new("lut", &json!({"palette": "infrared"})).unwrap()).unwrap();
    let out = fx.apply(&frame, 1.0, &TickCtx::default()).unwrap();
    assert_eq!(out.pixel(2, 2), [255, 0, 128, 77]);
}

#[test]
fn unknown_palette_is_rejected() {
    let err = Lut::from_params(Params::new("lut", &json!({"palette": "sepia"})).unwrap()).unwrap_err();
    assert!(matches!(err, crate::foundation::error::FramefxError::InvalidConfig(_)));
}
