use std::collections::BTreeSet;

use serde_json::json;

use super::*;

fn gradient() -> Frame {
    Frame::from_fn(64, 8, |x, y| [(x * 4) as u8, (y * 30) as u8, 255 - (x * 4) as u8, 200]).unwrap()
}

#[test]
fn level_count_follows_intensity() {
    assert_eq!(levels_for(0.0), 256);
    assert_eq!(levels_for(0.5), 128);
    assert_eq!(levels_for(1.0), 2);
    assert_eq!(levels_for(0.999), 2);
}

#[test]
fn full_intensity_leaves_two_levels_per_channel() {
    let mut fx = Posterize::from_params(Params::new("posterize", &json!({})).unwrap()).unwrap();
    let out = fx.apply(&gradient(), 1.0, &TickCtx::default()).unwrap();
    for c in 0..3 {
        let values: BTreeSet<u8> = out.data.chunks_exact(4).map(|p| p[c]).collect();
        assert!(values.len() <= 2, "channel {c}: {values:?}");
        assert!(values.iter().all(|v| *v == 0 || *v == 255));
    }
    assert!(out.data.chunks_exact(4).all(|p| p[3] == 200));
}

#[test]
fn dither_modes_are_parsed() {
    for mode in ["ordered", "noise", "none"] {
        let fx = Posterize::from_params(Params::new("posterize", &json!({ "dither": mode })).unwrap());
        assert!(fx.is_ok());
    }
    let bad = Posterize::from_params(Params::new("posterize", &json!({"dither": "fs"})).unwrap());
    assert!(bad.is_err());
}

#[test]
fn undithered_mid_intensity_quantizes_onto_the_step_grid() {
    let mut fx =
        Posterize::from_params(Params::new("posterize", &json!({"dither": "none"})).unwrap()).unwrap();
    let out = fx.apply(&gradient(), 0.99, &TickCtx::default()).unwrap();
    // round(256 * 0.01) = 3 levels: 0, 127.5 -> 128, 255
    let values: BTreeSet<u8> = out.data.chunks_exact(4).map(|p| p[0]).collect();
    assert!(values.iter().all(|v| [0u8, 128, 255].contains(v)), "{values:?}");
}
