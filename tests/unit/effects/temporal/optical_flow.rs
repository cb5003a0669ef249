use std::f32::consts::TAU;

use serde_json::json;

use super::*;

fn wave(width: u32, height: u32, shift: f32) -> Vec<f32> {
    let mut out = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let fx = x as f32 - shift;
            out.push(128.0 + 60.0 * (TAU * fx / 32.0).sin() + 40.0 * (TAU * y as f32 / 24.0).cos());
        }
    }
    out
}

#[test]
fn rightward_motion_is_estimated_as_positive_x() {
    let prev = wave(64, 48, 0.0);
    let cur = wave(64, 48, 1.0);
    let field = FlowField::estimate(&prev, &cur, 64, 48, 16);
    assert_eq!((field.cols, field.rows), (4, 3));
    let v = field.vectors[field.cols as usize + 1];
    assert!((v.x - 1.0).abs() < 0.3, "{v:?}");
    assert!(v.y.abs() < 0.3, "{v:?}");
}

#[test]
fn static_scenes_have_no_flow() {
    let plane = wave(32, 32, 0.0);
    let field = FlowField::estimate(&plane, &plane, 32, 32, 8);
    assert!(field.vectors.iter().all(|v| v.hypot() < 1e-9));
}

#[test]
fn flat_blocks_are_zero_instead_of_unstable() {
    let flat = vec![100.0f32; 16 * 16];
    let brighter = vec![120.0f32; 16 * 16];
    let field = FlowField::estimate(&flat, &brighter, 16, 16, 8);
    assert!(field.vectors.iter().all(|v| *v == Vec2::ZERO));
}

#[test]
fn field_sampling_interpolates_between_block_centers() {
    let field = FlowField {
        block: 10,
        cols: 2,
        rows: 1,
        vectors: vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)],
    };
    assert_eq!(field.sample(5.0, 5.0), Vec2::new(0.0, 0.0));
    assert_eq!(field.sample(15.0, 5.0), Vec2::new(4.0, 0.0));
    assert_eq!(field.sample(10.0, 5.0), Vec2::new(2.0, 0.0));
    assert_eq!(field.sample(100.0, 100.0), Vec2::new(4.0, 0.0));
}

#[test]
fn first_call_and_zero_intensity_pass_through() {
    let ctx = TickCtx::default();
    let mut fx = OpticalFlow::from_params(Params::new("optical_flow", &json!({})).unwrap()).unwrap();
    let a = Frame::from_fn(32, 32, |x, _| [(x * 8) as u8, 0, 0, 255]).unwrap();
    let b = Frame::from_fn(32, 32, |x, _| [(x * 8 + 8) as u8, 0, 0, 255]).unwrap();
    assert_eq!(fx.apply(&a, 1.0, &ctx).unwrap(), a);
    assert_eq!(fx.apply(&b, 0.0, &ctx).unwrap(), b);
    assert_eq!(fx.apply(&a, 1.0, &ctx).unwrap().width, 32);
}
