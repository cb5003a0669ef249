use serde_json::json;

use super::*;

fn feedback(decay: f32) -> Feedback {
    Feedback::from_params(Params::new("feedback", &json!({ "decay": decay })).unwrap()).unwrap()
}

#[test]
fn decay_must_be_strictly_inside_the_unit_interval() {
    for bad in [0.0, 1.0, 1.5, -0.2] {
        let r = Feedback::from_params(Params::new("feedback", &json!({ "decay": bad })).unwrap());
        assert!(r.is_err(), "{bad}");
    }
}

#[test]
fn first_call_passes_through_and_trails_follow() {
    let ctx = TickCtx::default();
    let white = Frame::filled(4, 4, [255, 255, 255, 255]).unwrap();
    let black = Frame::filled(4, 4, [0, 0, 0, 255]).unwrap();
    let mut fx = feedback(0.5);
    assert_eq!(fx.apply(&white, 1.0, &ctx).unwrap(), white);
    // k = 0.5: half of the previous white survives.
    let out = fx.apply(&black, 1.0, &ctx).unwrap();
    assert_eq!(out.pixel(1, 1), [128, 128, 128, 255]);
    let out = fx.apply(&black, 1.0, &ctx).unwrap();
    assert_eq!(out.pixel(1, 1), [64, 64, 64, 255]);
}

#[test]
fn constant_input_converges_to_itself() {
    let ctx = TickCtx::default();
    let start = Frame::filled(8, 8, [0, 0, 0, 255]).unwrap();
    let target = Frame::filled(8, 8, [180, 90, 30, 255]).unwrap();
    let mut fx = feedback(0.95);
    fx.apply(&start, 1.0, &ctx).unwrap();
    let mut out = start.clone();
    for _ in 0..400 {
        out = fx.apply(&target, 1.0, &ctx).unwrap();
    }
    assert_eq!(out, target);
}

#[test]
fn zero_intensity_stores_the_frame() {
    let ctx = TickCtx::default();
    let a = Frame::filled(4, 4, [200, 0, 0, 255]).unwrap();
    let b = Frame::filled(4, 4, [0, 0, 200, 255]).unwrap();
    let mut fx = feedback(0.5);
    fx.apply(&a, 1.0, &ctx).unwrap();
    assert_eq!(fx.apply(&b, 0.0, &ctx).unwrap(), b);
    // The accumulator now holds `b`, so `b` again is unchanged even at full intensity.
    assert_eq!(fx.apply(&b, 1.0, &ctx).unwrap(), b);
}

#[test]
fn size_change_reseeds() {
    let ctx = TickCtx::default();
    let mut fx = feedback(0.5);
    fx.apply(&Frame::filled(4, 4, [255, 0, 0, 255]).unwrap(), 1.0, &ctx).unwrap();
    let other = Frame::filled(6, 2, [0, 255, 0, 255]).unwrap();
    assert_eq!(fx.apply(&other, 1.0, &ctx).unwrap(), other);
}
