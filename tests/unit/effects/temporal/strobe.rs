use serde_json::json;

use super::*;

fn solid(v: u8) -> Frame {
    Frame::filled(3, 3, [v, v, v, 255]).unwrap()
}

fn strobe(params: serde_json::Value) -> Strobe {
    Strobe::from_params(Params::new("strobe", &params).unwrap()).unwrap()
}

#[test]
fn hold_three_repeats_every_third_frame() {
    let mut fx = strobe(json!({"hold": 3}));
    let ctx = TickCtx::default();
    let outs: Vec<u8> = (1..=5u8)
        .map(|i| fx.apply(&solid(i), 0.5, &ctx).unwrap().pixel(0, 0)[0])
        .collect();
    assert_eq!(outs, vec![1, 1, 1, 4, 4]);
}

#[test]
fn hold_period_follows_intensity() {
    let fx = strobe(json!({}));
    assert_eq!(fx.hold_for(0.0), 1);
    assert_eq!(fx.hold_for(1.0), 1);
    assert_eq!(fx.hold_for(0.01), 30);
    assert_eq!(fx.hold_for(0.5), 16);
}

#[test]
fn zero_intensity_is_pass_through() {
    let mut fx = strobe(json!({"hold": 5}));
    let ctx = TickCtx::default();
    for i in 1..=6u8 {
        assert_eq!(fx.apply(&solid(i), 0.0, &ctx).unwrap(), solid(i));
    }
}

#[test]
fn size_change_recaptures() {
    let mut fx = strobe(json!({"hold": 10}));
    let ctx = TickCtx::default();
    fx.apply(&solid(1), 1.0, &ctx).unwrap();
    let big = Frame::filled(5, 2, [9, 9, 9, 255]).unwrap();
    assert_eq!(fx.apply(&big, 1.0, &ctx).unwrap(), big);
}
