use super::*;

#[test]
fn offsets_vanish_at_zero_intensity_and_stay_bounded() {
    for y in 0..200 {
        let y = y as f32;
        assert_eq!(shimmer_dx(y, 1.3, 0.0), 0.0);
        assert!(shimmer_dx(y, 1.3, 1.0).abs() <= 23.0 + 1e-3);
        assert!(shimmer_dy(y, 0.4, 1.0).abs() <= 5.0 + 1e-3);
    }
}

#[test]
fn uniform_frames_are_unchanged() {
    let frame = Frame::filled(24, 24, [10, 200, 30, 255]).unwrap();
    let out = HeatHaze.apply(&frame, 1.0, &TickCtx::default()).unwrap();
    assert_eq!(out, frame);
}

#[test]
fn a_gradient_is_distorted() {
    let frame = Frame::from_fn(64, 64, |x, _| [(x * 4) as u8, 0, 0, 255]).unwrap();
    let out = HeatHaze.apply(&frame, 1.0, &TickCtx::default()).unwrap();
    assert_ne!(out, frame);
    assert_eq!((out.width, out.height), (64, 64));
}
