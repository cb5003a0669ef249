use serde_json::json;

use super::*;

fn noise_frame(size: u32) -> Frame {
    Frame::from_fn(size, size, |x, y| {
        let v = crate::foundation::math::hash_u32(3, u64::from(x), u64::from(y));
        [(v & 0xFF) as u8, (v >> 8) as u8, (v >> 16) as u8, 255]
    })
    .unwrap()
}

#[test]
fn segment_count_follows_intensity_unless_fixed() {
    let auto = Kaleidoscope::from_params(Params::new("kaleidoscope", &json!({})).unwrap()).unwrap();
    assert_eq!(auto.segments_for(0.0), 4);
    assert_eq!(auto.segments_for(0.5), 14);
    assert_eq!(auto.segments_for(1.0), 24);
    let fixed =
        Kaleidoscope::from_params(Params::new("kaleidoscope", &json!({"segments": 6})).unwrap()).unwrap();
    assert_eq!(fixed.segments_for(1.0), 6);
    assert!(
        Kaleidoscope::from_params(Params::new("kaleidoscope", &json!({"segments": 1})).unwrap()).is_err()
    );
}

#[test]
fn four_segments_are_invariant_under_quarter_turns() {
    let size = 33;
    let frame = noise_frame(size);
    let mut fx =
        Kaleidoscope::from_params(Params::new("kaleidoscope", &json!({"segments": 4})).unwrap()).unwrap();
    let out = fx.apply(&frame, 1.0, &TickCtx::default()).unwrap();
    let n = size - 1;
    for y in 0..size {
        for x in 0..size {
            // (x, y) rotated by 90 degrees about the center.
            let a = out.pixel(x, y);
            let b = out.pixel(n - y, x);
            for c in 0..4 {
                assert!(a[c].abs_diff(b[c]) <= 2, "({x},{y}) {a:?} vs {b:?}");
            }
        }
    }
}
