use super::*;

fn gradient() -> Frame {
    Frame::from_fn(4, 3, |x, y| [(x * 60) as u8, (y * 100) as u8, 0, 255]).unwrap()
}

#[test]
fn clamped_addressing_replicates_edges() {
    let f = gradient();
    assert_eq!(pixel_clamped(&f, -5, 1), f.pixel(0, 1));
    assert_eq!(pixel_clamped(&f, 10, 10), f.pixel(3, 2));
}

#[test]
fn wrapped_addressing_wraps_both_axes() {
    let f = gradient();
    assert_eq!(pixel_wrapped(&f, -1, 0), f.pixel(3, 0));
    assert_eq!(pixel_wrapped(&f, 4, 4), f.pixel(0, 1));
}

#[test]
fn bilinear_at_integer_coords_is_exact() {
    let f = gradient();
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(sample_bilinear(&f, x as f32, y as f32), f.pixel(x, y));
        }
    }
}

#[test]
fn bilinear_midpoint_interpolates() {
    let f = gradient();
    let px = sample_bilinear(&f, 0.5, 0.0);
    assert_eq!(px[0], 30);
}

#[test]
fn identity_remap_is_pixel_identical() {
    let f = gradient();
    let out = remap(&f, |x, y| (x as f32, y as f32));
    assert_eq!(out, f);
}
