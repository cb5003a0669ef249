use super::*;

#[test]
fn new_rejects_mismatched_length_and_empty_dims() {
    assert!(matches!(
        Frame::new(2, 2, vec![0; 15]),
        Err(FramefxError::InvalidFrame(_))
    ));
    assert!(matches!(
        Frame::new(0, 2, vec![]),
        Err(FramefxError::InvalidFrame(_))
    ));
    assert!(Frame::new(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn from_fn_addresses_pixels_row_major() {
    let f = Frame::from_fn(3, 2, |x, y| [x as u8, y as u8, 7, 255]).unwrap();
    assert_eq!(f.pixel(2, 1), [2, 1, 7, 255]);
    assert_eq!(f.index(1, 1), (3 + 1) * 4);
}

#[test]
fn put_pixel_then_read_back() {
    let mut f = Frame::filled(4, 4, [0, 0, 0, 255]).unwrap();
    f.put_pixel(3, 2, [9, 8, 7, 6]);
    assert_eq!(f.pixel(3, 2), [9, 8, 7, 6]);
    assert_eq!(f.pixel(2, 3), [0, 0, 0, 255]);
}

#[test]
fn luma_plane_matches_white_and_black() {
    let f = Frame::from_fn(2, 1, |x, _| if x == 0 { [0, 0, 0, 255] } else { [255, 255, 255, 255] })
        .unwrap();
    let l = f.luma_plane();
    assert!(l[0].abs() < 1e-3);
    assert!((l[1] - 255.0).abs() < 1e-2);
}

#[test]
fn image_conversion_preserves_bytes() {
    let f = Frame::from_fn(5, 3, |x, y| [x as u8 * 10, y as u8 * 20, 1, 200]).unwrap();
    let img = f.to_rgba_image().unwrap();
    let back = Frame::from_rgba_image(img).unwrap();
    assert_eq!(back, f);
}
