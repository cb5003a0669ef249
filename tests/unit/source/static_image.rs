use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn wider_sources_lose_their_sides() {
    let r = center_crop_rect(1920, 1080, canvas(1080, 1080));
    assert_eq!(r, CropRect { x: 420, y: 0, width: 1080, height: 1080 });
}

#[test]
fn taller_sources_lose_top_and_bottom() {
    let r = center_crop_rect(1000, 3000, canvas(1080, 607));
    assert_eq!((r.x, r.width), (0, 1000));
    assert_eq!(r.height, 562);
    assert_eq!(r.y, (3000 - 562) / 2);
}

#[test]
fn matching_aspect_is_untouched() {
    let r = center_crop_rect(640, 480, canvas(320, 240));
    assert_eq!(r, CropRect { x: 0, y: 0, width: 640, height: 480 });
}

#[test]
fn fitted_frames_contain_only_center_pixels() {
    // Red border columns around a green center; cropping to square keeps only the green.
    let img = image::RgbaImage::from_fn(30, 10, |x, _| {
        if (10..20).contains(&x) { image::Rgba([0, 255, 0, 255]) } else { image::Rgba([255, 0, 0, 255]) }
    });
    let frame = fit_image(&img, canvas(10, 10)).unwrap();
    assert_eq!((frame.width, frame.height), (10, 10));
    assert!(frame.data.chunks_exact(4).all(|p| p == [0, 255, 0, 255]));
}

#[test]
fn resizing_hits_the_exact_target() {
    let img = image::RgbaImage::from_pixel(64, 48, image::Rgba([9, 8, 7, 255]));
    let src = StaticImageSource::from_image(&img, canvas(40, 40)).unwrap();
    assert_eq!(src.canvas(), canvas(40, 40));
}

#[test]
fn next_frame_returns_independent_copies() {
    let base = Frame::filled(4, 4, [1, 2, 3, 4]).unwrap();
    let mut src = StaticImageSource::from_frame(base.clone()).unwrap();
    let mut a = src.next_frame().unwrap();
    a.put_pixel(0, 0, [0, 0, 0, 0]);
    assert_eq!(src.next_frame().unwrap(), base);
}

#[test]
fn missing_files_are_reported() {
    let err = StaticImageSource::open("/no/such/image.png", canvas(8, 8)).unwrap_err();
    assert!(err.to_string().contains("/no/such/image.png"));
}
