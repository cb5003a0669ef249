use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(30, 1).unwrap(),
    }
}

#[test]
fn transparent_pixel_becomes_background() {
    let mut dst = vec![0u8; 4];
    flatten_over_bg(&mut dst, &[200, 100, 50, 0], [10, 20, 30, 255]);
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn opaque_pixel_is_unchanged() {
    let mut dst = vec![0u8; 4];
    flatten_over_bg(&mut dst, &[1, 2, 3, 255], [10, 20, 30, 255]);
    assert_eq!(dst, vec![1, 2, 3, 255]);
}

#[test]
fn half_alpha_mixes_straight_color_with_background() {
    let mut dst = vec![0u8; 4];
    flatten_over_bg(&mut dst, &[255, 255, 255, 128], [0, 0, 0, 255]);
    assert!((127..=129).contains(&dst[0]));
    assert_eq!(dst[3], 255);
}

#[test]
fn even_canvas_has_no_pad_filter() {
    let args = encoder_args(cfg(1080, 1080), [0, 0, 0, 255]);
    assert!(!args.iter().any(|a| a == "-vf"));
    assert!(args.iter().any(|a| a == "1080x1080"));
    assert!(args.iter().any(|a| a == "30/1"));
}

#[test]
fn odd_canvas_is_padded_with_background() {
    let args = encoder_args(cfg(1080, 607), [255, 0, 16, 255]);
    let vf = args.iter().position(|a| a == "-vf").unwrap();
    assert_eq!(args[vf + 1], "pad=ceil(iw/2)*2:ceil(ih/2)*2:color=0xff0010");
}

#[test]
fn push_before_begin_is_an_encode_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let f = Frame::filled(2, 2, [0; 4]).unwrap();
    assert!(matches!(
        sink.push_frame(FrameIndex(0), &f),
        Err(FramefxError::Encode(_))
    ));
}

#[test]
fn zero_fps_is_rejected_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let mut c = cfg(4, 4);
    c.fps.den = 0;
    assert!(matches!(sink.begin(c), Err(FramefxError::InvalidConfig(_))));
}
