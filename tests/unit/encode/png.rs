use super::*;
use crate::foundation::core::Fps;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("framefx-png-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn write_png_round_trips_pixels() {
    let dir = scratch_dir("single");
    let path = dir.join("nested").join("one.png");
    let f = Frame::from_fn(3, 2, |x, y| [x as u8 * 40, y as u8 * 90, 7, 200]).unwrap();
    write_png(&path, &f).unwrap();

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (3, 2));
    assert_eq!(back.into_raw(), f.data);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sequence_sink_names_files_by_index() {
    let dir = scratch_dir("seq");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
    })
    .unwrap();
    let f = Frame::filled(2, 2, [9, 9, 9, 255]).unwrap();
    sink.push_frame(FrameIndex(0), &f).unwrap();
    sink.push_frame(FrameIndex(12), &f).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    assert!(dir.join("frame_00000.png").is_file());
    assert!(dir.join("frame_00012.png").is_file());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sequence_sink_rejects_size_mismatch() {
    let dir = scratch_dir("mismatch");
    let mut sink = PngSequenceSink::with_prefix(&dir, "x");
    sink.begin(SinkConfig {
        width: 4,
        height: 4,
        fps: Fps::default(),
    })
    .unwrap();
    let err = sink
        .push_frame(FrameIndex(0), &Frame::filled(2, 2, [0; 4]).unwrap())
        .unwrap_err();
    assert!(matches!(err, FramefxError::InvalidFrame(_)));
    let _ = std::fs::remove_dir_all(&dir);
}
