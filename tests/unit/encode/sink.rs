use std::sync::{Arc, Mutex};

use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
    }
}

struct Failing;

impl FrameSink for Failing {
    fn begin(&mut self, _cfg: SinkConfig) -> FramefxResult<()> {
        Ok(())
    }
    fn push_frame(&mut self, _idx: FrameIndex, _frame: &Frame) -> FramefxResult<()> {
        Err(FramefxError::encode("disk full"))
    }
    fn end(&mut self) -> FramefxResult<()> {
        Ok(())
    }
}

#[test]
fn in_memory_sink_captures_frames_and_lifecycle() {
    let mut sink = InMemorySink::new();
    let f = Frame::filled(2, 2, [1, 2, 3, 4]).unwrap();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &f).unwrap();
    sink.push_frame(FrameIndex(1), &f).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.config(), Some(cfg()));
    assert!(sink.is_finished());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn callback_sink_sees_every_frame() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen2 = Arc::clone(&seen);
    let mut sink = CallbackSink::new(move |idx, frame| {
        seen2.lock().unwrap().push((idx.0, frame.pixel(0, 0)[0]));
        Ok(())
    });
    sink.begin(cfg()).unwrap();
    for i in 0..3u8 {
        sink.push_frame(FrameIndex(u64::from(i)), &Frame::filled(2, 2, [i, 0, 0, 255]).unwrap())
            .unwrap();
    }
    sink.end().unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn fan_out_reaches_every_sink_and_reports_the_first_error() {
    let count = Arc::new(Mutex::new(0u32));
    let c2 = Arc::clone(&count);
    let mut fan = FanOutSink::new().with(Failing).with(CallbackSink::new(move |_, _| {
        *c2.lock().unwrap() += 1;
        Ok(())
    }));
    assert_eq!(fan.len(), 2);
    fan.begin(cfg()).unwrap();
    let err = fan
        .push_frame(FrameIndex(0), &Frame::filled(2, 2, [0; 4]).unwrap())
        .unwrap_err();
    assert!(matches!(err, FramefxError::Encode(_)));
    assert_eq!(*count.lock().unwrap(), 1);
    fan.end().unwrap();
}
