use super::*;
use crate::effects::kind::EffectKind;
use crate::encode::sink::{CallbackSink, InMemorySink};
use crate::foundation::core::FrameIndex;
use crate::raster::frame::Frame;
use crate::source::static_image::StaticImageSource;

fn base() -> Frame {
    Frame::from_fn(8, 6, |x, y| [(x * 30) as u8, (y * 40) as u8, 90, 255]).unwrap()
}

fn session(chain: EffectChain, opts: SessionOpts) -> Session {
    let src = StaticImageSource::from_frame(base()).unwrap();
    Session::new(Box::new(src), chain, opts)
}

#[test]
fn empty_chain_session_emits_the_source_unchanged() {
    let mut s = session(EffectChain::default(), SessionOpts::frames(3));
    let mut sink = InMemorySink::new();
    let stats = s.run(&mut sink, None).unwrap();

    assert_eq!(stats.frames_total, 3);
    assert_eq!(stats.frames_rendered, 3);
    assert!(!stats.cancelled);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (8, 6));
    for (i, (idx, f)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!(f, &base());
    }
}

#[test]
fn frame_indices_continue_across_runs() {
    let mut s = session(EffectChain::default(), SessionOpts::frames(2));
    let mut first = InMemorySink::new();
    s.run(&mut first, None).unwrap();
    let mut second = InMemorySink::new();
    s.run(&mut second, None).unwrap();
    let idx: Vec<u64> = second.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![2, 3]);
    assert_eq!(s.chain().tick(), FrameIndex(4));
}

#[test]
fn cancel_before_run_renders_nothing_but_closes_the_sink() {
    let flag = CancelFlag::new();
    flag.cancel();
    let mut s = session(EffectChain::default(), SessionOpts::frames(5));
    let mut sink = InMemorySink::new();
    let stats = s.run(&mut sink, Some(&flag)).unwrap();
    assert!(stats.cancelled);
    assert_eq!(stats.frames_rendered, 0);
    assert!(sink.is_finished());
}

#[test]
fn cancel_from_the_sink_stops_after_the_current_tick() {
    let flag = CancelFlag::new();
    let trigger = flag.clone();
    let mut sink = CallbackSink::new(move |idx, _| {
        if idx.0 == 1 {
            trigger.cancel();
        }
        Ok(())
    });
    let mut s = session(EffectChain::default(), SessionOpts::frames(10));
    let stats = s.run(&mut sink, Some(&flag)).unwrap();
    assert!(stats.cancelled);
    assert_eq!(stats.frames_rendered, 2);
}

#[test]
fn dedicated_pool_matches_global_pool_output() {
    let chain = || {
        let mut chain = EffectChain::default();
        chain
            .add_effect(EffectKind::RgbSplit, 0.8, &serde_json::Value::Null)
            .unwrap();
        chain
            .add_effect(EffectKind::Feedback, 0.6, &serde_json::Value::Null)
            .unwrap();
        chain
    };

    let mut a = session(chain(), SessionOpts::frames(3));
    let mut b = session(chain(), SessionOpts::frames(3).with_threads(2));
    let mut sa = InMemorySink::new();
    let mut sb = InMemorySink::new();
    a.run(&mut sa, None).unwrap();
    b.run(&mut sb, None).unwrap();
    assert_eq!(sa.frames(), sb.frames());
}

#[test]
fn zero_threads_and_zero_frames_are_rejected() {
    let mut s = session(EffectChain::default(), SessionOpts::frames(1).with_threads(0));
    assert!(matches!(
        s.run(&mut InMemorySink::new(), None),
        Err(FramefxError::InvalidConfig(_))
    ));
    let mut s = session(EffectChain::default(), SessionOpts::frames(0));
    assert!(matches!(
        s.run(&mut InMemorySink::new(), None),
        Err(FramefxError::InvalidConfig(_))
    ));
}

#[test]
fn duration_rounds_down_to_whole_frames() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(SessionOpts::duration(2.5, fps).unwrap().frames, 75);
    assert_eq!(SessionOpts::duration(0.05, fps).unwrap().frames, 1);
    assert_eq!(SessionOpts::duration(0.001, fps).unwrap().frames, 1);
    assert!(SessionOpts::duration(-1.0, fps).is_err());
}
