use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FramefxError, FramefxResult};
use crate::raster::frame::Frame;

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Consumer of the frames produced by a session.
///
/// `push_frame` is called in strictly increasing `FrameIndex` order between one `begin` and one
/// `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FramefxResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> FramefxResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> FramefxResult<()>;
}

/// Keeps every pushed frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Frame)>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, Frame)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take ownership of the captured frames.
    pub fn into_frames(self) -> Vec<(FrameIndex, Frame)> {
        self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FramefxResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> FramefxResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FramefxResult<()> {
        self.finished = true;
        Ok(())
    }
}

type FrameCallback = Box<dyn FnMut(FrameIndex, &Frame) -> FramefxResult<()> + Send>;

/// Forwards every frame to a closure, e.g. a preview window owned by the caller.
pub struct CallbackSink {
    callback: FrameCallback,
}

impl CallbackSink {
    /// Wrap `callback`.
    pub fn new(callback: impl FnMut(FrameIndex, &Frame) -> FramefxResult<()> + Send + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl std::fmt::Debug for CallbackSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSink").finish_non_exhaustive()
    }
}

impl FrameSink for CallbackSink {
    fn begin(&mut self, _cfg: SinkConfig) -> FramefxResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> FramefxResult<()> {
        (self.callback)(idx, frame)
    }

    fn end(&mut self) -> FramefxResult<()> {
        Ok(())
    }
}

/// Hands the same frame to several sinks in order (e.g. preview and record at once).
///
/// Every sink sees every call even when an earlier one fails; the first error is returned.
#[derive(Default)]
pub struct FanOutSink {
    sinks: Vec<Box<dyn FrameSink>>,
}

impl FanOutSink {
    /// Empty fan-out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sink.
    pub fn with(mut self, sink: impl FrameSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Append a boxed sink.
    pub fn push(&mut self, sink: Box<dyn FrameSink>) {
        self.sinks.push(sink);
    }

    /// Number of downstream sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// `true` when there are no downstream sinks.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn each(
        &mut self,
        mut f: impl FnMut(&mut dyn FrameSink) -> FramefxResult<()>,
    ) -> FramefxResult<()> {
        let mut first: Option<FramefxError> = None;
        for s in &mut self.sinks {
            if let Err(e) = f(s.as_mut()) {
                tracing::warn!(error = %e, "fan-out sink failed");
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }
}

impl std::fmt::Debug for FanOutSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanOutSink")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl FrameSink for FanOutSink {
    fn begin(&mut self, cfg: SinkConfig) -> FramefxResult<()> {
        self.each(|s| s.begin(cfg))
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> FramefxResult<()> {
        self.each(|s| s.push_frame(idx, frame))
    }

    fn end(&mut self) -> FramefxResult<()> {
        self.each(|s| s.end())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
