use crate::foundation::core::{Fps, FrameIndex};

/// Per-tick timing handed to every effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickCtx {
    /// Zero-based tick number.
    pub index: FrameIndex,
    /// Seconds since the first tick (`index / fps`).
    pub time_secs: f64,
    /// Output frame rate.
    pub fps: Fps,
    /// Reserved audio-reactive level; never populated, always `0.0`.
    pub audio_level: f32,
}

impl TickCtx {
    /// Context for tick `index` at `fps`.
    pub fn at(index: FrameIndex, fps: Fps) -> Self {
        Self {
            index,
            time_secs: fps.frames_to_secs(index.0),
            fps,
            audio_level: 0.0,
        }
    }

    /// `time_secs` narrowed for per-pixel math.
    pub fn t(&self) -> f32 {
        self.time_secs as f32
    }
}

impl Default for TickCtx {
    fn default() -> Self {
        Self::at(FrameIndex(0), Fps::default())
    }
}
