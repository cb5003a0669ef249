//! The per-tick pull loop: source, chain, sink.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::chain::pipeline::EffectChain;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameRange};
use crate::foundation::error::{FramefxError, FramefxResult};
use crate::source::FrameSource;

/// Cooperative cancellation shared between the caller and a running [`Session`].
///
/// Checked once per tick, before the next frame is pulled.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// New, not-yet-cancelled flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// `true` once [`CancelFlag::cancel`] was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// How many ticks to run and on how many worker threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOpts {
    /// Number of ticks (output frames), must be at least 1.
    pub frames: u64,
    /// Worker threads for the per-pixel kernels. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl SessionOpts {
    /// Run exactly `frames` ticks on the global pool.
    pub fn frames(frames: u64) -> Self {
        Self {
            frames,
            threads: None,
        }
    }

    /// Run for `secs` seconds of output at `fps`, rounding down but never below one frame.
    pub fn duration(secs: f64, fps: Fps) -> FramefxResult<Self> {
        Ok(Self::frames(FrameRange::from_secs(fps, secs)?.len_frames()))
    }

    /// Use a dedicated pool of `n` threads.
    pub fn with_threads(mut self, n: usize) -> Self {
        self.threads = Some(n);
        self
    }
}

/// Summary of one [`Session::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Ticks requested.
    pub frames_total: u64,
    /// Frames delivered to the sink.
    pub frames_rendered: u64,
    /// `true` when the run stopped early because of a [`CancelFlag`].
    pub cancelled: bool,
    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
}

/// Owns a frame source and an effect chain and drives them tick by tick.
pub struct Session {
    source: Box<dyn FrameSource>,
    chain: EffectChain,
    opts: SessionOpts,
}

impl Session {
    /// Assemble a session. The chain's fps is the output fps.
    pub fn new(source: Box<dyn FrameSource>, chain: EffectChain, opts: SessionOpts) -> Self {
        Self {
            source,
            chain,
            opts,
        }
    }

    /// The chain being driven; its tick counter continues across runs.
    pub fn chain(&self) -> &EffectChain {
        &self.chain
    }

    /// Mutable access for live edits between runs.
    pub fn chain_mut(&mut self) -> &mut EffectChain {
        &mut self.chain
    }

    /// Current options.
    pub fn opts(&self) -> SessionOpts {
        self.opts
    }

    /// Pull `opts.frames` frames through the chain into `sink`.
    ///
    /// `begin` and `end` bracket the frames even when the run is cancelled; an error from the
    /// source, chain or sink aborts the loop immediately.
    #[tracing::instrument(skip(self, sink, cancel), fields(frames = self.opts.frames))]
    pub fn run(
        &mut self,
        sink: &mut dyn FrameSink,
        cancel: Option<&CancelFlag>,
    ) -> FramefxResult<RenderStats> {
        if self.opts.frames == 0 {
            return Err(FramefxError::invalid_config(
                "session must render at least one frame",
            ));
        }
        match self.opts.threads {
            Some(n) => {
                let pool = build_thread_pool(Some(n))?;
                pool.install(|| self.run_loop(sink, cancel))
            }
            None => self.run_loop(sink, cancel),
        }
    }

    fn run_loop(
        &mut self,
        sink: &mut dyn FrameSink,
        cancel: Option<&CancelFlag>,
    ) -> FramefxResult<RenderStats> {
        let canvas = self.source.canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.chain.fps(),
        })?;

        let started = Instant::now();
        let mut stats = RenderStats {
            frames_total: self.opts.frames,
            ..RenderStats::default()
        };
        for _ in 0..self.opts.frames {
            if cancel.is_some_and(CancelFlag::is_cancelled) {
                tracing::debug!(rendered = stats.frames_rendered, "session cancelled");
                stats.cancelled = true;
                break;
            }
            let idx = self.chain.tick();
            let base = self.source.next_frame()?;
            let out = self.chain.process_frame(&base)?;
            sink.push_frame(idx, &out)?;
            stats.frames_rendered += 1;
            tracing::trace!(frame = idx.0, "tick");
        }
        sink.end()?;

        stats.elapsed = started.elapsed();
        tracing::debug!(
            rendered = stats.frames_rendered,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "session finished"
        );
        Ok(stats)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("canvas", &self.source.canvas())
            .field("chain_len", &self.chain.len())
            .field("opts", &self.opts)
            .finish()
    }
}

fn build_thread_pool(threads: Option<usize>) -> FramefxResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FramefxError::invalid_config(
            "session 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FramefxError::invalid_config(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/mod.rs"]
mod tests;
