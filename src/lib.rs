//! framefx applies chains of per-frame visual effects to a base image.
//!
//! The public API follows the flow of one tick:
//!
//! - A [`FrameSource`] supplies the base [`Frame`] ([`StaticImageSource`] or
//!   [`GenerativeSource`]), sized by a [`Format`].
//! - An [`EffectChain`] runs its ordered [`EffectNode`]s over it. Temporal effects keep their
//!   state inside the chain between ticks.
//! - A [`Session`] pulls frames through the chain into a [`FrameSink`] (in memory, callback,
//!   PNG sequence or `ffmpeg` MP4).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod chain;
pub(crate) mod effects;
pub(crate) mod encode;
pub(crate) mod noise;
pub(crate) mod raster;
pub(crate) mod session;
pub(crate) mod source;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{FramefxError, FramefxResult};

pub use crate::chain::config::{ChainConfig, EffectConfig};
pub use crate::chain::pipeline::{ChainEntry, EffectChain, EffectId, EffectRef};
pub use crate::chain::presets::{PRESETS, Preset, preset};
pub use crate::effects::context::TickCtx;
pub use crate::effects::kind::EffectKind;
pub use crate::effects::node::{Effect, EffectNode};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{CallbackSink, FanOutSink, FrameSink, InMemorySink, SinkConfig};
pub use crate::noise::rng::FxRng;
pub use crate::raster::frame::Frame;
pub use crate::session::{CancelFlag, RenderStats, Session, SessionOpts};
pub use crate::source::FrameSource;
pub use crate::source::format::{AspectRatio, Format, OutputSize, Resolution};
pub use crate::source::generative::GenerativeSource;
pub use crate::source::static_image::{CropRect, StaticImageSource, center_crop_rect, fit_image};
