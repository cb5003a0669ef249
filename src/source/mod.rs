//! Base-image suppliers for the pull loop, plus the output format table.

pub(crate) mod format;
pub(crate) mod generative;
pub(crate) mod static_image;

use crate::foundation::core::Canvas;
use crate::foundation::error::FramefxResult;
use crate::raster::frame::Frame;

/// Supplies the base frame for every tick.
///
/// Implementations return an owned copy each time, so effects can never mutate the original.
pub trait FrameSource: Send {
    /// Dimensions of every produced frame.
    fn canvas(&self) -> Canvas;

    /// Base frame for the next tick.
    fn next_frame(&mut self) -> FramefxResult<Frame>;
}
