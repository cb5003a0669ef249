use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::raster::blend::scale_rgb;
use crate::raster::frame::{Frame, render_rows};
use crate::raster::sample::pixel_wrapped;

#[derive(Clone, Debug, Default)]
pub(crate) struct Scanlines;

impl Scanlines {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        p.only(&[])?;
        Ok(Self)
    }
}

/// Spacing between darkened rows.
pub(crate) fn line_period(intensity: f32) -> u32 {
    ((2.0 / intensity).round().clamp(2.0, 64.0)) as u32
}

impl Effect for Scanlines {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let period = line_period(intensity);
        let darken = 1.0 - 0.5 * intensity;
        let roll_step = (2.0 * intensity).round() as i64;
        let roll = (ctx.index.0 as i64).wrapping_mul(roll_step) % i64::from(frame.height);
        let t = ctx.t();

        Ok(render_rows(frame.width, frame.height, |y, row| {
            let wobble = ((y as f32 * 0.1 + t * 5.0).sin() * 5.0 * intensity).round() as i64;
            let sy = i64::from(y) - roll;
            let dim = y % period == 0;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let src = pixel_wrapped(frame, x as i64 - wobble, sy);
                let out = if dim { scale_rgb(src, darken) } else { src };
                px.copy_from_slice(&out);
            }
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/scanlines.rs"]
mod tests;
