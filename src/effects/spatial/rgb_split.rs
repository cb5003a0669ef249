use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::raster::frame::{Frame, render_rows};
use crate::raster::sample::pixel_clamped;

#[derive(Clone, Debug)]
pub(crate) struct RgbSplit {
    max_offset: f32,
}

impl RgbSplit {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["max_offset"])?;
        Ok(Self {
            max_offset: p.f32_in("max_offset", 12.0, 0.0, 512.0)?,
        })
    }

    pub(crate) fn offset(&self, intensity: f32) -> i64 {
        (self.max_offset * intensity).round() as i64
    }
}

impl Effect for RgbSplit {
    fn apply(&mut self, frame: &Frame, intensity: f32, _ctx: &TickCtx) -> FramefxResult<Frame> {
        let off = self.offset(intensity);
        if off == 0 {
            return Ok(frame.clone());
        }
        Ok(render_rows(frame.width, frame.height, |y, row| {
            let y = i64::from(y);
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let x = x as i64;
                let g = pixel_clamped(frame, x, y);
                let r = pixel_clamped(frame, x - off, y);
                let b = pixel_clamped(frame, x + off, y);
                px.copy_from_slice(&[r[0], g[1], b[2], g[3]]);
            }
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/rgb_split.rs"]
mod tests;
