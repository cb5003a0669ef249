use kurbo::Point;

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::foundation::math::lerp;
use crate::noise::polar::{fold_mirror, from_polar, to_polar};
use crate::raster::frame::Frame;
use crate::raster::sample::remap;

#[derive(Clone, Debug)]
pub(crate) struct Kaleidoscope {
    segments: Option<u32>,
    spin: f64,
}

impl Kaleidoscope {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["segments", "spin"])?;
        let segments = match p.opt_u32("segments")? {
            Some(s) => Some(p.u32_in("segments", s, 2, 64)?),
            None => None,
        };
        Ok(Self {
            segments,
            spin: f64::from(p.f32_or("spin", 0.25)?),
        })
    }

    pub(crate) fn segments_for(&self, intensity: f32) -> u32 {
        self.segments
            .unwrap_or_else(|| lerp(4.0, 24.0, intensity).round() as u32)
    }
}

impl Effect for Kaleidoscope {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let segments = self.segments_for(intensity);
        let center = Point::new(
            f64::from(frame.width - 1) / 2.0,
            f64::from(frame.height - 1) / 2.0,
        );
        let rotation = self.spin * ctx.time_secs;

        Ok(remap(frame, |x, y| {
            let (r, a) = to_polar(Point::new(f64::from(x), f64::from(y)), center);
            let src = from_polar(center, r, fold_mirror(a, segments) + rotation);
            (src.x as f32, src.y as f32)
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/kaleidoscope.rs"]
mod tests;
