use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::foundation::math::lerp;
use crate::raster::frame::Frame;

#[derive(Clone, Debug)]
pub(crate) struct Strobe {
    hold: Option<u32>,
    counter: u64,
    held: Option<Frame>,
}

impl Strobe {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["hold"])?;
        let hold = match p.opt_u32("hold")? {
            Some(_) => Some(p.u32_in("hold", 1, 1, 10_000)?),
            None => None,
        };
        Ok(Self {
            hold,
            counter: 0,
            held: None,
        })
    }

    /// Ticks each captured frame is held for.
    pub(crate) fn hold_for(&self, intensity: f32) -> u64 {
        if intensity == 0.0 {
            return 1;
        }
        match self.hold {
            Some(h) => u64::from(h),
            None => (lerp(30.0, 1.0, intensity).round() as u64).max(1),
        }
    }
}

impl Effect for Strobe {
    fn apply(&mut self, frame: &Frame, intensity: f32, _ctx: &TickCtx) -> FramefxResult<Frame> {
        let hold = self.hold_for(intensity);
        let stale = match &self.held {
            Some(h) => !h.same_size(frame) || self.counter % hold == 0,
            None => true,
        };
        if stale {
            tracing::trace!(counter = self.counter, hold, "strobe: capturing frame");
            self.held = Some(frame.clone());
        }
        self.counter += 1;
        Ok(self.held.clone().unwrap_or_else(|| frame.clone()))
    }

    fn reset(&mut self) {
        self.counter = 0;
        self.held = None;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/temporal/strobe.rs"]
mod tests;
