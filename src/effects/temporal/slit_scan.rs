use std::collections::VecDeque;

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::{FramefxError, FramefxResult};
use crate::raster::frame::{Frame, render_rows};

#[derive(Clone, Debug)]
pub(crate) struct SlitScan {
    depth: u32,
    /// Most recent frame first.
    history: VecDeque<Frame>,
}

impl SlitScan {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["depth"])?;
        Ok(Self {
            depth: p.u32_in("depth", 60, 2, 600)?,
            history: VecDeque::new(),
        })
    }

    /// How many ticks back row `y` of a `height`-row frame reads from, before warm-up clamping.
    pub(crate) fn row_delay(&self, y: u32, height: u32, intensity: f32) -> usize {
        if height <= 1 {
            return 0;
        }
        let frac = f64::from(y) / f64::from(height - 1);
        (f64::from(intensity) * f64::from(self.depth - 1) * frac).round() as usize
    }
}

impl Effect for SlitScan {
    fn apply(&mut self, frame: &Frame, intensity: f32, _ctx: &TickCtx) -> FramefxResult<Frame> {
        if self.history.front().is_some_and(|f| !f.same_size(frame)) {
            tracing::debug!(
                width = frame.width,
                height = frame.height,
                "slit_scan: size changed, clearing history"
            );
            self.history.clear();
        }
        self.history.push_front(frame.clone());
        self.history.truncate(self.depth as usize);
        if intensity == 0.0 {
            return Ok(frame.clone());
        }

        let available = self.history.len();
        let mut sources = Vec::with_capacity(frame.height as usize);
        for y in 0..frame.height {
            let delay = self.row_delay(y, frame.height, intensity).min(available - 1);
            let src = self.history.get(delay).ok_or_else(|| {
                FramefxError::invariant(format!(
                    "slit_scan: row {y} needs frame {delay} back but history holds {available}"
                ))
            })?;
            sources.push(src);
        }

        Ok(render_rows(frame.width, frame.height, |y, row| {
            let src = sources[y as usize];
            let start = y as usize * src.row_bytes();
            row.copy_from_slice(&src.data[start..start + src.row_bytes()]);
        }))
    }

    fn reset(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/temporal/slit_scan.rs"]
mod tests;
