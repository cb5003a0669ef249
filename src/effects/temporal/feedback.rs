use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::{FramefxError, FramefxResult};
use crate::foundation::math::to_u8;
use crate::raster::frame::{Frame, render_rows};

#[derive(Clone, Debug)]
struct Accum {
    width: u32,
    height: u32,
    rgba: Vec<f32>,
}

impl Accum {
    fn seed(frame: &Frame) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            rgba: frame.data.iter().map(|&v| f32::from(v)).collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Feedback {
    decay: f32,
    accum: Option<Accum>,
}

impl Feedback {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["decay"])?;
        let decay = p.f32_or("decay", 0.95)?;
        if !(decay > 0.0 && decay < 1.0) {
            return Err(FramefxError::invalid_config(format!(
                "feedback: param 'decay' must be in (0, 1), got {decay}"
            )));
        }
        Ok(Self { decay, accum: None })
    }
}

impl Effect for Feedback {
    fn apply(&mut self, frame: &Frame, intensity: f32, _ctx: &TickCtx) -> FramefxResult<Frame> {
        let fits = matches!(&self.accum, Some(a) if a.width == frame.width && a.height == frame.height);
        if !fits {
            tracing::debug!(
                width = frame.width,
                height = frame.height,
                "feedback: seeding accumulator"
            );
            self.accum = Some(Accum::seed(frame));
            return Ok(frame.clone());
        }
        let Some(accum) = self.accum.as_mut() else {
            return Err(FramefxError::invariant("feedback accumulator missing after seeding"));
        };

        let k = intensity * self.decay;
        for (acc, &cur) in accum.rgba.iter_mut().zip(&frame.data) {
            *acc = k * *acc + (1.0 - k) * f32::from(cur);
        }

        let rgba = &accum.rgba;
        let row_len = frame.row_bytes();
        Ok(render_rows(frame.width, frame.height, |y, row| {
            let base = y as usize * row_len;
            for (i, out) in row.iter_mut().enumerate() {
                *out = if i % 4 == 3 {
                    frame.data[base + i]
                } else {
                    to_u8(rgba[base + i])
                };
            }
        }))
    }

    fn reset(&mut self) {
        self.accum = None;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/temporal/feedback.rs"]
mod tests;
