use std::f32::consts::PI;

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::foundation::math::{lerp, to_u8};
use crate::raster::frame::{Frame, render_rows};
use crate::raster::sample::pixel_clamped;

const GRATING_SHIFT: f32 = 2.0;

#[derive(Clone, Debug, Default)]
pub(crate) struct Hologram;

impl Hologram {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        p.only(&[])?;
        Ok(Self)
    }
}

/// Sum of three sinusoidal gratings normalized to `[0, 1]`.
pub(crate) fn interference(x: f32, y: f32, t: f32) -> f32 {
    let mut sum = 0.0f32;
    for k in 0..3 {
        let angle = k as f32 * PI / 3.0 + t * 0.5;
        let freq = 0.05 + 0.02 * k as f32;
        sum += ((x * angle.cos() + y * angle.sin()) * freq).sin();
    }
    (sum + 3.0) / 6.0
}

impl Effect for Hologram {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let t = ctx.t();
        let shift = (3.0 * intensity).round() as i64;
        let row_dim = lerp(1.0, 0.8, intensity);

        Ok(render_rows(frame.width, frame.height, |y, row| {
            let fy = y as f32;
            let yi = i64::from(y);
            let dim = if y % 3 == 0 { row_dim } else { 1.0 };
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let fx = x as f32;
                let xi = x as i64;
                let pattern = [
                    interference(fx - GRATING_SHIFT, fy, t),
                    interference(fx, fy, t),
                    interference(fx + GRATING_SHIFT, fy, t),
                ];
                let src = [
                    pixel_clamped(frame, xi - shift, yi)[0],
                    pixel_clamped(frame, xi, yi)[1],
                    pixel_clamped(frame, xi + shift, yi)[2],
                ];
                for c in 0..3 {
                    let factor = lerp(1.0, 0.7 + 0.6 * pattern[c], intensity) * dim;
                    px[c] = to_u8(f32::from(src[c]) * factor);
                }
                px[3] = frame.pixel(x as u32, y)[3];
            }
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/hologram.rs"]
mod tests;
