use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::raster::blur::blur_frame;
use crate::raster::frame::Frame;
use crate::raster::sample::remap;

#[derive(Clone, Debug, Default)]
pub(crate) struct HeatHaze;

impl HeatHaze {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        p.only(&[])?;
        Ok(Self)
    }
}

/// Horizontal shimmer offset for row `y` at phase `phi`.
pub(crate) fn shimmer_dx(y: f32, phi: f32, intensity: f32) -> f32 {
    (15.0 * (0.05 * y + phi).sin() + 8.0 * (0.1 * y + 1.3 * phi).sin()) * intensity
}

/// Vertical shimmer offset for column `x` at phase `phi`.
pub(crate) fn shimmer_dy(x: f32, phi: f32, intensity: f32) -> f32 {
    5.0 * (0.05 * x + 0.7 * phi).cos() * intensity
}

impl Effect for HeatHaze {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let phi = 3.0 * ctx.t();
        let warped = remap(frame, |x, y| {
            let (fx, fy) = (x as f32, y as f32);
            (
                fx + shimmer_dx(fy, phi, intensity),
                fy + shimmer_dy(fx, phi, intensity),
            )
        });
        let radius = (3.0 * intensity).round() as u32;
        blur_frame(&warped, radius, (radius as f32 / 2.0).max(0.5))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/heat_haze.rs"]
mod tests;
