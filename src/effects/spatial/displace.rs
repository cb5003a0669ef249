use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::noise::perlin::Perlin2;
use crate::raster::frame::Frame;
use crate::raster::sample::remap;

const DRIFT_PER_SEC: f32 = 0.5;
const OCTAVES: u32 = 2;

#[derive(Clone, Debug)]
pub(crate) struct Displace {
    amount: f32,
    field_x: Perlin2,
    field_y: Perlin2,
}

impl Displace {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["seed", "amount"])?;
        let seed = p.u64_or("seed", 0)?;
        Ok(Self {
            amount: p.f32_in("amount", 0.08, 0.0, 1.0)?,
            field_x: Perlin2::new(seed),
            field_y: Perlin2::new(seed ^ 0x9E37_79B9_7F4A_7C15),
        })
    }
}

impl Effect for Displace {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 || self.amount == 0.0 {
            return Ok(frame.clone());
        }
        let freq = 0.01 + 0.05 * intensity;
        let amp = self.amount * intensity * frame.width.min(frame.height) as f32;
        let drift = ctx.t() * DRIFT_PER_SEC;

        Ok(remap(frame, |x, y| {
            let nx = x as f32 * freq + drift;
            let ny = y as f32 * freq;
            let dx = self.field_x.fbm(nx, ny, OCTAVES) * amp;
            let dy = self.field_y.fbm(nx, ny + drift, OCTAVES) * amp;
            (x as f32 + dx, y as f32 + dy)
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/displace.rs"]
mod tests;
