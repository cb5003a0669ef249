use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::foundation::math::{hash_unit, to_u8};
use crate::raster::frame::{Frame, render_rows};

const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dither {
    Ordered,
    Noise,
    None,
}

#[derive(Clone, Debug)]
pub(crate) struct Posterize {
    dither: Dither,
}

impl Posterize {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["dither"])?;
        let dither = match p.choice("dither", &["ordered", "noise", "none"])? {
            "noise" => Dither::Noise,
            "none" => Dither::None,
            _ => Dither::Ordered,
        };
        Ok(Self { dither })
    }
}

pub(crate) fn levels_for(intensity: f32) -> u32 {
    ((256.0 * (1.0 - intensity)).round() as u32).max(2)
}

impl Effect for Posterize {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let levels = levels_for(intensity);
        let step = 255.0 / (levels - 1) as f32;
        let strength = (1.0 - 2.0 * intensity).max(0.0);
        let dither = if strength > 0.0 { self.dither } else { Dither::None };
        let tick = ctx.index.0;

        Ok(render_rows(frame.width, frame.height, |y, row| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let x = x as u32;
                let bias = match dither {
                    Dither::Ordered => {
                        (f32::from(BAYER_4X4[(y % 4) as usize][(x % 4) as usize]) + 0.5) / 16.0
                            - 0.5
                    }
                    Dither::Noise => hash_unit(tick, u64::from(x), u64::from(y)) - 0.5,
                    Dither::None => 0.0,
                } * step
                    * strength;
                let src = frame.pixel(x, y);
                for c in 0..3 {
                    let v = (f32::from(src[c]) + bias).clamp(0.0, 255.0);
                    px[c] = to_u8((v / step).round() * step);
                }
                px[3] = src[3];
            }
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/posterize.rs"]
mod tests;
