use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::foundation::math::to_u8;
use crate::raster::blend::{luma, mix_rgb};
use crate::raster::color::hsv_to_rgb;
use crate::raster::frame::{Frame, render_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Palette {
    Cyberpunk,
    Vaporwave,
    Infrared,
    Rainbow,
}

impl Palette {
    /// 256-entry table indexed by luma. Only `Cyberpunk` depends on time.
    pub(crate) fn table(self, time_secs: f32) -> [[u8; 3]; 256] {
        let mut lut = [[0u8; 3]; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let t = i as f32 / 255.0;
            let rgb = match self {
                Palette::Cyberpunk => hsv_to_rgb(0.6 + t * 0.4 + time_secs * 0.1, 0.9, t),
                Palette::Vaporwave => hsv_to_rgb(0.8 + t * 0.2, 0.7, t),
                Palette::Infrared => [i as f32, 255.0 - i as f32, 128.0],
                Palette::Rainbow => hsv_to_rgb(t, 1.0, 1.0),
            };
            *entry = [to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2])];
        }
        lut
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Lut {
    palette: Palette,
}

impl Lut {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["palette"])?;
        let palette = match p.choice("palette", &["cyberpunk", "vaporwave", "infrared", "rainbow"])? {
            "vaporwave" => Palette::Vaporwave,
            "infrared" => Palette::Infrared,
            "rainbow" => Palette::Rainbow,
            _ => Palette::Cyberpunk,
        };
        Ok(Self { palette })
    }
}

impl Effect for Lut {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let table = self.palette.table(ctx.t());
        Ok(render_rows(frame.width, frame.height, |y, row| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let src = frame.pixel(x as u32, y);
                let idx = to_u8(luma(src)) as usize;
                px.copy_from_slice(&mix_rgb(src, table[idx], intensity));
            }
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/lut.rs"]
mod tests;
