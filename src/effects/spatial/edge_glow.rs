use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::foundation::math::smoothstep;
use crate::raster::blend::add_rgb;
use crate::raster::blur::blur_plane;
use crate::raster::color::hsv_to_rgb;
use crate::raster::frame::{Frame, render_rows};

const EDGE_LO: f32 = 40.0;
const EDGE_HI: f32 = 160.0;
const HUE_DEG_PER_SEC: f32 = 50.0;

#[derive(Clone, Debug)]
pub(crate) struct EdgeGlow {
    color: Option<[u8; 3]>,
}

impl EdgeGlow {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["color"])?;
        Ok(Self {
            color: p.opt_rgb("color")?,
        })
    }

    fn glow_rgb(&self, time_secs: f32) -> [f32; 3] {
        match self.color {
            Some(c) => [f32::from(c[0]), f32::from(c[1]), f32::from(c[2])],
            None => hsv_to_rgb(time_secs * HUE_DEG_PER_SEC / 360.0, 1.0, 1.0),
        }
    }
}

/// Sobel gradient magnitude of a luma plane with replicate-edge addressing.
pub(crate) fn sobel_magnitude(luma: &[f32], width: u32, height: u32) -> Vec<f32> {
    let w = width as i64;
    let h = height as i64;
    let at = |x: i64, y: i64| luma[(y.clamp(0, h - 1) * w + x.clamp(0, w - 1)) as usize];
    let mut out = vec![0.0f32; luma.len()];
    for y in 0..h {
        for x in 0..w {
            let gx = at(x + 1, y - 1) + 2.0 * at(x + 1, y) + at(x + 1, y + 1)
                - at(x - 1, y - 1)
                - 2.0 * at(x - 1, y)
                - at(x - 1, y + 1);
            let gy = at(x - 1, y + 1) + 2.0 * at(x, y + 1) + at(x + 1, y + 1)
                - at(x - 1, y - 1)
                - 2.0 * at(x, y - 1)
                - at(x + 1, y - 1);
            out[(y * w + x) as usize] = (gx * gx + gy * gy).sqrt();
        }
    }
    out
}

impl Effect for EdgeGlow {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let (w, h) = (frame.width, frame.height);
        let edges: Vec<f32> = sobel_magnitude(&frame.luma_plane(), w, h)
            .into_iter()
            .map(|m| smoothstep(EDGE_LO, EDGE_HI, m))
            .collect();
        let radius = 2 + (6.0 * intensity).round() as u32;
        let glow = blur_plane(&edges, w, h, radius, radius as f32 / 2.0)?;
        let rgb = self.glow_rgb(ctx.t());
        let gain = 2.0 * intensity;

        Ok(render_rows(w, h, |y, row| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let g = glow[y as usize * w as usize + x];
                let add = [rgb[0] * g, rgb[1] * g, rgb[2] * g];
                px.copy_from_slice(&add_rgb(frame.pixel(x as u32, y), add, gain));
            }
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/edge_glow.rs"]
mod tests;
