use kurbo::{Point, Vec2};

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::raster::blend::add_rgb;
use crate::raster::blur::blur_plane;
use crate::raster::frame::{Frame, render_rows};

const DEPTH_BLUR_RADIUS: u32 = 10;
const LIGHTS: usize = 5;
const ORBIT_DEG_PER_SEC: f64 = 20.0;
const LIGHT_SPACING_DEG: f64 = 36.0;
const ORBIT_FRACTION: f64 = 0.4;

#[derive(Clone, Debug)]
pub(crate) struct Volumetric {
    fog_color: [u8; 3],
    rays: bool,
}

impl Volumetric {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["fog_color", "rays"])?;
        Ok(Self {
            fog_color: p.rgb_or("fog_color", [200, 220, 255])?,
            rays: p.bool_or("rays", true)?,
        })
    }
}

/// Positions of the orbiting light sources at `time_secs`.
pub(crate) fn light_positions(width: u32, height: u32, time_secs: f64) -> [Point; LIGHTS] {
    let center = Point::new(f64::from(width / 2), f64::from(height / 2));
    let radii = Vec2::new(
        f64::from(width) * ORBIT_FRACTION,
        f64::from(height) * ORBIT_FRACTION,
    );
    std::array::from_fn(|k| {
        let deg = time_secs * ORBIT_DEG_PER_SEC + k as f64 * LIGHT_SPACING_DEG;
        let dir = Vec2::from_angle(deg.to_radians());
        center + Vec2::new(dir.x * radii.x, dir.y * radii.y)
    })
}

impl Effect for Volumetric {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let (w, h) = (frame.width, frame.height);
        let luma: Vec<f32> = frame.luma_plane().into_iter().map(|l| l / 255.0).collect();
        let depth = blur_plane(&luma, w, h, DEPTH_BLUR_RADIUS, DEPTH_BLUR_RADIUS as f32 / 2.0)?;
        let fog = self.fog_color.map(f32::from);
        let lights = if self.rays {
            light_positions(w, h, ctx.time_secs).to_vec()
        } else {
            Vec::new()
        };
        let falloff = 50.0 + 100.0 * f64::from(intensity);

        Ok(render_rows(w, h, |y, row| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let d = depth[y as usize * w as usize + x];
                let p = Point::new(x as f64, f64::from(y));
                let rays: f64 = lights
                    .iter()
                    .map(|l| (-p.distance(*l) / falloff).exp())
                    .sum();
                let ray = (rays * 50.0) as f32;
                let add = [fog[0] * d + ray, fog[1] * d + ray, fog[2] * d + ray];
                px.copy_from_slice(&add_rgb(frame.pixel(x as u32, y), add, intensity));
            }
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/volumetric.rs"]
mod tests;
