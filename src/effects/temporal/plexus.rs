use kurbo::{Point, Vec2};

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::noise::rng::FxRng;
use crate::raster::draw::{blend_dot, blend_line};
use crate::raster::frame::Frame;

#[derive(Clone, Debug)]
pub(crate) struct PlexusState {
    width: u32,
    height: u32,
    pub(crate) pos: Vec<Point>,
    pub(crate) vel: Vec<Vec2>,
}

impl PlexusState {
    fn seed(width: u32, height: u32, count: u32, seed: u64) -> Self {
        let mut rng = FxRng::seeded(seed);
        let mut pos = Vec::with_capacity(count as usize);
        let mut vel = Vec::with_capacity(count as usize);
        for _ in 0..count {
            pos.push(Point::new(
                rng.range(0.0, f64::from(width)),
                rng.range(0.0, f64::from(height)),
            ));
            vel.push(Vec2::new(rng.range(-1.0, 1.0), rng.range(-1.0, 1.0)));
        }
        Self {
            width,
            height,
            pos,
            vel,
        }
    }

    /// Advance every point by `v * scale`, reflecting off the frame edges.
    fn advance(&mut self, scale: f64) {
        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        for (p, v) in self.pos.iter_mut().zip(self.vel.iter_mut()) {
            *p += *v * scale;
            (p.x, v.x) = bounce(p.x, v.x, max_x);
            (p.y, v.y) = bounce(p.y, v.y, max_y);
        }
    }
}

fn bounce(mut x: f64, mut v: f64, max: f64) -> (f64, f64) {
    if x < 0.0 {
        x = -x;
        v = -v;
    } else if x > max {
        x = 2.0 * max - x;
        v = -v;
    }
    (x.clamp(0.0, max), v)
}

#[derive(Clone, Debug)]
pub(crate) struct Plexus {
    count: u32,
    seed: u64,
    speed: f64,
    max_distance: f64,
    color: [u8; 3],
    pub(crate) state: Option<PlexusState>,
}

impl Plexus {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["count", "seed", "speed", "max_distance", "color"])?;
        Ok(Self {
            count: p.u32_in("count", 100, 1, 2000)?,
            seed: p.u64_or("seed", 0)?,
            speed: f64::from(p.f32_in("speed", 1.0, 0.0, 100.0)?),
            max_distance: f64::from(p.f32_in("max_distance", 150.0, 1.0, 10_000.0)?),
            color: p.rgb_or("color", [255, 255, 255])?,
            state: None,
        })
    }

    /// Connection distance at `intensity`.
    pub(crate) fn threshold(&self, intensity: f32) -> f64 {
        self.max_distance * (1.0 / 3.0 + 2.0 / 3.0 * f64::from(intensity))
    }
}

impl Effect for Plexus {
    fn apply(&mut self, frame: &Frame, intensity: f32, _ctx: &TickCtx) -> FramefxResult<Frame> {
        let fits = matches!(&self.state, Some(s) if s.width == frame.width && s.height == frame.height);
        if !fits {
            tracing::debug!(count = self.count, seed = self.seed, "plexus: seeding points");
            self.state = Some(PlexusState::seed(
                frame.width,
                frame.height,
                self.count,
                self.seed,
            ));
        }
        let threshold = self.threshold(intensity);
        let scale = self.speed * f64::from(intensity);
        let Some(state) = self.state.as_mut() else {
            return Ok(frame.clone());
        };
        state.advance(scale);
        if intensity == 0.0 {
            return Ok(frame.clone());
        }

        let mut out = frame.clone();
        for (i, &a) in state.pos.iter().enumerate() {
            for &b in &state.pos[i + 1..] {
                let d = a.distance(b);
                if d < threshold {
                    let opacity = ((1.0 - d / threshold) as f32) * intensity;
                    blend_line(&mut out, a, b, self.color, opacity);
                }
            }
        }
        let radius = (2.0 * f64::from(intensity)).round().max(1.0);
        for &p in &state.pos {
            blend_dot(&mut out, p, radius, self.color, intensity);
        }
        Ok(out)
    }

    fn reset(&mut self) {
        self.state = None;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/temporal/plexus.rs"]
mod tests;
