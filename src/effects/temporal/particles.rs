use std::f64::consts::TAU;

use kurbo::{Point, Vec2};

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::foundation::math::to_u8;
use crate::noise::rng::FxRng;
use crate::raster::blend::luma;
use crate::raster::draw::blend_dot;
use crate::raster::frame::Frame;
use crate::raster::sample::pixel_clamped;

const DAMPING: f64 = 0.9;
const FORCE: f64 = 2.0;
const WHITE_LIFT: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeMode {
    Wrap,
    Respawn,
}

#[derive(Clone, Debug)]
pub(crate) struct ParticleState {
    width: u32,
    height: u32,
    pub(crate) pos: Vec<Point>,
    pub(crate) vel: Vec<Vec2>,
    rng: FxRng,
}

impl ParticleState {
    fn seed(width: u32, height: u32, count: u32, seed: u64) -> Self {
        let mut rng = FxRng::seeded(seed);
        let pos = (0..count)
            .map(|_| random_point(&mut rng, width, height))
            .collect();
        Self {
            width,
            height,
            pos,
            vel: vec![Vec2::ZERO; count as usize],
            rng,
        }
    }
}

/// `v mod m` in `[0, m)`, guarding against `rem_euclid` rounding up to `m`.
fn wrap(v: f64, m: f64) -> f64 {
    let r = v.rem_euclid(m);
    if r >= m { 0.0 } else { r }
}

fn random_point(rng: &mut FxRng, width: u32, height: u32) -> Point {
    Point::new(
        rng.range(0.0, f64::from(width)),
        rng.range(0.0, f64::from(height)),
    )
}

#[derive(Clone, Debug)]
pub(crate) struct Particles {
    count: u32,
    seed: u64,
    edge: EdgeMode,
    pub(crate) state: Option<ParticleState>,
}

impl Particles {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["count", "seed", "respawn"])?;
        let edge = match p.choice("respawn", &["wrap", "respawn"])? {
            "respawn" => EdgeMode::Respawn,
            _ => EdgeMode::Wrap,
        };
        Ok(Self {
            count: p.u32_in("count", 1000, 1, 100_000)?,
            seed: p.u64_or("seed", 0)?,
            edge,
            state: None,
        })
    }

    fn step(&mut self, frame: &Frame, intensity: f32, t: f64) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let (w, h) = (f64::from(state.width), f64::from(state.height));
        let push = f64::from(intensity) * FORCE;
        for (p, v) in state.pos.iter_mut().zip(state.vel.iter_mut()) {
            let px = pixel_clamped(frame, p.x.floor() as i64, p.y.floor() as i64);
            let angle = TAU * f64::from(luma(px)) / 255.0 + t;
            *v = *v * DAMPING + Vec2::from_angle(angle) * push;
            *p += *v;
            let outside = p.x < 0.0 || p.y < 0.0 || p.x >= w || p.y >= h;
            if !outside {
                continue;
            }
            match self.edge {
                EdgeMode::Wrap => {
                    *p = Point::new(wrap(p.x, w), wrap(p.y, h));
                }
                EdgeMode::Respawn => {
                    *p = random_point(&mut state.rng, state.width, state.height);
                    *v = Vec2::ZERO;
                }
            }
        }
    }
}

impl Effect for Particles {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        let fits = matches!(&self.state, Some(s) if s.width == frame.width && s.height == frame.height);
        if !fits {
            tracing::debug!(
                count = self.count,
                seed = self.seed,
                width = frame.width,
                height = frame.height,
                "particles: seeding"
            );
            self.state = Some(ParticleState::seed(
                frame.width,
                frame.height,
                self.count,
                self.seed,
            ));
        }
        self.step(frame, intensity, ctx.time_secs);

        let Some(state) = self.state.as_ref() else {
            return Ok(frame.clone());
        };
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let radius = (2.0 * intensity).round().max(1.0);
        let mut out = frame.clone();
        let lift = |c: u8| {
            let c = f32::from(c);
            to_u8(c + (255.0 - c) * WHITE_LIFT)
        };
        for p in &state.pos {
            let src = pixel_clamped(frame, p.x.floor() as i64, p.y.floor() as i64);
            let color = [lift(src[0]), lift(src[1]), lift(src[2])];
            blend_dot(&mut out, *p, f64::from(radius), color, intensity);
        }
        Ok(out)
    }

    fn reset(&mut self) {
        self.state = None;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/temporal/particles.rs"]
mod tests;
