use kurbo::Vec2;
use rayon::prelude::*;

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::raster::frame::Frame;
use crate::raster::sample::remap;

const MIN_DET: f64 = 1e-3;

#[derive(Clone, Debug)]
struct PrevLuma {
    width: u32,
    height: u32,
    luma: Vec<f32>,
}

#[derive(Clone, Debug)]
pub(crate) struct OpticalFlow {
    block: u32,
    gain: f32,
    prev: Option<PrevLuma>,
}

impl OpticalFlow {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["block", "gain"])?;
        Ok(Self {
            block: p.u32_in("block", 8, 2, 128)?,
            gain: p.f32_in("gain", 10.0, 0.0, 100.0)?,
            prev: None,
        })
    }
}

/// Block-wise motion vectors between two luma planes.
#[derive(Clone, Debug)]
pub(crate) struct FlowField {
    pub(crate) block: u32,
    pub(crate) cols: u32,
    pub(crate) rows: u32,
    pub(crate) vectors: Vec<Vec2>,
}

impl FlowField {
    /// Lucas–Kanade least-squares estimate per `block x block` tile, clamped to `4 * block` px.
    pub(crate) fn estimate(prev: &[f32], cur: &[f32], width: u32, height: u32, block: u32) -> Self {
        let cols = width.div_ceil(block);
        let rows = height.div_ceil(block);
        let w = width as i64;
        let h = height as i64;
        let at = |plane: &[f32], x: i64, y: i64| -> f64 {
            f64::from(plane[(y.clamp(0, h - 1) * w + x.clamp(0, w - 1)) as usize])
        };
        let limit = 4.0 * f64::from(block);

        let vectors = (0..rows * cols)
            .into_par_iter()
            .map(|b| {
                let (bx, by) = (i64::from(b % cols), i64::from(b / cols));
                let (mut sxx, mut syy, mut sxy, mut sxt, mut syt) = (0.0, 0.0, 0.0, 0.0, 0.0);
                for y in by * i64::from(block)..((by + 1) * i64::from(block)).min(h) {
                    for x in bx * i64::from(block)..((bx + 1) * i64::from(block)).min(w) {
                        let ix = 0.25
                            * (at(prev, x + 1, y) - at(prev, x - 1, y) + at(cur, x + 1, y)
                                - at(cur, x - 1, y));
                        let iy = 0.25
                            * (at(prev, x, y + 1) - at(prev, x, y - 1) + at(cur, x, y + 1)
                                - at(cur, x, y - 1));
                        let it = at(cur, x, y) - at(prev, x, y);
                        sxx += ix * ix;
                        syy += iy * iy;
                        sxy += ix * iy;
                        sxt += ix * it;
                        syt += iy * it;
                    }
                }
                let det = sxx * syy - sxy * sxy;
                if det.abs() < MIN_DET {
                    return Vec2::ZERO;
                }
                let u = (-syy * sxt + sxy * syt) / det;
                let v = (sxy * sxt - sxx * syt) / det;
                let flow = Vec2::new(u, v);
                let len = flow.hypot();
                if len > limit { flow * (limit / len) } else { flow }
            })
            .collect();

        Self {
            block,
            cols,
            rows,
            vectors,
        }
    }

    fn vector(&self, col: i64, row: i64) -> Vec2 {
        let c = col.clamp(0, i64::from(self.cols) - 1) as u32;
        let r = row.clamp(0, i64::from(self.rows) - 1) as u32;
        self.vectors[(r * self.cols + c) as usize]
    }

    /// Bilinear interpolation between block centers.
    pub(crate) fn sample(&self, x: f64, y: f64) -> Vec2 {
        let b = f64::from(self.block);
        let gx = (x - b * 0.5) / b;
        let gy = (y - b * 0.5) / b;
        let (c0, r0) = (gx.floor(), gy.floor());
        let (tx, ty) = ((gx - c0).clamp(0.0, 1.0), (gy - r0).clamp(0.0, 1.0));
        let (c0, r0) = (c0 as i64, r0 as i64);
        let top = self.vector(c0, r0).lerp(self.vector(c0 + 1, r0), tx);
        let bottom = self.vector(c0, r0 + 1).lerp(self.vector(c0 + 1, r0 + 1), tx);
        top.lerp(bottom, ty)
    }
}

impl Effect for OpticalFlow {
    fn apply(&mut self, frame: &Frame, intensity: f32, _ctx: &TickCtx) -> FramefxResult<Frame> {
        let cur = frame.luma_plane();
        let prev = match self.prev.take() {
            Some(p) if p.width == frame.width && p.height == frame.height => Some(p),
            _ => {
                tracing::debug!(
                    width = frame.width,
                    height = frame.height,
                    "optical_flow: seeding previous frame"
                );
                None
            }
        };
        let out = match prev {
            Some(prev) if intensity > 0.0 && self.gain > 0.0 => {
                let field = FlowField::estimate(&prev.luma, &cur, frame.width, frame.height, self.block);
                let scale = f64::from(self.gain * intensity);
                remap(frame, |x, y| {
                    let d = field.sample(f64::from(x), f64::from(y)) * scale;
                    ((f64::from(x) + d.x) as f32, (f64::from(y) + d.y) as f32)
                })
            }
            _ => frame.clone(),
        };
        self.prev = Some(PrevLuma {
            width: frame.width,
            height: frame.height,
            luma: cur,
        });
        Ok(out)
    }

    fn reset(&mut self) {
        self.prev = None;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/temporal/optical_flow.rs"]
mod tests;
