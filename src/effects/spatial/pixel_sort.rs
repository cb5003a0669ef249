use rayon::prelude::*;

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::foundation::math::hash_unit;
use crate::raster::blend::luma;
use crate::raster::frame::Frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug)]
pub(crate) struct PixelSort {
    direction: Direction,
    seed: u64,
}

impl PixelSort {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["direction", "seed"])?;
        let direction = match p.choice("direction", &["horizontal", "vertical"])? {
            "vertical" => Direction::Vertical,
            _ => Direction::Horizontal,
        };
        Ok(Self {
            direction,
            seed: p.u64_or("seed", 0)?,
        })
    }
}

/// Stably sort, by luma, every maximal run of at least two pixels whose luma lies in `[lo, 255]`.
pub(crate) fn sort_runs(line: &mut [[u8; 4]], lo: f32) {
    let in_band = |px: &[u8; 4]| luma(*px) >= lo;
    let mut start = 0;
    while start < line.len() {
        if !in_band(&line[start]) {
            start += 1;
            continue;
        }
        let mut end = start + 1;
        while end < line.len() && in_band(&line[end]) {
            end += 1;
        }
        if end - start >= 2 {
            line[start..end].sort_by(|a, b| luma(*a).total_cmp(&luma(*b)));
        }
        start = end;
    }
}

impl Effect for PixelSort {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        if intensity == 0.0 {
            return Ok(frame.clone());
        }
        let lo = 255.0 * (1.0 - intensity) * 0.8;
        let (w, h) = (frame.width, frame.height);
        let (lines, len) = match self.direction {
            Direction::Horizontal => (h, w),
            Direction::Vertical => (w, h),
        };
        let at = |line: u32, i: u32| match self.direction {
            Direction::Horizontal => (i, line),
            Direction::Vertical => (line, i),
        };
        let seed = self.seed ^ ctx.index.0;

        let sorted: Vec<Option<Vec<[u8; 4]>>> = (0..lines)
            .into_par_iter()
            .map(|line| {
                if hash_unit(seed, u64::from(line), 0) >= intensity {
                    return None;
                }
                let mut px: Vec<[u8; 4]> = (0..len)
                    .map(|i| {
                        let (x, y) = at(line, i);
                        frame.pixel(x, y)
                    })
                    .collect();
                sort_runs(&mut px, lo);
                Some(px)
            })
            .collect();

        let mut out = frame.clone();
        for (line, px) in sorted.into_iter().enumerate() {
            let Some(px) = px else { continue };
            for (i, p) in px.into_iter().enumerate() {
                let (x, y) = at(line as u32, i as u32);
                out.put_pixel(x, y, p);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/pixel_sort.rs"]
mod tests;
