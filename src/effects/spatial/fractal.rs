use rayon::prelude::*;

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::node::Effect;
use crate::foundation::error::FramefxResult;
use crate::raster::blend::mix_rgb;
use crate::raster::color::hot_colormap;
use crate::raster::frame::{Frame, render_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Set {
    Mandelbrot,
    Julia,
}

#[derive(Clone, Debug)]
pub(crate) struct Fractal {
    set: Set,
    max_iter: u32,
    opacity: f32,
}

impl Fractal {
    pub(crate) fn from_params(p: Params<'_>) -> FramefxResult<Self> {
        let p = p.only(&["fractal", "max_iter", "opacity"])?;
        let set = match p.choice("fractal", &["mandelbrot", "julia"])? {
            "julia" => Set::Julia,
            _ => Set::Mandelbrot,
        };
        Ok(Self {
            set,
            max_iter: p.u32_in("max_iter", 50, 8, 1000)?,
            opacity: p.f32_in("opacity", 0.5, 0.0, 1.0)?,
        })
    }

    /// Escape counts for every pixel, row-major.
    fn escape_counts(&self, width: u32, height: u32, zoom: f64, t: f64) -> Vec<u32> {
        let (x0, x1, y0, y1, julia_c) = match self.set {
            Set::Mandelbrot => {
                let (ox, oy) = ((t * 0.5).cos() * 0.5, (t * 0.5).sin() * 0.5);
                (-2.5 / zoom + ox, 1.0 / zoom + ox, -1.0 / zoom + oy, 1.0 / zoom + oy, None)
            }
            Set::Julia => {
                let c = (-0.7 + t.cos() * 0.2, 0.27 + t.sin() * 0.2);
                (-1.5 / zoom, 1.5 / zoom, -1.5 / zoom, 1.5 / zoom, Some(c))
            }
        };
        let step = |lo: f64, hi: f64, n: u32| if n > 1 { (hi - lo) / f64::from(n - 1) } else { 0.0 };
        let (sx, sy) = (step(x0, x1, width), step(y0, y1, height));
        let max_iter = self.max_iter;

        let mut counts = vec![0u32; width as usize * height as usize];
        counts
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                let im = y0 + sy * y as f64;
                for (x, out) in row.iter_mut().enumerate() {
                    let re = x0 + sx * x as f64;
                    *out = match julia_c {
                        None => escape_count((0.0, 0.0), (re, im), max_iter),
                        Some(c) => escape_count((re, im), c, max_iter),
                    };
                }
            });
        counts
    }
}

/// Number of iterations of `z = z² + c` survived while `|z| <= 2`, minus one.
pub(crate) fn escape_count(z0: (f64, f64), c: (f64, f64), max_iter: u32) -> u32 {
    let (mut zr, mut zi) = z0;
    let mut last = 0;
    for i in 0..max_iter {
        if zr * zr + zi * zi > 4.0 {
            break;
        }
        let nr = zr * zr - zi * zi + c.0;
        zi = 2.0 * zr * zi + c.1;
        zr = nr;
        last = i;
    }
    last
}

impl Effect for Fractal {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        let weight = self.opacity * intensity;
        if weight == 0.0 {
            return Ok(frame.clone());
        }
        let (w, h) = (frame.width, frame.height);
        let zoom = 1.0 + 3.0 * f64::from(intensity);
        let counts = self.escape_counts(w, h, zoom, ctx.time_secs);
        let max = counts.iter().copied().max().unwrap_or(0).max(1) as f32;

        Ok(render_rows(w, h, |y, row| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let n = counts[y as usize * w as usize + x] as f32 / max;
                let color = hot_colormap(n);
                px.copy_from_slice(&mix_rgb(frame.pixel(x as u32, y), color, weight));
            }
        }))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/spatial/fractal.rs"]
mod tests;
