use rayon::prelude::*;

use crate::foundation::error::{FramefxError, FramefxResult};
use crate::raster::frame::Frame;

/// Separable Gaussian blur over all four channels with replicate-edge addressing.
///
/// Weights are quantized to Q16 so the result is deterministic across platforms.
pub(crate) fn blur_frame(src: &Frame, radius: u32, sigma: f32) -> FramefxResult<Frame> {
    src.validate()?;
    if radius == 0 {
        return Ok(src.clone());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; src.data.len()];
    let mut out = vec![0u8; src.data.len()];

    horizontal_pass(&src.data, &mut tmp, src.width, &kernel);
    vertical_pass(&tmp, &mut out, src.width, src.height, &kernel);
    Frame::new(src.width, src.height, out)
}

/// Separable Gaussian blur of a single `f32` plane.
pub(crate) fn blur_plane(
    src: &[f32],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> FramefxResult<Vec<f32>> {
    if src.len() != width as usize * height as usize {
        return Err(FramefxError::invalid_frame(
            "blur_plane expects src matching width*height",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }
    let weights = gaussian_weights(radius, sigma)?;
    let r = radius as i64;
    let w = width as usize;
    let h = height as i64;

    let mut tmp = vec![0f32; src.len()];
    tmp.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        let base = y * w;
        for (x, out) in row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (ki, &kw) in weights.iter().enumerate() {
                let sx = (x as i64 + ki as i64 - r).clamp(0, w as i64 - 1) as usize;
                acc += kw * src[base + sx];
            }
            *out = acc;
        }
    });

    let mut out = vec![0f32; src.len()];
    out.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        for (x, o) in row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (ki, &kw) in weights.iter().enumerate() {
                let sy = (y as i64 + ki as i64 - r).clamp(0, h - 1) as usize;
                acc += kw * tmp[sy * w + x];
            }
            *o = acc;
        }
    });
    Ok(out)
}

fn gaussian_weights(radius: u32, sigma: f32) -> FramefxResult<Vec<f32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(FramefxError::invalid_config("blur sigma must be > 0"));
    }
    let r = radius as i32;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let raw: Vec<f64> = (-r..=r)
        .map(|i| (-f64::from(i * i) / denom).exp())
        .collect();
    let sum: f64 = raw.iter().sum();
    if sum <= 0.0 {
        return Err(FramefxError::invariant("gaussian kernel sum is zero"));
    }
    Ok(raw.into_iter().map(|w| (w / sum) as f32).collect())
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> FramefxResult<Vec<u32>> {
    let weights_f = gaussian_weights(radius, sigma)?;

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = (f64::from(wf) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let target: i64 = 65536;
    let delta = target - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let mid_val = i64::from(weights[mid]);
        let new_mid = (mid_val + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let row_bytes = width as usize * 4;
    dst.par_chunks_mut(row_bytes)
        .zip(src.par_chunks(row_bytes))
        .for_each(|(out_row, in_row)| {
            for x in 0..w {
                let mut acc = [0u64; 4];
                for (ki, &kw) in k.iter().enumerate() {
                    let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                    let idx = sx as usize * 4;
                    for c in 0..4 {
                        acc[c] += u64::from(kw) * u64::from(in_row[idx + c]);
                    }
                }
                let out_idx = x as usize * 4;
                for c in 0..4 {
                    out_row[out_idx + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as usize;
    let h = height as i32;
    dst.par_chunks_mut(w * 4)
        .enumerate()
        .for_each(|(y, out_row)| {
            for x in 0..w {
                let mut acc = [0u64; 4];
                for (ki, &kw) in k.iter().enumerate() {
                    let sy = (y as i32 + ki as i32 - radius).clamp(0, h - 1);
                    let idx = (sy as usize * w + x) * 4;
                    for c in 0..4 {
                        acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                    }
                }
                for c in 0..4 {
                    out_row[x * 4 + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;
