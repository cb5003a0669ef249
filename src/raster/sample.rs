use crate::foundation::math::to_u8;
use crate::raster::frame::{Frame, render_rows};

/// Replicate-edge addressing.
pub(crate) fn pixel_clamped(src: &Frame, x: i64, y: i64) -> [u8; 4] {
    let x = x.clamp(0, i64::from(src.width) - 1) as u32;
    let y = y.clamp(0, i64::from(src.height) - 1) as u32;
    src.pixel(x, y)
}

/// Wrap-around addressing.
pub(crate) fn pixel_wrapped(src: &Frame, x: i64, y: i64) -> [u8; 4] {
    let x = x.rem_euclid(i64::from(src.width)) as u32;
    let y = y.rem_euclid(i64::from(src.height)) as u32;
    src.pixel(x, y)
}

/// Bilinear sample at a fractional position, with coordinates clamped to the frame.
///
/// Integer coordinates return the exact source pixel.
pub(crate) fn sample_bilinear(src: &Frame, fx: f32, fy: f32) -> [u8; 4] {
    let max_x = (src.width - 1) as f32;
    let max_y = (src.height - 1) as f32;
    let fx = if fx.is_finite() { fx.clamp(0.0, max_x) } else { 0.0 };
    let fy = if fy.is_finite() { fy.clamp(0.0, max_y) } else { 0.0 };

    let x0 = fx.floor() as u32;
    let y0 = fy.floor() as u32;
    let x1 = (x0 + 1).min(src.width - 1);
    let y1 = (y0 + 1).min(src.height - 1);
    let tx = fx - x0 as f32;
    let ty = fy - y0 as f32;

    if tx == 0.0 && ty == 0.0 {
        return src.pixel(x0, y0);
    }

    let p00 = src.pixel(x0, y0);
    let p10 = src.pixel(x1, y0);
    let p01 = src.pixel(x0, y1);
    let p11 = src.pixel(x1, y1);

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = f32::from(p00[c]) * (1.0 - tx) + f32::from(p10[c]) * tx;
        let bottom = f32::from(p01[c]) * (1.0 - tx) + f32::from(p11[c]) * tx;
        out[c] = to_u8(top * (1.0 - ty) + bottom * ty);
    }
    out
}

/// Inverse-map every output pixel to a source position and sample it bilinearly.
pub(crate) fn remap<F>(src: &Frame, map: F) -> Frame
where
    F: Fn(u32, u32) -> (f32, f32) + Sync,
{
    render_rows(src.width, src.height, |y, row| {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let (sx, sy) = map(x as u32, y);
            px.copy_from_slice(&sample_bilinear(src, sx, sy));
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/sample.rs"]
mod tests;
