use crate::foundation::math::{mul_div255_u8, to_u8};

/// Rec.601 luma in `[0, 255]`.
pub(crate) fn luma(px: [u8; 4]) -> f32 {
    0.299 * f32::from(px[0]) + 0.587 * f32::from(px[1]) + 0.114 * f32::from(px[2])
}

/// Integer crossfade of all four channels; `t = 0` returns `a` exactly, `t = 1` returns `b`.
pub(crate) fn crossfade(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    let tt = ((t * 255.0).round() as i32).clamp(0, 255) as u16;
    let it = 255u16 - tt;

    let mut out = [0u8; 4];
    for i in 0..4 {
        let av = mul_div255_u8(u16::from(a[i]), it);
        let bv = mul_div255_u8(u16::from(b[i]), tt);
        out[i] = av.saturating_add(bv);
    }
    out
}

/// Crossfade only the color channels towards `rgb`, keeping the alpha of `dst`.
pub(crate) fn mix_rgb(dst: [u8; 4], rgb: [u8; 3], t: f32) -> [u8; 4] {
    let mixed = crossfade(dst, [rgb[0], rgb[1], rgb[2], dst[3]], t);
    [mixed[0], mixed[1], mixed[2], dst[3]]
}

/// Add `rgb * scale` to the color channels with saturation.
pub(crate) fn add_rgb(dst: [u8; 4], rgb: [f32; 3], scale: f32) -> [u8; 4] {
    [
        to_u8(f32::from(dst[0]) + rgb[0] * scale),
        to_u8(f32::from(dst[1]) + rgb[1] * scale),
        to_u8(f32::from(dst[2]) + rgb[2] * scale),
        dst[3],
    ]
}

/// Multiply the color channels by `factor`.
pub(crate) fn scale_rgb(px: [u8; 4], factor: f32) -> [u8; 4] {
    [
        to_u8(f32::from(px[0]) * factor),
        to_u8(f32::from(px[1]) * factor),
        to_u8(f32::from(px[2]) * factor),
        px[3],
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blend.rs"]
mod tests;
