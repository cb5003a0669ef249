use kurbo::Point;

use crate::raster::blend::mix_rgb;
use crate::raster::frame::Frame;

/// Blend a filled disc of `color` over `dst`.
pub(crate) fn blend_dot(dst: &mut Frame, center: Point, radius: f64, color: [u8; 3], opacity: f32) {
    if opacity <= 0.0 || radius <= 0.0 {
        return;
    }
    let r2 = radius * radius;
    let x0 = (center.x - radius).floor().max(0.0) as i64;
    let y0 = (center.y - radius).floor().max(0.0) as i64;
    let x1 = (center.x + radius).ceil().min(f64::from(dst.width) - 1.0) as i64;
    let y1 = (center.y + radius).ceil().min(f64::from(dst.height) - 1.0) as i64;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - center.x;
            let dy = y as f64 - center.y;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            blend_px(dst, x, y, color, opacity);
        }
    }
}

/// Blend a 1px line from `a` to `b` over `dst` using DDA stepping.
pub(crate) fn blend_line(dst: &mut Frame, a: Point, b: Point, color: [u8; 3], opacity: f32) {
    if opacity <= 0.0 {
        return;
    }
    let steps = (b.x - a.x).abs().max((b.y - a.y).abs()).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let p = a.lerp(b, t);
        blend_px(dst, p.x.round() as i64, p.y.round() as i64, color, opacity);
    }
}

fn blend_px(dst: &mut Frame, x: i64, y: i64, color: [u8; 3], opacity: f32) {
    if x < 0 || y < 0 || x >= i64::from(dst.width) || y >= i64::from(dst.height) {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    let out = mix_rgb(dst.pixel(x, y), color, opacity);
    dst.put_pixel(x, y, out);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/draw.rs"]
mod tests;
