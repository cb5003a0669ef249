use rayon::prelude::*;

use crate::foundation::core::Canvas;
use crate::foundation::error::{FramefxError, FramefxResult};

/// One frame of straight-alpha RGBA8 pixels, row-major, tightly packed.
///
/// This is the only pixel representation used by the pipeline. Effects read a `&Frame` and
/// return a new `Frame`; they never alias their input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes, RGBA order.
    pub data: Vec<u8>,
}

impl Frame {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 4;

    /// Wrap an existing buffer, validating its size.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> FramefxResult<Self> {
        let frame = Self {
            width,
            height,
            data,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// Frame where every pixel is `px`.
    pub fn filled(width: u32, height: u32, px: [u8; 4]) -> FramefxResult<Self> {
        let len = expected_len(width, height)?;
        let mut data = vec![0u8; len];
        for c in data.chunks_exact_mut(4) {
            c.copy_from_slice(&px);
        }
        Self::new(width, height, data)
    }

    /// Build a frame by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        f: impl Fn(u32, u32) -> [u8; 4] + Sync,
    ) -> FramefxResult<Self> {
        expected_len(width, height)?;
        Ok(render_rows(width, height, |y, row| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                px.copy_from_slice(&f(x as u32, y));
            }
        }))
    }

    /// Check dimensions and buffer length.
    pub fn validate(&self) -> FramefxResult<()> {
        let expected = expected_len(self.width, self.height)?;
        if self.data.len() != expected {
            return Err(FramefxError::invalid_frame(format!(
                "buffer length {} does not match {}x{}x4 = {expected}",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Return `true` when both frames have identical dimensions.
    pub fn same_size(&self, other: &Frame) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Byte length of one row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }

    /// Byte offset of pixel `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * Self::CHANNELS
    }

    /// Read pixel `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite pixel `(x, y)`. Panics when out of bounds.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Rec.601 luma of pixel `(x, y)` in `[0, 255]`.
    pub fn luma_at(&self, x: u32, y: u32) -> f32 {
        crate::raster::blend::luma(self.pixel(x, y))
    }

    /// Luma of every pixel, row-major.
    pub fn luma_plane(&self) -> Vec<f32> {
        self.data
            .par_chunks_exact(4)
            .map(|px| crate::raster::blend::luma([px[0], px[1], px[2], px[3]]))
            .collect()
    }

    /// Convert from an `image` RGBA buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> FramefxResult<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert into an `image` RGBA buffer.
    pub fn to_rgba_image(&self) -> FramefxResult<image::RgbaImage> {
        self.validate()?;
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| FramefxError::invalid_frame("buffer does not fit image dimensions"))
    }
}

fn expected_len(width: u32, height: u32) -> FramefxResult<usize> {
    if width == 0 || height == 0 {
        return Err(FramefxError::invalid_frame(format!(
            "frame must be non-empty, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(Frame::CHANNELS))
        .ok_or_else(|| FramefxError::invalid_frame("frame buffer size overflow"))
}

/// Allocate a `width x height` frame and fill each row in parallel.
///
/// `f` receives the row index and that row's bytes. Rows have no dependency on each other.
pub(crate) fn render_rows<F>(width: u32, height: u32, f: F) -> Frame
where
    F: Fn(u32, &mut [u8]) + Sync,
{
    let row_bytes = width as usize * Frame::CHANNELS;
    let mut data = vec![0u8; row_bytes * height as usize];
    data.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| f(y as u32, row));
    Frame {
        width,
        height,
        data,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/frame.rs"]
mod tests;
