use std::path::Path;

use anyhow::Context as _;
use image::imageops::{self, FilterType};

use crate::foundation::core::Canvas;
use crate::foundation::error::FramefxResult;
use crate::raster::frame::Frame;
use crate::source::FrameSource;

/// Pixel rectangle inside a source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Largest centered rectangle of `src_w x src_h` with the aspect ratio of `target`.
///
/// The wider dimension is trimmed symmetrically; odd remainders leave the extra pixel on the
/// right or bottom.
pub fn center_crop_rect(src_w: u32, src_h: u32, target: Canvas) -> CropRect {
    let (sw, sh) = (u64::from(src_w), u64::from(src_h));
    let (tw, th) = (u64::from(target.width), u64::from(target.height));
    if sw * th > sh * tw {
        let new_w = (sh * tw / th).clamp(1, sw) as u32;
        CropRect {
            x: (src_w - new_w) / 2,
            y: 0,
            width: new_w,
            height: src_h,
        }
    } else {
        let new_h = (sw * th / tw).clamp(1, sh) as u32;
        CropRect {
            x: 0,
            y: (src_h - new_h) / 2,
            width: src_w,
            height: new_h,
        }
    }
}

/// Center-crop `img` to the aspect ratio of `target`, then Lanczos-resize it to `target`.
pub fn fit_image(img: &image::RgbaImage, target: Canvas) -> FramefxResult<Frame> {
    let rect = center_crop_rect(img.width(), img.height(), target);
    let cropped = imageops::crop_imm(img, rect.x, rect.y, rect.width, rect.height).to_image();
    let fitted = if cropped.dimensions() == (target.width, target.height) {
        cropped
    } else {
        imageops::resize(&cropped, target.width, target.height, FilterType::Lanczos3)
    };
    Frame::from_rgba_image(fitted)
}

/// Repeats one still image, prepared once at construction.
#[derive(Clone, Debug)]
pub struct StaticImageSource {
    base: Frame,
}

impl StaticImageSource {
    /// Decode an image file and fit it to `target`.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>, target: Canvas) -> FramefxResult<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("decode image '{}'", path.display()))?
            .to_rgba8();
        tracing::debug!(
            src_width = img.width(),
            src_height = img.height(),
            "loaded source image"
        );
        Self::from_image(&img, target)
    }

    /// Fit an already decoded image to `target`.
    pub fn from_image(img: &image::RgbaImage, target: Canvas) -> FramefxResult<Self> {
        Ok(Self {
            base: fit_image(img, target)?,
        })
    }

    /// Use `frame` unchanged as the base frame.
    pub fn from_frame(frame: Frame) -> FramefxResult<Self> {
        frame.validate()?;
        Ok(Self { base: frame })
    }

    /// The prepared base frame.
    pub fn base(&self) -> &Frame {
        &self.base
    }
}

impl FrameSource for StaticImageSource {
    fn canvas(&self) -> Canvas {
        self.base.canvas()
    }

    fn next_frame(&mut self) -> FramefxResult<Frame> {
        Ok(self.base.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/static_image.rs"]
mod tests;
