use crate::foundation::core::Canvas;
use crate::foundation::error::FramefxResult;
use crate::foundation::math::to_u8;
use crate::noise::rng::FxRng;
use crate::raster::blur::blur_frame;
use crate::raster::frame::Frame;
use crate::source::FrameSource;

const BLUR_PASSES: u32 = 3;
const BLUR_RADIUS: u32 = 7;
const BLUR_SIGMA: f32 = 2.6;

/// Seeded abstract base image: blurred color noise mixed half and half with an RGB gradient.
#[derive(Clone, Debug)]
pub struct GenerativeSource {
    seed: u64,
    base: Frame,
}

impl GenerativeSource {
    /// Generate the base image for `canvas`. The same seed always yields the same pixels.
    #[tracing::instrument]
    pub fn new(canvas: Canvas, seed: u64) -> FramefxResult<Self> {
        Ok(Self {
            seed,
            base: generate(canvas, seed)?,
        })
    }

    /// Seed the base image was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

fn generate(canvas: Canvas, seed: u64) -> FramefxResult<Frame> {
    let Canvas { width, height } = canvas;
    let mut rng = FxRng::seeded(seed);
    let mut data = vec![255u8; canvas.pixel_count() * Frame::CHANNELS];
    for px in data.chunks_exact_mut(4) {
        px[0] = rng.byte();
        px[1] = rng.byte();
        px[2] = rng.byte();
    }
    let mut noise = Frame::new(width, height, data)?;
    for _ in 0..BLUR_PASSES {
        noise = blur_frame(&noise, BLUR_RADIUS, BLUR_SIGMA)?;
    }

    let (fw, fh) = (width as f32, height as f32);
    Frame::from_fn(width, height, |x, y| {
        let n = noise.pixel(x, y);
        let gradient = [
            x as f32 / fw * 255.0,
            y as f32 / fh * 255.0,
            (1.0 - x as f32 / fw) * 255.0,
        ];
        [
            to_u8((f32::from(n[0]) + gradient[0]) * 0.5),
            to_u8((f32::from(n[1]) + gradient[1]) * 0.5),
            to_u8((f32::from(n[2]) + gradient[2]) * 0.5),
            255,
        ]
    })
}

impl FrameSource for GenerativeSource {
    fn canvas(&self) -> Canvas {
        self.base.canvas()
    }

    fn next_frame(&mut self) -> FramefxResult<Frame> {
        Ok(self.base.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/generative.rs"]
mod tests;
