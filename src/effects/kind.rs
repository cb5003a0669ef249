use std::fmt;
use std::str::FromStr;

use crate::foundation::error::FramefxError;

/// Closed set of effect kinds understood by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EffectKind {
    /// Decaying blend of the previous output into the current frame.
    Feedback,
    /// Seeded noise-field displacement.
    Displace,
    /// Block-based motion estimation used to smear the frame along its motion.
    OpticalFlow,
    /// Horizontal chromatic split of the red and blue channels.
    RgbSplit,
    /// Polar mirror symmetry around the frame center.
    Kaleidoscope,
    /// Luminance-banded run sorting along rows or columns.
    PixelSort,
    /// Blurred, colorized Sobel edges added over the source.
    EdgeGlow,
    /// Channel quantization with optional dithering.
    Posterize,
    /// Luma-indexed palette remap.
    Lut,
    /// Sinusoidal refraction warp with a light blur.
    HeatHaze,
    /// Luma-driven flow field of drawn particles.
    Particles,
    /// Bouncing points joined by distance-faded lines.
    Plexus,
    /// Sample-and-hold of frames for a number of ticks.
    Strobe,
    /// Darkened, rolling, wobbling rows.
    Scanlines,
    /// Rows taken from progressively older frames.
    SlitScan,
    /// Depth-weighted fog with orbiting light rays.
    Volumetric,
    /// Mandelbrot or Julia escape-time overlay.
    Fractal,
    /// Interference gratings with channel offsets and dimmed rows.
    Hologram,
}

impl EffectKind {
    /// Every kind, in canonical listing order.
    pub const ALL: [EffectKind; 18] = [
        EffectKind::Feedback,
        EffectKind::Displace,
        EffectKind::OpticalFlow,
        EffectKind::RgbSplit,
        EffectKind::Kaleidoscope,
        EffectKind::PixelSort,
        EffectKind::EdgeGlow,
        EffectKind::Posterize,
        EffectKind::Lut,
        EffectKind::HeatHaze,
        EffectKind::Particles,
        EffectKind::Plexus,
        EffectKind::Strobe,
        EffectKind::Scanlines,
        EffectKind::SlitScan,
        EffectKind::Volumetric,
        EffectKind::Fractal,
        EffectKind::Hologram,
    ];

    /// Canonical `snake_case` name used in configs and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Feedback => "feedback",
            EffectKind::Displace => "displace",
            EffectKind::OpticalFlow => "optical_flow",
            EffectKind::RgbSplit => "rgb_split",
            EffectKind::Kaleidoscope => "kaleidoscope",
            EffectKind::PixelSort => "pixel_sort",
            EffectKind::EdgeGlow => "edge_glow",
            EffectKind::Posterize => "posterize",
            EffectKind::Lut => "lut",
            EffectKind::HeatHaze => "heat_haze",
            EffectKind::Particles => "particles",
            EffectKind::Plexus => "plexus",
            EffectKind::Strobe => "strobe",
            EffectKind::Scanlines => "scanlines",
            EffectKind::SlitScan => "slit_scan",
            EffectKind::Volumetric => "volumetric",
            EffectKind::Fractal => "fractal",
            EffectKind::Hologram => "hologram",
        }
    }

    /// One-line human description.
    pub fn description(self) -> &'static str {
        match self {
            EffectKind::Feedback => "video feedback loop with decaying trails",
            EffectKind::Displace => "noise-based displacement mapping",
            EffectKind::OpticalFlow => "motion estimation used to smear pixels along their motion",
            EffectKind::RgbSplit => "chromatic aberration split of the red and blue channels",
            EffectKind::Kaleidoscope => "kaleidoscopic mirror symmetry",
            EffectKind::PixelSort => "glitch-style sorting of bright pixel runs",
            EffectKind::EdgeGlow => "neon glow along detected edges",
            EffectKind::Posterize => "color quantization with dithering",
            EffectKind::Lut => "palette color grading driven by luminance",
            EffectKind::HeatHaze => "heat shimmer refraction",
            EffectKind::Particles => "flow-field particle system",
            EffectKind::Plexus => "connected point network",
            EffectKind::Strobe => "frame hold strobe",
            EffectKind::Scanlines => "CRT scanlines with roll and wobble",
            EffectKind::SlitScan => "time displacement per row",
            EffectKind::Volumetric => "volumetric fog and light rays",
            EffectKind::Fractal => "Mandelbrot or Julia fractal overlay",
            EffectKind::Hologram => "holographic interference pattern",
        }
    }

    /// `true` for kinds whose output depends on previously observed frames.
    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            EffectKind::Feedback
                | EffectKind::OpticalFlow
                | EffectKind::Particles
                | EffectKind::Plexus
                | EffectKind::Strobe
                | EffectKind::SlitScan
        )
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectKind {
    type Err = FramefxError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        EffectKind::ALL
            .into_iter()
            .find(|k| k.name() == norm)
            .ok_or_else(|| FramefxError::unknown_kind(s.trim()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/kind.rs"]
mod tests;
