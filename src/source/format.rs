use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Canvas;
use crate::foundation::error::{FramefxError, FramefxResult};

/// Supported output aspect ratios.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    /// 1:1
    #[default]
    Square,
    /// 3:4
    Portrait3x4,
    /// 4:3
    Landscape4x3,
    /// 9:16
    Portrait9x16,
    /// 16:9
    Landscape16x9,
}

impl AspectRatio {
    /// Every ratio, in listing order.
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Portrait3x4,
        AspectRatio::Landscape4x3,
        AspectRatio::Portrait9x16,
        AspectRatio::Landscape16x9,
    ];

    /// `(width, height)` ratio terms.
    pub fn terms(self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1, 1),
            AspectRatio::Portrait3x4 => (3, 4),
            AspectRatio::Landscape4x3 => (4, 3),
            AspectRatio::Portrait9x16 => (9, 16),
            AspectRatio::Landscape16x9 => (16, 9),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.terms();
        write!(f, "{w}:{h}")
    }
}

impl FromStr for AspectRatio {
    type Err = FramefxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AspectRatio::ALL
            .into_iter()
            .find(|a| a.to_string() == s)
            .ok_or_else(|| {
                FramefxError::invalid_config(format!(
                    "aspect ratio must be one of 1:1, 3:4, 4:3, 9:16, 16:9, got '{s}'"
                ))
            })
    }
}

/// Supported output resolutions. The value is the long side for landscape and portrait, and both
/// sides for square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// 720 px
    R720,
    /// 1080 px
    #[default]
    R1080,
    /// 1440 px
    R2k,
    /// 2160 px
    R4k,
}

impl Resolution {
    /// Every resolution, in listing order.
    pub const ALL: [Resolution; 4] = [
        Resolution::R720,
        Resolution::R1080,
        Resolution::R2k,
        Resolution::R4k,
    ];

    /// Pixel value of the governing side.
    pub fn pixels(self) -> u32 {
        match self {
            Resolution::R720 => 720,
            Resolution::R1080 => 1080,
            Resolution::R2k => 1440,
            Resolution::R4k => 2160,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Resolution::R720 => "720",
            Resolution::R1080 => "1080",
            Resolution::R2k => "2k",
            Resolution::R4k => "4k",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resolution {
    type Err = FramefxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Resolution::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| {
                FramefxError::invalid_config(format!(
                    "resolution must be one of 720, 1080, 2k, 4k, got '{s}'"
                ))
            })
    }
}

/// Aspect ratio plus resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Format {
    /// Aspect ratio.
    pub aspect: AspectRatio,
    /// Resolution class.
    pub resolution: Resolution,
}

impl Format {
    /// Pair an aspect ratio with a resolution.
    pub fn new(aspect: AspectRatio, resolution: Resolution) -> Self {
        Self { aspect, resolution }
    }

    /// Output canvas. The shorter side is `floor(value * minor / major)`.
    pub fn canvas(self) -> FramefxResult<Canvas> {
        let (rw, rh) = self.aspect.terms();
        let v = self.resolution.pixels();
        let (w, h) = if rw == rh {
            (v, v)
        } else if rw > rh {
            (v, v * rh / rw)
        } else {
            (v * rw / rh, v)
        };
        Canvas::new(w, h)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.aspect, self.resolution)
    }
}

/// Output size: a [`Format`] table entry, or explicit pixel dimensions that bypass the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputSize {
    /// Derived from aspect ratio and resolution.
    Format(Format),
    /// Exact width and height in pixels; aspect and resolution are ignored.
    Custom {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

impl OutputSize {
    /// Use `format` unless both custom dimensions are given.
    ///
    /// Giving only one of `width` / `height` is a configuration error.
    pub fn resolve(
        format: Format,
        width: Option<u32>,
        height: Option<u32>,
    ) -> FramefxResult<Self> {
        match (width, height) {
            (Some(width), Some(height)) => Ok(Self::Custom { width, height }),
            (None, None) => Ok(Self::Format(format)),
            _ => Err(FramefxError::invalid_config(
                "custom width and height must be given together",
            )),
        }
    }

    /// Output canvas.
    pub fn canvas(self) -> FramefxResult<Canvas> {
        match self {
            Self::Format(format) => format.canvas(),
            Self::Custom { width, height } => Canvas::new(width, height),
        }
    }
}

impl Default for OutputSize {
    fn default() -> Self {
        Self::Format(Format::default())
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(format) => fmt::Display::fmt(format, f),
            Self::Custom { width, height } => write!(f, "{width}x{height}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/format.rs"]
mod tests;
