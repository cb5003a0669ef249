//! Stateless per-pixel effects. Each output depends only on the input frame, the intensity and
//! the tick time.

pub(crate) mod displace;
pub(crate) mod edge_glow;
pub(crate) mod fractal;
pub(crate) mod heat_haze;
pub(crate) mod hologram;
pub(crate) mod kaleidoscope;
pub(crate) mod lut;
pub(crate) mod pixel_sort;
pub(crate) mod posterize;
pub(crate) mod rgb_split;
pub(crate) mod scanlines;
pub(crate) mod volumetric;
