//! Seeded noise fields, polar remapping and the explicit RNG handle.

pub(crate) mod perlin;
pub(crate) mod polar;
pub(crate) mod rng;
