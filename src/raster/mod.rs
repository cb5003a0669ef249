//! Canonical frame type and the CPU pixel primitives shared by every effect.

pub(crate) mod blend;
pub(crate) mod blur;
pub(crate) mod color;
pub(crate) mod draw;
pub(crate) mod frame;
pub(crate) mod sample;
