//! Ordered effect chains, their JSON configuration and the built-in presets.

pub(crate) mod config;
pub(crate) mod pipeline;
pub(crate) mod presets;
