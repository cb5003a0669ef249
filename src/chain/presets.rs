use crate::effects::kind::EffectKind;
use crate::effects::kind::EffectKind as K;
use crate::foundation::error::{FramefxError, FramefxResult};

/// A named, ordered list of effect kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    /// Lookup name, e.g. `"cyber_glitch"`.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Effects in processing order.
    pub effects: &'static [EffectKind],
}

/// Built-in presets.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "cyber_glitch",
        description: "digital glitch aesthetic",
        effects: &[K::RgbSplit, K::Displace, K::Scanlines, K::EdgeGlow],
    },
    Preset {
        name: "psychedelic",
        description: "trippy kaleidoscope feedback",
        effects: &[K::Kaleidoscope, K::Feedback, K::Lut, K::HeatHaze],
    },
    Preset {
        name: "holographic",
        description: "futuristic hologram",
        effects: &[K::Hologram, K::RgbSplit, K::EdgeGlow, K::Volumetric],
    },
    Preset {
        name: "datamosh",
        description: "compression artifact style",
        effects: &[K::PixelSort, K::Feedback, K::Displace, K::Strobe],
    },
    Preset {
        name: "retro_vhs",
        description: "vintage VHS tape",
        effects: &[K::Scanlines, K::Feedback, K::RgbSplit, K::Posterize],
    },
    Preset {
        name: "particle_flow",
        description: "flowing particle system",
        effects: &[K::Particles, K::OpticalFlow, K::Plexus, K::EdgeGlow],
    },
    Preset {
        name: "fractal_dream",
        description: "fractal dreamscape",
        effects: &[K::Fractal, K::Kaleidoscope, K::Lut, K::Feedback],
    },
    Preset {
        name: "neon_city",
        description: "cyberpunk neon glow",
        effects: &[K::EdgeGlow, K::Lut, K::HeatHaze, K::Scanlines],
    },
    Preset {
        name: "time_warp",
        description: "time displacement",
        effects: &[K::SlitScan, K::OpticalFlow, K::Feedback, K::Displace],
    },
    Preset {
        name: "volumetric_fog",
        description: "atmospheric fog",
        effects: &[K::Volumetric, K::HeatHaze, K::EdgeGlow, K::Lut],
    },
];

/// Look up a preset by name (case-insensitive, `-` accepted for `_`).
pub fn preset(name: &str) -> FramefxResult<&'static Preset> {
    let norm = name.trim().to_ascii_lowercase().replace('-', "_");
    PRESETS.iter().find(|p| p.name == norm).ok_or_else(|| {
        let known: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
        FramefxError::invalid_config(format!(
            "unknown preset '{}' (expected one of: {})",
            name.trim(),
            known.join(", ")
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/chain/presets.rs"]
mod tests;
