use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{FramefxError, FramefxResult};

/// JSON-facing description of an effect chain.
///
/// ```json
/// { "global_intensity": 0.7,
///   "effects": [ { "kind": "feedback", "intensity": 0.5, "params": { "decay": 0.9 } } ] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Scalar applied to every entry's intensity. Defaults to `1.0`.
    #[serde(default = "one")]
    pub global_intensity: f32,
    /// Entries in processing order.
    #[serde(default)]
    pub effects: Vec<EffectConfig>,
}

/// One chain entry: a kind name, its intensity and kind-specific parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectConfig {
    /// Effect kind name, e.g. `"rgb_split"`.
    pub kind: String,
    /// Per-entry intensity in `[0, 1]`. Defaults to `1.0`.
    #[serde(default = "one")]
    pub intensity: f32,
    /// Kind-specific parameters; omitted means defaults.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

fn one() -> f32 {
    1.0
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            global_intensity: 1.0,
            effects: Vec::new(),
        }
    }
}

impl ChainConfig {
    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FramefxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FramefxError::invalid_config(format!("parse chain JSON: {e}")))
    }

    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> FramefxResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FramefxError::invalid_config(format!("parse chain JSON: {e}")))
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramefxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FramefxError::invalid_config(format!("open chain JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON rendering.
    pub fn to_json_pretty(&self) -> FramefxResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FramefxError::Other(anyhow::Error::new(e).context("serialize chain JSON")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/config.rs"]
mod tests;
