use serde_json::Value;

use crate::foundation::error::{FramefxError, FramefxResult};

/// Read-only view over an effect's JSON parameter object.
///
/// `null` is treated as an empty object. Every accessor returns the documented default when the
/// key is absent and an [`FramefxError::InvalidConfig`] when it is present but malformed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Params<'a> {
    effect: &'static str,
    obj: Option<&'a serde_json::Map<String, Value>>,
}

impl<'a> Params<'a> {
    pub(crate) fn new(effect: &'static str, value: &'a Value) -> FramefxResult<Self> {
        let obj = match value {
            Value::Null => None,
            Value::Object(map) => Some(map),
            _ => {
                return Err(FramefxError::invalid_config(format!(
                    "{effect}: params must be a JSON object"
                )));
            }
        };
        Ok(Self { effect, obj })
    }

    /// Reject keys outside `allowed`.
    pub(crate) fn only(self, allowed: &[&str]) -> FramefxResult<Self> {
        if let Some(map) = self.obj
            && let Some(key) = map.keys().find(|k| !allowed.contains(&k.as_str()))
        {
            return Err(self.err(format!(
                "unknown param '{key}' (expected one of: {})",
                allowed.join(", ")
            )));
        }
        Ok(self)
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.obj.and_then(|m| m.get(key))
    }

    fn err(&self, msg: impl std::fmt::Display) -> FramefxError {
        FramefxError::invalid_config(format!("{}: {msg}", self.effect))
    }

    pub(crate) fn f32_or(&self, key: &str, default: f32) -> FramefxResult<f32> {
        let Some(v) = self.get(key) else {
            return Ok(default);
        };
        let Some(n) = v.as_f64() else {
            return Err(self.err(format!("param '{key}' must be a number")));
        };
        let n = n as f32;
        if !n.is_finite() {
            return Err(self.err(format!("param '{key}' must be finite")));
        }
        Ok(n)
    }

    /// Like [`Params::f32_or`], additionally requiring `lo <= value <= hi`.
    pub(crate) fn f32_in(&self, key: &str, default: f32, lo: f32, hi: f32) -> FramefxResult<f32> {
        let v = self.f32_or(key, default)?;
        if !(lo..=hi).contains(&v) {
            return Err(self.err(format!("param '{key}' must be in [{lo}, {hi}], got {v}")));
        }
        Ok(v)
    }

    pub(crate) fn u32_or(&self, key: &str, default: u32) -> FramefxResult<u32> {
        Ok(self.opt_u32(key)?.unwrap_or(default))
    }

    pub(crate) fn opt_u32(&self, key: &str) -> FramefxResult<Option<u32>> {
        let Some(v) = self.get(key) else {
            return Ok(None);
        };
        let Some(n) = v.as_u64() else {
            return Err(self.err(format!("param '{key}' must be a non-negative integer")));
        };
        u32::try_from(n)
            .map(Some)
            .map_err(|_| self.err(format!("param '{key}' is out of range")))
    }

    /// Integer in `lo..=hi`.
    pub(crate) fn u32_in(&self, key: &str, default: u32, lo: u32, hi: u32) -> FramefxResult<u32> {
        let v = self.u32_or(key, default)?;
        if !(lo..=hi).contains(&v) {
            return Err(self.err(format!("param '{key}' must be in {lo}..={hi}, got {v}")));
        }
        Ok(v)
    }

    pub(crate) fn u64_or(&self, key: &str, default: u64) -> FramefxResult<u64> {
        match self.get(key) {
            None => Ok(default),
            Some(v) => v
                .as_u64()
                .ok_or_else(|| self.err(format!("param '{key}' must be a non-negative integer"))),
        }
    }

    pub(crate) fn bool_or(&self, key: &str, default: bool) -> FramefxResult<bool> {
        match self.get(key) {
            None => Ok(default),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| self.err(format!("param '{key}' must be a boolean"))),
        }
    }

    /// String choice restricted to `choices`; the first entry is the default.
    pub(crate) fn choice(&self, key: &str, choices: &[&'static str]) -> FramefxResult<&'static str> {
        let Some(v) = self.get(key) else {
            return choices
                .first()
                .copied()
                .ok_or_else(|| self.err(format!("param '{key}' has no choices")));
        };
        let Some(s) = v.as_str() else {
            return Err(self.err(format!("param '{key}' must be a string")));
        };
        let s = s.trim().to_ascii_lowercase();
        choices
            .iter()
            .copied()
            .find(|c| *c == s)
            .ok_or_else(|| {
                self.err(format!(
                    "unknown {key} '{s}' (expected one of: {})",
                    choices.join(", ")
                ))
            })
    }

    pub(crate) fn opt_rgb(&self, key: &str) -> FramefxResult<Option<[u8; 3]>> {
        let Some(v) = self.get(key) else {
            return Ok(None);
        };
        let bad = || self.err(format!("param '{key}' must be [r, g, b] with 0..=255 entries"));
        let arr = v.as_array().ok_or_else(bad)?;
        if arr.len() != 3 {
            return Err(bad());
        }
        let mut out = [0u8; 3];
        for (o, c) in out.iter_mut().zip(arr) {
            *o = c
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(bad)?;
        }
        Ok(Some(out))
    }

    pub(crate) fn rgb_or(&self, key: &str, default: [u8; 3]) -> FramefxResult<[u8; 3]> {
        Ok(self.opt_rgb(key)?.unwrap_or(default))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/config.rs"]
mod tests;
