use std::fmt;

use serde_json::Value;

use crate::chain::config::ChainConfig;
use crate::chain::presets::preset;
use crate::effects::context::TickCtx;
use crate::effects::kind::EffectKind;
use crate::effects::node::{Effect, EffectNode, check_intensity};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FramefxError, FramefxResult};
use crate::raster::frame::Frame;

/// Stable handle of one chain entry. Never reused within a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Target of an intensity update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectRef {
    /// A single entry.
    Id(EffectId),
    /// Every entry of this kind.
    Kind(EffectKind),
}

/// One effect instance in a chain.
#[derive(Debug)]
pub struct ChainEntry {
    id: EffectId,
    intensity: f32,
    node: EffectNode,
}

impl ChainEntry {
    /// Entry handle.
    pub fn id(&self) -> EffectId {
        self.id
    }

    /// Effect kind.
    pub fn kind(&self) -> EffectKind {
        self.node.kind()
    }

    /// Per-entry intensity before the global scalar is applied.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Parameters the entry was built from.
    pub fn params(&self) -> &Value {
        self.node.params()
    }
}

/// Ordered list of stateful effect instances applied to every frame.
///
/// Entries run in insertion order. The effective intensity of an entry is
/// `clamp(global * entry, 0, 1)`. The chain owns its tick counter: [`EffectChain::process_frame`]
/// advances it by one, [`EffectChain::reset`] rewinds it to zero and drops all effect state.
#[derive(Debug)]
pub struct EffectChain {
    entries: Vec<ChainEntry>,
    global_intensity: f32,
    fps: Fps,
    tick: u64,
    next_id: u64,
}

impl Default for EffectChain {
    fn default() -> Self {
        Self::new(Fps::default())
    }
}

impl EffectChain {
    /// Empty chain at global intensity `1.0`.
    pub fn new(fps: Fps) -> Self {
        Self {
            entries: Vec::new(),
            global_intensity: 1.0,
            fps,
            tick: 0,
            next_id: 0,
        }
    }

    /// Build a chain from a parsed configuration. Fails atomically on the first bad entry.
    #[tracing::instrument(skip(config), fields(effects = config.effects.len()))]
    pub fn from_config(config: &ChainConfig, fps: Fps) -> FramefxResult<Self> {
        let mut chain = Self::new(fps);
        chain.set_global_intensity(config.global_intensity)?;
        for e in &config.effects {
            chain.add_effect_named(&e.kind, e.intensity, &e.params)?;
        }
        Ok(chain)
    }

    /// Build a chain from a named preset, every entry at `intensity`.
    #[tracing::instrument]
    pub fn from_preset(name: &str, intensity: f32, fps: Fps) -> FramefxResult<Self> {
        let preset = preset(name)?;
        let mut chain = Self::new(fps);
        for &kind in preset.effects {
            chain.add_effect(kind, intensity, &Value::Null)?;
        }
        Ok(chain)
    }

    /// Append a new instance of `kind`. Adding a kind that is already present creates a second,
    /// independent instance.
    #[tracing::instrument(skip(self, kind, params), fields(kind = %kind))]
    pub fn add_effect(
        &mut self,
        kind: EffectKind,
        intensity: f32,
        params: &Value,
    ) -> FramefxResult<EffectId> {
        check_intensity(intensity)?;
        let node = EffectNode::new(kind, params)?;
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.entries.push(ChainEntry {
            id,
            intensity,
            node,
        });
        tracing::debug!(%id, position = self.entries.len() - 1, "effect added");
        Ok(id)
    }

    /// [`EffectChain::add_effect`] with the kind given by name.
    pub fn add_effect_named(
        &mut self,
        kind: &str,
        intensity: f32,
        params: &Value,
    ) -> FramefxResult<EffectId> {
        let kind: EffectKind = kind.parse()?;
        self.add_effect(kind, intensity, params)
    }

    /// Remove an entry and discard its state.
    pub fn remove_effect(&mut self, id: EffectId) -> FramefxResult<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| FramefxError::invalid_config(format!("no effect with id {id}")))?;
        let removed = self.entries.remove(pos);
        tracing::debug!(%id, kind = %removed.kind(), "effect removed");
        Ok(())
    }

    /// Set the scalar applied to every entry. Values outside `[0, 1]` are rejected.
    pub fn set_global_intensity(&mut self, value: f32) -> FramefxResult<()> {
        check_intensity(value)?;
        self.global_intensity = value;
        Ok(())
    }

    /// Set the intensity of one entry, or of every entry of a kind.
    ///
    /// Rejected values and unmatched references leave the chain untouched.
    pub fn set_effect_intensity(&mut self, target: EffectRef, value: f32) -> FramefxResult<()> {
        check_intensity(value)?;
        let matches = |e: &ChainEntry| match target {
            EffectRef::Id(id) => e.id == id,
            EffectRef::Kind(kind) => e.kind() == kind,
        };
        if !self.entries.iter().any(matches) {
            return Err(FramefxError::invalid_config(format!(
                "no effect matches {target:?}"
            )));
        }
        for e in self.entries.iter_mut().filter(|e| matches(e)) {
            e.intensity = value;
        }
        Ok(())
    }

    /// Global intensity scalar.
    pub fn global_intensity(&self) -> f32 {
        self.global_intensity
    }

    /// Output frame rate used for tick timing.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Index of the next tick [`EffectChain::process_frame`] will run.
    pub fn tick(&self) -> FrameIndex {
        FrameIndex(self.tick)
    }

    /// Entries in processing order.
    pub fn entries(&self) -> &[ChainEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the chain has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one tick using the chain's own counter, then advance it.
    pub fn process_frame(&mut self, frame: &Frame) -> FramefxResult<Frame> {
        let ctx = TickCtx::at(FrameIndex(self.tick), self.fps);
        let out = self.process_frame_at(frame, &ctx)?;
        self.tick += 1;
        Ok(out)
    }

    /// Run one tick with explicit timing. The chain's own counter is not touched.
    pub fn process_frame_at(&mut self, frame: &Frame, ctx: &TickCtx) -> FramefxResult<Frame> {
        frame.validate()?;
        tracing::trace!(tick = ctx.index.0, entries = self.entries.len(), "process frame");
        let global = self.global_intensity;
        let mut current = frame.clone();
        for entry in &mut self.entries {
            let effective = (global * entry.intensity).clamp(0.0, 1.0);
            current = entry.node.apply(&current, effective, ctx)?;
        }
        Ok(current)
    }

    /// Drop every entry's state and rewind the tick counter.
    pub fn reset(&mut self) {
        for e in &mut self.entries {
            e.node.reset();
        }
        self.tick = 0;
        tracing::debug!("chain reset");
    }

    /// Snapshot of the chain as a configuration.
    pub fn to_config(&self) -> ChainConfig {
        ChainConfig {
            global_intensity: self.global_intensity,
            effects: self
                .entries
                .iter()
                .map(|e| crate::chain::config::EffectConfig {
                    kind: e.kind().name().to_string(),
                    intensity: e.intensity,
                    params: e.params().clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/pipeline.rs"]
mod tests;
