use serde_json::Value;

use crate::effects::config::Params;
use crate::effects::context::TickCtx;
use crate::effects::kind::EffectKind;
use crate::effects::spatial::{
    displace::Displace, edge_glow::EdgeGlow, fractal::Fractal, heat_haze::HeatHaze,
    hologram::Hologram, kaleidoscope::Kaleidoscope, lut::Lut, pixel_sort::PixelSort,
    posterize::Posterize, rgb_split::RgbSplit, scanlines::Scanlines, volumetric::Volumetric,
};
use crate::effects::temporal::{
    feedback::Feedback, optical_flow::OpticalFlow, particles::Particles, plexus::Plexus,
    slit_scan::SlitScan, strobe::Strobe,
};
use crate::foundation::error::{FramefxError, FramefxResult};
use crate::raster::frame::Frame;

/// A per-frame image transform with an intensity knob.
///
/// `intensity` is already the effective value in `[0, 1]`. At `0.0` the returned frame equals the
/// input; temporal effects still update their state as if they had observed the frame.
pub trait Effect {
    /// Transform one frame.
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame>;

    /// Drop any state accumulated across frames.
    fn reset(&mut self) {}
}

/// One configured effect instance: its kind, parameters and private state.
#[derive(Debug)]
pub struct EffectNode {
    kind: EffectKind,
    params: Value,
    inner: NodeImpl,
}

#[derive(Debug)]
enum NodeImpl {
    Feedback(Feedback),
    Displace(Displace),
    OpticalFlow(OpticalFlow),
    RgbSplit(RgbSplit),
    Kaleidoscope(Kaleidoscope),
    PixelSort(PixelSort),
    EdgeGlow(EdgeGlow),
    Posterize(Posterize),
    Lut(Lut),
    HeatHaze(HeatHaze),
    Particles(Particles),
    Plexus(Plexus),
    Strobe(Strobe),
    Scanlines(Scanlines),
    SlitScan(SlitScan),
    Volumetric(Volumetric),
    Fractal(Fractal),
    Hologram(Hologram),
}

macro_rules! dispatch {
    ($node:expr, $e:ident => $body:expr) => {
        match $node {
            NodeImpl::Feedback($e) => $body,
            NodeImpl::Displace($e) => $body,
            NodeImpl::OpticalFlow($e) => $body,
            NodeImpl::RgbSplit($e) => $body,
            NodeImpl::Kaleidoscope($e) => $body,
            NodeImpl::PixelSort($e) => $body,
            NodeImpl::EdgeGlow($e) => $body,
            NodeImpl::Posterize($e) => $body,
            NodeImpl::Lut($e) => $body,
            NodeImpl::HeatHaze($e) => $body,
            NodeImpl::Particles($e) => $body,
            NodeImpl::Plexus($e) => $body,
            NodeImpl::Strobe($e) => $body,
            NodeImpl::Scanlines($e) => $body,
            NodeImpl::SlitScan($e) => $body,
            NodeImpl::Volumetric($e) => $body,
            NodeImpl::Fractal($e) => $body,
            NodeImpl::Hologram($e) => $body,
        }
    };
}

impl EffectNode {
    /// Parse `params` for `kind` and build a fresh, stateless instance.
    pub fn new(kind: EffectKind, params: &Value) -> FramefxResult<Self> {
        let p = Params::new(kind.name(), params)?;
        let inner = match kind {
            EffectKind::Feedback => NodeImpl::Feedback(Feedback::from_params(p)?),
            EffectKind::Displace => NodeImpl::Displace(Displace::from_params(p)?),
            EffectKind::OpticalFlow => NodeImpl::OpticalFlow(OpticalFlow::from_params(p)?),
            EffectKind::RgbSplit => NodeImpl::RgbSplit(RgbSplit::from_params(p)?),
            EffectKind::Kaleidoscope => NodeImpl::Kaleidoscope(Kaleidoscope::from_params(p)?),
            EffectKind::PixelSort => NodeImpl::PixelSort(PixelSort::from_params(p)?),
            EffectKind::EdgeGlow => NodeImpl::EdgeGlow(EdgeGlow::from_params(p)?),
            EffectKind::Posterize => NodeImpl::Posterize(Posterize::from_params(p)?),
            EffectKind::Lut => NodeImpl::Lut(Lut::from_params(p)?),
            EffectKind::HeatHaze => NodeImpl::HeatHaze(HeatHaze::from_params(p)?),
            EffectKind::Particles => NodeImpl::Particles(Particles::from_params(p)?),
            EffectKind::Plexus => NodeImpl::Plexus(Plexus::from_params(p)?),
            EffectKind::Strobe => NodeImpl::Strobe(Strobe::from_params(p)?),
            EffectKind::Scanlines => NodeImpl::Scanlines(Scanlines::from_params(p)?),
            EffectKind::SlitScan => NodeImpl::SlitScan(SlitScan::from_params(p)?),
            EffectKind::Volumetric => NodeImpl::Volumetric(Volumetric::from_params(p)?),
            EffectKind::Fractal => NodeImpl::Fractal(Fractal::from_params(p)?),
            EffectKind::Hologram => NodeImpl::Hologram(Hologram::from_params(p)?),
        };
        Ok(Self {
            kind,
            params: params.clone(),
            inner,
        })
    }

    /// Kind of this instance.
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// Parameters the instance was built from.
    pub fn params(&self) -> &Value {
        &self.params
    }
}

impl Effect for EffectNode {
    fn apply(&mut self, frame: &Frame, intensity: f32, ctx: &TickCtx) -> FramefxResult<Frame> {
        frame.validate()?;
        check_intensity(intensity)?;
        dispatch!(&mut self.inner, e => e.apply(frame, intensity, ctx))
    }

    fn reset(&mut self) {
        dispatch!(&mut self.inner, e => e.reset())
    }
}

/// Reject NaN and values outside `[0, 1]`.
pub(crate) fn check_intensity(v: f32) -> FramefxResult<()> {
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(FramefxError::out_of_range(format!(
            "intensity must be within [0, 1], got {v}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/node.rs"]
mod tests;
