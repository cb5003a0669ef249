//! Effects that carry private state across ticks.
//!
//! Every effect here seeds its state on the first call (or after a size change) and treats that
//! call as a pass-through.

pub(crate) mod feedback;
pub(crate) mod optical_flow;
pub(crate) mod particles;
pub(crate) mod plexus;
pub(crate) mod slit_scan;
pub(crate) mod strobe;
