//! Effect kinds, parameter parsing and the 18 concrete transforms.

pub(crate) mod config;
pub(crate) mod context;
pub(crate) mod kind;
pub(crate) mod node;
pub(crate) mod spatial;
pub(crate) mod temporal;
