//! Frame consumers: the sink contract and its in-memory, callback, fan-out, PNG and `ffmpeg`
//! implementations.

pub(crate) mod ffmpeg;
pub(crate) mod png;
pub(crate) mod sink;
