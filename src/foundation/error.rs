/// Convenience result type used across framefx.
pub type FramefxResult<T> = Result<T, FramefxError>;

/// Top-level error taxonomy used by the effect pipeline.
#[derive(thiserror::Error, Debug)]
pub enum FramefxError {
    /// An effect kind name that is not part of the closed [`EffectKind`](crate::EffectKind) set.
    #[error("unknown effect kind '{0}'")]
    UnknownEffectKind(String),

    /// Malformed kind-specific parameters, unknown presets or unknown effect references.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Zero-sized frames or buffers whose length does not match `width * height * 4`.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    /// Intensity (or other bounded scalar) outside its documented range.
    #[error("value out of range: {0}")]
    OutOfRange(String),

    /// Internal invariant violation detected while processing a frame.
    ///
    /// This is a programming error. It is surfaced instead of silently degrading output.
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// Errors raised by frame sinks (PNG writing, `ffmpeg` process handling).
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramefxError {
    /// Build a [`FramefxError::UnknownEffectKind`] value.
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownEffectKind(name.into())
    }

    /// Build a [`FramefxError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`FramefxError::InvalidFrame`] value.
    pub fn invalid_frame(msg: impl Into<String>) -> Self {
        Self::InvalidFrame(msg.into())
    }

    /// Build a [`FramefxError::OutOfRange`] value.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Build a [`FramefxError::Invariant`] value.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Build a [`FramefxError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
