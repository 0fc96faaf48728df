/// Convenience result type used across the forge.
pub type TarotResult<T> = Result<T, TarotError>;

/// Top-level error taxonomy used by forge APIs.
#[derive(thiserror::Error, Debug)]
pub enum TarotError {
    /// Invalid user-provided input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while building or rasterizing a card scene.
    #[error("render error: {0}")]
    Render(String),

    /// Errors raised by the particle animation task.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while encoding or exporting frames.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TarotError {
    /// Build a [`TarotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TarotError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TarotError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`TarotError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
