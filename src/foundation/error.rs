/// Convenience result type used across alchemaker.
pub type CircleResult<T> = Result<T, CircleError>;

/// Top-level error taxonomy used by fallible engine APIs.
///
/// The drawing pipeline itself never fails: unresolvable colors fall through to the next
/// precedence tier and unusable surfaces turn a render into a no-op. Errors only surface from
/// configuration I/O, rasterization and gallery persistence.
#[derive(thiserror::Error, Debug)]
pub enum CircleError {
    /// Configuration values outside their declared ranges.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster backend failures (oversized surfaces, malformed buffers, encoding).
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CircleError {
    /// Build a [`CircleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CircleError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CircleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
