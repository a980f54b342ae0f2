//! Error types for the renderer.

use thiserror::Error;

/// Errors raised before any pixel is written.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A vector operation needed a direction from a zero-length vector.
    #[error("division by zero in {0}")]
    DivisionByZero(&'static str),

    /// Camera parameters do not define a view basis.
    #[error("degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    /// Framebuffer dimensions are unusable.
    #[error("invalid framebuffer: {0}")]
    InvalidFrame(String),

    /// Worker pool for parallel rendering could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result type for renderer operations.
pub type Result<T> = std::result::Result<T, RenderError>;
