/// Rendering error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Value rendering failed: {0}")]
    Render(String),
}

impl RenderError {
    /// Create a rendering failure
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

/// Result type alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
