use thiserror::Error;

/// Failures a theme can surface to the host dispatcher.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The post lacks a field this theme cannot render without. Raised
    /// before any I/O happens.
    #[error("post not supported by this theme: {0}")]
    Unsupported(String),

    /// Template rendering or screenshot capture failed. The original cause
    /// is preserved; the page resource is already released when this is
    /// returned.
    #[error("render failure: {0}")]
    Render(#[source] anyhow::Error),

    /// Errors from the merge/HTTP collaborators, passed through unwrapped.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl ThemeError {
    pub fn unsupported(msg: impl Into<String>) -> Self {
        ThemeError::Unsupported(msg.into())
    }
}
