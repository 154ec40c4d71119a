//! Error types returned by [`crate::render`].

/// Why a package could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The finished document is larger than the configured limit.
    /// No partial output is returned.
    #[error("rendered documentation HTML size exceeded the specified limit of {limit} bytes")]
    TooLarge { limit: u64 },

    /// A rendering hook failed while the page was being written.
    #[error("rendering documentation failed: {0}")]
    Failed(#[source] anyhow::Error),
}

impl RenderError {
    pub fn is_too_large(&self) -> bool {
        matches!(self, RenderError::TooLarge { .. })
    }
}
