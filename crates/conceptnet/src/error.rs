use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConceptNetError>;

#[derive(Error, Debug)]
pub enum ConceptNetError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("rate limited, retry after {0}s")]
    RateLimited(u64),

    #[error("failed to decode response for {path}: {message}")]
    Decode { path: String, message: String },
}

impl ConceptNetError {
    /// Transient failures worth retrying; everything else fails fast.
    pub fn is_transient(&self) -> bool {
        match self {
            ConceptNetError::RateLimited(_) => true,
            ConceptNetError::Status { status, .. } => *status >= 500,
            ConceptNetError::Network(err) => err.is_timeout() || err.is_connect(),
            ConceptNetError::Decode { .. } => false,
        }
    }
}
