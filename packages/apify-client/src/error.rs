use thiserror::Error;

/// Errors returned by the Apify client.
#[derive(Debug, Error)]
pub enum ApifyError {
    /// Transport-level failure (connect, TLS, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Apify answered with a non-success status
    #[error("Apify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The actor run ended in a terminal non-success state
    #[error("actor run failed with status {0}")]
    RunFailed(String),
}

pub type Result<T> = std::result::Result<T, ApifyError>;
