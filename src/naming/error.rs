/// Errors raised inside the peak name strategies.
///
/// These never leave a [`PeakNameResolver`](super::PeakNameResolver); they are
/// logged and the original name is kept.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The lookup service answered with a non-success status
    #[error("Lookup service returned status {0}")]
    Status(u16),

    /// The request URL could not be built
    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),

    /// JSON error (response body or configuration file)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error reading the configuration file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
