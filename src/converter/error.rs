use crate::backend::BackendError;

/// Errors that can occur during conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The URI does not match any injection
    #[error("No injection found for URI '{0}'")]
    InjectionNotFound(String),

    /// The injection cannot be converted
    #[error("Invalid injection: {0}")]
    InvalidInjection(String),

    /// Error reported by the instrument backend
    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),

    /// Error serializing the output document
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error writing the output document
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
