/// Errors raised by an instrument backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The formula engine failed (as opposed to returning an error result)
    #[error("Formula evaluation failed: {0}")]
    Evaluation(String),

    /// I/O error reading backend data
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Backend data is structurally invalid
    #[error("Invalid injection export: {0}")]
    InvalidExport(String),
}
