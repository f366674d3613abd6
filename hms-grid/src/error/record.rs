//! Record loading errors

/// Errors that can occur when building records from JSON.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The document is not valid JSON or not an array of objects.
    #[error("Record parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
