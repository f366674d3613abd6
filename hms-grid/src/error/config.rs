//! Grid configuration errors

/// Errors that can occur when loading a [`GridConfig`](crate::grid::GridConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A page must hold at least one row.
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(usize),

    /// The configuration document could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
