//! Grid configuration

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Behavior switches for a [`DataGrid`](super::DataGrid).
///
/// # Example
///
/// ```
/// use hms_grid::grid::GridConfig;
///
/// let config = GridConfig::default()
///     .with_page_size(25)
///     .with_searchable(false);
/// assert_eq!(config.page_size(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Whether search text filters the rows.
    ///
    /// Default: true
    pub searchable: bool,

    /// Whether rows are split into pages.
    ///
    /// Default: true
    pub pagination: bool,

    /// Rows per page when pagination is enabled.
    ///
    /// Default: 10
    page_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            pagination: true,
            page_size: 10,
        }
    }
}

impl GridConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON config document, using defaults for absent keys.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.page_size == 0 {
            return Err(ConfigError::InvalidPageSize(0));
        }
        Ok(config)
    }

    /// Enables or disables search.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Enables or disables pagination.
    pub fn with_pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    /// Sets the page size. A size of zero is raised to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size == 0 {
            log::warn!("GridConfig: page size 0 is invalid, using 1");
        }
        self.page_size = page_size.max(1);
        self
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
