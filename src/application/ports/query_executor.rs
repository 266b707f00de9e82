use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::ConfigurationRow;
use crate::application::query::ConfigQuery;
#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Query execution failed: {0}")]
    Execution(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Row decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for the warehouse client that runs configuration queries
///
/// Implementations bind `query.parameters()` through the client's own
/// parameter mechanism and return rows shaped
/// `{config_name, config_value, updatedAt}`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn fetch_rows(&self, query: &ConfigQuery) -> Result<Vec<ConfigurationRow>, ExecutorError>;
}
