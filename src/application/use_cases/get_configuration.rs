use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::context::QueryContext;
use crate::application::errors::ConfigUseCaseError;
use crate::application::ports::QueryExecutor;
use crate::domain::entities::ConfigEntry;
use crate::infrastructure::persistence::QueryBuilder;

/// Use case: Look up one configuration entry by name
///
/// Always sends the name as a bound parameter, so any string is a valid
/// lookup; an empty name simply matches no rows.
pub struct GetConfigurationUseCase {
    executor: Arc<dyn QueryExecutor>,
    context: QueryContext,
}

impl GetConfigurationUseCase {
    pub fn new(executor: Arc<dyn QueryExecutor>, context: QueryContext) -> Self {
        Self { executor, context }
    }

    pub async fn execute(&self, name: &str) -> Result<Option<ConfigEntry>, ConfigUseCaseError> {
        // 1. Build parameterized query
        let query = QueryBuilder::config_by_name_query(&self.context, name);
        debug!(dataset = %self.context.dataset(), config_name = ?name, "Fetching configuration");

        // 2. Execute
        let rows = self.executor.fetch_rows(&query).await?;

        if rows.len() > 1 {
            warn!(
                config_name = ?name,
                rows = rows.len(),
                "Duplicate configuration rows, using the first"
            );
        }

        // 3. Convert
        match rows.into_iter().next() {
            Some(row) => Ok(Some(ConfigEntry::try_from(row)?)),
            None => Ok(None),
        }
    }
}
