use std::sync::Arc;

use tracing::debug;

use crate::application::context::QueryContext;
use crate::application::errors::ConfigUseCaseError;
use crate::application::ports::QueryExecutor;
use crate::domain::entities::ConfigEntry;
use crate::infrastructure::persistence::QueryBuilder;

/// Use case: List every configuration entry in the dataset
pub struct ListConfigurationsUseCase {
    executor: Arc<dyn QueryExecutor>,
    context: QueryContext,
}

impl ListConfigurationsUseCase {
    pub fn new(executor: Arc<dyn QueryExecutor>, context: QueryContext) -> Self {
        Self { executor, context }
    }

    pub async fn execute(&self) -> Result<Vec<ConfigEntry>, ConfigUseCaseError> {
        // 1. Build query
        let query = QueryBuilder::list_all_config_query(&self.context);
        debug!(dataset = %self.context.dataset(), sql = %query.sql(), "Listing configuration");

        // 2. Execute
        let rows = self.executor.fetch_rows(&query).await?;

        // 3. Convert to entities; one bad row fails the call
        let entries = rows
            .into_iter()
            .map(ConfigEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = entries.len(), "Configuration listed");
        Ok(entries)
    }
}
