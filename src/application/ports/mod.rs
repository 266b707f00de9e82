mod query_executor;

pub use query_executor::{ExecutorError, QueryExecutor};

#[cfg(test)]
pub use query_executor::MockQueryExecutor;
