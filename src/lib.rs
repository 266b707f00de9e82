//! # pulse_config - Configuration Table Queries
//!
//! Builds the SQL used to read the `configuration` table of a warehouse
//! dataset, and the use cases that run it through a pluggable executor.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Value objects (dataset qualifier, config name), the config entry entity
//! - **Application**: Query context, executor port, use cases
//! - **Infrastructure**: The SQL query builder
//!
//! ## Example Usage
//!
//! ```
//! use pulse_config::{QueryBuilder, QueryContext};
//!
//! let context = QueryContext::new("analytics.cfg").unwrap();
//! assert_eq!(
//!     QueryBuilder::list_all_config_sql(&context),
//!     "SELECT config_name, config_value,UNIX_MILLIS(updated_at) as updatedAt from `analytics.cfg.configuration`"
//! );
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use application::context::{DatasetContext, QueryContext};
pub use application::query::{ConfigQuery, QueryParameter};
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
pub use infrastructure::persistence::QueryBuilder;
