use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// ConfigEntry entity - one row of the `configuration` table
///
/// The name is whatever the `config_name` column holds; stored rows are
/// never rejected for their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    name: String,
    value: String,
    updated_at: DateTime<Utc>,
}

impl ConfigEntry {
    pub fn new(name: String, value: String, updated_at: DateTime<Utc>) -> Self {
        Self {
            name,
            value,
            updated_at,
        }
    }

    /// Reconstruct from a warehouse row (`UNIX_MILLIS(updated_at)`)
    pub fn reconstruct(
        name: String,
        value: String,
        updated_at_millis: i64,
    ) -> Result<Self, DomainError> {
        let updated_at = DateTime::<Utc>::from_timestamp_millis(updated_at_millis)
            .ok_or(DomainError::InvalidTimestamp(updated_at_millis))?;

        Ok(Self::new(name, value, updated_at))
    }

    // Getters
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn updated_at_millis(&self) -> i64 {
        self.updated_at.timestamp_millis()
    }
}
