use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::ConfigEntry;
use crate::domain::errors::DomainError;

/// Row shape returned by the configuration queries
///
/// `updatedAt` is `UNIX_MILLIS(updated_at)`. Warehouse REST APIs encode
/// INT64 as a JSON string, so both `1700000000000` and `"1700000000000"`
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRow {
    pub config_name: String,
    pub config_value: String,
    #[serde(rename = "updatedAt", deserialize_with = "deserialize_millis")]
    pub updated_at: i64,
}

impl TryFrom<ConfigurationRow> for ConfigEntry {
    type Error = DomainError;

    fn try_from(row: ConfigurationRow) -> Result<Self, Self::Error> {
        ConfigEntry::reconstruct(row.config_name, row.config_value, row.updated_at)
    }
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Number(i64),
        Text(String),
    }

    match Millis::deserialize(deserializer)? {
        Millis::Number(n) => Ok(n),
        Millis::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid updatedAt '{}': {}", s, e))),
    }
}

/// DTO for configuration entry responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntryDto {
    pub name: String,
    pub value: String,
    pub updated_at: String,
    pub updated_at_millis: i64,
}

impl From<ConfigEntry> for ConfigEntryDto {
    fn from(entry: ConfigEntry) -> Self {
        Self {
            name: entry.name().to_string(),
            value: entry.value().to_string(),
            updated_at: entry.updated_at().to_rfc3339(),
            updated_at_millis: entry.updated_at_millis(),
        }
    }
}
