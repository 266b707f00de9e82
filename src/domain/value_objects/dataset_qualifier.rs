use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Cached pattern: no whitespace, control characters, backticks, quotes or backslashes
static QUALIFIER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[^\s\p{Cc}`'"\\]+$"#).expect("Invalid regex pattern for dataset qualifiers")
});

/// Validated dataset qualifier (e.g., "analytics.cfg", "example.com:proj.ds")
///
/// Names the warehouse namespace holding the `configuration` table. Otherwise
/// opaque: only characters that would break out of the backtick-quoted table
/// reference are refused. Case is preserved because warehouse dataset names
/// are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatasetQualifier(String);

impl DatasetQualifier {
    const MAX_LENGTH: usize = 1024;

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::InvalidDatasetQualifier(
                "Dataset qualifier cannot be empty".to_string(),
            ));
        }

        if value.len() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidDatasetQualifier(format!(
                "Dataset qualifier too long: {} > {}",
                value.len(),
                Self::MAX_LENGTH
            )));
        }

        if !QUALIFIER_PATTERN.is_match(&value) {
            return Err(DomainError::InvalidDatasetQualifier(format!(
                "'{}' cannot contain whitespace, backticks, quotes or backslashes",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Project part (everything before the last `.`), if any
    pub fn project(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(project, _)| project)
    }

    /// Dataset segment (after the last `.`)
    pub fn dataset(&self) -> &str {
        self.0
            .rsplit_once('.')
            .map(|(_, dataset)| dataset)
            .unwrap_or(&self.0)
    }
}

impl std::fmt::Display for DatasetQualifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DatasetQualifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DatasetQualifier {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DatasetQualifier> for String {
    fn from(value: DatasetQualifier) -> Self {
        value.0
    }
}
