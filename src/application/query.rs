//! Query value handed to a [`QueryExecutor`](crate::application::ports::QueryExecutor)
//!
//! Serializes to the request body of the warehouse `jobs.query` endpoint:
//! named parameters, standard SQL.

use serde::{Deserialize, Serialize};

/// SQL text plus the parameters the client must bind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigQuery {
    pub query: String,
    pub parameter_mode: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_parameters: Vec<QueryParameter>,
    pub use_legacy_sql: bool,
}

impl ConfigQuery {
    pub fn new(query: String) -> Self {
        Self {
            query,
            parameter_mode: "NAMED".to_string(),
            query_parameters: Vec::new(),
            use_legacy_sql: false,
        }
    }

    pub fn with_parameter(mut self, parameter: QueryParameter) -> Self {
        self.query_parameters.push(parameter);
        self
    }

    pub fn sql(&self) -> &str {
        &self.query
    }

    pub fn parameters(&self) -> &[QueryParameter] {
        &self.query_parameters
    }

    /// Look up a bound value by parameter name
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.query_parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.parameter_value.value.as_str())
    }
}

/// Named, typed query parameter (`@name` in SQL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameter {
    pub name: String,
    pub parameter_type: ParameterType,
    pub parameter_value: ParameterValue,
}

impl QueryParameter {
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_type: ParameterType {
                r#type: "STRING".to_string(),
            },
            parameter_value: ParameterValue {
                value: value.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterType {
    #[serde(rename = "type")]
    pub r#type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub value: String,
}
