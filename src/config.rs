use tracing_subscriber::EnvFilter;

use crate::domain::value_objects::DatasetQualifier;

#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset qualifier holding the `configuration` table
    pub pulse_dataset: String,
    // Logging settings
    /// Bare level or `EnvFilter` directives, e.g. `pulse_config=debug,warn`
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pulse_dataset: String::new(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            pulse_dataset: std::env::var("PULSE_DATASET").unwrap_or_default(),
            log_level: std::env::var("PULSE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_json: std::env::var("PULSE_LOG_JSON")
                .map(|s| parse_bool(&s))
                .unwrap_or(false),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.pulse_dataset.is_empty() {
            return Err("PULSE_DATASET must be set".to_string());
        }

        DatasetQualifier::new(self.pulse_dataset.as_str())
            .map_err(|e| format!("PULSE_DATASET is invalid: {}", e))?;

        EnvFilter::try_new(&self.log_level).map_err(|e| {
            format!(
                "PULSE_LOG_LEVEL is not a valid filter ('{}'): {}",
                self.log_level, e
            )
        })?;

        Ok(())
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
