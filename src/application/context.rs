//! Query context: where the `configuration` table lives
//!
//! Query builders only need a dataset qualifier, so they accept anything that
//! implements [`DatasetContext`]. [`QueryContext`] is the validated form:
//! it fails fast on an empty or malformed qualifier instead of deferring the
//! failure to query execution.

use crate::config::Config;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::DatasetQualifier;

/// Anything that can name the dataset holding the `configuration` table
pub trait DatasetContext {
    /// Dataset qualifier in dotted form, e.g. `project.dataset`
    fn pulse_dataset(&self) -> &str;
}

/// Validated query context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    dataset: DatasetQualifier,
}

impl QueryContext {
    pub fn new(dataset: &str) -> Result<Self, DomainError> {
        Ok(Self {
            dataset: DatasetQualifier::new(dataset)?,
        })
    }

    pub fn from_qualifier(dataset: DatasetQualifier) -> Self {
        Self { dataset }
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        Self::new(&config.pulse_dataset)
    }

    pub fn dataset(&self) -> &DatasetQualifier {
        &self.dataset
    }
}

impl DatasetContext for QueryContext {
    fn pulse_dataset(&self) -> &str {
        self.dataset.as_str()
    }
}

impl DatasetContext for DatasetQualifier {
    fn pulse_dataset(&self) -> &str {
        self.as_str()
    }
}

impl DatasetContext for Config {
    fn pulse_dataset(&self) -> &str {
        &self.pulse_dataset
    }
}

impl DatasetContext for str {
    fn pulse_dataset(&self) -> &str {
        self
    }
}

impl DatasetContext for String {
    fn pulse_dataset(&self) -> &str {
        self
    }
}

impl<T: DatasetContext + ?Sized> DatasetContext for &T {
    fn pulse_dataset(&self) -> &str {
        (**self).pulse_dataset()
    }
}
