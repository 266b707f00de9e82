use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid dataset qualifier: {0}")]
    InvalidDatasetQualifier(String),

    #[error("Timestamp out of range: {0} ms since epoch")]
    InvalidTimestamp(i64),
}
