//! Error type shared by the configuration use cases

use thiserror::Error;

use crate::application::ports::ExecutorError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum ConfigUseCaseError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),
}
