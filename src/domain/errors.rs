use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Write failed: {0}")]
    WriteFailed(String),
}
