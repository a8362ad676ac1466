use thiserror::Error;

/// Rejection of a payload by its stream's domain validator.
/// Recoverable: the stream is untouched and the caller may re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid payload: {reason}")]
pub struct InvalidPayload {
    pub reason: String,
}

impl InvalidPayload {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Failure of the persistence medium. Never fatal to the stream: the
/// in-memory state keeps the mutation, durability is lost for the session.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization: {0}")]
    Serialization(String),
}
