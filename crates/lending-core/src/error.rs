use thiserror::Error;

#[derive(Debug, Error)]
pub enum LendingError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("date arithmetic failed: {0}")]
    DateError(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl LendingError {
    /// True for deterministic caller-input failures. Hosting layers map
    /// these to client-visible responses; everything else is infrastructure.
    pub fn is_validation(&self) -> bool {
        matches!(self, LendingError::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for LendingError {
    fn from(e: serde_json::Error) -> Self {
        LendingError::SerializationError(e.to_string())
    }
}
