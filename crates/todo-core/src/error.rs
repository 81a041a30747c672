use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The snapshot under `key` could not be read or parsed.
    #[error("Failed to read '{key}' from store: {reason}")]
    StoreRead { key: String, reason: String },

    /// The snapshot under `key` could not be written.
    #[error("Failed to write '{key}' to store: {reason}")]
    StoreWrite { key: String, reason: String },
}

impl TodoError {
    pub fn store_read(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::StoreRead {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn store_write(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::StoreWrite {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}
