use thiserror::Error;

/// Result alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Any failure of a storage backend. Backends never retry.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Remote key-value operation failed: {0}")]
    Remote(#[from] redis::RedisError),

    #[error("Failed to encode or decode transaction record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored record under `{key}` is invalid: {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("Index `{key}` holds a member that is not a transaction id: `{member}`")]
    CorruptIndexEntry { key: String, member: String },

    #[error("Storage lock poisoned")]
    LockPoisoned,
}
