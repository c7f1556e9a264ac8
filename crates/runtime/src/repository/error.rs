//! Save storage failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save store lock poisoned")]
    LockPoisoned,

    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode a save: {0}")]
    Codec(#[from] bincode::Error),

    /// The file exists but is not a save this build can trust.
    #[error("save for nonce {nonce} is corrupted: {reason}")]
    Corrupted { nonce: u64, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
