//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, the engine and the
//! text service so clients can bubble them up with consistent context.

use thiserror::Error;
use tokio::sync::oneshot;

use career_core::{ExecuteError, InitializationError};

use crate::narrative::NarrativeError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("failed to initialize game state from oracles")]
    InitialState(#[source] InitializationError),

    #[error("action rejected")]
    Execute(#[source] ExecuteError),

    #[error(transparent)]
    Narrative(#[from] NarrativeError),

    #[error("persistence is not enabled for this runtime")]
    PersistenceDisabled,

    #[error("no novel is being written")]
    NoActiveNovel,

    #[error("{0} not found")]
    NovelNotFound(career_core::NovelId),

    #[error("failed to digest game state")]
    StateDigest(#[source] bincode::Error),
}

impl From<ExecuteError> for RuntimeError {
    fn from(error: ExecuteError) -> Self {
        Self::Execute(error)
    }
}
