//! System-level actions that keep derived state in step with the record.
//!
//! System actions are issued by runtime hooks rather than the player. They
//! cover rank re-derivation, achievement unlocking, the daily market tick and
//! queueing of macro events.
//!
//! All system actions implement [`ActionTransition`](crate::action::ActionTransition)
//! and run through the same three-phase pipeline as player actions, so every
//! change they make shows up in the execution delta.

mod achievements;
mod market_tick;
mod queue_event;
mod sync_rank;

pub use achievements::UnlockAchievementsAction;
pub use market_tick::MarketTickAction;
pub use queue_event::QueueEventAction;
pub use sync_rank::SyncRankAction;

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::AssetId;

/// Errors raised by system actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("asset '{0}' is listed in the state but missing from the market catalog")]
    UnlistedAsset(AssetId),

    #[error("an event is already waiting for a decision")]
    EventAlreadyPending,

    #[error("event '{0}' has no options")]
    EmptyEvent(String),
}

impl GameError for SystemError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::UnlistedAsset(_) => ErrorSeverity::Internal,
            Self::EventAlreadyPending => ErrorSeverity::Recoverable,
            Self::EmptyEvent(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::UnlistedAsset(_) => "SYSTEM_UNLISTED_ASSET",
            Self::EventAlreadyPending => "SYSTEM_EVENT_ALREADY_PENDING",
            Self::EmptyEvent(_) => "SYSTEM_EMPTY_EVENT",
        }
    }
}
