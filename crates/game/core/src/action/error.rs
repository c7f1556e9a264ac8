//! Action execution errors.
//!
//! One error enum per action family. Every variant carries enough data to
//! explain the rejection to the player without re-reading the state.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AssetId, AuthorRank, Genre, NovelId, RankingBoard};

// ============================================================================
// Writing
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WritingError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("novel title must not be empty")]
    EmptyTitle,

    #[error("finish the current novel before starting another")]
    NovelAlreadyActive,

    #[error("genre {genre} is locked at rank {rank}")]
    GenreLocked { genre: Genre, rank: AuthorRank },

    #[error("no novel is being written")]
    NoActiveNovel,

    #[error("not enough stamina: need {required}, have {available}")]
    InsufficientStamina { required: u32, available: u32 },

    #[error("not enough inspiration: need {required}, have {available}")]
    InsufficientInspiration { required: u32, available: u32 },

    #[error("not enough shards: need {required}, have {available}")]
    InsufficientShards { required: u32, available: u32 },

    #[error("cannot finish a novel with no words")]
    NothingWritten,

    #[error("inspiration quote '{0}' does not exist")]
    UnknownQuote(String),

    #[error("inspiration quote '{0}' is already in the library")]
    QuoteAlreadyUsed(String),

    #[error("brainstorming needs at least one shard")]
    NoShardsSpent,
}

impl GameError for WritingError {
    fn severity(&self) -> ErrorSeverity {
        use WritingError::*;
        match self {
            Oracle(error) => error.severity(),
            EmptyTitle | GenreLocked { .. } | UnknownQuote(_) | NoShardsSpent => {
                ErrorSeverity::Validation
            }
            NovelAlreadyActive | NoActiveNovel | NothingWritten | QuoteAlreadyUsed(_) => {
                ErrorSeverity::Validation
            }
            InsufficientStamina { .. }
            | InsufficientInspiration { .. }
            | InsufficientShards { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use WritingError::*;
        match self {
            Oracle(error) => error.error_code(),
            EmptyTitle => "WRITING_EMPTY_TITLE",
            NovelAlreadyActive => "WRITING_NOVEL_ALREADY_ACTIVE",
            GenreLocked { .. } => "WRITING_GENRE_LOCKED",
            NoActiveNovel => "WRITING_NO_ACTIVE_NOVEL",
            InsufficientStamina { .. } => "WRITING_INSUFFICIENT_STAMINA",
            InsufficientInspiration { .. } => "WRITING_INSUFFICIENT_INSPIRATION",
            InsufficientShards { .. } => "WRITING_INSUFFICIENT_SHARDS",
            NothingWritten => "WRITING_NOTHING_WRITTEN",
            UnknownQuote(_) => "WRITING_UNKNOWN_QUOTE",
            QuoteAlreadyUsed(_) => "WRITING_QUOTE_ALREADY_USED",
            NoShardsSpent => "WRITING_NO_SHARDS_SPENT",
        }
    }
}

// ============================================================================
// Trade
// ============================================================================

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TradeError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("asset '{0}' is not listed")]
    UnknownAsset(AssetId),

    #[error("asset '{asset}' requires rank {required} (current {current})")]
    RankTooLow {
        asset: AssetId,
        required: AuthorRank,
        current: AuthorRank,
    },

    #[error("share count must be positive")]
    ZeroShares,

    #[error("not enough money: need {required:.2}, have {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("no shares of '{0}' to sell")]
    NothingToSell(AssetId),
}

impl GameError for TradeError {
    fn severity(&self) -> ErrorSeverity {
        use TradeError::*;
        match self {
            Oracle(error) => error.severity(),
            UnknownAsset(_) | ZeroShares | RankTooLow { .. } => ErrorSeverity::Validation,
            InsufficientFunds { .. } | NothingToSell(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use TradeError::*;
        match self {
            Oracle(error) => error.error_code(),
            UnknownAsset(_) => "TRADE_UNKNOWN_ASSET",
            RankTooLow { .. } => "TRADE_RANK_TOO_LOW",
            ZeroShares => "TRADE_ZERO_SHARES",
            InsufficientFunds { .. } => "TRADE_INSUFFICIENT_FUNDS",
            NothingToSell(_) => "TRADE_NOTHING_TO_SELL",
        }
    }
}

// ============================================================================
// Social
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SocialError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("social account is banned for {days_left} more day(s)")]
    Banned { days_left: u32 },

    #[error("not enough stamina: need {required}, have {available}")]
    InsufficientStamina { required: u32, available: u32 },

    #[error("not enough reputation: need {required}, have {available}")]
    InsufficientReputation { required: u64, available: u64 },

    #[error("voting needs a novel in progress")]
    NoActiveNovel,

    #[error("asset '{0}' is not listed")]
    UnknownAsset(AssetId),

    #[error("pumping '{0}' needs an open position")]
    NoPosition(AssetId),
}

impl GameError for SocialError {
    fn severity(&self) -> ErrorSeverity {
        use SocialError::*;
        match self {
            Oracle(error) => error.severity(),
            Banned { .. } | InsufficientStamina { .. } | InsufficientReputation { .. } => {
                ErrorSeverity::Recoverable
            }
            NoActiveNovel | UnknownAsset(_) | NoPosition(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use SocialError::*;
        match self {
            Oracle(error) => error.error_code(),
            Banned { .. } => "SOCIAL_BANNED",
            InsufficientStamina { .. } => "SOCIAL_INSUFFICIENT_STAMINA",
            InsufficientReputation { .. } => "SOCIAL_INSUFFICIENT_REPUTATION",
            NoActiveNovel => "SOCIAL_NO_ACTIVE_NOVEL",
            UnknownAsset(_) => "SOCIAL_UNKNOWN_ASSET",
            NoPosition(_) => "SOCIAL_NO_POSITION",
        }
    }
}

// ============================================================================
// Life
// ============================================================================

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifeError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("shop item '{0}' does not exist")]
    UnknownItem(String),

    #[error("hobby '{0}' does not exist")]
    UnknownGatherOption(String),

    #[error("housing level {0} does not exist")]
    UnknownHousing(u8),

    #[error("already living at housing level {0}")]
    AlreadyResident(u8),

    #[error("not enough money: need {required:.2}, have {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("not enough stamina: need {required}, have {available}")]
    InsufficientStamina { required: u32, available: u32 },
}

impl GameError for LifeError {
    fn severity(&self) -> ErrorSeverity {
        use LifeError::*;
        match self {
            Oracle(error) => error.severity(),
            UnknownItem(_) | UnknownGatherOption(_) | UnknownHousing(_) | AlreadyResident(_) => {
                ErrorSeverity::Validation
            }
            InsufficientFunds { .. } | InsufficientStamina { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use LifeError::*;
        match self {
            Oracle(error) => error.error_code(),
            UnknownItem(_) => "LIFE_UNKNOWN_ITEM",
            UnknownGatherOption(_) => "LIFE_UNKNOWN_GATHER_OPTION",
            UnknownHousing(_) => "LIFE_UNKNOWN_HOUSING",
            AlreadyResident(_) => "LIFE_ALREADY_RESIDENT",
            InsufficientFunds { .. } => "LIFE_INSUFFICIENT_FUNDS",
            InsufficientStamina { .. } => "LIFE_INSUFFICIENT_STAMINA",
        }
    }
}

// ============================================================================
// Ranking
// ============================================================================

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankingError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("not enough stamina: need {required}, have {available}")]
    InsufficientStamina { required: u32, available: u32 },

    #[error("not enough money: need {required:.2}, have {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("the {0} board has no entry for the player")]
    NotRanked(RankingBoard),
}

impl GameError for RankingError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::InsufficientStamina { .. } | Self::InsufficientFunds { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::NotRanked(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::InsufficientStamina { .. } => "RANKING_INSUFFICIENT_STAMINA",
            Self::InsufficientFunds { .. } => "RANKING_INSUFFICIENT_FUNDS",
            Self::NotRanked(_) => "RANKING_NOT_RANKED",
        }
    }
}

// ============================================================================
// Events and IP
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("no event is waiting for a decision")]
    NoPendingEvent,

    #[error("option {index} is out of range ({available} options)")]
    InvalidOption { index: usize, available: usize },

    #[error("another event is waiting for a decision")]
    EventAlreadyPending,

    #[error("rank {current} cannot do this (requires {required})")]
    RankTooLow {
        required: AuthorRank,
        current: AuthorRank,
    },

    #[error("{0} does not exist")]
    UnknownNovel(NovelId),

    #[error("{novel} has {words} words; at least {required} are needed")]
    NovelTooShort {
        novel: NovelId,
        words: u64,
        required: u64,
    },

    #[error("{0} already has a film bet")]
    AlreadyContracted(NovelId),
}

impl GameError for EventError {
    fn severity(&self) -> ErrorSeverity {
        use EventError::*;
        match self {
            Oracle(error) => error.severity(),
            NoPendingEvent | EventAlreadyPending => ErrorSeverity::Recoverable,
            InvalidOption { .. } | UnknownNovel(_) | AlreadyContracted(_) => {
                ErrorSeverity::Validation
            }
            RankTooLow { .. } | NovelTooShort { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use EventError::*;
        match self {
            Oracle(error) => error.error_code(),
            NoPendingEvent => "EVENT_NO_PENDING",
            InvalidOption { .. } => "EVENT_INVALID_OPTION",
            EventAlreadyPending => "EVENT_ALREADY_PENDING",
            RankTooLow { .. } => "EVENT_RANK_TOO_LOW",
            UnknownNovel(_) => "EVENT_UNKNOWN_NOVEL",
            NovelTooShort { .. } => "EVENT_NOVEL_TOO_SHORT",
            AlreadyContracted(_) => "EVENT_ALREADY_CONTRACTED",
        }
    }
}
