//! Oracle access errors.
//!
//! Errors related to oracle availability and data access.

use crate::error::{ErrorSeverity, GameError};
use crate::state::AuthorRank;

/// Errors that occur when accessing oracle data.
///
/// Missing oracles are fatal: the engine cannot price assets, pay rent or
/// evaluate ranks without them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("ProgressionOracle not available")]
    ProgressionNotAvailable,

    #[error("MarketOracle not available")]
    MarketNotAvailable,

    #[error("LifestyleOracle not available")]
    LifestyleNotAvailable,

    #[error("AchievementOracle not available")]
    AchievementsNotAvailable,

    #[error("WorldOracle not available")]
    WorldNotAvailable,

    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    /// The status ladder has no entry for a rank.
    #[error("rank {0} is missing from the status ladder")]
    RankNotOnLadder(AuthorRank),

    /// The housing table has no tier for a level.
    #[error("housing level {0} is not defined")]
    HousingNotFound(u8),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ProgressionNotAvailable | MarketNotAvailable | LifestyleNotAvailable
            | AchievementsNotAvailable | WorldNotAvailable | ConfigNotAvailable
            | RngNotAvailable => ErrorSeverity::Fatal,

            RankNotOnLadder(_) | HousingNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ProgressionNotAvailable => "ORACLE_PROGRESSION_NOT_AVAILABLE",
            MarketNotAvailable => "ORACLE_MARKET_NOT_AVAILABLE",
            LifestyleNotAvailable => "ORACLE_LIFESTYLE_NOT_AVAILABLE",
            AchievementsNotAvailable => "ORACLE_ACHIEVEMENTS_NOT_AVAILABLE",
            WorldNotAvailable => "ORACLE_WORLD_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            RankNotOnLadder(_) => "ORACLE_RANK_NOT_ON_LADDER",
            HousingNotFound(_) => "ORACLE_HOUSING_NOT_FOUND",
        }
    }
}
