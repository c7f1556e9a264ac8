//! Deterministic career economy shared by the runtime and offline tools.
//!
//! `career-core` defines the canonical rules (actions, engine, player record)
//! and exposes pure APIs with no I/O. All state mutation flows through
//! [`engine::GameEngine`], randomness is derived from the game seed and the
//! action nonce, and static content reaches the rules only through the
//! oracles in [`env`].
pub mod action;
pub mod config;
pub mod economy;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{
    Action, ActionResult, ActionTransition, AdvanceDayAction, ApplyQuoteAction,
    BoostRankingAction, BrainstormAction, ButterflyImpact, BuyAssetAction, BuyItemAction,
    ChangeResidenceAction, DayReport, FanBias, FinishNovelAction, FollowNpcAction, GatherAction,
    MarketTickAction, NegotiateIpAction, Npc, PlayerAction, PostAction, PostKind, PumpAssetAction,
    QueueEventAction, RankChange, ResolveEventAction, ReviseOutlineAction, SellAssetAction,
    SignFilmBetAction, StartNovelAction, SyncRankAction, SystemActionKind,
    UnlockAchievementsAction, WriteChapterAction, WritingMode,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{
    AchievementOracle, ConfigOracle, Env, GameEnv, LifestyleOracle, MarketOracle, OracleError,
    PcgRng, ProgressionOracle, RngOracle, WorldOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    AssetId, AuthorRank, FanTier, FanTiers, GameEvent, GameState, Genre, IdentityKind,
    InitializationError, NovelId, RankingBoard, StateDelta, StateFields, Tendency,
};
