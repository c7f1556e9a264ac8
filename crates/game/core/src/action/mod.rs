//! Action domain.
//!
//! Every player decision and every runtime-driven bookkeeping step is an
//! [`Action`]. Each concrete action implements [`ActionTransition`] and is
//! executed by the engine through the same three-phase pipeline.
//!
//! # Module Structure
//!
//! - `error`: per-family error enums
//! - `result`: data returned to the caller after a successful action
//! - `writing`, `trade`, `social`, `life`, `ranking`, `event`: player actions
//! - `system`: actions issued by runtime hooks (rank sync, market tick, ...)

pub mod error;
pub mod event;
pub mod life;
pub mod ranking;
pub mod result;
pub mod social;
pub mod system;
pub mod trade;
pub mod writing;

pub use error::{EventError, LifeError, RankingError, SocialError, TradeError, WritingError};
pub use event::{NegotiateIpAction, ResolveEventAction, SignFilmBetAction};
pub use life::{AdvanceDayAction, BuyItemAction, ChangeResidenceAction, GatherAction};
pub use ranking::BoostRankingAction;
pub use result::{ActionResult, DayReport, PumpOutcome, RankChange, SocialOutcome, TradeReceipt};
pub use social::{FollowNpcAction, Npc, PostAction, PostKind, PumpAssetAction};
pub use system::{
    MarketTickAction, QueueEventAction, SyncRankAction, SystemError, UnlockAchievementsAction,
};
pub use trade::{BuyAssetAction, SellAssetAction};
pub use writing::{
    ApplyQuoteAction, BrainstormAction, ButterflyImpact, FanBias, FinishNovelAction,
    ReviseOutlineAction, StartNovelAction, WriteChapterAction, WritingMode,
};

use crate::env::GameEnv;
use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Decisions taken by the player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    StartNovel(StartNovelAction),
    WriteChapter(WriteChapterAction),
    ReviseOutline(ReviseOutlineAction),
    FinishNovel(FinishNovelAction),
    ApplyQuote(ApplyQuoteAction),
    Brainstorm(BrainstormAction),
    BuyAsset(BuyAssetAction),
    SellAsset(SellAssetAction),
    Post(PostAction),
    PumpAsset(PumpAssetAction),
    FollowNpc(FollowNpcAction),
    BuyItem(BuyItemAction),
    Gather(GatherAction),
    ChangeResidence(ChangeResidenceAction),
    AdvanceDay(AdvanceDayAction),
    BoostRanking(BoostRankingAction),
    ResolveEvent(ResolveEventAction),
    NegotiateIp(NegotiateIpAction),
    SignFilmBet(SignFilmBetAction),
}

/// Bookkeeping issued by the runtime after player actions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemActionKind {
    SyncRank(SyncRankAction),
    UnlockAchievements(UnlockAchievementsAction),
    MarketTick(MarketTickAction),
    QueueEvent(QueueEventAction),
}

/// Top-level action enum that can be either a player action or system action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Player(PlayerAction),
    System { kind: SystemActionKind },
}

impl Action {
    /// Creates a new system action.
    pub fn system(kind: impl Into<SystemActionKind>) -> Self {
        Self::System { kind: kind.into() }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Self::System { .. })
    }

    /// Returns the snake_case string representation of the action.
    ///
    /// Used for file names, logging, and serialization keys.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Player(action) => match action {
                PlayerAction::StartNovel(_) => "start_novel",
                PlayerAction::WriteChapter(_) => "write_chapter",
                PlayerAction::ReviseOutline(_) => "revise_outline",
                PlayerAction::FinishNovel(_) => "finish_novel",
                PlayerAction::ApplyQuote(_) => "apply_quote",
                PlayerAction::Brainstorm(_) => "brainstorm",
                PlayerAction::BuyAsset(_) => "buy_asset",
                PlayerAction::SellAsset(_) => "sell_asset",
                PlayerAction::Post(_) => "post",
                PlayerAction::PumpAsset(_) => "pump_asset",
                PlayerAction::FollowNpc(_) => "follow_npc",
                PlayerAction::BuyItem(_) => "buy_item",
                PlayerAction::Gather(_) => "gather",
                PlayerAction::ChangeResidence(_) => "change_residence",
                PlayerAction::AdvanceDay(_) => "advance_day",
                PlayerAction::BoostRanking(_) => "boost_ranking",
                PlayerAction::ResolveEvent(_) => "resolve_event",
                PlayerAction::NegotiateIp(_) => "negotiate_ip",
                PlayerAction::SignFilmBet(_) => "sign_film_bet",
            },
            Action::System { kind } => match kind {
                SystemActionKind::SyncRank(_) => "sync_rank",
                SystemActionKind::UnlockAchievements(_) => "unlock_achievements",
                SystemActionKind::MarketTick(_) => "market_tick",
                SystemActionKind::QueueEvent(_) => "queue_event",
            },
        }
    }
}

impl From<PlayerAction> for Action {
    fn from(action: PlayerAction) -> Self {
        Self::Player(action)
    }
}

impl From<SystemActionKind> for Action {
    fn from(kind: SystemActionKind) -> Self {
        Self::System { kind }
    }
}

macro_rules! player_action_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PlayerAction {
                fn from(action: $ty) -> Self {
                    Self::$variant(action)
                }
            }

            impl From<$ty> for Action {
                fn from(action: $ty) -> Self {
                    Self::Player(PlayerAction::$variant(action))
                }
            }
        )*
    };
}

player_action_from! {
    StartNovel => StartNovelAction,
    WriteChapter => WriteChapterAction,
    ReviseOutline => ReviseOutlineAction,
    FinishNovel => FinishNovelAction,
    ApplyQuote => ApplyQuoteAction,
    Brainstorm => BrainstormAction,
    BuyAsset => BuyAssetAction,
    SellAsset => SellAssetAction,
    Post => PostAction,
    PumpAsset => PumpAssetAction,
    FollowNpc => FollowNpcAction,
    BuyItem => BuyItemAction,
    Gather => GatherAction,
    ChangeResidence => ChangeResidenceAction,
    AdvanceDay => AdvanceDayAction,
    BoostRanking => BoostRankingAction,
    ResolveEvent => ResolveEventAction,
    NegotiateIp => NegotiateIpAction,
    SignFilmBet => SignFilmBetAction,
}

impl From<SyncRankAction> for SystemActionKind {
    fn from(action: SyncRankAction) -> Self {
        Self::SyncRank(action)
    }
}

impl From<UnlockAchievementsAction> for SystemActionKind {
    fn from(action: UnlockAchievementsAction) -> Self {
        Self::UnlockAchievements(action)
    }
}

impl From<MarketTickAction> for SystemActionKind {
    fn from(action: MarketTickAction) -> Self {
        Self::MarketTick(action)
    }
}

impl From<QueueEventAction> for SystemActionKind {
    fn from(action: QueueEventAction) -> Self {
        Self::QueueEvent(action)
    }
}
