//! Error types for action execution pipeline.

use crate::action::{
    ActionTransition, AdvanceDayAction, ApplyQuoteAction, BoostRankingAction, BrainstormAction,
    BuyAssetAction, BuyItemAction, ChangeResidenceAction, FinishNovelAction, FollowNpcAction,
    GatherAction, MarketTickAction, NegotiateIpAction, PostAction, PumpAssetAction,
    QueueEventAction, ResolveEventAction, ReviseOutlineAction, SellAssetAction, SignFilmBetAction,
    StartNovelAction, SyncRankAction, UnlockAchievementsAction, WriteChapterAction,
};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

type PhaseError<T> = TransitionPhaseError<<T as ActionTransition>::Error>;

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("start novel action failed: {0}")]
    StartNovel(PhaseError<StartNovelAction>),

    #[error("write chapter action failed: {0}")]
    WriteChapter(PhaseError<WriteChapterAction>),

    #[error("revise outline action failed: {0}")]
    ReviseOutline(PhaseError<ReviseOutlineAction>),

    #[error("finish novel action failed: {0}")]
    FinishNovel(PhaseError<FinishNovelAction>),

    #[error("apply quote action failed: {0}")]
    ApplyQuote(PhaseError<ApplyQuoteAction>),

    #[error("brainstorm action failed: {0}")]
    Brainstorm(PhaseError<BrainstormAction>),

    #[error("buy asset action failed: {0}")]
    BuyAsset(PhaseError<BuyAssetAction>),

    #[error("sell asset action failed: {0}")]
    SellAsset(PhaseError<SellAssetAction>),

    #[error("post action failed: {0}")]
    Post(PhaseError<PostAction>),

    #[error("pump asset action failed: {0}")]
    PumpAsset(PhaseError<PumpAssetAction>),

    #[error("follow npc action failed: {0}")]
    FollowNpc(PhaseError<FollowNpcAction>),

    #[error("buy item action failed: {0}")]
    BuyItem(PhaseError<BuyItemAction>),

    #[error("gather action failed: {0}")]
    Gather(PhaseError<GatherAction>),

    #[error("change residence action failed: {0}")]
    ChangeResidence(PhaseError<ChangeResidenceAction>),

    #[error("advance day action failed: {0}")]
    AdvanceDay(PhaseError<AdvanceDayAction>),

    #[error("boost ranking action failed: {0}")]
    BoostRanking(PhaseError<BoostRankingAction>),

    #[error("resolve event action failed: {0}")]
    ResolveEvent(PhaseError<ResolveEventAction>),

    #[error("negotiate ip action failed: {0}")]
    NegotiateIp(PhaseError<NegotiateIpAction>),

    #[error("sign film bet action failed: {0}")]
    SignFilmBet(PhaseError<SignFilmBetAction>),

    #[error("sync rank action failed: {0}")]
    SyncRank(PhaseError<SyncRankAction>),

    #[error("unlock achievements action failed: {0}")]
    UnlockAchievements(PhaseError<UnlockAchievementsAction>),

    #[error("market tick action failed: {0}")]
    MarketTick(PhaseError<MarketTickAction>),

    #[error("queue event action failed: {0}")]
    QueueEvent(PhaseError<QueueEventAction>),
}

macro_rules! with_inner {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            ExecuteError::StartNovel($inner) => $body,
            ExecuteError::WriteChapter($inner) => $body,
            ExecuteError::ReviseOutline($inner) => $body,
            ExecuteError::FinishNovel($inner) => $body,
            ExecuteError::ApplyQuote($inner) => $body,
            ExecuteError::Brainstorm($inner) => $body,
            ExecuteError::BuyAsset($inner) => $body,
            ExecuteError::SellAsset($inner) => $body,
            ExecuteError::Post($inner) => $body,
            ExecuteError::PumpAsset($inner) => $body,
            ExecuteError::FollowNpc($inner) => $body,
            ExecuteError::BuyItem($inner) => $body,
            ExecuteError::Gather($inner) => $body,
            ExecuteError::ChangeResidence($inner) => $body,
            ExecuteError::AdvanceDay($inner) => $body,
            ExecuteError::BoostRanking($inner) => $body,
            ExecuteError::ResolveEvent($inner) => $body,
            ExecuteError::NegotiateIp($inner) => $body,
            ExecuteError::SignFilmBet($inner) => $body,
            ExecuteError::SyncRank($inner) => $body,
            ExecuteError::UnlockAchievements($inner) => $body,
            ExecuteError::MarketTick($inner) => $body,
            ExecuteError::QueueEvent($inner) => $body,
        }
    };
}

impl ExecuteError {
    /// Pipeline phase that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        with_inner!(self, inner => inner.phase)
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        with_inner!(self, inner => inner.error.severity())
    }

    fn error_code(&self) -> &'static str {
        with_inner!(self, inner => inner.error.error_code())
    }
}
