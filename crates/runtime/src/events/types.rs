//! Event types for different topics.

use career_core::engine::TransitionPhase;
use career_core::{Action, ActionResult, AssetId, AuthorRank, DayReport, GameEvent, StateDelta};
use serde::{Deserialize, Serialize};

/// Events related to action execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// An action (player or system) was executed and committed.
    ActionExecuted {
        nonce: u64,
        action: Action,
        delta: Box<StateDelta>,
        result: ActionResult,
    },

    /// An action was rejected; the state is unchanged.
    ActionFailed {
        nonce: u64,
        action: Action,
        phase: TransitionPhase,
        code: String,
        error: String,
    },

    /// A player action and every hook it triggered were committed.
    StateCommitted {
        nonce: u64,
        day: u32,
        /// Hex digest of the committed state.
        digest: String,
    },
}

/// Career milestones derived from executed actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CareerEvent {
    RankChanged {
        from: AuthorRank,
        to: AuthorRank,
        day: u32,
    },

    AchievementUnlocked {
        id: String,
        title: String,
        reward_text: String,
        day: u32,
    },

    DayAdvanced {
        report: DayReport,
    },

    /// A decision was put in front of the player.
    EventQueued {
        event: Box<GameEvent>,
        day: u32,
    },
}

/// Market movements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MarketEvent {
    MarketTicked {
        day: u32,
        /// Price and sentiment of every asset after the tick.
        prices: Vec<(AssetId, f64, i32)>,
    },
}
