//! Follow-up rules that run after every player action.
//!
//! A hook looks at what the action changed and answers with system actions:
//! rank sync, the daily market tick, macro events, achievements. Those go
//! through the engine like any other action, so every state change is still
//! an action in the log. Hooks run in ascending priority and each one sees
//! the state left by the previous one.

mod achievements;
mod context;
mod macro_event;
mod market_tick;
mod rank_sync;
mod registry;

pub use achievements::AchievementHook;
pub use context::HookContext;
pub use macro_event::MacroEventHook;
pub use market_tick::MarketTickHook;
pub use rank_sync::RankSyncHook;
pub use registry::HookRegistry;

use career_core::Action;

/// What a failing hook does to the player action that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCriticality {
    /// The whole action is rolled back and reported as failed.
    Critical,
    /// Logged at error level; the action still commits.
    Important,
    /// Logged at debug level.
    Optional,
}

pub trait PostExecutionHook: Send + Sync {
    fn name(&self) -> &'static str;

    /// Lower runs first. Bookkeeping hooks sit below zero so that later
    /// hooks read an up-to-date rank and market.
    fn priority(&self) -> i32 {
        0
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool;

    fn create_actions(&self, _ctx: &HookContext<'_>) -> Vec<Action> {
        Vec::new()
    }
}
