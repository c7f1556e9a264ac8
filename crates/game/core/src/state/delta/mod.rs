//! Change tracking between two [`GameState`] snapshots.
//!
//! Deltas carry metadata only (which sections and fields moved), never the
//! values themselves. Hooks and the event bus read them to decide what to
//! react to; the before/after states hold the data.
mod bitmask;
mod changes;

use crate::action::Action;
use crate::state::GameState;

pub use bitmask::{AuthorFields, CareerFields, StateFields};
pub use changes::{AuthorChanges, CareerChanges, MarketChanges};

/// Minimal description of an executed action's impact on the deterministic state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    /// The action that caused this state transition.
    pub action: Action,

    /// Nonce of the state the action executed against.
    pub nonce: u64,

    /// Calendar day after the action.
    pub day: u32,

    /// True when the transition moved the calendar forward.
    pub day_advanced: bool,

    /// Top-level sections that changed.
    pub sections: StateFields,

    pub author: AuthorChanges,
    pub career: CareerChanges,
    pub market: MarketChanges,
}

impl StateDelta {
    /// Creates a delta by comparing two game states.
    pub fn from_states(action: Action, before: &GameState, after: &GameState) -> Self {
        let author = AuthorChanges::from_states(&before.author, &after.author);
        let career = CareerChanges::from_states(&before.career, &after.career);
        let market = MarketChanges::from_states(&before.market, &after.market);

        let mut sections = StateFields::empty();
        if before.clock != after.clock {
            sections |= StateFields::CLOCK;
        }
        if !author.is_empty() || before.author != after.author {
            sections |= StateFields::AUTHOR;
        }
        if !career.is_empty() {
            sections |= StateFields::CAREER;
        }
        if before.fans != after.fans {
            sections |= StateFields::FANS;
        }
        if before.social != after.social {
            sections |= StateFields::SOCIAL;
        }
        if before.market.assets != after.market.assets || market.news_published {
            sections |= StateFields::MARKET;
        }
        if !market.holdings.is_empty() {
            sections |= StateFields::PORTFOLIO;
        }
        if before.library != after.library {
            sections |= StateFields::LIBRARY;
        }
        if before.rankings != after.rankings {
            sections |= StateFields::RANKINGS;
        }
        if before.events != after.events {
            sections |= StateFields::EVENTS;
        }
        if before.ip_projects != after.ip_projects {
            sections |= StateFields::IP;
        }
        if before.inspiration_library != after.inspiration_library {
            sections |= StateFields::INSPIRATION;
        }

        Self {
            action,
            nonce: before.clock.nonce,
            day: after.clock.day,
            day_advanced: after.clock.day > before.clock.day,
            sections,
            author,
            career,
            market,
        }
    }

    /// Returns true if no state changes occurred (no-op action).
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn touches(&self, sections: StateFields) -> bool {
        self.sections.intersects(sections)
    }

    /// Returns the rank move recorded by this transition, if any.
    pub fn rank_change(&self) -> Option<(crate::state::AuthorRank, crate::state::AuthorRank)> {
        self.career.rank_change
    }
}
