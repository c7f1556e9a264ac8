//! Hook that re-derives the author's rank after reputation moves.

use career_core::state::AuthorFields;
use career_core::{Action, SyncRankAction};

use super::{HookContext, HookCriticality, PostExecutionHook};

/// Issues a rank sync whenever reputation changed.
///
/// Runs first so that achievements evaluated later in the same pass see the
/// new rank.
#[derive(Debug, Clone, Copy)]
pub struct RankSyncHook;

impl PostExecutionHook for RankSyncHook {
    fn name(&self) -> &'static str {
        "rank_sync"
    }

    fn priority(&self) -> i32 {
        -20
    }

    fn criticality(&self) -> HookCriticality {
        // Rank gates genres, assets and IP deals; a stale rank corrupts the record.
        HookCriticality::Critical
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        ctx.delta.author.fields.contains(AuthorFields::REPUTATION)
    }

    fn create_actions(&self, _ctx: &HookContext<'_>) -> Vec<Action> {
        vec![Action::system(SyncRankAction)]
    }
}
