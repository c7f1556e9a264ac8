//! Hook that checks achievements after every player decision.

use career_core::{Action, UnlockAchievementsAction};

use super::{HookContext, PostExecutionHook};

#[derive(Debug, Clone, Copy)]
pub struct AchievementHook;

impl PostExecutionHook for AchievementHook {
    fn name(&self) -> &'static str {
        "achievements"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        !ctx.delta.action.is_system()
    }

    fn create_actions(&self, _ctx: &HookContext<'_>) -> Vec<Action> {
        vec![Action::system(UnlockAchievementsAction)]
    }
}
