//! Hook that moves the market once per day.

use career_core::{Action, MarketTickAction};

use super::{HookContext, HookCriticality, PostExecutionHook};

#[derive(Debug, Clone, Copy)]
pub struct MarketTickHook;

impl PostExecutionHook for MarketTickHook {
    fn name(&self) -> &'static str {
        "market_tick"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Critical
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        ctx.delta.day_advanced
    }

    fn create_actions(&self, _ctx: &HookContext<'_>) -> Vec<Action> {
        vec![Action::system(MarketTickAction)]
    }
}
