//! Hook that raises a macro event every few days.

use career_core::env::{compute_seed, streams};
use career_core::{Action, QueueEventAction, RngOracle, WorldOracle};

use super::{HookContext, PostExecutionHook};

/// Queues a catalog event once `macro_event_interval` days have passed since
/// the last one, provided the player has nothing pending.
///
/// The event is picked with the game RNG keyed by the player action's nonce,
/// so replays raise the same event on the same day.
#[derive(Debug, Clone, Copy)]
pub struct MacroEventHook;

impl PostExecutionHook for MacroEventHook {
    fn name(&self) -> &'static str {
        "macro_event"
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        let interval = ctx.oracles.game_config().macro_event_interval;
        let events = &ctx.state.events;

        ctx.delta.day_advanced
            && events.pending.is_none()
            && ctx.state.clock.day.saturating_sub(events.last_macro_event_day) >= interval
            && !ctx.oracles.world().macro_events().is_empty()
    }

    fn create_actions(&self, ctx: &HookContext<'_>) -> Vec<Action> {
        let catalog = ctx.oracles.world().macro_events();
        let Some(last) = catalog.len().checked_sub(1) else {
            return vec![];
        };

        let seed = compute_seed(
            ctx.state.game_seed,
            ctx.delta.nonce,
            streams::MACRO_EVENT,
            0,
        );
        let index = ctx.oracles.rng().range(seed, 0, last as u32) as usize;

        catalog
            .get(index)
            .map(|event| Action::system(QueueEventAction::new(event.clone())))
            .into_iter()
            .collect()
    }
}
