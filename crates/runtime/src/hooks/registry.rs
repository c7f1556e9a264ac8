//! Hook registry for managing and executing post-action hooks.

use std::sync::Arc;

use career_core::{Action, ExecuteError, ExecutionOutcome, GameEngine, GameState, StateDelta};
use tracing::{debug, error};

use super::{
    AchievementHook, HookContext, HookCriticality, MacroEventHook, MarketTickHook,
    PostExecutionHook, RankSyncHook,
};
use crate::oracle::OracleManager;

/// Registry that manages and executes post-execution hooks.
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn PostExecutionHook>]>,
}

impl HookRegistry {
    /// Creates a registry; hooks are sorted by priority (lower values first).
    pub fn new(mut hooks: Vec<Arc<dyn PostExecutionHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());
        Self {
            hooks: hooks.into(),
        }
    }

    /// Creates a registry with the default set of hooks:
    /// rank sync, market tick, macro events and achievements.
    pub fn default_hooks() -> Self {
        Self::new(Self::default_hook_list())
    }

    /// The default hooks, for callers that want to extend the set.
    pub fn default_hook_list() -> Vec<Arc<dyn PostExecutionHook>> {
        vec![
            Arc::new(RankSyncHook) as Arc<dyn PostExecutionHook>,
            Arc::new(MarketTickHook) as Arc<dyn PostExecutionHook>,
            Arc::new(MacroEventHook) as Arc<dyn PostExecutionHook>,
            Arc::new(AchievementHook) as Arc<dyn PostExecutionHook>,
        ]
    }

    /// Executes every triggered hook against the staged `state`.
    ///
    /// `on_executed` is called after each successful system action with the
    /// state as it stands right after that action.
    ///
    /// # Error Handling
    ///
    /// - `Critical`: returns the error immediately, failing the player action
    /// - `Important`: logs the error and continues with the next action
    /// - `Optional`: logs at debug level and continues
    pub fn execute_hooks(
        &self,
        delta: &StateDelta,
        state: &mut GameState,
        oracles: &OracleManager,
        on_executed: &mut dyn FnMut(&Action, &ExecutionOutcome, &GameState),
    ) -> Result<(), ExecuteError> {
        for hook in self.hooks.iter() {
            let actions = {
                let ctx = HookContext {
                    delta,
                    state,
                    oracles,
                };
                if !hook.should_trigger(&ctx) {
                    continue;
                }
                hook.create_actions(&ctx)
            };

            for action in actions {
                let result = GameEngine::new(state).execute(oracles.as_game_env(), &action);
                match result {
                    Ok(outcome) => {
                        debug!(
                            target: "runtime::hooks",
                            hook = hook.name(),
                            action = action.as_snake_case(),
                            "Hook action executed"
                        );
                        on_executed(&action, &outcome, state);
                    }
                    Err(e) => self.handle_hook_error(hook.as_ref(), e)?,
                }
            }
        }

        Ok(())
    }

    /// Returns the number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }

    /// Returns Ok(()) for Important/Optional hooks, Err for Critical hooks.
    fn handle_hook_error(
        &self,
        hook: &dyn PostExecutionHook,
        error: ExecuteError,
    ) -> Result<(), ExecuteError> {
        match hook.criticality() {
            HookCriticality::Critical => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "critical",
                    error = %error,
                    "Critical hook failed, aborting action"
                );
                Err(error)
            }
            HookCriticality::Important => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "important",
                    error = %error,
                    "Hook failed, continuing"
                );
                Ok(())
            }
            HookCriticality::Optional => {
                debug!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "optional",
                    error = %error,
                    "Optional hook failed"
                );
                Ok(())
            }
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}
