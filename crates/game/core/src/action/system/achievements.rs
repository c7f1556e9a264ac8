//! Achievement unlocking.

use super::SystemError;
use crate::action::ActionTransition;
use crate::action::result::ActionResult;
use crate::economy;
use crate::env::GameEnv;
use crate::state::GameState;

/// Unlocks every achievement whose criterion now holds. Unlocked ids are never
/// removed, so each achievement is reported once per career.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockAchievementsAction;

impl ActionTransition for UnlockAchievementsAction {
    type Error = SystemError;
    type Result = ActionResult;

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let unlocked = economy::evaluate(state, env.achievements()?.achievements());
        state
            .career
            .unlocked_achievements
            .extend(unlocked.iter().cloned());
        Ok(ActionResult::Unlocked(unlocked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestOracles, fresh_state};

    #[test]
    fn unlocks_are_reported_once() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.social.global_heat = 1_000_000;

        let first = UnlockAchievementsAction.apply(&mut state, &env).unwrap();
        assert_eq!(first, ActionResult::Unlocked(vec!["viral".to_string()]));
        assert!(state.career.unlocked_achievements.contains("viral"));

        let second = UnlockAchievementsAction.apply(&mut state, &env).unwrap();
        assert_eq!(second, ActionResult::Unlocked(Vec::new()));
    }
}
