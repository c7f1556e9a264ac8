//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! orchestrates the transition phases and surfaces rich error information
//! for the runtime. Player decisions and runtime bookkeeping (rank sync,
//! market ticks, event queueing) flow through the same execute() pipeline.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::env::GameEnv;
use crate::state::{GameState, StateDelta};

/// Complete outcome of action execution.
///
/// Contains both state change metadata (delta) and action-specific results.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// State change metadata (which sections and fields changed).
    pub delta: StateDelta,

    /// Action-specific execution result (chapter yield, trade receipt, etc.).
    pub action_result: ActionResult,
}

/// Game engine that manages action execution.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
///
/// The engine mutates the state it borrows in place. Callers that need
/// all-or-nothing semantics run it against a clone and commit on success.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through the appropriate transition pipeline.
    ///
    /// Returns `ExecutionOutcome` containing both state delta and action result.
    /// The nonce is incremented only when every phase succeeds.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        let action_result = transition::execute_transition(action, self.state, &env)?;

        // Increment nonce after successful execution
        self.state.clock.nonce += 1;

        let delta = StateDelta::from_states(action.clone(), &before, self.state);
        Ok(ExecutionOutcome {
            delta,
            action_result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{
        AdvanceDayAction, BuyAssetAction, PostAction, PostKind, StartNovelAction,
        SyncRankAction, WriteChapterAction,
    };
    use crate::error::{ErrorSeverity, GameError};
    use crate::state::{AssetId, AuthorFields, Genre, StateFields, Tendency};
    use crate::testing::{TestOracles, fresh_state};

    fn start() -> Action {
        StartNovelAction {
            title: "雨夜".into(),
            genre: Genre::Daily,
            tendency: Tendency::Sweet,
            outlines: Vec::new(),
        }
        .into()
    }

    #[test]
    fn successful_actions_bump_the_nonce_and_report_changes() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);
        let mut engine = GameEngine::new(&mut state);

        engine.execute(oracles.env(), &start()).unwrap();
        let outcome = engine
            .execute(oracles.env(), &WriteChapterAction::default().into())
            .unwrap();

        assert_eq!(outcome.delta.nonce, 1);
        assert!(outcome.delta.touches(StateFields::AUTHOR | StateFields::LIBRARY));
        assert!(outcome.delta.author.fields.contains(AuthorFields::STAMINA));
        assert!(matches!(outcome.action_result, ActionResult::Chapter(_)));
        assert_eq!(state.clock.nonce, 2);
    }

    #[test]
    fn failures_leave_the_nonce_and_report_the_phase() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);
        let before = state.clone();

        let error = GameEngine::new(&mut state)
            .execute(
                oracles.env(),
                &BuyAssetAction {
                    asset: AssetId::from("tulips"),
                    shares: 1,
                }
                .into(),
            )
            .unwrap_err();

        assert!(matches!(error, ExecuteError::BuyAsset(_)));
        assert_eq!(error.phase(), TransitionPhase::PreValidate);
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "TRADE_UNKNOWN_ASSET");
        assert_eq!(state, before);
    }

    #[test]
    fn day_advance_is_flagged_in_the_delta() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);

        let outcome = GameEngine::new(&mut state)
            .execute(oracles.env(), &AdvanceDayAction.into())
            .unwrap();
        assert!(outcome.delta.day_advanced);
        assert_eq!(outcome.delta.day, 2);
    }

    #[test]
    fn system_actions_share_the_pipeline() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);
        state.author.reputation = 1_500;

        let outcome = GameEngine::new(&mut state)
            .execute(oracles.env(), &Action::system(SyncRankAction))
            .unwrap();
        assert!(outcome.delta.rank_change().is_some());
        assert!(outcome.delta.action.is_system());
    }

    #[test]
    fn missing_oracles_are_fatal() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);

        let error = GameEngine::new(&mut state)
            .execute(
                crate::env::GameEnv::empty(),
                &PostAction {
                    kind: PostKind::Brag,
                }
                .into(),
            )
            .unwrap_err();
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
    }
}
