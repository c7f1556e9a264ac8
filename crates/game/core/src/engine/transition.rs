//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition, PlayerAction, SystemActionKind};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and maps failures into the matching
/// [`ExecuteError`] variant.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    use ExecuteError as E;

    match action {
        Action::Player(action) => match action {
            PlayerAction::StartNovel(t) => drive_transition(t, state, env).map_err(E::StartNovel),
            PlayerAction::WriteChapter(t) => {
                drive_transition(t, state, env).map_err(E::WriteChapter)
            }
            PlayerAction::ReviseOutline(t) => {
                drive_transition(t, state, env).map_err(E::ReviseOutline)
            }
            PlayerAction::FinishNovel(t) => drive_transition(t, state, env).map_err(E::FinishNovel),
            PlayerAction::ApplyQuote(t) => drive_transition(t, state, env).map_err(E::ApplyQuote),
            PlayerAction::Brainstorm(t) => drive_transition(t, state, env).map_err(E::Brainstorm),
            PlayerAction::BuyAsset(t) => drive_transition(t, state, env).map_err(E::BuyAsset),
            PlayerAction::SellAsset(t) => drive_transition(t, state, env).map_err(E::SellAsset),
            PlayerAction::Post(t) => drive_transition(t, state, env).map_err(E::Post),
            PlayerAction::PumpAsset(t) => drive_transition(t, state, env).map_err(E::PumpAsset),
            PlayerAction::FollowNpc(t) => drive_transition(t, state, env).map_err(E::FollowNpc),
            PlayerAction::BuyItem(t) => drive_transition(t, state, env).map_err(E::BuyItem),
            PlayerAction::Gather(t) => drive_transition(t, state, env).map_err(E::Gather),
            PlayerAction::ChangeResidence(t) => {
                drive_transition(t, state, env).map_err(E::ChangeResidence)
            }
            PlayerAction::AdvanceDay(t) => drive_transition(t, state, env).map_err(E::AdvanceDay),
            PlayerAction::BoostRanking(t) => {
                drive_transition(t, state, env).map_err(E::BoostRanking)
            }
            PlayerAction::ResolveEvent(t) => {
                drive_transition(t, state, env).map_err(E::ResolveEvent)
            }
            PlayerAction::NegotiateIp(t) => drive_transition(t, state, env).map_err(E::NegotiateIp),
            PlayerAction::SignFilmBet(t) => drive_transition(t, state, env).map_err(E::SignFilmBet),
        },
        Action::System { kind } => match kind {
            SystemActionKind::SyncRank(t) => drive_transition(t, state, env).map_err(E::SyncRank),
            SystemActionKind::UnlockAchievements(t) => {
                drive_transition(t, state, env).map_err(E::UnlockAchievements)
            }
            SystemActionKind::MarketTick(t) => {
                drive_transition(t, state, env).map_err(E::MarketTick)
            }
            SystemActionKind::QueueEvent(t) => {
                drive_transition(t, state, env).map_err(E::QueueEvent)
            }
        },
    }
}
