//! Rank re-derivation after reputation changes.

use super::SystemError;
use crate::action::ActionTransition;
use crate::action::result::{ActionResult, RankChange};
use crate::env::GameEnv;
use crate::state::GameState;

/// Recomputes rank and contract tier from reputation.
///
/// Rank is never set directly by player actions; this action is the only
/// writer and may demote as well as promote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncRankAction;

impl ActionTransition for SyncRankAction {
    type Error = SystemError;
    type Result = ActionResult;

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let change = state
            .sync_rank(env.ladder()?)
            .map(|from| RankChange {
                from,
                to: state.career.rank,
            });
        Ok(ActionResult::Rank(change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AuthorRank, ContractTier};
    use crate::testing::{TestOracles, fresh_state};

    #[test]
    fn promotion_and_demotion_follow_reputation() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);

        assert_eq!(
            SyncRankAction.apply(&mut state, &env).unwrap(),
            ActionResult::Rank(None)
        );

        state.author.reputation = 12_000;
        let ActionResult::Rank(Some(change)) = SyncRankAction.apply(&mut state, &env).unwrap()
        else {
            panic!("expected a rank change");
        };
        assert_eq!(change.from, AuthorRank::Novice);
        assert_eq!(change.to, AuthorRank::MidTier);
        assert!(change.is_promotion());
        assert_eq!(state.career.contract_tier, ContractTier::Featured);

        state.author.reputation = 500;
        let ActionResult::Rank(Some(change)) = SyncRankAction.apply(&mut state, &env).unwrap()
        else {
            panic!("expected a rank change");
        };
        assert!(!change.is_promotion());
        assert_eq!(state.career.rank, AuthorRank::Novice);
    }
}
