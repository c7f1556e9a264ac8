//! Paid promotion on the leaderboards.
use super::result::ActionResult;
use super::writing::ensure_player_entry;
use super::{ActionTransition, RankingError};
use crate::env::GameEnv;
use crate::state::{GameState, RankingBoard, Trend};

/// Buys a promotion slot: heat plus a flat score bump on one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostRankingAction {
    pub board: RankingBoard,
}

impl ActionTransition for BoostRankingAction {
    type Error = RankingError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let config = env.game_config()?;
        if state.author.stamina < config.ranking_boost_stamina {
            return Err(RankingError::InsufficientStamina {
                required: config.ranking_boost_stamina,
                available: state.author.stamina,
            });
        }
        if state.author.money < config.ranking_boost_cost {
            return Err(RankingError::InsufficientFunds {
                required: config.ranking_boost_cost,
                available: state.author.money,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        state.author.spend_stamina(config.ranking_boost_stamina);
        state.author.money -= config.ranking_boost_cost;
        state.social.add_heat(config.ranking_boost_heat);

        let title = state
            .library
            .active
            .as_ref()
            .map(|novel| novel.title.clone())
            .unwrap_or_default();
        ensure_player_entry(&mut state.rankings, self.board, &title);

        let entry = state
            .rankings
            .player_entry_mut(self.board)
            .ok_or(RankingError::NotRanked(self.board))?;
        entry.score += config.ranking_boost_score;
        entry.trend = Trend::Up;
        state.rankings.re_rank(self.board);

        Ok(ActionResult::Done)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let ranked = state
            .rankings
            .board(self.board)
            .iter()
            .enumerate()
            .all(|(index, entry)| entry.rank == index as u32 + 1);
        if !ranked {
            return Err(RankingError::NotRanked(self.board));
        }
        Ok(())
    }
}
