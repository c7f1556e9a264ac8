//! Achievement evaluation against the player record.
use crate::env::{AchievementDefinition, Criterion};
use crate::state::GameState;

/// Whether a single criterion currently holds.
pub fn criterion_holds(state: &GameState, criterion: &Criterion) -> bool {
    match criterion {
        Criterion::TotalWordsAtLeast(words) => state.career.total_words_written >= *words,
        Criterion::AnyNovelQualityAtLeast(quality) => {
            state.library.iter().any(|novel| novel.quality >= *quality)
        }
        Criterion::AnyNovelTensionAtLeast(tension) => {
            state.library.iter().any(|novel| novel.tension >= *tension)
        }
        Criterion::FinishedNovelsAtLeast(count) => state.career.finished_count >= *count,
        Criterion::MaxSingleTradeProfitAtLeast(profit) => {
            state.career.max_profit_single_trade >= *profit
        }
        Criterion::MoneyAtLeast(money) => state.author.money >= *money,
        Criterion::HouseLevelAtLeast(level) => state.author.house_level >= *level,
        Criterion::StansAtLeast(stans) => state.fans.stans >= *stans,
        Criterion::GlobalHeatAtLeast(heat) => state.social.global_heat >= *heat,
        Criterion::ReputationAtLeast(reputation) => state.author.reputation >= *reputation,
        Criterion::RankReached(rank) => state.career.rank >= *rank,
        Criterion::AllOf(criteria) => criteria.iter().all(|c| criterion_holds(state, c)),
    }
}

/// Ids of achievements whose criterion holds and that are not yet unlocked,
/// in definition order.
pub fn evaluate(state: &GameState, definitions: &[AchievementDefinition]) -> Vec<String> {
    definitions
        .iter()
        .filter(|def| !state.career.unlocked_achievements.contains(&def.id))
        .filter(|def| criterion_holds(state, &def.criterion))
        .map(|def| def.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AuthorRank;
    use crate::testing::{TestOracles, fresh_state};

    #[test]
    fn nothing_unlocks_on_a_fresh_career() {
        let oracles = TestOracles::default();
        let state = fresh_state(&oracles);
        assert!(evaluate(&state, &oracles.achievements).is_empty());
    }

    #[test]
    fn unlocks_once_and_only_once() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);
        state.career.total_words_written = 1_000_000;

        let unlocked = evaluate(&state, &oracles.achievements);
        assert_eq!(unlocked, vec!["ink_master".to_string()]);

        state.career.unlocked_achievements.extend(unlocked);
        assert!(evaluate(&state, &oracles.achievements).is_empty());
    }

    #[test]
    fn composite_criteria_need_every_part() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);
        let criterion = Criterion::AllOf(vec![
            Criterion::MoneyAtLeast(5_000_000.0),
            Criterion::HouseLevelAtLeast(3),
        ]);

        state.author.money = 6_000_000.0;
        assert!(!criterion_holds(&state, &criterion));
        state.author.house_level = 3;
        assert!(criterion_holds(&state, &criterion));
    }

    #[test]
    fn rank_criterion_accepts_higher_ranks() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);
        state.career.rank = AuthorRank::Legend;
        assert!(criterion_holds(
            &state,
            &Criterion::RankReached(AuthorRank::Platinum)
        ));
    }
}
