//! Event decisions and IP deals.
use super::result::ActionResult;
use super::{ActionTransition, EventError};
use crate::env::GameEnv;
use crate::state::{AuthorRank, FanTier, GameEvent, GameState, IpProject, Novel, NovelId};

/// Picks one option of the pending event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolveEventAction {
    pub option_index: usize,
}

impl ActionTransition for ResolveEventAction {
    type Error = EventError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let event = state
            .events
            .pending
            .as_ref()
            .ok_or(EventError::NoPendingEvent)?;
        if self.option_index >= event.options.len() {
            return Err(EventError::InvalidOption {
                index: self.option_index,
                available: event.options.len(),
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let event = state.events.pending.take().ok_or(EventError::NoPendingEvent)?;
        let option = event
            .options
            .get(self.option_index)
            .ok_or(EventError::InvalidOption {
                index: self.option_index,
                available: event.options.len(),
            })?;

        let impact = option.impact;
        let author = &mut state.author;
        author.money = (author.money + impact.money).max(0.0);
        author.shift_reputation(impact.reputation);
        author.shift_stamina(impact.stamina);
        author.shift_mood(impact.mood);
        state.fans.shift(FanTier::Stans, impact.fans_stans);

        if let Some(effect) = &event.market_effect
            && let Some(asset) = state.market.asset_mut(&effect.target_asset)
        {
            asset.shift_sentiment(effect.bias);
        }

        Ok(ActionResult::Done)
    }
}

fn find_novel(state: &GameState, id: NovelId) -> Result<&Novel, EventError> {
    state.library.find(id).ok_or(EventError::UnknownNovel(id))
}

fn ensure_long_enough(novel: &Novel, env: &GameEnv<'_>) -> Result<(), EventError> {
    let required = env.game_config()?.ip_min_words;
    if novel.word_count <= required {
        return Err(EventError::NovelTooShort {
            novel: novel.id,
            words: novel.word_count,
            required,
        });
    }
    Ok(())
}

fn ensure_rank(state: &GameState, required: AuthorRank) -> Result<(), EventError> {
    if state.career.rank < required {
        return Err(EventError::RankTooLow {
            required,
            current: state.career.rank,
        });
    }
    Ok(())
}

/// Opens licensing talks for a novel. The negotiation itself is an event the
/// player resolves afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NegotiateIpAction {
    pub novel: NovelId,
    pub event: GameEvent,
}

impl ActionTransition for NegotiateIpAction {
    type Error = EventError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_rank(state, AuthorRank::Contracted)?;
        ensure_long_enough(find_novel(state, self.novel)?, env)?;
        if state.events.pending.is_some() {
            return Err(EventError::EventAlreadyPending);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        state.events.pending = Some(self.event.clone());
        Ok(ActionResult::Done)
    }
}

/// Valuation-adjustment bet on a film adaptation, paid out once production
/// completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignFilmBetAction {
    pub novel: NovelId,
}

impl SignFilmBetAction {
    pub fn valuation(novel: &Novel) -> f64 {
        (novel.quality * novel.heat as f64 / 10.0 + novel.word_count as f64 / 10.0).floor()
    }
}

impl ActionTransition for SignFilmBetAction {
    type Error = EventError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_rank(state, AuthorRank::Platinum)?;
        ensure_long_enough(find_novel(state, self.novel)?, env)?;
        if state.ip_projects.iter().any(|project| project.novel == self.novel) {
            return Err(EventError::AlreadyContracted(self.novel));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let novel = find_novel(state, self.novel)?;
        let project = IpProject {
            novel: novel.id,
            name: format!("《{}》影视化", novel.title),
            valuation: Self::valuation(novel),
            progress: 0,
        };
        state.ip_projects.push(project);
        Ok(ActionResult::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AssetId, EventImpact, EventOption, MarketEffect};
    use crate::testing::{TestOracles, fresh_state, start_novel};

    fn offer() -> GameEvent {
        GameEvent {
            id: "offer".into(),
            title: "影视公司来电".into(),
            description: "对方想买下版权".into(),
            options: vec![
                EventOption {
                    text: "签".into(),
                    dialogue: None,
                    impact: EventImpact {
                        money: 3_000.0,
                        reputation: 500,
                        stamina: -200,
                        mood: 10,
                        fans_stans: 20,
                    },
                },
                EventOption {
                    text: "拒绝".into(),
                    dialogue: Some("再见".into()),
                    impact: EventImpact {
                        money: -1_000_000.0,
                        ..EventImpact::default()
                    },
                },
            ],
            market_effect: Some(MarketEffect {
                target_asset: AssetId::from("media_stock"),
                bias: 25,
            }),
        }
    }

    #[test]
    fn resolving_applies_clamped_impact() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.events.pending = Some(offer());

        let action = ResolveEventAction { option_index: 0 };
        action.pre_validate(&state, &env).unwrap();
        action.apply(&mut state, &env).unwrap();

        assert!(state.events.pending.is_none());
        assert_eq!(state.author.money, 8_000.0);
        assert_eq!(state.author.reputation, 500);
        assert_eq!(state.author.stamina, 0);
        assert_eq!(state.author.mood, 90);
        assert_eq!(state.fans.stans, 20);
        let media = state.market.asset(&AssetId::from("media_stock")).unwrap();
        assert_eq!(media.sentiment, 25);
    }

    #[test]
    fn money_never_goes_negative() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.events.pending = Some(offer());

        ResolveEventAction { option_index: 1 }
            .apply(&mut state, &env)
            .unwrap();
        assert_eq!(state.author.money, 0.0);
    }

    #[test]
    fn extreme_market_bias_saturates() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        let media = AssetId::from("media_stock");
        if let Some(asset) = state.market.asset_mut(&media) {
            asset.sentiment = 40;
        }
        let mut event = offer();
        event.market_effect = Some(MarketEffect {
            target_asset: media.clone(),
            bias: i32::MAX,
        });
        state.events.pending = Some(event);

        ResolveEventAction { option_index: 0 }
            .apply(&mut state, &env)
            .unwrap();
        assert_eq!(state.market.asset(&media).unwrap().sentiment, i32::MAX);
    }

    #[test]
    fn resolving_needs_a_valid_option() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);

        let action = ResolveEventAction { option_index: 2 };
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(EventError::NoPendingEvent)
        );
        state.events.pending = Some(offer());
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(EventError::InvalidOption {
                index: 2,
                available: 2,
            })
        );
    }

    #[test]
    fn negotiation_is_gated_by_rank_and_length() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        let id = start_novel(&mut state, &env);
        let action = NegotiateIpAction {
            novel: id,
            event: offer(),
        };

        assert_eq!(
            action.pre_validate(&state, &env),
            Err(EventError::RankTooLow {
                required: AuthorRank::Contracted,
                current: AuthorRank::Novice,
            })
        );

        state.career.rank = AuthorRank::Contracted;
        state.library.active.as_mut().unwrap().word_count = 10_000;
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(EventError::NovelTooShort {
                novel: id,
                words: 10_000,
                required: 10_000,
            })
        );

        state.library.active.as_mut().unwrap().word_count = 10_001;
        action.pre_validate(&state, &env).unwrap();
        action.apply(&mut state, &env).unwrap();
        assert_eq!(state.events.pending.as_ref().unwrap().id, "offer");
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(EventError::EventAlreadyPending)
        );
    }

    #[test]
    fn film_bet_values_the_novel_once() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        let id = start_novel(&mut state, &env);
        {
            let novel = state.library.active.as_mut().unwrap();
            novel.word_count = 50_000;
            novel.quality = 80.0;
            novel.heat = 1_234;
        }

        let action = SignFilmBetAction { novel: id };
        assert!(matches!(
            action.pre_validate(&state, &env),
            Err(EventError::RankTooLow { .. })
        ));

        state.career.rank = AuthorRank::Platinum;
        action.pre_validate(&state, &env).unwrap();
        action.apply(&mut state, &env).unwrap();

        let project = &state.ip_projects[0];
        assert_eq!(project.novel, id);
        assert_eq!(project.valuation, 14_872.0);
        assert_eq!(project.progress, 0);
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(EventError::AlreadyContracted(id))
        );
    }

    #[test]
    fn unknown_novels_are_rejected() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.career.rank = AuthorRank::Legend;
        assert_eq!(
            SignFilmBetAction { novel: NovelId(7) }.pre_validate(&state, &env),
            Err(EventError::UnknownNovel(NovelId(7)))
        );
    }
}
