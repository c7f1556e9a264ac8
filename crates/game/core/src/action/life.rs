//! Everyday life: shopping, hobbies, moving house and resting.
use super::result::{ActionResult, DayReport};
use super::{ActionTransition, LifeError};
use crate::economy;
use crate::env::{GameEnv, HousingTier, StatEffect};
use crate::state::{AuthorState, GameState};

fn ensure_funds(state: &GameState, required: f64) -> Result<(), LifeError> {
    if state.author.money < required {
        return Err(LifeError::InsufficientFunds {
            required,
            available: state.author.money,
        });
    }
    Ok(())
}

fn apply_effect(author: &mut AuthorState, effect: StatEffect) {
    match effect {
        StatEffect::Stamina(amount) => author.restore_stamina(amount),
        StatEffect::Mood(amount) => author.shift_mood(amount as i64),
        StatEffect::Reputation(amount) => author.shift_reputation(amount as i64),
        StatEffect::SkillPercent(percent) => author.writing_skill *= 1.0 + percent / 100.0,
        StatEffect::Shards(amount) => author.shards = author.shards.saturating_add(amount),
        StatEffect::MaxStamina(amount) => {
            author.max_stamina = author.max_stamina.saturating_add(amount)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuyItemAction {
    pub item: String,
}

impl ActionTransition for BuyItemAction {
    type Error = LifeError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let item = env
            .lifestyle()?
            .shop_item(&self.item)
            .ok_or_else(|| LifeError::UnknownItem(self.item.clone()))?;
        ensure_funds(state, item.price)
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let item = env
            .lifestyle()?
            .shop_item(&self.item)
            .ok_or_else(|| LifeError::UnknownItem(self.item.clone()))?;

        state.author.money -= item.price;
        state.career.total_spent += item.price;
        for effect in &item.effects {
            apply_effect(&mut state.author, *effect);
        }
        Ok(ActionResult::Done)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GatherAction {
    pub option: String,
}

impl ActionTransition for GatherAction {
    type Error = LifeError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let option = env
            .lifestyle()?
            .gather_option(&self.option)
            .ok_or_else(|| LifeError::UnknownGatherOption(self.option.clone()))?;
        if state.author.stamina < option.stamina_cost {
            return Err(LifeError::InsufficientStamina {
                required: option.stamina_cost,
                available: state.author.stamina,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let option = env
            .lifestyle()?
            .gather_option(&self.option)
            .ok_or_else(|| LifeError::UnknownGatherOption(self.option.clone()))?;

        let author = &mut state.author;
        author.spend_stamina(option.stamina_cost);
        author.shift_mood(option.mood as i64);
        author.shards = author.shards.saturating_add(option.shards);
        author.writing_skill += option.skill;
        Ok(ActionResult::Done)
    }
}

/// Moves to another housing tier. Moving up costs a deposit of several
/// months' rent; moving down is free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeResidenceAction {
    pub level: u8,
}

impl ChangeResidenceAction {
    fn target<'a>(&self, env: &GameEnv<'a>) -> Result<&'a HousingTier, LifeError> {
        env.lifestyle()?
            .housing_tier(self.level)
            .ok_or(LifeError::UnknownHousing(self.level))
    }

    fn deposit(&self, state: &GameState, env: &GameEnv<'_>) -> Result<f64, LifeError> {
        if self.level < state.author.house_level {
            return Ok(0.0);
        }
        let months = env.game_config()?.residence_deposit_months;
        Ok(self.target(env)?.rent * months as f64)
    }
}

impl ActionTransition for ChangeResidenceAction {
    type Error = LifeError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.target(env)?;
        if self.level == state.author.house_level {
            return Err(LifeError::AlreadyResident(self.level));
        }
        ensure_funds(state, self.deposit(state, env)?)
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let deposit = self.deposit(state, env)?;
        state.author.money -= deposit;
        state.author.house_level = self.level;
        Ok(ActionResult::Done)
    }
}

/// Ends the day: rent, audience churn, counters, passive income and reader
/// pressure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceDayAction;

impl ActionTransition for AdvanceDayAction {
    type Error = LifeError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let level = state.author.house_level;
        env.lifestyle()?
            .housing_tier(level)
            .ok_or(LifeError::UnknownHousing(level))?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        let level = state.author.house_level;
        let housing = env
            .lifestyle()?
            .housing_tier(level)
            .ok_or(LifeError::UnknownHousing(level))?;
        let today = state.clock.day;

        economy::daily_churn(&mut state.fans, state.social.last_day_shared_hobby, config);

        let author = &mut state.author;
        let broke = author.money < housing.rent;
        if broke {
            author.stamina = config.broke_stamina.min(author.max_stamina);
            author.money = (author.money + config.broke_allowance - housing.rent).max(0.0);
            author.shift_mood(-(config.broke_mood_penalty as i64));
        } else {
            author.money -= housing.rent;
            author.restore_stamina(housing.stamina_regen);
            author.shift_mood(config.rest_mood_gain as i64);
        }

        let social = &mut state.social;
        social.social_banned_days = social.social_banned_days.saturating_sub(1);
        social.out_of_circle_days = social.out_of_circle_days.saturating_sub(1);
        social.manipulation_cooldown = social.manipulation_cooldown.saturating_sub(1);
        social.last_day_shared_hobby = false;
        state.clock.day += 1;

        let legacy_income: f64 = state
            .library
            .finished
            .iter()
            .map(|novel| novel.legacy_income_rate)
            .sum();
        state.author.money += legacy_income;
        state.career.legacy_income += legacy_income;

        let mut ip_payouts = Vec::new();
        for project in &mut state.ip_projects {
            project.progress = project.progress.saturating_add(config.ip_progress_per_day);
        }
        state.ip_projects.retain(|project| {
            if project.is_complete() {
                ip_payouts.push((project.novel, project.valuation));
                false
            } else {
                true
            }
        });
        for (_, valuation) in &ip_payouts {
            state.author.money += valuation;
        }

        let idle = state.social.last_post_day.saturating_add(1) < today;
        let nudged = state.library.active.is_some() && idle;
        if nudged {
            state.social.nudge_pressure = state
                .social
                .nudge_pressure
                .saturating_add(config.nudge_pressure_per_idle_day);
            state.social.nudge_messages_count += 1;
        }

        Ok(ActionResult::Day(DayReport {
            day: state.clock.day,
            rent: housing.rent,
            broke,
            legacy_income,
            ip_payouts,
            nudged,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{IpProject, NovelId};
    use crate::testing::{TestOracles, fresh_state, start_novel};

    fn rest(state: &mut GameState, env: &GameEnv<'_>) -> DayReport {
        AdvanceDayAction.pre_validate(state, env).unwrap();
        match AdvanceDayAction.apply(state, env).unwrap() {
            ActionResult::Day(report) => report,
            other => panic!("expected day report, got {other:?}"),
        }
    }

    #[test]
    fn shop_items_apply_their_effects() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.author.stamina = 50;
        state.author.mood = 50;

        let coffee = BuyItemAction {
            item: "coffee".into(),
        };
        coffee.pre_validate(&state, &env).unwrap();
        coffee.apply(&mut state, &env).unwrap();
        assert_eq!(state.author.money, 4_970.0);
        assert_eq!(state.career.total_spent, 30.0);
        assert_eq!(state.author.stamina, 70);
        assert_eq!(state.author.mood, 55);

        BuyItemAction {
            item: "course".into(),
        }
        .apply(&mut state, &env)
        .unwrap();
        assert!((state.author.writing_skill - 11.0).abs() < 1e-9);
    }

    #[test]
    fn unaffordable_or_unknown_items_are_rejected() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);

        assert_eq!(
            BuyItemAction {
                item: "yacht".into()
            }
            .pre_validate(&state, &env),
            Err(LifeError::UnknownItem("yacht".into()))
        );

        state.author.money = 10.0;
        assert!(matches!(
            BuyItemAction {
                item: "coffee".into()
            }
            .pre_validate(&state, &env),
            Err(LifeError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn gathering_trades_stamina_for_shards() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);

        let sketch = GatherAction {
            option: "sketch".into(),
        };
        sketch.pre_validate(&state, &env).unwrap();
        sketch.apply(&mut state, &env).unwrap();
        assert_eq!(state.author.stamina, 80);
        assert_eq!(state.author.mood, 90);
        assert_eq!(state.author.shards, 7);
        assert!((state.author.writing_skill - 10.5).abs() < 1e-9);

        state.author.stamina = 5;
        assert!(matches!(
            sketch.pre_validate(&state, &env),
            Err(LifeError::InsufficientStamina { .. })
        ));
    }

    #[test]
    fn moving_up_pays_a_deposit_and_down_is_free() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);

        let up = ChangeResidenceAction { level: 1 };
        up.pre_validate(&state, &env).unwrap();
        up.apply(&mut state, &env).unwrap();
        assert_eq!(state.author.house_level, 1);
        assert_eq!(state.author.money, 500.0);

        assert_eq!(
            ChangeResidenceAction { level: 2 }.pre_validate(&state, &env),
            Err(LifeError::InsufficientFunds {
                required: 12_000.0,
                available: 500.0,
            })
        );
        assert_eq!(
            ChangeResidenceAction { level: 1 }.pre_validate(&state, &env),
            Err(LifeError::AlreadyResident(1))
        );
        assert_eq!(
            ChangeResidenceAction { level: 9 }.pre_validate(&state, &env),
            Err(LifeError::UnknownHousing(9))
        );

        let down = ChangeResidenceAction { level: 0 };
        down.apply(&mut state, &env).unwrap();
        assert_eq!(state.author.house_level, 0);
        assert_eq!(state.author.money, 500.0);
    }

    #[test]
    fn resting_pays_rent_and_ticks_counters() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.author.stamina = 30;
        state.fans.passerby = 1_000;
        state.social.social_banned_days = 2;
        state.social.manipulation_cooldown = 1;
        state.social.last_day_shared_hobby = true;

        let report = rest(&mut state, &env);
        assert_eq!(report.day, 2);
        assert!(!report.broke);
        assert_eq!(report.rent, 200.0);
        assert_eq!(state.author.money, 4_800.0);
        assert_eq!(state.author.stamina, 70);
        assert_eq!(state.author.mood, 85);
        assert_eq!(state.fans.passerby, 850);
        assert_eq!(state.social.social_banned_days, 1);
        assert_eq!(state.social.manipulation_cooldown, 0);
        assert!(!state.social.last_day_shared_hobby);
    }

    #[test]
    fn broke_authors_get_an_allowance() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.author.money = 100.0;

        let report = rest(&mut state, &env);
        assert!(report.broke);
        assert_eq!(state.author.money, 300.0);
        assert_eq!(state.author.stamina, 20);
        assert_eq!(state.author.mood, 50);
    }

    #[test]
    fn finished_novels_and_film_bets_pay_out() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        start_novel(&mut state, &env);
        let mut novel = state.library.active.take().unwrap();
        novel.is_finished = true;
        novel.legacy_income_rate = 40.0;
        let id = novel.id;
        state.library.finished.push(novel);
        state.ip_projects.push(IpProject {
            novel: id,
            name: "改编".into(),
            valuation: 1_000.0,
            progress: 90,
        });
        state.ip_projects.push(IpProject {
            novel: NovelId(99),
            name: "续作".into(),
            valuation: 5_000.0,
            progress: 0,
        });

        let report = rest(&mut state, &env);
        assert_eq!(report.legacy_income, 40.0);
        assert_eq!(report.ip_payouts, vec![(id, 1_000.0)]);
        assert_eq!(state.author.money, 5_000.0 - 200.0 + 40.0 + 1_000.0);
        assert_eq!(state.career.legacy_income, 40.0);
        assert_eq!(state.ip_projects.len(), 1);
        assert_eq!(state.ip_projects[0].progress, 10);
    }

    #[test]
    fn idle_authors_get_nudged() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        start_novel(&mut state, &env);

        assert!(!rest(&mut state, &env).nudged);
        assert!(rest(&mut state, &env).nudged);
        assert!(rest(&mut state, &env).nudged);
        assert_eq!(state.social.nudge_pressure, 20);
        assert_eq!(state.social.nudge_messages_count, 2);
    }
}
