//! Social-media actions: posting, market manipulation and following insiders.
use super::result::{ActionResult, PumpOutcome, SocialOutcome};
use super::{ActionTransition, SocialError};
use crate::economy;
use crate::env::{GameEnv, compute_seed, streams};
use crate::state::{AssetId, FanTier, GameState, NewsImpact, RankingBoard};

fn ensure_not_banned(state: &GameState) -> Result<(), SocialError> {
    if state.social.is_banned() {
        return Err(SocialError::Banned {
            days_left: state.social.social_banned_days,
        });
    }
    Ok(())
}

fn ensure_stamina(state: &GameState, required: u32) -> Result<(), SocialError> {
    if state.author.stamina < required {
        return Err(SocialError::InsufficientStamina {
            required,
            available: state.author.stamina,
        });
    }
    Ok(())
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PostKind {
    /// Hint at upcoming angst. Loved by stans, scares off passersby.
    Tease,
    Brag,
    /// Share a hobby with readers; keeps followers from drifting that night.
    Share,
    Interact,
    /// Ask hardcore readers for monthly tickets.
    Vote,
    /// Go silent to shake off reader pressure.
    PlayDead,
    /// Post a leave note and log off.
    LeaveNote,
}

impl PostKind {
    const fn base_heat(self) -> u64 {
        match self {
            Self::Tease => 5000,
            Self::Brag => 200,
            Self::Share => 100,
            Self::Interact => 500,
            Self::Vote => 1000,
            Self::PlayDead | Self::LeaveNote => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PostAction {
    pub kind: PostKind,
}

impl PostAction {
    fn stamina_cost(&self, env: &GameEnv<'_>) -> Result<u32, SocialError> {
        let config = env.game_config()?;
        Ok(match self.kind {
            PostKind::PlayDead => 0,
            PostKind::LeaveNote => config.leave_note_stamina_cost,
            _ => config.post_stamina_cost,
        })
    }
}

impl ActionTransition for PostAction {
    type Error = SocialError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_not_banned(state)?;
        ensure_stamina(state, self.stamina_cost(env)?)?;

        if self.kind == PostKind::Vote {
            let required = env.game_config()?.vote_reputation_cost;
            if state.author.reputation < required {
                return Err(SocialError::InsufficientReputation {
                    required,
                    available: state.author.reputation,
                });
            }
            if state.library.active.is_none() {
                return Err(SocialError::NoActiveNovel);
            }
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        let perks = economy::perks(state.career.rank, env.ladder()?);

        let mut heat = self.kind.base_heat();
        if self.kind == PostKind::Tease && state.fans.stan_ratio() > 0.2 {
            heat *= 2;
        }
        let heat = (heat as f64 * perks.post_heat_factor).floor() as u64;
        state.social.add_heat(heat);
        state.author.spend_stamina(self.stamina_cost(env)?);

        let mut tickets = 0;
        match self.kind {
            PostKind::Tease => {
                state.fans.shift(FanTier::Stans, 50);
                state.fans.shift(FanTier::Passerby, -100);
                state.author.shift_mood(-15);
            }
            PostKind::Brag => {
                state.fans.shift(FanTier::Followers, 500);
                state.fans.shift(FanTier::Passerby, 500);
                state.author.shift_mood(30);
            }
            PostKind::Share => {
                state.fans.shift(FanTier::Followers, 1000);
                state.author.shift_mood(10);
                state.author.writing_skill += 2.0;
                state.social.last_day_shared_hobby = true;
            }
            PostKind::Interact => {
                let converted = (state.fans.followers as f64 * 0.2).floor() as u64;
                state
                    .fans
                    .convert(FanTier::Followers, FanTier::Hardcore, converted);
            }
            PostKind::Vote => {
                state
                    .author
                    .shift_reputation(-(config.vote_reputation_cost as i64));
                tickets = (state.fans.hardcore as f64 * 0.1).floor() as u64;
                state.social.monthly_tickets += tickets;
                if let Some(novel) = state.library.active.as_mut() {
                    novel.monthly_tickets += tickets;
                }
                if let Some(entry) = state.rankings.player_entry_mut(RankingBoard::Monthly) {
                    entry.tickets += tickets;
                }
            }
            PostKind::PlayDead => {
                state
                    .author
                    .shift_reputation(-(config.play_dead_reputation_cost as i64));
                state.author.stamina = 0;
                state.social.nudge_pressure /= 2;
                state.social.nudge_messages_count = 0;
            }
            PostKind::LeaveNote => {
                state.author.shift_mood(15);
                state.fans.shift(FanTier::Passerby, -500);
                state.social.nudge_pressure = 0;
            }
        }

        Ok(ActionResult::Social(SocialOutcome {
            heat_gained: heat,
            tickets,
        }))
    }
}

/// Talks up a held asset. Cheap sentiment, but the platform may notice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PumpAssetAction {
    pub asset: AssetId,
}

impl ActionTransition for PumpAssetAction {
    type Error = SocialError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_not_banned(state)?;
        if state.market.asset(&self.asset).is_none() {
            return Err(SocialError::UnknownAsset(self.asset.clone()));
        }
        if state.market.shares_held(&self.asset) == 0 {
            return Err(SocialError::NoPosition(self.asset.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        let roll = env.rng()?.unit_f64(compute_seed(
            state.game_seed,
            state.clock.nonce,
            streams::PUMP_BAN,
            0,
        ));
        let banned = roll < economy::pump_ban_chance(state.social.manipulation_cooldown, config);
        let day = state.clock.day;

        let sentiment_change = if banned {
            -config.pump_ban_sentiment_penalty
        } else {
            economy::pump_boost(state.author.reputation)
        };
        let asset = state
            .market
            .asset_mut(&self.asset)
            .ok_or_else(|| SocialError::UnknownAsset(self.asset.clone()))?;
        asset.shift_sentiment(sentiment_change);

        if banned {
            state.social.social_banned_days = config.pump_ban_days;
            state.social.consecutive_pumps = 0;
            state.market.push_news(
                day,
                format!("监管介入：{} 疑遭恶意炒作，发帖账号被封禁", self.asset),
                NewsImpact::Negative,
            );
        } else {
            state.social.manipulation_cooldown = config.pump_cooldown_days;
            state.social.consecutive_pumps += 1;
            state
                .author
                .shift_reputation(-(config.pump_reputation_cost as i64));
            state.market.push_news(
                day,
                format!("知名作者力挺 {}，散户情绪高涨", self.asset),
                NewsImpact::Positive,
            );
        }

        Ok(ActionResult::Pump(PumpOutcome {
            asset: self.asset.clone(),
            banned,
            sentiment_change,
        }))
    }
}

/// Insider accounts the author can follow.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Npc {
    /// Genre curator: sends the author out of the circle for a couple of days
    /// but brings new followers.
    Curator,
    /// Finance influencer who talks up one asset.
    FinanceGuru { asset: AssetId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowNpcAction {
    pub npc: Npc,
}

impl ActionTransition for FollowNpcAction {
    type Error = SocialError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_stamina(state, env.game_config()?.npc_stamina_cost)?;
        if let Npc::FinanceGuru { asset } = &self.npc
            && state.market.asset(asset).is_none()
        {
            return Err(SocialError::UnknownAsset(asset.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        state.author.spend_stamina(config.npc_stamina_cost);

        match &self.npc {
            Npc::Curator => {
                state.social.out_of_circle_days = 2;
                state.author.shift_reputation(200);
                state.fans.shift(FanTier::Followers, 500);
            }
            Npc::FinanceGuru { asset } => {
                let listing = state
                    .market
                    .asset_mut(asset)
                    .ok_or_else(|| SocialError::UnknownAsset(asset.clone()))?;
                listing.shift_sentiment(10);
                state.author.shift_mood(10);
            }
        }
        Ok(ActionResult::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AuthorRank;
    use crate::testing::{TestOracles, find_seed, fresh_state, hold, start_novel};

    fn post(kind: PostKind) -> PostAction {
        PostAction { kind }
    }

    #[test]
    fn tease_doubles_heat_with_many_stans() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.fans.followers = 100;
        state.fans.stans = 100;
        state.fans.passerby = 50;

        let ActionResult::Social(outcome) = post(PostKind::Tease).apply(&mut state, &env).unwrap()
        else {
            panic!("expected social outcome");
        };
        assert_eq!(outcome.heat_gained, 10_000);
        assert_eq!(state.fans.stans, 150);
        assert_eq!(state.fans.passerby, 0);
        assert_eq!(state.author.mood, 65);
        assert_eq!(state.author.stamina, 85);
    }

    #[test]
    fn heat_perk_scales_posts() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.career.rank = AuthorRank::MidTier;

        post(PostKind::Brag).apply(&mut state, &env).unwrap();
        assert_eq!(state.social.global_heat, 400);
        assert_eq!(state.author.mood, 100);
    }

    #[test]
    fn banned_accounts_cannot_post() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.social.social_banned_days = 2;
        assert_eq!(
            post(PostKind::Share).pre_validate(&state, &env),
            Err(SocialError::Banned { days_left: 2 })
        );
    }

    #[test]
    fn play_dead_needs_no_stamina() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.author.stamina = 0;
        state.author.reputation = 50;
        state.social.nudge_pressure = 31;
        state.social.nudge_messages_count = 4;

        post(PostKind::PlayDead).pre_validate(&state, &env).unwrap();
        post(PostKind::PlayDead).apply(&mut state, &env).unwrap();
        assert_eq!(state.author.reputation, 0);
        assert_eq!(state.social.nudge_pressure, 15);
        assert_eq!(state.social.nudge_messages_count, 0);
        assert!(post(PostKind::Brag).pre_validate(&state, &env).is_err());
    }

    #[test]
    fn vote_collects_tickets_from_hardcore_fans() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);

        state.author.reputation = 1_000;
        assert_eq!(
            post(PostKind::Vote).pre_validate(&state, &env),
            Err(SocialError::NoActiveNovel)
        );

        start_novel(&mut state, &env);
        state.fans.hardcore = 555;
        post(PostKind::Vote).pre_validate(&state, &env).unwrap();
        post(PostKind::Vote).apply(&mut state, &env).unwrap();

        assert_eq!(state.author.reputation, 800);
        assert_eq!(state.social.monthly_tickets, 55);
        assert_eq!(state.library.active.as_ref().unwrap().monthly_tickets, 55);
        let entry = state
            .rankings
            .monthly
            .iter()
            .find(|entry| entry.is_player)
            .unwrap();
        assert_eq!(entry.tickets, 55);
    }

    #[test]
    fn interact_converts_followers() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        state.fans.followers = 1_000;

        post(PostKind::Interact).apply(&mut state, &env).unwrap();
        assert_eq!(state.fans.followers, 800);
        assert_eq!(state.fans.hardcore, 200);
        assert_eq!(state.social.global_heat, 500);
    }

    #[test]
    fn pump_requires_a_position() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let state = fresh_state(&oracles);
        let fund = AssetId::from("money_fund");
        assert_eq!(
            PumpAssetAction {
                asset: fund.clone()
            }
            .pre_validate(&state, &env),
            Err(SocialError::NoPosition(fund))
        );
    }

    #[test]
    fn successful_pump_boosts_sentiment() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let fund = AssetId::from("index_fund");
        let seed = find_seed(&oracles, streams::PUMP_BAN, |roll| roll >= 0.05);
        let mut state = crate::testing::state_with_seed(&oracles, seed);
        hold(&mut state, &fund, 10);
        state.author.reputation = 6_000;

        let action = PumpAssetAction {
            asset: fund.clone(),
        };
        action.pre_validate(&state, &env).unwrap();
        let ActionResult::Pump(outcome) = action.apply(&mut state, &env).unwrap() else {
            panic!("expected pump outcome");
        };

        assert!(!outcome.banned);
        assert_eq!(outcome.sentiment_change, 30);
        assert_eq!(state.market.asset(&fund).unwrap().sentiment, 30);
        assert_eq!(state.social.manipulation_cooldown, 12);
        assert_eq!(state.social.consecutive_pumps, 1);
        assert_eq!(state.author.reputation, 5_500);
        assert_eq!(state.market.news.last().unwrap().impact, NewsImpact::Positive);
    }

    #[test]
    fn pumping_on_cooldown_usually_gets_banned() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let fund = AssetId::from("index_fund");
        let seed = find_seed(&oracles, streams::PUMP_BAN, |roll| roll < 0.7);
        let mut state = crate::testing::state_with_seed(&oracles, seed);
        hold(&mut state, &fund, 10);
        state.social.manipulation_cooldown = 5;
        state.social.consecutive_pumps = 2;

        let ActionResult::Pump(outcome) = PumpAssetAction {
            asset: fund.clone(),
        }
        .apply(&mut state, &env)
        .unwrap() else {
            panic!("expected pump outcome");
        };

        assert!(outcome.banned);
        assert_eq!(state.social.social_banned_days, 3);
        assert_eq!(state.social.consecutive_pumps, 0);
        assert_eq!(state.market.asset(&fund).unwrap().sentiment, -50);
        assert_eq!(state.market.news.last().unwrap().impact, NewsImpact::Negative);
    }

    #[test]
    fn following_npcs() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);

        FollowNpcAction { npc: Npc::Curator }
            .apply(&mut state, &env)
            .unwrap();
        assert_eq!(state.social.out_of_circle_days, 2);
        assert_eq!(state.author.reputation, 200);
        assert_eq!(state.fans.followers, 500);
        assert_eq!(state.author.stamina, 95);

        let fund = AssetId::from("money_fund");
        FollowNpcAction {
            npc: Npc::FinanceGuru {
                asset: fund.clone(),
            },
        }
        .apply(&mut state, &env)
        .unwrap();
        assert_eq!(state.market.asset(&fund).unwrap().sentiment, 10);
        assert_eq!(state.author.mood, 90);
    }
}
