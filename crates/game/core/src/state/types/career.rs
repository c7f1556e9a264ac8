use std::collections::BTreeSet;

use crate::state::types::Genre;

/// Ordered progression tier. Derived from reputation, never set directly.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AuthorRank {
    #[default]
    Novice,
    Contracted,
    MidTier,
    Platinum,
    Legend,
}

impl AuthorRank {
    /// Position on the ladder, starting at 0 for [`AuthorRank::Novice`].
    pub const fn weight(self) -> u8 {
        self as u8
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Novice => Some(Self::Contracted),
            Self::Contracted => Some(Self::MidTier),
            Self::MidTier => Some(Self::Platinum),
            Self::Platinum => Some(Self::Legend),
            Self::Legend => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Novice => "萌新写手",
            Self::Contracted => "签约作者",
            Self::MidTier => "中坚力量",
            Self::Platinum => "白金大神",
            Self::Legend => "文坛泰斗",
        }
    }

    /// Publishing contract that comes with the rank.
    pub const fn contract_tier(self) -> ContractTier {
        match self {
            Self::Novice => ContractTier::None,
            Self::Contracted => ContractTier::Regular,
            Self::MidTier => ContractTier::Featured,
            Self::Platinum | Self::Legend => ContractTier::Master,
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ContractTier {
    #[default]
    None,
    Regular,
    Featured,
    Master,
}

/// Starting background chosen at game creation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IdentityKind {
    #[default]
    Transparent,
    PartTime,
    Niche,
}

/// Game clock. The nonce counts successful actions, the day counts rests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockState {
    pub nonce: u64,
    pub day: u32,
}

impl Default for ClockState {
    fn default() -> Self {
        Self { nonce: 0, day: 1 }
    }
}

/// Personal resources of the author.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthorState {
    pub money: f64,
    pub health: u32,
    pub stamina: u32,
    pub max_stamina: u32,
    pub writing_skill: f64,
    pub inspiration: u32,
    pub mood: u32,
    pub shards: u32,
    pub reputation: u64,
    pub house_level: u8,
    pub marketing_power: u32,
    pub identity: IdentityKind,
    pub specialty: Vec<Genre>,
}

impl AuthorState {
    pub fn spend_stamina(&mut self, amount: u32) {
        self.stamina = self.stamina.saturating_sub(amount);
    }

    pub fn restore_stamina(&mut self, amount: u32) {
        self.stamina = self.stamina.saturating_add(amount).min(self.max_stamina);
    }

    /// Applies a signed stamina change, clamped to `0..=max_stamina`.
    pub fn shift_stamina(&mut self, delta: i64) {
        self.stamina = clamp_shift(self.stamina, delta, self.max_stamina);
    }

    /// Applies a signed mood change, clamped to `0..=100`.
    pub fn shift_mood(&mut self, delta: i64) {
        self.mood = clamp_shift(self.mood, delta, crate::GameConfig::MAX_MOOD);
    }

    /// Applies a signed reputation change. Reputation never goes below zero.
    pub fn shift_reputation(&mut self, delta: i64) {
        self.reputation = if delta >= 0 {
            self.reputation.saturating_add(delta as u64)
        } else {
            self.reputation.saturating_sub(delta.unsigned_abs())
        };
    }
}

/// Long-lived career bookkeeping used by progression and achievements.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CareerState {
    pub rank: AuthorRank,
    pub contract_tier: ContractTier,
    pub unlocked_achievements: BTreeSet<String>,
    pub finished_count: u32,
    pub total_words_written: u64,
    pub total_spent: f64,
    pub total_investment_profit: f64,
    pub max_profit_single_trade: f64,
    pub legacy_income: f64,
}

/// Social-media standing: heat, bans, and reader pressure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocialState {
    pub global_heat: u64,
    pub social_banned_days: u32,
    pub out_of_circle_days: u32,
    pub last_day_shared_hobby: bool,
    pub last_post_day: u32,
    pub nudge_pressure: u32,
    pub nudge_messages_count: u32,
    pub manipulation_cooldown: u32,
    pub consecutive_pumps: u32,
    pub monthly_tickets: u64,
}

impl SocialState {
    pub fn is_banned(&self) -> bool {
        self.social_banned_days > 0
    }

    /// Global heat only accumulates.
    pub fn add_heat(&mut self, amount: u64) {
        self.global_heat = self.global_heat.saturating_add(amount);
    }
}

pub(crate) fn clamp_shift(value: u32, delta: i64, max: u32) -> u32 {
    (value as i64 + delta).clamp(0, max as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_ordered_by_weight() {
        assert!(AuthorRank::Novice < AuthorRank::Legend);
        assert_eq!(AuthorRank::Platinum.weight(), 3);
        assert_eq!(AuthorRank::Legend.next(), None);
        assert_eq!(AuthorRank::MidTier.contract_tier(), ContractTier::Featured);
    }

    #[test]
    fn rank_parses_from_snake_case() {
        assert_eq!("mid_tier".parse::<AuthorRank>(), Ok(AuthorRank::MidTier));
        assert_eq!("LEGEND".parse::<AuthorRank>(), Ok(AuthorRank::Legend));
    }

    #[test]
    fn clamp_shift_bounds() {
        assert_eq!(clamp_shift(10, -30, 100), 0);
        assert_eq!(clamp_shift(90, 30, 100), 100);
        assert_eq!(clamp_shift(50, 5, 100), 55);
    }
}
