use crate::state::types::{AssetId, AuthorRank, AuthorState, CareerState, MarketState};

use super::bitmask::{AuthorFields, CareerFields};

/// Metadata describing which author resources changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthorChanges {
    pub fields: AuthorFields,
}

impl AuthorChanges {
    pub(super) fn from_states(before: &AuthorState, after: &AuthorState) -> Self {
        let mut fields = AuthorFields::empty();

        if before.money != after.money {
            fields |= AuthorFields::MONEY;
        }
        if before.stamina != after.stamina || before.max_stamina != after.max_stamina {
            fields |= AuthorFields::STAMINA;
        }
        if before.mood != after.mood {
            fields |= AuthorFields::MOOD;
        }
        if before.reputation != after.reputation {
            fields |= AuthorFields::REPUTATION;
        }
        if before.writing_skill != after.writing_skill {
            fields |= AuthorFields::SKILL;
        }
        if before.inspiration != after.inspiration {
            fields |= AuthorFields::INSPIRATION;
        }
        if before.shards != after.shards {
            fields |= AuthorFields::SHARDS;
        }
        if before.house_level != after.house_level {
            fields |= AuthorFields::HOUSE;
        }
        if before.health != after.health {
            fields |= AuthorFields::HEALTH;
        }

        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Career bookkeeping changes, including the achievement ids unlocked by the
/// transition and the rank move if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CareerChanges {
    pub fields: CareerFields,
    pub unlocked: Vec<String>,
    pub rank_change: Option<(AuthorRank, AuthorRank)>,
}

impl CareerChanges {
    pub(super) fn from_states(before: &CareerState, after: &CareerState) -> Self {
        let mut fields = CareerFields::empty();

        if before.rank != after.rank {
            fields |= CareerFields::RANK;
        }
        if before.contract_tier != after.contract_tier {
            fields |= CareerFields::CONTRACT;
        }
        if before.unlocked_achievements != after.unlocked_achievements {
            fields |= CareerFields::ACHIEVEMENTS;
        }
        if before.finished_count != after.finished_count {
            fields |= CareerFields::FINISHED;
        }
        if before.total_words_written != after.total_words_written {
            fields |= CareerFields::WORDS;
        }
        if before.total_investment_profit != after.total_investment_profit
            || before.max_profit_single_trade != after.max_profit_single_trade
        {
            fields |= CareerFields::INVESTMENT;
        }
        if before.total_spent != after.total_spent {
            fields |= CareerFields::SPENDING;
        }
        if before.legacy_income != after.legacy_income {
            fields |= CareerFields::LEGACY;
        }

        let unlocked = after
            .unlocked_achievements
            .difference(&before.unlocked_achievements)
            .cloned()
            .collect();

        let rank_change = (before.rank != after.rank).then_some((before.rank, after.rank));

        Self {
            fields,
            unlocked,
            rank_change,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Assets whose price or holding moved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketChanges {
    pub repriced: Vec<AssetId>,
    pub holdings: Vec<AssetId>,
    pub news_published: bool,
}

impl MarketChanges {
    pub(super) fn from_states(before: &MarketState, after: &MarketState) -> Self {
        let repriced = after
            .assets
            .iter()
            .filter(|asset| {
                before
                    .asset(&asset.id)
                    .is_none_or(|prev| prev.price != asset.price || prev.sentiment != asset.sentiment)
            })
            .map(|asset| asset.id.clone())
            .collect();

        let holdings = after
            .portfolio
            .keys()
            .chain(before.portfolio.keys())
            .filter(|id| before.portfolio.get(*id) != after.portfolio.get(*id))
            .cloned()
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            repriced,
            holdings,
            news_published: before.news != after.news,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.repriced.is_empty() && self.holdings.is_empty() && !self.news_published
    }
}
