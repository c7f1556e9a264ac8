use crate::state::AuthorRank;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AchievementCategory {
    Writing,
    Finance,
    Social,
    Ultimate,
}

/// Condition checked against the player record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    TotalWordsAtLeast(u64),
    AnyNovelQualityAtLeast(f64),
    AnyNovelTensionAtLeast(u32),
    FinishedNovelsAtLeast(u32),
    MaxSingleTradeProfitAtLeast(f64),
    MoneyAtLeast(f64),
    HouseLevelAtLeast(u8),
    StansAtLeast(u64),
    GlobalHeatAtLeast(u64),
    ReputationAtLeast(u64),
    RankReached(AuthorRank),
    AllOf(Vec<Criterion>),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AchievementDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    /// Flavour text shown on unlock.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reward_text: String,
    pub criterion: Criterion,
}

pub trait AchievementOracle: Send + Sync {
    fn achievements(&self) -> &[AchievementDefinition];

    fn achievement(&self, id: &str) -> Option<&AchievementDefinition> {
        self.achievements().iter().find(|def| def.id == id)
    }
}
