//! Data handed back to the caller after a successful action.
use crate::economy::ChapterYield;
use crate::state::{AssetId, AuthorRank, NovelId};

/// Result of action execution, one variant per kind of payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// A novel was started or finished.
    Novel(NovelId),
    Chapter(ChapterYield),
    Trade(TradeReceipt),
    Pump(PumpOutcome),
    Social(SocialOutcome),
    Day(DayReport),
    Rank(Option<RankChange>),
    Unlocked(Vec<String>),
    /// Action succeeded without a payload worth reporting.
    Done,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeReceipt {
    pub asset: AssetId,
    pub shares: u64,
    pub price: f64,
    pub total: f64,
    /// Gain over average cost; `None` for purchases.
    pub realized_profit: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PumpOutcome {
    pub asset: AssetId,
    pub banned: bool,
    pub sentiment_change: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocialOutcome {
    pub heat_gained: u64,
    pub tickets: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankChange {
    pub from: AuthorRank,
    pub to: AuthorRank,
}

impl RankChange {
    pub fn is_promotion(&self) -> bool {
        self.to > self.from
    }
}

/// Summary of an overnight rest.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayReport {
    /// The day that just began.
    pub day: u32,
    pub rent: f64,
    /// Rent could not be paid and the allowance kicked in.
    pub broke: bool,
    pub legacy_income: f64,
    pub ip_payouts: Vec<(NovelId, f64)>,
    /// Readers started nudging for an update.
    pub nudged: bool,
}
