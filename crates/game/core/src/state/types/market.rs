use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Identifier of a tradable asset (e.g. `"index_fund"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AssetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AssetCategory {
    Stable,
    Growth,
    Speculative,
}

pub type PriceHistory = ArrayVec<f64, { GameConfig::PRICE_HISTORY_LEN }>;

/// Live market data for one asset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetState {
    pub id: AssetId,
    pub price: f64,
    pub history: PriceHistory,
    /// Crowd mood on the asset. Overwritten by every daily tick.
    pub sentiment: i32,
}

impl AssetState {
    pub fn new(id: AssetId, price: f64, history: PriceHistory) -> Self {
        Self {
            id,
            price,
            history,
            sentiment: 0,
        }
    }

    /// Appends a price sample, evicting the oldest once the history is full.
    pub fn record_price(&mut self, price: f64) {
        if self.history.is_full() {
            self.history.remove(0);
        }
        self.history.push(price);
    }

    /// Saturates instead of overflowing; event biases come from outside.
    pub fn shift_sentiment(&mut self, delta: i32) {
        self.sentiment = self.sentiment.saturating_add(delta);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holding {
    pub shares: u64,
    pub average_cost: f64,
}

impl Holding {
    /// Adds shares bought at `price`, blending the average cost.
    pub fn add(&mut self, shares: u64, price: f64) {
        let total_cost = self.average_cost * self.shares as f64 + price * shares as f64;
        self.shares += shares;
        self.average_cost = if self.shares == 0 {
            0.0
        } else {
            total_cost / self.shares as f64
        };
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NewsImpact {
    Positive,
    Negative,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketNews {
    pub id: u32,
    pub day: u32,
    pub text: String,
    pub impact: NewsImpact,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketState {
    pub assets: Vec<AssetState>,
    pub portfolio: BTreeMap<AssetId, Holding>,
    pub news: Vec<MarketNews>,
    next_news_id: u32,
}

impl MarketState {
    pub fn new(assets: Vec<AssetState>) -> Self {
        Self {
            assets,
            ..Self::default()
        }
    }

    pub fn asset(&self, id: &AssetId) -> Option<&AssetState> {
        self.assets.iter().find(|asset| &asset.id == id)
    }

    pub fn asset_mut(&mut self, id: &AssetId) -> Option<&mut AssetState> {
        self.assets.iter_mut().find(|asset| &asset.id == id)
    }

    pub fn shares_held(&self, id: &AssetId) -> u64 {
        self.portfolio.get(id).map_or(0, |holding| holding.shares)
    }

    /// Market value of all holdings at current prices.
    pub fn portfolio_value(&self) -> f64 {
        self.portfolio
            .iter()
            .filter_map(|(id, holding)| {
                self.asset(id)
                    .map(|asset| asset.price * holding.shares as f64)
            })
            .sum()
    }

    /// Publishes a headline, keeping only the most recent ones.
    pub fn push_news(&mut self, day: u32, text: impl Into<String>, impact: NewsImpact) {
        self.next_news_id += 1;
        self.news.push(MarketNews {
            id: self.next_news_id,
            day,
            text: text.into(),
            impact,
        });
        if self.news.len() > GameConfig::MAX_NEWS {
            let excess = self.news.len() - GameConfig::MAX_NEWS;
            self.news.drain(..excess);
        }
    }
}
