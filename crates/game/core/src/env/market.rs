use crate::state::{AssetCategory, AssetId, AuthorRank, Genre};

/// Static definition of a tradable asset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetSpec {
    pub id: AssetId,
    pub name: String,
    pub base_price: f64,
    /// Maximum fractional daily move before sentiment.
    pub volatility: f64,
    pub category: AssetCategory,
    pub linked_genre: Genre,
    /// Lowest rank allowed to trade the asset.
    pub min_rank: AuthorRank,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

pub trait MarketOracle: Send + Sync {
    fn assets(&self) -> &[AssetSpec];

    fn asset(&self, id: &AssetId) -> Option<&AssetSpec> {
        self.assets().iter().find(|spec| &spec.id == id)
    }
}
