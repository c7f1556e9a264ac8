//! Tradable asset listings.

use career_core::MarketOracle;
use career_core::env::AssetSpec;

#[derive(Debug, Clone)]
pub struct MarketOracleImpl {
    assets: Vec<AssetSpec>,
}

impl MarketOracleImpl {
    pub fn new(assets: Vec<AssetSpec>) -> Self {
        Self { assets }
    }
}

impl MarketOracle for MarketOracleImpl {
    fn assets(&self) -> &[AssetSpec] {
        &self.assets
    }
}
