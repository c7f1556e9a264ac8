//! Housing, shop, gathering and inspiration catalogs.

use career_content::LifestyleCatalog;
use career_core::LifestyleOracle;
use career_core::env::{GatherOption, HousingTier, InspirationQuote, ShopItem};

#[derive(Debug, Clone)]
pub struct LifestyleOracleImpl {
    catalog: LifestyleCatalog,
}

impl LifestyleOracleImpl {
    pub fn new(catalog: LifestyleCatalog) -> Self {
        Self { catalog }
    }
}

impl LifestyleOracle for LifestyleOracleImpl {
    fn housing(&self) -> &[HousingTier] {
        &self.catalog.housing
    }

    fn shop_items(&self) -> &[ShopItem] {
        &self.catalog.shop_items
    }

    fn gather_options(&self) -> &[GatherOption] {
        &self.catalog.gather_options
    }

    fn quotes(&self) -> &[InspirationQuote] {
        &self.catalog.quotes
    }
}
