//! Lifestyle catalog loader: housing, shop, hobbies and quotes.

use std::path::Path;

use career_core::env::{GatherOption, HousingTier, InspirationQuote, ShopItem};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleCatalog {
    pub housing: Vec<HousingTier>,
    pub shop_items: Vec<ShopItem>,
    pub gather_options: Vec<GatherOption>,
    #[serde(default)]
    pub quotes: Vec<InspirationQuote>,
}

/// Loader for `lifestyle.ron`.
pub struct LifestyleLoader;

impl LifestyleLoader {
    pub fn load(path: &Path) -> LoadResult<LifestyleCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LifestyleCatalog> {
        let catalog: LifestyleCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse lifestyle RON: {}", e))?;
        validate(&catalog)?;
        Ok(catalog)
    }
}

fn validate(catalog: &LifestyleCatalog) -> LoadResult<()> {
    // Residence changes step through levels, so the table must be gapless.
    for (expected, tier) in catalog.housing.iter().enumerate() {
        anyhow::ensure!(
            tier.level as usize == expected,
            "housing levels must run 0, 1, 2, ... without gaps; found {} at position {}",
            tier.level,
            expected
        );
    }
    anyhow::ensure!(!catalog.housing.is_empty(), "housing table is empty");

    ensure_unique("shop item", catalog.shop_items.iter().map(|item| item.id.as_str()))?;
    for item in &catalog.shop_items {
        anyhow::ensure!(item.price >= 0.0, "shop item '{}' has a negative price", item.id);
    }
    ensure_unique(
        "gather option",
        catalog.gather_options.iter().map(|option| option.id.as_str()),
    )?;
    ensure_unique("quote", catalog.quotes.iter().map(|quote| quote.id.as_str()))?;
    Ok(())
}
