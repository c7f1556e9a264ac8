//! Market listing loader.

use std::path::Path;

use career_core::env::AssetSpec;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Asset catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetCatalog {
    pub assets: Vec<AssetSpec>,
}

/// Loader for `assets.ron`.
pub struct MarketLoader;

impl MarketLoader {
    /// Load the asset listings, in the order the market shows them.
    pub fn load(path: &Path) -> LoadResult<Vec<AssetSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<AssetSpec>> {
        let catalog: AssetCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse asset catalog RON: {}", e))?;

        ensure_unique("asset", catalog.assets.iter().map(|spec| spec.id.as_str()))?;
        for spec in &catalog.assets {
            anyhow::ensure!(
                spec.base_price > 0.0,
                "asset '{}' needs a positive base price",
                spec.id
            );
            anyhow::ensure!(
                (0.0..1.0).contains(&spec.volatility),
                "asset '{}' volatility must be within [0, 1), got {}",
                spec.id,
                spec.volatility
            );
        }
        Ok(catalog.assets)
    }
}
