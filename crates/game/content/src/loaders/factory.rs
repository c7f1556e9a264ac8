//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use career_core::GameConfig;
use career_core::env::{AchievementDefinition, AssetSpec};

use crate::loaders::{
    AchievementLoader, ConfigLoader, LifestyleCatalog, LifestyleLoader, LoadResult, MarketLoader,
    NarrativeLoader, ProgressionCatalog, ProgressionLoader, WorldCatalog, WorldLoader,
};
use crate::narrative::NarrativePools;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── progression.ron
/// ├── assets.ron
/// ├── lifestyle.ron
/// ├── achievements.ron
/// ├── world.ron
/// └── narrative.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the rank ladder and identities from `progression.ron`.
    pub fn load_progression(&self) -> LoadResult<ProgressionCatalog> {
        ProgressionLoader::load(&self.data_dir.join("progression.ron"))
    }

    /// Load market listings from `assets.ron`.
    pub fn load_assets(&self) -> LoadResult<Vec<AssetSpec>> {
        MarketLoader::load(&self.data_dir.join("assets.ron"))
    }

    /// Load housing, shop, hobbies and quotes from `lifestyle.ron`.
    pub fn load_lifestyle(&self) -> LoadResult<LifestyleCatalog> {
        LifestyleLoader::load(&self.data_dir.join("lifestyle.ron"))
    }

    pub fn load_achievements(&self) -> LoadResult<Vec<AchievementDefinition>> {
        AchievementLoader::load(&self.data_dir.join("achievements.ron"))
    }

    /// Load rivals and the macro-event catalog from `world.ron`.
    ///
    /// Market effects must name listed assets, so the listings are loaded
    /// first and checked against.
    pub fn load_world(&self) -> LoadResult<WorldCatalog> {
        let world = WorldLoader::load(&self.data_dir.join("world.ron"))?;
        let assets = self.load_assets()?;
        for event in &world.macro_events {
            if let Some(effect) = &event.market_effect {
                anyhow::ensure!(
                    assets.iter().any(|spec| spec.id == effect.target_asset),
                    "macro event '{}' targets unlisted asset '{}'",
                    event.id,
                    effect.target_asset
                );
            }
        }
        Ok(world)
    }

    /// Load the canned narrative pools from `narrative.ron`.
    pub fn load_narrative(&self) -> LoadResult<NarrativePools> {
        NarrativeLoader::load(&self.data_dir.join("narrative.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_core::{AuthorRank, IdentityKind};

    fn shipped() -> ContentFactory {
        ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = ContentFactory::new("/nonexistent").load_config().unwrap_err();
        assert!(error.to_string().contains("config.toml"));
    }

    #[test]
    fn shipped_content_loads() {
        let factory = shipped();

        let config = factory.load_config().unwrap();
        assert_eq!(config.ranking_boost_score, 3000);

        let progression = factory.load_progression().unwrap();
        assert_eq!(progression.ladder.len(), 5);
        assert_eq!(progression.ladder[4].rank, AuthorRank::Legend);
        assert_eq!(progression.identities.len(), 3);
        assert!(
            progression
                .identities
                .iter()
                .any(|profile| profile.kind == IdentityKind::Niche)
        );

        assert_eq!(factory.load_assets().unwrap().len(), 5);

        let lifestyle = factory.load_lifestyle().unwrap();
        assert_eq!(lifestyle.housing.len(), 4);
        assert!(lifestyle.shop_items.iter().any(|item| item.id == "coffee"));

        assert_eq!(factory.load_achievements().unwrap().len(), 12);

        let world = factory.load_world().unwrap();
        assert!(!world.macro_events.is_empty());
        assert!(!world.rivals.is_empty());

        let narrative = factory.load_narrative().unwrap();
        assert_eq!(narrative.danmu.len(), 5);
        assert!(!narrative.ip_offers.is_empty());
    }

    #[test]
    fn identities_start_in_listed_housing() {
        let factory = shipped();
        let progression = factory.load_progression().unwrap();
        let lifestyle = factory.load_lifestyle().unwrap();
        for profile in &progression.identities {
            assert!(
                lifestyle
                    .housing
                    .iter()
                    .any(|tier| tier.level == profile.initial_house_level)
            );
        }
    }
}
