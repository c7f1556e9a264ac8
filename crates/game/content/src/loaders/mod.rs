//! Content loaders for reading game data from files.
//!
//! Each loader parses one file into career-core types and rejects content the
//! engine cannot run on (an unordered ladder, duplicate ids, empty events).

pub mod achievements;
pub mod config;
pub mod factory;
pub mod lifestyle;
pub mod market;
pub mod narrative;
pub mod progression;
pub mod world;

pub use achievements::{AchievementCatalog, AchievementLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use lifestyle::{LifestyleCatalog, LifestyleLoader};
pub use market::{AssetCatalog, MarketLoader};
pub use narrative::NarrativeLoader;
pub use progression::{ProgressionCatalog, ProgressionLoader};
pub use world::{WorldCatalog, WorldLoader};

use std::collections::HashSet;
use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Fails on the first id that appears twice.
pub(crate) fn ensure_unique<'a>(
    kind: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        anyhow::ensure!(seen.insert(id), "duplicate {} id '{}'", kind, id);
    }
    Ok(())
}
