//! Canned narrative pool loader.

use std::path::Path;

use crate::loaders::world::validate_events;
use crate::loaders::{LoadResult, read_file};
use crate::narrative::NarrativePools;

/// Loader for `narrative.ron`.
pub struct NarrativeLoader;

impl NarrativeLoader {
    pub fn load(path: &Path) -> LoadResult<NarrativePools> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<NarrativePools> {
        let pools: NarrativePools = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse narrative RON: {}", e))?;

        anyhow::ensure!(
            !pools.chapter_comments.is_empty(),
            "narrative pools need at least one chapter comment"
        );
        anyhow::ensure!(!pools.snippets.is_empty(), "narrative pools need a snippet");
        validate_events("ip offer", &pools.ip_offers)?;
        Ok(pools)
    }
}
