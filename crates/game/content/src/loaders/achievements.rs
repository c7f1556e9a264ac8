//! Achievement definition loader.

use std::path::Path;

use career_core::env::{AchievementDefinition, Criterion};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementCatalog {
    pub achievements: Vec<AchievementDefinition>,
}

/// Loader for `achievements.ron`.
pub struct AchievementLoader;

impl AchievementLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<AchievementDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<AchievementDefinition>> {
        let catalog: AchievementCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse achievement RON: {}", e))?;

        ensure_unique(
            "achievement",
            catalog.achievements.iter().map(|def| def.id.as_str()),
        )?;
        for def in &catalog.achievements {
            anyhow::ensure!(
                !is_vacuous(&def.criterion),
                "achievement '{}' has an empty AllOf criterion",
                def.id
            );
        }
        Ok(catalog.achievements)
    }
}

/// An empty conjunction would unlock on the first check.
fn is_vacuous(criterion: &Criterion) -> bool {
    match criterion {
        Criterion::AllOf(parts) => parts.is_empty() || parts.iter().any(is_vacuous),
        _ => false,
    }
}
