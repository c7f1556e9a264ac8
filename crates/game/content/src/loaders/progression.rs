//! Rank ladder and identity loader.

use std::path::Path;

use career_core::env::{IdentityProfile, StatusLevel};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Progression file structure: the ladder plus the selectable identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionCatalog {
    pub ladder: Vec<StatusLevel>,
    pub identities: Vec<IdentityProfile>,
}

/// Loader for `progression.ron`.
pub struct ProgressionLoader;

impl ProgressionLoader {
    pub fn load(path: &Path) -> LoadResult<ProgressionCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ProgressionCatalog> {
        let catalog: ProgressionCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse progression RON: {}", e))?;
        validate(&catalog)?;
        Ok(catalog)
    }
}

fn validate(catalog: &ProgressionCatalog) -> LoadResult<()> {
    let ladder = &catalog.ladder;
    anyhow::ensure!(!ladder.is_empty(), "status ladder is empty");
    anyhow::ensure!(
        ladder[0].threshold == 0,
        "the first ladder level must start at 0 reputation, got {}",
        ladder[0].threshold
    );
    for pair in ladder.windows(2) {
        anyhow::ensure!(
            pair[0].threshold < pair[1].threshold && pair[0].rank < pair[1].rank,
            "ladder levels must ascend: {} ({}) is followed by {} ({})",
            pair[0].rank,
            pair[0].threshold,
            pair[1].rank,
            pair[1].threshold
        );
    }
    ensure_unique(
        "skill",
        ladder
            .iter()
            .flat_map(|level| level.skills.iter().map(|skill| skill.id.as_str())),
    )?;

    anyhow::ensure!(!catalog.identities.is_empty(), "no identities defined");
    let kinds: Vec<String> = catalog
        .identities
        .iter()
        .map(|profile| profile.kind.to_string())
        .collect();
    ensure_unique("identity", kinds.iter().map(String::as_str))?;
    Ok(())
}
