//! Game configuration loader.

use std::path::Path;

use career_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] value.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &GameConfig) -> LoadResult<()> {
    for (name, chance) in [
        ("pump_ban_chance", config.pump_ban_chance),
        ("pump_ban_chance_on_cooldown", config.pump_ban_chance_on_cooldown),
        ("passerby_retention", config.passerby_retention),
        ("follower_retention", config.follower_retention),
    ] {
        anyhow::ensure!(
            (0.0..=1.0).contains(&chance),
            "{} must be within [0, 1], got {}",
            name,
            chance
        );
    }
    anyhow::ensure!(
        (0.0..1.0).contains(&config.word_variance),
        "word_variance must be within [0, 1), got {}",
        config.word_variance
    );
    anyhow::ensure!(config.min_price > 0.0, "min_price must be positive");
    anyhow::ensure!(
        config.macro_event_interval > 0,
        "macro_event_interval must be at least one day"
    );
    Ok(())
}
