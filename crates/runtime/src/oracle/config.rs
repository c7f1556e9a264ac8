//! Balance numbers from `config.toml`.

use career_core::{ConfigOracle, GameConfig};

#[derive(Debug, Clone, Default)]
pub struct ConfigOracleImpl {
    config: GameConfig,
}

impl ConfigOracleImpl {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl ConfigOracle for ConfigOracleImpl {
    fn game_config(&self) -> &GameConfig {
        &self.config
    }
}
