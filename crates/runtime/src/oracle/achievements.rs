//! Achievement definitions.

use career_core::AchievementOracle;
use career_core::env::AchievementDefinition;

#[derive(Debug, Clone)]
pub struct AchievementOracleImpl {
    definitions: Vec<AchievementDefinition>,
}

impl AchievementOracleImpl {
    pub fn new(definitions: Vec<AchievementDefinition>) -> Self {
        Self { definitions }
    }
}

impl AchievementOracle for AchievementOracleImpl {
    fn achievements(&self) -> &[AchievementDefinition] {
        &self.definitions
    }
}
