//! Configuration oracle for exposing game configuration to the engine.

use crate::config::GameConfig;

/// Provides access to the tunable economy parameters.
pub trait ConfigOracle: Send + Sync {
    fn game_config(&self) -> &GameConfig;
}
