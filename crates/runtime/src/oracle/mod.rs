//! Runtime wrappers around static career content.
//!
//! These implementations expose the `career-core` oracle traits and bundle
//! them into an [`OracleManager`] so the runtime can build
//! [`career_core::GameEnv`] snapshots on demand. The data is immutable at
//! runtime; dynamic state lives in repositories or [`career_core::GameState`].
mod achievements;
mod config;
mod lifestyle;
mod market;
mod progression;
mod world;

use std::sync::Arc;

use career_core::{Env, GameConfig, GameEnv, PcgRng};

pub use achievements::AchievementOracleImpl;
pub use config::ConfigOracleImpl;
pub use lifestyle::LifestyleOracleImpl;
pub use market::MarketOracleImpl;
pub use progression::ProgressionOracleImpl;
pub use world::WorldOracleImpl;

/// Shared handles to every oracle; cheap to clone.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) progression: Arc<ProgressionOracleImpl>,
    pub(crate) market: Arc<MarketOracleImpl>,
    pub(crate) lifestyle: Arc<LifestyleOracleImpl>,
    pub(crate) achievements: Arc<AchievementOracleImpl>,
    pub(crate) world: Arc<WorldOracleImpl>,
    pub(crate) config: Arc<ConfigOracleImpl>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    pub fn new(
        progression: Arc<ProgressionOracleImpl>,
        market: Arc<MarketOracleImpl>,
        lifestyle: Arc<LifestyleOracleImpl>,
        achievements: Arc<AchievementOracleImpl>,
        world: Arc<WorldOracleImpl>,
        config: Arc<ConfigOracleImpl>,
    ) -> Self {
        Self {
            progression,
            market,
            lifestyle,
            achievements,
            world,
            config,
            rng: PcgRng,
        }
    }

    /// Borrowed view the engine executes against.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.progression.as_ref(),
            self.market.as_ref(),
            self.lifestyle.as_ref(),
            self.achievements.as_ref(),
            self.world.as_ref(),
            self.config.as_ref(),
            &self.rng,
        )
        .into_game_env()
    }

    pub fn progression(&self) -> &ProgressionOracleImpl {
        &self.progression
    }

    pub fn market(&self) -> &MarketOracleImpl {
        &self.market
    }

    pub fn achievements(&self) -> &AchievementOracleImpl {
        &self.achievements
    }

    pub fn world(&self) -> &WorldOracleImpl {
        &self.world
    }

    pub fn rng(&self) -> &PcgRng {
        &self.rng
    }

    pub fn game_config(&self) -> &GameConfig {
        use career_core::ConfigOracle;
        self.config.game_config()
    }
}
