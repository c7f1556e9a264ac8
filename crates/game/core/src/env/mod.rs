//! Traits describing read-only career content.
//!
//! Oracles expose the rank ladder, market listings, lifestyle catalogs,
//! achievement definitions, the rival/event world and tunable configuration.
//! The [`Env`] aggregate bundles them so the engine can access everything it
//! needs without hard coupling to concrete implementations.
mod achievements;
mod config;
mod error;
mod lifestyle;
mod market;
mod progression;
mod rng;
mod world;

pub use achievements::{AchievementCategory, AchievementDefinition, AchievementOracle, Criterion};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use lifestyle::{
    GatherOption, HousingTier, InspirationQuote, LifestyleOracle, QuoteCategory, ShopItem,
    StatEffect,
};
pub use market::{AssetSpec, MarketOracle};
pub use progression::{IdentityProfile, PerkEffect, ProgressionOracle, RankSkill, StatusLevel};
pub use rng::{PcgRng, RngOracle, compute_seed, streams};
pub use world::{RivalEntry, WorldOracle};

use crate::config::GameConfig;

/// Aggregates read-only oracles required by the reducer and action pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, P, K, L, A, W, C, R>
where
    P: ProgressionOracle + ?Sized,
    K: MarketOracle + ?Sized,
    L: LifestyleOracle + ?Sized,
    A: AchievementOracle + ?Sized,
    W: WorldOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    progression: Option<&'a P>,
    market: Option<&'a K>,
    lifestyle: Option<&'a L>,
    achievements: Option<&'a A>,
    world: Option<&'a W>,
    config: Option<&'a C>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<
    'a,
    dyn ProgressionOracle + 'a,
    dyn MarketOracle + 'a,
    dyn LifestyleOracle + 'a,
    dyn AchievementOracle + 'a,
    dyn WorldOracle + 'a,
    dyn ConfigOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, P, K, L, A, W, C, R> Env<'a, P, K, L, A, W, C, R>
where
    P: ProgressionOracle + ?Sized,
    K: MarketOracle + ?Sized,
    L: LifestyleOracle + ?Sized,
    A: AchievementOracle + ?Sized,
    W: WorldOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        progression: Option<&'a P>,
        market: Option<&'a K>,
        lifestyle: Option<&'a L>,
        achievements: Option<&'a A>,
        world: Option<&'a W>,
        config: Option<&'a C>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            progression,
            market,
            lifestyle,
            achievements,
            world,
            config,
            rng,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_all(
        progression: &'a P,
        market: &'a K,
        lifestyle: &'a L,
        achievements: &'a A,
        world: &'a W,
        config: &'a C,
        rng: &'a R,
    ) -> Self {
        Self::new(
            Some(progression),
            Some(market),
            Some(lifestyle),
            Some(achievements),
            Some(world),
            Some(config),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self {
            progression: None,
            market: None,
            lifestyle: None,
            achievements: None,
            world: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the ProgressionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ProgressionNotAvailable` if no progression oracle was provided.
    pub fn progression(&self) -> Result<&'a P, OracleError> {
        self.progression.ok_or(OracleError::ProgressionNotAvailable)
    }

    /// Returns the MarketOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MarketNotAvailable` if no market oracle was provided.
    pub fn market(&self) -> Result<&'a K, OracleError> {
        self.market.ok_or(OracleError::MarketNotAvailable)
    }

    /// Returns the LifestyleOracle, or an error if not available.
    pub fn lifestyle(&self) -> Result<&'a L, OracleError> {
        self.lifestyle.ok_or(OracleError::LifestyleNotAvailable)
    }

    /// Returns the AchievementOracle, or an error if not available.
    pub fn achievements(&self) -> Result<&'a A, OracleError> {
        self.achievements.ok_or(OracleError::AchievementsNotAvailable)
    }

    /// Returns the WorldOracle, or an error if not available.
    pub fn world(&self) -> Result<&'a W, OracleError> {
        self.world.ok_or(OracleError::WorldNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the tunables from the config oracle.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn game_config(&self) -> Result<&'a GameConfig, OracleError> {
        Ok(self.config()?.game_config())
    }

    /// Returns the status ladder from the progression oracle.
    pub fn ladder(&self) -> Result<&'a [StatusLevel], OracleError> {
        Ok(self.progression()?.ladder())
    }
}

impl<'a, P, K, L, A, W, C, R> Env<'a, P, K, L, A, W, C, R>
where
    P: ProgressionOracle + 'a,
    K: MarketOracle + 'a,
    L: LifestyleOracle + 'a,
    A: AchievementOracle + 'a,
    W: WorldOracle + 'a,
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (consumes self).
    pub fn into_game_env(self) -> GameEnv<'a> {
        self.as_game_env()
    }

    /// Converts this environment into a trait-object based `GameEnv` (borrows self).
    ///
    /// Use this when you need to convert multiple times (e.g., in a loop).
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let progression: Option<&'a dyn ProgressionOracle> = self.progression.map(|p| p as _);
        let market: Option<&'a dyn MarketOracle> = self.market.map(|m| m as _);
        let lifestyle: Option<&'a dyn LifestyleOracle> = self.lifestyle.map(|l| l as _);
        let achievements: Option<&'a dyn AchievementOracle> = self.achievements.map(|a| a as _);
        let world: Option<&'a dyn WorldOracle> = self.world.map(|w| w as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(
            progression,
            market,
            lifestyle,
            achievements,
            world,
            config,
            rng,
        )
    }
}
