//! Shared fixtures for unit tests: the shipped content, loaded once per call.

use std::path::PathBuf;
use std::sync::Arc;

use career_content::{ContentFactory, NarrativePools};
use career_core::{GameState, IdentityKind};

use crate::oracle::{
    AchievementOracleImpl, ConfigOracleImpl, LifestyleOracleImpl, MarketOracleImpl,
    OracleManager, WorldOracleImpl,
};

pub(crate) const SEED: u64 = 0x5EED;

fn factory() -> ContentFactory {
    ContentFactory::new(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data"),
    )
}

pub(crate) fn oracles() -> OracleManager {
    let factory = factory();
    OracleManager::new(
        Arc::new(factory.load_progression().unwrap().into()),
        Arc::new(MarketOracleImpl::new(factory.load_assets().unwrap())),
        Arc::new(LifestyleOracleImpl::new(factory.load_lifestyle().unwrap())),
        Arc::new(AchievementOracleImpl::new(factory.load_achievements().unwrap())),
        Arc::new(WorldOracleImpl::new(factory.load_world().unwrap())),
        Arc::new(ConfigOracleImpl::new(factory.load_config().unwrap())),
    )
}

pub(crate) fn pools() -> NarrativePools {
    factory().load_narrative().unwrap()
}

pub(crate) fn fresh_state() -> GameState {
    let oracles = oracles();
    GameState::new_game(SEED, IdentityKind::Transparent, &oracles.as_game_env()).unwrap()
}
