//! Data-driven career content and loaders.
//!
//! This crate houses the static content of the game and provides loaders for
//! RON/TOML data files:
//! - Author-rank ladder and starting identities (RON)
//! - Market listings (RON)
//! - Housing, shop, hobbies and inspiration quotes (RON)
//! - Achievement definitions (RON)
//! - Rival authors and the macro-event catalog (RON)
//! - Canned narrative pools used when the text service is unavailable (RON)
//! - Game configuration (TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.
//!
//! All loaders use career-core types directly with serde for RON/TOML deserialization.

pub mod narrative;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use narrative::NarrativePools;

#[cfg(feature = "loaders")]
pub use loaders::{
    AchievementCatalog, AchievementLoader, AssetCatalog, ConfigLoader, ContentFactory,
    LifestyleCatalog, LifestyleLoader, MarketLoader, NarrativeLoader, ProgressionCatalog,
    ProgressionLoader, WorldCatalog, WorldLoader,
};
