//! Helpers for constructing the oracle manager consumed by the runtime.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use career_content::{ContentFactory, NarrativePools};
use career_runtime::{
    AchievementOracleImpl, ConfigOracleImpl, LifestyleOracleImpl, MarketOracleImpl,
    OracleManager, WorldOracleImpl,
};

pub trait OracleFactory: Send + Sync {
    fn build(&self) -> Result<OracleManager>;

    /// Text pools answering when the text service fails.
    fn narrative_pools(&self) -> Result<NarrativePools> {
        Ok(NarrativePools::default())
    }
}

/// Oracle factory that loads game content from data files.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── progression.ron
/// ├── assets.ron
/// ├── lifestyle.ron
/// ├── achievements.ron
/// ├── world.ron
/// └── narrative.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentOracleFactory {
    data_dir: PathBuf,
}

impl ContentOracleFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Uses `data_dir` when given, otherwise searches for the shipped data.
    ///
    /// The search tries, in order:
    /// 1. Relative to current executable (../../crates/game/content/data)
    /// 2. Relative to current directory (crates/game/content/data)
    pub fn locate(data_dir: Option<&Path>) -> Self {
        if let Some(dir) = data_dir {
            return Self::new(dir);
        }

        let from_exe = std::env::current_exe().ok().and_then(|exe| {
            exe.ancestors()
                .nth(3)
                .map(|root| root.join("crates/game/content/data"))
        });
        let data_dir = from_exe
            .filter(|dir| dir.exists())
            .unwrap_or_else(|| {
                std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join("crates/game/content/data")
            });

        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn content(&self) -> Result<ContentFactory> {
        if !self.data_dir.exists() {
            bail!(
                "content data directory not found: {} (set CAREER_DATA_DIR to override)",
                self.data_dir.display()
            );
        }
        Ok(ContentFactory::new(&self.data_dir))
    }
}

impl OracleFactory for ContentOracleFactory {
    fn build(&self) -> Result<OracleManager> {
        let factory = self.content()?;
        let dir = self.data_dir.display();

        let config = factory
            .load_config()
            .with_context(|| format!("failed to load config.toml from {dir}"))?;
        let progression = factory
            .load_progression()
            .with_context(|| format!("failed to load progression.ron from {dir}"))?;
        let assets = factory
            .load_assets()
            .with_context(|| format!("failed to load assets.ron from {dir}"))?;
        let lifestyle = factory
            .load_lifestyle()
            .with_context(|| format!("failed to load lifestyle.ron from {dir}"))?;
        let achievements = factory
            .load_achievements()
            .with_context(|| format!("failed to load achievements.ron from {dir}"))?;
        let world = factory
            .load_world()
            .with_context(|| format!("failed to load world.ron from {dir}"))?;

        tracing::debug!(
            target: "bootstrap",
            assets = assets.len(),
            achievements = achievements.len(),
            macro_events = world.macro_events.len(),
            "Content loaded"
        );

        Ok(OracleManager::new(
            Arc::new(progression.into()),
            Arc::new(MarketOracleImpl::new(assets)),
            Arc::new(LifestyleOracleImpl::new(lifestyle)),
            Arc::new(AchievementOracleImpl::new(achievements)),
            Arc::new(WorldOracleImpl::new(world)),
            Arc::new(ConfigOracleImpl::new(config)),
        ))
    }

    fn narrative_pools(&self) -> Result<NarrativePools> {
        self.content()?
            .load_narrative()
            .with_context(|| format!("failed to load narrative.ron from {}", self.data_dir.display()))
    }
}
