//! Builds the runtime, oracles, and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use career_runtime::{
    FileStateRepository, NarrativeService, OracleManager, Runtime, RuntimeConfig, StateRepository,
};

use crate::config::BootstrapConfig;
use crate::oracles::{ContentOracleFactory, OracleFactory};
use crate::session;

/// Builder that assembles runtime state, oracles, and configuration for clients.
pub struct RuntimeBuilder {
    config: BootstrapConfig,
    oracle_factory: Arc<dyn OracleFactory>,
    narrative: Option<Arc<dyn NarrativeService>>,
}

impl RuntimeBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        let default_factory = ContentOracleFactory::locate(config.data_dir.as_deref());
        Self {
            config,
            oracle_factory: Arc::new(default_factory),
            narrative: None,
        }
    }

    /// Provide a custom oracle factory.
    pub fn oracle_factory(mut self, factory: impl OracleFactory + 'static) -> Self {
        self.oracle_factory = Arc::new(factory);
        self
    }

    /// Text service used by the narrative helpers; canned pools otherwise.
    pub fn narrative(mut self, service: Arc<dyn NarrativeService>) -> Self {
        self.narrative = Some(service);
        self
    }

    /// Builds the runtime, resuming the session's latest save when
    /// persistence is enabled and one exists.
    pub async fn build(self) -> Result<RuntimeSetup> {
        let oracles = self.oracle_factory.build()?;
        let pools = self.oracle_factory.narrative_pools()?;
        let session_id = self
            .config
            .session_id
            .clone()
            .unwrap_or_else(session::new_session_id);

        let mut builder = Runtime::builder()
            .config(RuntimeConfig {
                event_buffer_size: self.config.event_buffer_size,
                command_buffer_size: self.config.command_buffer_size,
                ..RuntimeConfig::default()
            })
            .oracles(oracles.clone())
            .narrative_pools(pools);

        if let Some(service) = self.narrative {
            builder = builder.narrative(service);
        }

        let mut resumed = None;
        if self.config.enable_persistence {
            let save_dir = self
                .config
                .save_data_dir
                .clone()
                .unwrap_or_else(session::default_save_dir);
            let repo = FileStateRepository::new(session::states_dir(&save_dir, &session_id))?;

            if let Some(state) = repo.load_latest()? {
                info!(
                    target: "bootstrap",
                    session = %session_id,
                    nonce = state.clock.nonce,
                    day = state.clock.day,
                    "Resuming saved session"
                );
                resumed = Some(state.clock.nonce);
                builder = builder.initial_state(state);
            }
            builder = builder.repository(Arc::new(repo) as Arc<dyn StateRepository>);
        }

        if resumed.is_none() {
            let seed = self.config.game_seed.unwrap_or_else(rand::random);
            info!(
                target: "bootstrap",
                session = %session_id,
                seed,
                identity = %self.config.identity,
                "Starting new game"
            );
            builder = builder.new_game(seed, self.config.identity);
        }

        let runtime = builder.build().await?;

        Ok(RuntimeSetup {
            config: self.config,
            session_id,
            resumed_from: resumed,
            oracles,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: BootstrapConfig,
    pub session_id: String,
    /// Nonce of the save the game resumed from.
    pub resumed_from: Option<u64>,
    pub oracles: OracleManager,
    pub runtime: Runtime,
}
