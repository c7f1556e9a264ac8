//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the simulation.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use career_content::NarrativePools;
use career_core::{GameState, IdentityKind, WorldOracle};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::hooks::HookRegistry;
use crate::narrative::{CannedNarrative, NarrativeService};
use crate::oracle::OracleManager;
use crate::repository::StateRepository;
use crate::workers::{
    Command, PERSIST_BUFFER, PersistenceConfig, PersistenceWorker, SimulationWorker,
};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Only used when a repository is configured.
    pub persistence: PersistenceConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            persistence: PersistenceConfig::default(),
        }
    }
}

/// Main runtime that orchestrates the career simulation
///
/// Design: Runtime owns workers and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
    persistence_worker_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Workers stop once every handle clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        if let Some(persistence) = self.persistence_worker_handle {
            persistence.await.map_err(RuntimeError::WorkerJoin)?;
        }

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    seed: u64,
    identity: IdentityKind,
    oracles: Option<OracleManager>,
    hooks: Option<HookRegistry>,
    narrative: Option<Arc<dyn NarrativeService>>,
    pools: NarrativePools,
    repository: Option<Arc<dyn StateRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            seed: 0,
            identity: IdentityKind::default(),
            oracles: None,
            hooks: None,
            narrative: None,
            pools: NarrativePools::default(),
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Resume from an existing state instead of starting a new game.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Seed and identity for a new game; ignored with an initial state.
    pub fn new_game(mut self, seed: u64, identity: IdentityKind) -> Self {
        self.seed = seed;
        self.identity = identity;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set custom post-execution hooks.
    ///
    /// If not provided, [`HookRegistry::default_hooks`] is used. Extend
    /// [`HookRegistry::default_hook_list`] to keep the defaults.
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Text service consulted by the narrative helpers.
    ///
    /// Defaults to the canned pools alone.
    pub fn narrative(mut self, service: Arc<dyn NarrativeService>) -> Self {
        self.narrative = Some(service);
        self
    }

    /// Pools answering when the text service fails.
    pub fn narrative_pools(mut self, pools: NarrativePools) -> Self {
        self.pools = pools;
        self
    }

    /// Enables saving through `repository`.
    pub fn repository(mut self, repository: Arc<dyn StateRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;

        let initial_state = match self.state {
            Some(state) => state,
            None => GameState::new_game(self.seed, self.identity, &oracles.as_game_env())
                .map_err(RuntimeError::InitialState)?,
        };

        let fallback = Arc::new(
            CannedNarrative::new(self.pools, oracles.game_config().fallback_outline_count)
                .with_macro_events(oracles.world().macro_events().to_vec()),
        );
        let narrative = self
            .narrative
            .unwrap_or_else(|| fallback.clone() as Arc<dyn NarrativeService>);

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let (persist_tx, persistence_worker_handle) = match self.repository {
            Some(repo) => {
                let (tx, rx) = mpsc::channel(PERSIST_BUFFER);
                let worker = PersistenceWorker::new(repo, self.config.persistence.clone(), rx);
                (Some(tx), Some(tokio::spawn(worker.run())))
            }
            None => (None, None),
        };

        let sim_worker = SimulationWorker::new(
            initial_state,
            oracles.clone(),
            self.hooks.unwrap_or_default(),
            command_rx,
            event_bus.clone(),
            persist_tx,
        );
        let sim_worker_handle = tokio::spawn(sim_worker.run());

        let handle = RuntimeHandle::new(command_tx, event_bus, oracles, narrative, fallback);

        Ok(Runtime {
            handle,
            sim_worker_handle,
            persistence_worker_handle,
        })
    }
}
