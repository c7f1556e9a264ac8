//! Persistence worker that writes committed states to a [`StateRepository`].
//!
//! The simulation worker forwards a snapshot after every commit. Every
//! `autosave_every` snapshots one is saved, and old saves beyond `keep` are
//! pruned. Explicit saves are written immediately and reply with the nonce.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use career_core::GameState;

use crate::api::Result;
use crate::repository::{self, StateRepository};

/// Snapshots buffered between the simulation and persistence workers.
pub(crate) const PERSIST_BUFFER: usize = 16;

/// Configuration for the persistence worker
#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    /// Save every N commits. Zero disables autosave.
    pub autosave_every: u64,
    /// Saves kept on disk. Zero keeps all of them.
    pub keep: usize,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            autosave_every: 5,
            keep: 10,
        }
    }
}

pub(crate) enum PersistRequest {
    Autosave(Box<GameState>),
    Save {
        state: Box<GameState>,
        reply: oneshot::Sender<Result<u64>>,
    },
}

/// Background worker that owns the state repository.
pub struct PersistenceWorker {
    repo: Arc<dyn StateRepository>,
    config: PersistenceConfig,
    request_rx: mpsc::Receiver<PersistRequest>,
    commits_since_save: u64,
}

impl PersistenceWorker {
    pub(crate) fn new(
        repo: Arc<dyn StateRepository>,
        config: PersistenceConfig,
        request_rx: mpsc::Receiver<PersistRequest>,
    ) -> Self {
        Self {
            repo,
            config,
            request_rx,
            commits_since_save: 0,
        }
    }

    /// Runs until the simulation worker drops its sender.
    pub async fn run(mut self) {
        while let Some(request) = self.request_rx.recv().await {
            match request {
                PersistRequest::Autosave(state) => self.autosave(&state),
                PersistRequest::Save { state, reply } => {
                    let result = self.save(&state).map_err(Into::into);
                    if reply.send(result).is_err() {
                        debug!("Save reply channel closed (caller dropped)");
                    }
                }
            }
        }
        debug!(target: "runtime::persistence", "PersistenceWorker stopped");
    }

    fn autosave(&mut self, state: &GameState) {
        if self.config.autosave_every == 0 {
            return;
        }
        self.commits_since_save += 1;
        if self.commits_since_save < self.config.autosave_every {
            return;
        }

        match self.save(state) {
            Ok(nonce) => debug!(target: "runtime::persistence", nonce, "Autosaved"),
            Err(error) => error!(
                target: "runtime::persistence",
                nonce = state.clock.nonce,
                error = %error,
                "Autosave failed"
            ),
        }
    }

    fn save(&mut self, state: &GameState) -> repository::Result<u64> {
        let nonce = state.clock.nonce;
        self.repo.save(nonce, state)?;
        self.commits_since_save = 0;

        let pruned = self.prune()?;
        info!(
            target: "runtime::persistence",
            nonce,
            day = state.clock.day,
            pruned,
            "State saved"
        );
        Ok(nonce)
    }

    fn prune(&self) -> repository::Result<usize> {
        let keep = self.config.keep;
        if keep == 0 {
            return Ok(0);
        }

        let nonces = self.repo.list_nonces()?;
        if nonces.len() <= keep {
            return Ok(0);
        }
        let cutoff = nonces[nonces.len() - keep - 1];
        self.repo.delete_range(nonces[0], cutoff)
    }
}
