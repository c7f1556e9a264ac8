//! Saves held in memory, for tests and sessions without persistence.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use career_core::GameState;

use super::{RepositoryError, Result, StateRepository};

#[derive(Default)]
pub struct InMemoryStateRepo {
    saves: Mutex<BTreeMap<u64, GameState>>,
}

impl InMemoryStateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn saves(&self) -> Result<MutexGuard<'_, BTreeMap<u64, GameState>>> {
        self.saves.lock().map_err(|_| RepositoryError::LockPoisoned)
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, nonce: u64, state: &GameState) -> Result<()> {
        self.saves()?.insert(nonce, state.clone());
        Ok(())
    }

    fn load(&self, nonce: u64) -> Result<Option<GameState>> {
        Ok(self.saves()?.get(&nonce).cloned())
    }

    fn exists(&self, nonce: u64) -> bool {
        self.saves()
            .map(|saves| saves.contains_key(&nonce))
            .unwrap_or(false)
    }

    fn delete(&self, nonce: u64) -> Result<()> {
        self.saves()?.remove(&nonce);
        Ok(())
    }

    fn list_nonces(&self) -> Result<Vec<u64>> {
        Ok(self.saves()?.keys().copied().collect())
    }

    fn load_latest(&self) -> Result<Option<GameState>> {
        Ok(self.saves()?.values().next_back().cloned())
    }
}
