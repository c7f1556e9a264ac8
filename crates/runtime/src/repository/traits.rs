//! Contract shared by the save stores.

use career_core::GameState;

use super::Result;

/// Stores snapshots of [`GameState`] keyed by the nonce they were taken at.
///
/// Nonces only grow during a session, so the latest save is the one with the
/// highest nonce.
pub trait StateRepository: Send + Sync {
    fn save(&self, nonce: u64, state: &GameState) -> Result<()>;

    /// `Ok(None)` when nothing was saved under `nonce`.
    fn load(&self, nonce: u64) -> Result<Option<GameState>>;

    fn exists(&self, nonce: u64) -> bool;

    /// Removing a missing save is not an error.
    fn delete(&self, nonce: u64) -> Result<()>;

    /// Every saved nonce, ascending.
    fn list_nonces(&self) -> Result<Vec<u64>>;

    fn load_latest(&self) -> Result<Option<GameState>> {
        match self.list_nonces()?.last() {
            Some(&nonce) => self.load(nonce),
            None => Ok(None),
        }
    }

    /// Deletes the saves with nonces in `start..=end` and returns how many
    /// there were.
    fn delete_range(&self, start: u64, end: u64) -> Result<usize> {
        let doomed: Vec<u64> = self
            .list_nonces()?
            .into_iter()
            .filter(|nonce| (start..=end).contains(nonce))
            .collect();
        for &nonce in &doomed {
            self.delete(nonce)?;
        }
        Ok(doomed.len())
    }
}
