//! Digests of game state for logs and commit events.

use career_core::GameState;
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the bincode encoding of `state`.
///
/// Two states with the same digest are byte-identical once saved.
pub fn hash_game_state(state: &GameState) -> Result<String, bincode::Error> {
    let bytes = bincode::serialize(state)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// First eight hex characters of a digest, for compact logging.
pub fn short_digest(digest: &str) -> &str {
    digest.get(..8).unwrap_or(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fresh_state;

    #[test]
    fn digest_is_stable_and_sensitive() {
        let state = fresh_state();
        let first = hash_game_state(&state).unwrap();
        assert_eq!(first, hash_game_state(&state).unwrap());
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));

        let mut richer = state.clone();
        richer.author.money += 1.0;
        assert_ne!(first, hash_game_state(&richer).unwrap());
        assert_eq!(short_digest(&first), &first[..8]);
    }
}
