//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use career_core::GameState;
use sha2::{Digest, Sha256};

use super::{RepositoryError, Result, StateRepository};

const MAGIC: &[u8; 4] = b"CRSV";
const CHECKSUM_LEN: usize = 32;
const HEADER_LEN: usize = MAGIC.len() + CHECKSUM_LEN;

/// File-based implementation of StateRepository.
///
/// # File Format
///
/// States are stored as `state_{nonce}.bin`:
///
/// ```text
/// [4 bytes "CRSV"][32 bytes SHA-256 of body][bincode GameState]
/// ```
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-save never leaves a truncated state behind. Loads verify the
/// checksum before decoding.
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    /// Create a new file-based state repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn state_path(&self, nonce: u64) -> PathBuf {
        self.base_dir.join(format!("state_{}.bin", nonce))
    }

    fn encode(state: &GameState) -> Result<Vec<u8>> {
        let body = bincode::serialize(state)?;
        let checksum = Sha256::digest(&body);

        let mut bytes = Vec::with_capacity(HEADER_LEN + body.len());
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&checksum);
        bytes.extend_from_slice(&body);
        Ok(bytes)
    }

    fn decode(nonce: u64, bytes: &[u8]) -> Result<GameState> {
        let corrupted = |reason| RepositoryError::Corrupted { nonce, reason };

        if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
            return Err(corrupted("missing save header"));
        }
        let (checksum, body) = bytes[MAGIC.len()..].split_at(CHECKSUM_LEN);
        if Sha256::digest(body).as_slice() != checksum {
            return Err(corrupted("checksum mismatch"));
        }
        Ok(bincode::deserialize(body)?)
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, nonce: u64, state: &GameState) -> Result<()> {
        let path = self.state_path(nonce);
        let temp_path = path.with_extension("bin.tmp");

        fs::write(&temp_path, Self::encode(state)?)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!(target: "runtime::repository", nonce, path = %path.display(), "Save written");
        Ok(())
    }

    fn load(&self, nonce: u64) -> Result<Option<GameState>> {
        let path = self.state_path(nonce);
        if !path.exists() {
            return Ok(None);
        }

        let state = Self::decode(nonce, &fs::read(&path)?)?;
        tracing::debug!(target: "runtime::repository", nonce, "Save loaded");
        Ok(Some(state))
    }

    fn exists(&self, nonce: u64) -> bool {
        self.state_path(nonce).exists()
    }

    fn delete(&self, nonce: u64) -> Result<()> {
        let path = self.state_path(nonce);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(target: "runtime::repository", nonce, "Save deleted");
        }
        Ok(())
    }

    fn list_nonces(&self) -> Result<Vec<u64>> {
        let mut nonces = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(nonce_str) = filename
                    .strip_prefix("state_")
                    .and_then(|s| s.strip_suffix(".bin"))
                && let Ok(nonce) = nonce_str.parse::<u64>()
            {
                nonces.push(nonce);
            }
        }

        nonces.sort_unstable();
        Ok(nonces)
    }
}
