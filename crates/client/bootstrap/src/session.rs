//! Session management utilities for resuming games.
//!
//! Every session lives in its own directory under the save root:
//!
//! ```text
//! {save_dir}/session_{timestamp}/states/state_{nonce}.bin
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;

use career_core::GameState;
use career_runtime::{FileStateRepository, StateRepository};

const SESSION_PREFIX: &str = "session_";

/// Information about a saved session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInfo {
    /// Session directory name (e.g., "session_1717200000")
    pub session_id: String,

    /// When the session was created, from the directory name
    pub started_at: DateTime<Utc>,

    /// Latest state nonce available in this session
    pub latest_nonce: Option<u64>,
}

/// A fresh session id stamped with the current time.
pub fn new_session_id() -> String {
    format!("{SESSION_PREFIX}{}", Utc::now().timestamp())
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "career")
}

/// Platform save root, e.g. `~/.local/share/career/saves` on Linux.
pub fn default_save_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| std::env::temp_dir().join("career/saves"))
}

/// Platform log root, e.g. `~/.cache/career/logs` on Linux.
pub fn default_log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("career/logs"))
}

/// Directory holding the state files of `session_id`.
pub fn states_dir(base_dir: &Path, session_id: &str) -> PathBuf {
    base_dir.join(session_id).join("states")
}

/// List all session directories in the save data directory, newest first.
///
/// Sessions are identified by directories matching "session_<timestamp>" format.
pub fn list_sessions(base_dir: &Path) -> Result<Vec<SessionInfo>> {
    if !base_dir.exists() {
        return Ok(Vec::new());
    }

    let mut sessions = Vec::new();

    for entry in std::fs::read_dir(base_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let dir_name = entry.file_name();
        let name = dir_name
            .to_str()
            .context("Invalid UTF-8 in directory name")?;

        let Some(started_at) = name
            .strip_prefix(SESSION_PREFIX)
            .and_then(|stamp| stamp.parse::<i64>().ok())
            .and_then(|stamp| DateTime::from_timestamp(stamp, 0))
        else {
            continue;
        };

        let repo = FileStateRepository::new(states_dir(base_dir, name))?;
        sessions.push(SessionInfo {
            session_id: name.to_string(),
            started_at,
            latest_nonce: repo.list_nonces()?.last().copied(),
        });
    }

    sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));

    Ok(sessions)
}

/// Find the most recent session by timestamp.
pub fn find_latest_session(base_dir: &Path) -> Result<Option<SessionInfo>> {
    let sessions = list_sessions(base_dir)?;
    Ok(sessions.into_iter().next())
}

/// Load the latest state from a session directory.
pub fn load_latest_state(base_dir: &Path, session_id: &str) -> Result<Option<GameState>> {
    let repo = FileStateRepository::new(states_dir(base_dir, session_id))?;
    repo.load_latest()
        .with_context(|| format!("failed to load the latest save of {session_id}"))
}
