//! Process configuration read from the environment.
use std::env;
use std::path::PathBuf;

use career_core::IdentityKind;

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// Directory holding the content files. Searched for when unset.
    pub data_dir: Option<PathBuf>,
    pub save_data_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    /// Seed for a new game. Drawn at random when unset.
    pub game_seed: Option<u64>,
    pub enable_persistence: bool,
    pub identity: IdentityKind,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            save_data_dir: None,
            session_id: None,
            game_seed: None,
            enable_persistence: false,
            identity: IdentityKind::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CAREER_DATA_DIR` - Content directory (default: searched)
    /// - `SAVE_DATA_DIR` - Directory for save data (default: platform-specific)
    /// - `GAME_SESSION_ID` - Session to create or resume (default: new session)
    /// - `GAME_SEED` - Seed for a new game (default: random)
    /// - `ENABLE_PERSISTENCE` - Enable state persistence (default: false)
    /// - `CAREER_IDENTITY` - `transparent`, `part_time` or `niche`
    /// - `EVENT_BUFFER_SIZE` - Event bus capacity per topic (default: 100)
    /// - `COMMAND_BUFFER_SIZE` - Command queue size (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self {
            data_dir: env::var_os("CAREER_DATA_DIR").map(PathBuf::from),
            save_data_dir: env::var_os("SAVE_DATA_DIR").map(PathBuf::from),
            session_id: env::var("GAME_SESSION_ID").ok().filter(|s| !s.is_empty()),
            game_seed: read_env::<u64>("GAME_SEED"),
            enable_persistence: read_flag("ENABLE_PERSISTENCE"),
            ..Self::default()
        };

        if let Some(identity) = read_env::<IdentityKind>("CAREER_IDENTITY") {
            config.identity = identity;
        }
        if let Some(capacity) = read_env::<usize>("EVENT_BUFFER_SIZE") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("COMMAND_BUFFER_SIZE") {
            config.command_buffer_size = capacity.max(1);
        }

        config
    }
}

/// Reads and parses `key`, ignoring unset or malformed values.
pub fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

/// A flag is on when set to `true`/`1`, or set without a value.
fn read_flag(key: &str) -> bool {
    match env::var(key) {
        Ok(value) => parse_flag(&value),
        Err(_) => false,
    }
}

fn parse_flag(value: &str) -> bool {
    match value.trim() {
        "" | "1" => true,
        other => other.parse().unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_bare_and_boolean_values() {
        assert!(parse_flag(""));
        assert!(parse_flag("1"));
        assert!(parse_flag(" true "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("yes please"));
    }

    #[test]
    fn identities_parse_case_insensitively() {
        assert_eq!("Part_Time".parse::<IdentityKind>().ok(), Some(IdentityKind::PartTime));
        assert!("wizard".parse::<IdentityKind>().is_err());
    }
}
