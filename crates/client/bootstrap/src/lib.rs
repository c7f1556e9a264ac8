//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, oracle assembly, session discovery and
//! runtime setup that can be reused by the CLI or other front-end crates.
pub mod builder;
pub mod config;
pub mod oracles;
pub mod session;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::BootstrapConfig;
pub use oracles::{ContentOracleFactory, OracleFactory};
pub use session::SessionInfo;
