//! Career simulation client binary.
//!
//! Composition root: loads configuration from the environment, sets up file
//! logging for the session, builds the runtime through `career-bootstrap`
//! and hands its handle to the terminal REPL.
//!
//! ```bash
//! # Resume a previous session with saves enabled
//! GAME_SESSION_ID=session_1717200000 ENABLE_PERSISTENCE=true cargo run -p career-client
//! ```

mod command;
mod presentation;
mod repl;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use career_bootstrap::{BootstrapConfig, RuntimeBuilder, session};

use crate::repl::Repl;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let mut config = BootstrapConfig::from_env();
    let session_id = config
        .session_id
        .get_or_insert_with(session::new_session_id)
        .clone();

    setup_logging(&session_id)?;

    tracing::info!(target: "client", session = %session_id, "Starting career client");
    tracing::info!(target: "client", "Persistence: {}", config.enable_persistence);

    let setup = RuntimeBuilder::new(config).build().await?;
    if let Some(nonce) = setup.resumed_from {
        println!("继续存档 {} (nonce {nonce})", setup.session_id);
    }

    Repl::new(setup.runtime.handle()).run().await?;

    tracing::info!(target: "client", "Shutting down");
    setup.runtime.shutdown().await?;
    Ok(())
}

/// Logs go to `<log dir>/<session>/client.log` so they never garble the REPL.
fn setup_logging(session_id: &str) -> Result<()> {
    let log_dir = session::default_log_dir().join(session_id);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "client.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // The writer must outlive main.
    std::mem::forget(guard);

    Ok(())
}
