//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker executes gameplay commands; the persistence worker
//! keeps repository I/O off the command path.

mod persistence;
mod simulation;

pub use persistence::{PersistenceConfig, PersistenceWorker};
pub(crate) use persistence::{PERSIST_BUFFER, PersistRequest};
pub use simulation::{Command, SimulationWorker};
