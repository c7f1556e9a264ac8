//! Repository layer for dynamic runtime data.
//!
//! Repositories hold data that CHANGES during play: save states indexed by
//! nonce. Static career content (ladder, assets, catalogs) is served by
//! oracles, not repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use traits::StateRepository;
