//! Rival authors and the macro event catalog.

use career_content::WorldCatalog;
use career_core::env::RivalEntry;
use career_core::{GameEvent, WorldOracle};

#[derive(Debug, Clone)]
pub struct WorldOracleImpl {
    catalog: WorldCatalog,
}

impl WorldOracleImpl {
    pub fn new(catalog: WorldCatalog) -> Self {
        Self { catalog }
    }
}

impl WorldOracle for WorldOracleImpl {
    fn rivals(&self) -> &[RivalEntry] {
        &self.catalog.rivals
    }

    fn macro_events(&self) -> &[GameEvent] {
        &self.catalog.macro_events
    }
}
