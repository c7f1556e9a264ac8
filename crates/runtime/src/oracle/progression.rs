//! Rank ladder and starting identities.

use career_content::ProgressionCatalog;
use career_core::ProgressionOracle;
use career_core::env::{IdentityProfile, StatusLevel};

/// ProgressionOracle backed by the loaded ladder.
#[derive(Debug, Clone)]
pub struct ProgressionOracleImpl {
    ladder: Vec<StatusLevel>,
    identities: Vec<IdentityProfile>,
}

impl ProgressionOracleImpl {
    pub fn new(ladder: Vec<StatusLevel>, identities: Vec<IdentityProfile>) -> Self {
        Self { ladder, identities }
    }
}

impl From<ProgressionCatalog> for ProgressionOracleImpl {
    fn from(catalog: ProgressionCatalog) -> Self {
        Self::new(catalog.ladder, catalog.identities)
    }
}

impl ProgressionOracle for ProgressionOracleImpl {
    fn ladder(&self) -> &[StatusLevel] {
        &self.ladder
    }

    fn identities(&self) -> &[IdentityProfile] {
        &self.identities
    }
}
