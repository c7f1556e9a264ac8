//! State construction errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::IdentityKind;

/// Errors raised while building a fresh [`GameState`](super::GameState) from oracle content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("identity profile '{0}' is not defined")]
    UnknownIdentity(IdentityKind),

    #[error("starting house level {0} has no housing tier")]
    UnknownHousing(u8),

    #[error("status ladder is empty")]
    EmptyLadder,
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::UnknownIdentity(_) => ErrorSeverity::Validation,
            Self::UnknownHousing(_) | Self::EmptyLadder => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::UnknownIdentity(_) => "INIT_UNKNOWN_IDENTITY",
            Self::UnknownHousing(_) => "INIT_UNKNOWN_HOUSING",
            Self::EmptyLadder => "INIT_EMPTY_LADDER",
        }
    }
}
