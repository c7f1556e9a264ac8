//! What a hook gets to look at.

use career_core::{GameState, StateDelta};

use crate::oracle::OracleManager;

/// `delta` always belongs to the player action. `state` already includes
/// whatever the hooks that ran before this one changed.
pub struct HookContext<'a> {
    pub delta: &'a StateDelta,
    pub state: &'a GameState,
    pub oracles: &'a OracleManager,
}
