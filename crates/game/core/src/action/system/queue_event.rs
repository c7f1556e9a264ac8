//! Queueing of macro events.

use super::SystemError;
use crate::action::ActionTransition;
use crate::action::result::ActionResult;
use crate::env::GameEnv;
use crate::state::{GameEvent, GameState};

/// Presents an event to the player and stamps the day it was raised.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueEventAction {
    pub event: GameEvent,
}

impl QueueEventAction {
    pub fn new(event: GameEvent) -> Self {
        Self { event }
    }
}

impl ActionTransition for QueueEventAction {
    type Error = SystemError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.events.pending.is_some() {
            return Err(SystemError::EventAlreadyPending);
        }
        if self.event.options.is_empty() {
            return Err(SystemError::EmptyEvent(self.event.id.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        state.events.pending = Some(self.event.clone());
        state.events.last_macro_event_day = state.clock.day;
        Ok(ActionResult::Done)
    }
}
