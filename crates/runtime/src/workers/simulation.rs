//! Simulation worker that owns the authoritative [`career_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! actions via [`career_core::GameEngine`], runs the post-execution hooks and
//! publishes events to the EventBus once the result is committed.

use tokio::sync::{mpsc, oneshot};

use career_core::engine::TransitionPhase;
use career_core::{Action, ExecuteError, ExecutionOutcome, GameEngine, GameError, GameState};
use tracing::{debug, error, info, warn};

use super::persistence::PersistRequest;
use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, GameStateEvent, extract_events};
use crate::hooks::HookRegistry;
use crate::oracle::OracleManager;
use crate::utils::hash::{hash_game_state, short_digest};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Execute an action followed by every hook it triggers.
    ExecuteAction {
        action: Action,
        reply: oneshot::Sender<Result<ExecutionOutcome>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Persist the current state; replies with its nonce.
    Save { reply: oneshot::Sender<Result<u64>> },
}

/// Background task that processes gameplay commands.
///
/// Every action is staged on a clone of the state. The clone replaces the
/// authoritative state only after the action and all critical hooks
/// succeeded, and events produced while staging are published only then.
pub struct SimulationWorker {
    state: GameState,
    oracles: OracleManager,
    hooks: HookRegistry,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    persistence: Option<mpsc::Sender<PersistRequest>>,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        oracles: OracleManager,
        hooks: HookRegistry,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        persistence: Option<mpsc::Sender<PersistRequest>>,
    ) -> Self {
        info!(
            target: "runtime::worker",
            day = state.clock.day,
            nonce = state.clock.nonce,
            hooks = hooks.len(),
            persistence = persistence.is_some(),
            "SimulationWorker initialized"
        );

        Self {
            state,
            oracles,
            hooks,
            command_rx,
            event_bus,
            persistence,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd).await;
                }
                else => break,
            }
        }
        debug!(target: "runtime::worker", "SimulationWorker stopped");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::ExecuteAction { action, reply } => {
                let result = self.handle_action(action);
                if reply.send(result).is_err() {
                    debug!("ExecuteAction reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Save { reply } => self.handle_save(reply).await,
        }
    }

    /// Stages `action` and its hooks, then commits.
    fn handle_action(&mut self, action: Action) -> Result<ExecutionOutcome> {
        let mut working = self.state.clone();

        let outcome = match GameEngine::new(&mut working).execute(self.oracles.as_game_env(), &action)
        {
            Ok(outcome) => outcome,
            Err(error) => {
                self.handle_execute_error(&action, &error);
                return Err(RuntimeError::Execute(error));
            }
        };

        let oracles = &self.oracles;
        let mut staged = extract_events(&action, &outcome, &working, oracles);
        let hooks_result = self.hooks.execute_hooks(
            &outcome.delta,
            &mut working,
            oracles,
            &mut |executed, hook_outcome, after| {
                staged.extend(extract_events(executed, hook_outcome, after, oracles));
            },
        );

        if let Err(error) = hooks_result {
            warn!(
                target: "runtime::worker",
                action = action.as_snake_case(),
                "Critical hook failed, discarding staged state"
            );
            self.handle_execute_error(&action, &error);
            return Err(RuntimeError::Execute(error));
        }

        self.commit(working, staged);
        Ok(outcome)
    }

    fn commit(&mut self, state: GameState, staged: Vec<Event>) {
        self.state = state;

        for event in staged {
            self.event_bus.publish(event);
        }

        let nonce = self.state.clock.nonce;
        let day = self.state.clock.day;
        match hash_game_state(&self.state) {
            Ok(digest) => {
                debug!(
                    target: "runtime::worker",
                    nonce,
                    day,
                    digest = short_digest(&digest),
                    "State committed"
                );
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::StateCommitted {
                        nonce,
                        day,
                        digest,
                    }));
            }
            Err(error) => {
                error!(target: "runtime::worker", nonce, error = %error, "Failed to digest state");
            }
        }

        if let Some(tx) = &self.persistence
            && let Err(error) = tx.try_send(PersistRequest::Autosave(Box::new(self.state.clone())))
        {
            warn!(target: "runtime::worker", nonce, error = %error, "Autosave skipped");
        }
    }

    async fn handle_save(&self, reply: oneshot::Sender<Result<u64>>) {
        let Some(tx) = &self.persistence else {
            if reply.send(Err(RuntimeError::PersistenceDisabled)).is_err() {
                debug!("Save reply channel closed (caller dropped)");
            }
            return;
        };

        let request = PersistRequest::Save {
            state: Box::new(self.state.clone()),
            reply,
        };
        if let Err(mpsc::error::SendError(PersistRequest::Save { reply, .. })) = tx.send(request).await
        {
            error!(target: "runtime::worker", "Persistence worker is gone");
            let _ = reply.send(Err(RuntimeError::PersistenceDisabled));
        }
    }

    fn handle_execute_error(&self, action: &Action, error: &ExecuteError) {
        let phase = error.phase();
        if phase == TransitionPhase::PreValidate {
            debug!(
                target: "runtime::worker",
                action = action.as_snake_case(),
                phase = phase.as_str(),
                code = error.error_code(),
                error = %error,
                "Action rejected during pre-validate"
            );
        } else {
            error!(
                target: "runtime::worker",
                action = action.as_snake_case(),
                phase = phase.as_str(),
                code = error.error_code(),
                error = %error,
                "Action execution failed"
            );
        }

        self.event_bus
            .publish(Event::GameState(GameStateEvent::ActionFailed {
                nonce: self.state.clock.nonce,
                action: action.clone(),
                phase,
                code: error.error_code().to_string(),
                error: error.to_string(),
            }));
    }
}
