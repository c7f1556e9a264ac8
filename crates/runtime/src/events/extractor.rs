//! Derives topic events from executed actions.

use career_core::{
    Action, ActionResult, AchievementOracle, ExecutionOutcome, GameState, SystemActionKind,
};

use super::bus::Event;
use super::types::{CareerEvent, GameStateEvent, MarketEvent};
use crate::oracle::OracleManager;

/// Converts one execution outcome into the events published for it.
///
/// `state` is the state right after the action. The first event is always
/// `ActionExecuted`; career and market events follow in that order.
pub fn extract_events(
    action: &Action,
    outcome: &ExecutionOutcome,
    state: &GameState,
    oracles: &OracleManager,
) -> Vec<Event> {
    let day = state.clock.day;
    let mut events = vec![Event::GameState(GameStateEvent::ActionExecuted {
        nonce: outcome.delta.nonce,
        action: action.clone(),
        delta: Box::new(outcome.delta.clone()),
        result: outcome.action_result.clone(),
    })];

    match &outcome.action_result {
        ActionResult::Rank(Some(change)) => {
            events.push(Event::Career(CareerEvent::RankChanged {
                from: change.from,
                to: change.to,
                day,
            }));
        }
        ActionResult::Unlocked(ids) => {
            for id in ids {
                let (title, reward_text) = oracles
                    .achievements()
                    .achievement(id)
                    .map(|def| (def.title.clone(), def.reward_text.clone()))
                    .unwrap_or_else(|| (id.clone(), String::new()));
                events.push(Event::Career(CareerEvent::AchievementUnlocked {
                    id: id.clone(),
                    title,
                    reward_text,
                    day,
                }));
            }
        }
        ActionResult::Day(report) => {
            events.push(Event::Career(CareerEvent::DayAdvanced {
                report: report.clone(),
            }));
        }
        _ => {}
    }

    if let Action::System { kind } = action {
        match kind {
            SystemActionKind::QueueEvent(queued) => {
                events.push(Event::Career(CareerEvent::EventQueued {
                    event: Box::new(queued.event.clone()),
                    day,
                }));
            }
            SystemActionKind::MarketTick(_) => {
                let prices = state
                    .market
                    .assets
                    .iter()
                    .map(|asset| (asset.id.clone(), asset.price, asset.sentiment))
                    .collect();
                events.push(Event::Market(MarketEvent::MarketTicked { day, prices }));
            }
            _ => {}
        }
    }

    events
}
