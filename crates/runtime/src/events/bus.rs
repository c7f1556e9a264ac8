//! Topic-routed broadcast channels.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{CareerEvent, GameStateEvent, MarketEvent};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Executed and rejected actions, committed states.
    GameState,
    /// Rank moves, achievements, day rollovers, queued events.
    Career,
    /// Daily price movements.
    Market,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::GameState, Topic::Career, Topic::Market];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    GameState(GameStateEvent),
    Career(CareerEvent),
    Market(MarketEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::GameState(_) => Topic::GameState,
            Event::Career(_) => Topic::Career,
            Event::Market(_) => Topic::Market,
        }
    }
}

/// One broadcast channel per [`Topic`]. Cloning shares the channels.
///
/// Publishing never blocks; a subscriber that falls more than `capacity`
/// events behind gets `RecvError::Lagged` and skips ahead.
#[derive(Clone)]
pub struct EventBus {
    game_state: broadcast::Sender<Event>,
    career: broadcast::Sender<Event>,
    market: broadcast::Sender<Event>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let channel = || broadcast::channel(capacity.max(1)).0;
        Self {
            game_state: channel(),
            career: channel(),
            market: channel(),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::GameState => &self.game_state,
            Topic::Career => &self.career,
            Topic::Market => &self.market,
        }
    }

    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!(target: "runtime::events", ?topic, "no subscribers");
        }
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Live receivers on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.sender(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::{RecvError, TryRecvError};

    fn ticked(day: u32) -> Event {
        Event::Market(MarketEvent::MarketTicked {
            day,
            prices: Vec::new(),
        })
    }

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(4);
        let mut market = bus.subscribe(Topic::Market);
        let mut career = bus.subscribe(Topic::Career);

        bus.clone().publish(ticked(3));

        match market.recv().await.unwrap() {
            Event::Market(MarketEvent::MarketTicked { day, .. }) => assert_eq!(day, 3),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(matches!(career.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn slow_subscribers_lag() {
        let bus = EventBus::with_capacity(2);
        let mut market = bus.subscribe(Topic::Market);
        for day in 1..=3 {
            bus.publish(ticked(day));
        }

        assert!(matches!(market.recv().await, Err(RecvError::Lagged(1))));
        assert!(market.recv().await.is_ok());
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::new();
        bus.publish(ticked(1));
        let receivers = bus.subscribe_multiple(&Topic::ALL);
        assert_eq!(receivers.len(), 3);
        assert_eq!(bus.subscriber_count(Topic::Career), 1);
    }
}
