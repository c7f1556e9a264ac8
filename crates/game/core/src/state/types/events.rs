use crate::state::types::{AssetId, NovelId};

/// Stat changes applied when the player picks an event option.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EventImpact {
    pub money: f64,
    pub reputation: i64,
    pub stamina: i64,
    pub mood: i64,
    pub fans_stans: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventOption {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dialogue: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub impact: EventImpact,
}

/// Sentiment nudge on one asset that accompanies an event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketEffect {
    pub target_asset: AssetId,
    pub bias: i32,
}

/// A decision presented to the player: macro news, negotiations, drama.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub options: Vec<EventOption>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub market_effect: Option<MarketEffect>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventState {
    pub pending: Option<GameEvent>,
    pub last_macro_event_day: u32,
}

/// Film adaptation bet on one of the player's novels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IpProject {
    pub novel: NovelId,
    pub name: String,
    pub valuation: f64,
    /// Percent complete, paid out at 100.
    pub progress: u32,
}

impl IpProject {
    pub const COMPLETE: u32 = 100;

    pub fn is_complete(&self) -> bool {
        self.progress >= Self::COMPLETE
    }
}
