use crate::state::{GameEvent, RankingBoard};

/// Competing author placed on a leaderboard at game start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RivalEntry {
    pub board: RankingBoard,
    pub author: String,
    pub title: String,
    pub score: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tickets: u64,
}

/// Simulated world around the author: rival writers and the macro news catalog.
pub trait WorldOracle: Send + Sync {
    fn rivals(&self) -> &[RivalEntry];

    /// Events drawn when the macro-event interval elapses, and used when the
    /// text service cannot produce one.
    fn macro_events(&self) -> &[GameEvent];
}
