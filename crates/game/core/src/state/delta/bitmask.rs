use bitflags::bitflags;

bitflags! {
    /// Tracks which top-level sections of [`GameState`](crate::state::GameState)
    /// changed during a state transition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StateFields: u16 {
        const CLOCK       = 1 << 0;
        const AUTHOR      = 1 << 1;
        const CAREER      = 1 << 2;
        const FANS        = 1 << 3;
        const SOCIAL      = 1 << 4;
        const MARKET      = 1 << 5;
        const PORTFOLIO   = 1 << 6;
        const LIBRARY     = 1 << 7;
        const RANKINGS    = 1 << 8;
        const EVENTS      = 1 << 9;
        const IP          = 1 << 10;
        const INSPIRATION = 1 << 11;
    }
}

bitflags! {
    /// Tracks which fields of [`AuthorState`](crate::state::AuthorState) changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AuthorFields: u16 {
        const MONEY       = 1 << 0;
        const STAMINA     = 1 << 1;
        const MOOD        = 1 << 2;
        const REPUTATION  = 1 << 3;
        const SKILL       = 1 << 4;
        const INSPIRATION = 1 << 5;
        const SHARDS      = 1 << 6;
        const HOUSE       = 1 << 7;
        const HEALTH      = 1 << 8;
    }
}

bitflags! {
    /// Tracks which fields of [`CareerState`](crate::state::CareerState) changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CareerFields: u8 {
        const RANK         = 1 << 0;
        const CONTRACT     = 1 << 1;
        const ACHIEVEMENTS = 1 << 2;
        const FINISHED     = 1 << 3;
        const WORDS        = 1 << 4;
        const INVESTMENT   = 1 << 5;
        const SPENDING     = 1 << 6;
        const LEGACY       = 1 << 7;
    }
}
