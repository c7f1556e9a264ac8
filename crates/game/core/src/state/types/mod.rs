pub mod career;
pub mod events;
pub mod fans;
pub mod market;
pub mod novel;
pub mod rankings;

// Re-export career bookkeeping
pub use career::{
    AuthorRank, AuthorState, CareerState, ClockState, ContractTier, IdentityKind, SocialState,
};

// Re-export events and IP projects
pub use events::{EventImpact, EventOption, EventState, GameEvent, IpProject, MarketEffect};

// Re-export audience tiers
pub use fans::{FanTier, FanTiers};

// Re-export market types
pub use market::{
    AssetCategory, AssetId, AssetState, Holding, MarketNews, MarketState, NewsImpact, PriceHistory,
};

// Re-export novel types
pub use novel::{
    ChapterOutline, Genre, Library, Novel, NovelFans, NovelId, Orientation, Tendency,
};

// Re-export leaderboard types
pub use rankings::{RankingBoard, RankingEntry, Rankings, Trend};
