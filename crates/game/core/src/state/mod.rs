//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the author, their
//! audience, novels, portfolio and the leaderboards around them. Runtime
//! layers clone or query this state but mutate it exclusively through the
//! engine.
pub mod delta;
mod error;
pub mod types;

use crate::economy;
use crate::env::{GameEnv, compute_seed, streams};

pub use delta::{
    AuthorChanges, AuthorFields, CareerChanges, CareerFields, MarketChanges, StateDelta,
    StateFields,
};
pub use error::InitializationError;
pub use types::{
    AssetCategory, AssetId, AssetState, AuthorRank, AuthorState, CareerState, ChapterOutline,
    ClockState, ContractTier, EventImpact, EventOption, EventState, FanTier, FanTiers, GameEvent,
    Genre, Holding, IdentityKind, IpProject, Library, MarketEffect, MarketNews, MarketState,
    NewsImpact, Novel, NovelFans, NovelId, Orientation, PriceHistory, RankingBoard, RankingEntry,
    Rankings, SocialState, Tendency, Trend,
};

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified.
    /// Combined with `clock.nonce` to generate unique seeds for each random event.
    pub game_seed: u64,

    /// Sequential novel ID allocator (monotonically increasing, never reused).
    next_novel_id: u32,

    pub clock: ClockState,
    pub author: AuthorState,
    pub career: CareerState,
    pub fans: FanTiers,
    pub social: SocialState,
    pub market: MarketState,
    pub library: Library,
    pub rankings: Rankings,
    pub events: EventState,
    pub ip_projects: Vec<IpProject>,
    /// Ids of inspiration quotes already woven into a novel.
    pub inspiration_library: Vec<String>,
}

impl GameState {
    /// Builds a fresh career for the chosen identity.
    ///
    /// Requires the progression, market, lifestyle, world and config oracles.
    /// Market histories are walked from each asset's base price with the
    /// game's RNG, so the same seed always yields the same opening charts.
    pub fn new_game(
        game_seed: u64,
        identity: IdentityKind,
        env: &GameEnv<'_>,
    ) -> Result<Self, InitializationError> {
        let config = env.game_config()?;
        let progression = env.progression()?;
        let rng = env.rng()?;

        if progression.ladder().is_empty() {
            return Err(InitializationError::EmptyLadder);
        }
        let profile = progression
            .identity(identity)
            .ok_or(InitializationError::UnknownIdentity(identity))?;

        let lifestyle = env.lifestyle()?;
        if lifestyle.housing_tier(profile.initial_house_level).is_none() {
            return Err(InitializationError::UnknownHousing(
                profile.initial_house_level,
            ));
        }

        let author = AuthorState {
            money: profile.initial_funds,
            health: config.initial_health,
            stamina: config.initial_max_stamina,
            max_stamina: config.initial_max_stamina,
            writing_skill: profile.initial_skill,
            inspiration: config.initial_inspiration,
            mood: config.initial_mood,
            shards: config.initial_shards,
            reputation: 0,
            house_level: profile.initial_house_level,
            marketing_power: config.initial_marketing_power,
            identity,
            specialty: profile.specialty.clone(),
        };

        let fans = FanTiers {
            followers: profile.initial_fans,
            ..FanTiers::default()
        };

        let assets = env
            .market()?
            .assets()
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let rolls = (0..config.initial_history_steps).map(|step| {
                    let context = ((index as u32) << 16) | step;
                    rng.unit_f64(compute_seed(
                        game_seed,
                        0,
                        streams::MARKET_HISTORY,
                        context,
                    ))
                });
                let history = economy::initial_history(spec.base_price, spec.volatility, rolls);
                AssetState::new(spec.id.clone(), spec.base_price, history)
            })
            .collect();

        let mut rankings = Rankings::default();
        for rival in env.world()?.rivals() {
            rankings.board_mut(rival.board).push(RankingEntry {
                rank: 0,
                author: rival.author.clone(),
                title: rival.title.clone(),
                score: rival.score,
                tickets: rival.tickets,
                trend: Trend::Stable,
                is_player: false,
            });
        }
        for board in [
            RankingBoard::Monthly,
            RankingBoard::Potential,
            RankingBoard::RichFans,
        ] {
            rankings.re_rank(board);
        }

        let mut state = Self {
            game_seed,
            next_novel_id: 1,
            clock: ClockState::default(),
            author,
            career: CareerState::default(),
            fans,
            social: SocialState::default(),
            market: MarketState::new(assets),
            library: Library::default(),
            rankings,
            events: EventState::default(),
            ip_projects: Vec::new(),
            inspiration_library: Vec::new(),
        };
        state.sync_rank(progression.ladder());

        Ok(state)
    }

    /// Allocates a new unique [`NovelId`].
    pub fn allocate_novel_id(&mut self) -> NovelId {
        let id = NovelId(self.next_novel_id);
        self.next_novel_id = self.next_novel_id.saturating_add(1);
        id
    }

    /// Re-derives rank and contract tier from reputation. Returns the previous
    /// rank when it changed.
    pub fn sync_rank(&mut self, ladder: &[crate::env::StatusLevel]) -> Option<AuthorRank> {
        let rank = economy::rank_for(self.author.reputation, ladder);
        let previous = self.career.rank;
        self.career.rank = rank;
        self.career.contract_tier = rank.contract_tier();
        (previous != rank).then_some(previous)
    }

    /// Total worth: cash plus holdings at current prices.
    pub fn net_worth(&self) -> f64 {
        self.author.money + self.market.portfolio_value()
    }

    /// SHA-256 over the bincode encoding of the state.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        Ok(Sha256::digest(&bytes).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::testing::{TestOracles, fresh_state};

    #[test]
    fn new_game_applies_identity_profile() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let state = GameState::new_game(7, IdentityKind::Niche, &env).unwrap();

        assert_eq!(state.author.money, 20_000.0);
        assert_eq!(state.author.writing_skill, 60.0);
        assert_eq!(state.author.house_level, 2);
        assert_eq!(state.fans.followers, 1_000);
        assert_eq!(state.author.specialty, vec![Genre::Abo, Genre::Fantasy]);
        assert_eq!(state.career.rank, AuthorRank::Novice);
        assert_eq!(state.clock.day, 1);
    }

    #[test]
    fn opening_market_is_seeded_deterministically() {
        let oracles = TestOracles::default();
        let a = fresh_state(&oracles);
        let b = fresh_state(&oracles);
        assert_eq!(a.market, b.market);

        let steps = GameConfig::default().initial_history_steps as usize;
        for (asset, spec) in a.market.assets.iter().zip(&oracles.assets) {
            assert_eq!(asset.price, spec.base_price);
            assert_eq!(asset.history.len(), steps);
        }
    }

    #[test]
    fn rivals_are_ranked_on_each_board() {
        let oracles = TestOracles::default();
        let state = fresh_state(&oracles);
        let monthly = state.rankings.board(RankingBoard::Monthly);
        assert!(!monthly.is_empty());
        assert!(monthly.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert_eq!(monthly[0].rank, 1);
    }

    #[test]
    fn unknown_identity_is_rejected() {
        let mut oracles = TestOracles::default();
        oracles
            .identities
            .retain(|profile| profile.kind != IdentityKind::PartTime);
        let env = oracles.env();
        let result = GameState::new_game(1, IdentityKind::PartTime, &env);
        assert_eq!(
            result,
            Err(InitializationError::UnknownIdentity(IdentityKind::PartTime))
        );
    }

    #[test]
    fn novel_ids_are_never_reused() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);
        let first = state.allocate_novel_id();
        let second = state.allocate_novel_id();
        assert_ne!(first, second);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn digest_tracks_state_changes() {
        let oracles = TestOracles::default();
        let mut state = fresh_state(&oracles);
        let before = state.digest().unwrap();
        assert_eq!(hex::encode(before).len(), 64);
        state.author.money += 1.0;
        assert_ne!(before, state.digest().unwrap());
    }
}
