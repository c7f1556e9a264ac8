//! In-crate fixtures shared by unit tests.
use crate::action::{ActionTransition, StartNovelAction};
use crate::config::GameConfig;
use crate::env::{
    AchievementCategory, AchievementDefinition, AchievementOracle, AssetSpec, ConfigOracle, Env,
    Criterion, GameEnv, GatherOption, HousingTier, IdentityProfile, InspirationQuote,
    LifestyleOracle, MarketOracle, PcgRng, PerkEffect, ProgressionOracle, QuoteCategory,
    RankSkill, RivalEntry, RngOracle, ShopItem, StatEffect, StatusLevel, WorldOracle,
    compute_seed,
};
use crate::state::{
    AssetCategory, AssetId, AuthorRank, EventImpact, EventOption, GameEvent, GameState, Genre,
    Holding, IdentityKind, MarketEffect, NovelId, RankingBoard, Tendency,
};

pub(crate) const TEST_SEED: u64 = 42;

/// Every oracle backed by small in-memory catalogs.
pub(crate) struct TestOracles {
    pub ladder: Vec<StatusLevel>,
    pub identities: Vec<IdentityProfile>,
    pub assets: Vec<AssetSpec>,
    pub housing: Vec<HousingTier>,
    pub shop_items: Vec<ShopItem>,
    pub gather_options: Vec<GatherOption>,
    pub quotes: Vec<InspirationQuote>,
    pub achievements: Vec<AchievementDefinition>,
    pub rivals: Vec<RivalEntry>,
    pub macro_events: Vec<GameEvent>,
    pub config: GameConfig,
    pub rng: PcgRng,
}

impl TestOracles {
    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(self, self, self, self, self, self, &self.rng).into_game_env()
    }
}

impl Default for TestOracles {
    fn default() -> Self {
        Self {
            ladder: ladder(),
            identities: identities(),
            assets: assets(),
            housing: housing(),
            shop_items: shop_items(),
            gather_options: vec![GatherOption {
                id: "sketch".into(),
                name: "写生".into(),
                stamina_cost: 20,
                mood: 10,
                shards: 2,
                skill: 0.5,
            }],
            quotes: quotes(),
            achievements: achievements(),
            rivals: rivals(),
            macro_events: macro_events(),
            config: GameConfig::default(),
            rng: PcgRng,
        }
    }
}

impl ProgressionOracle for TestOracles {
    fn ladder(&self) -> &[StatusLevel] {
        &self.ladder
    }

    fn identities(&self) -> &[IdentityProfile] {
        &self.identities
    }
}

impl MarketOracle for TestOracles {
    fn assets(&self) -> &[AssetSpec] {
        &self.assets
    }
}

impl LifestyleOracle for TestOracles {
    fn housing(&self) -> &[HousingTier] {
        &self.housing
    }

    fn shop_items(&self) -> &[ShopItem] {
        &self.shop_items
    }

    fn gather_options(&self) -> &[GatherOption] {
        &self.gather_options
    }

    fn quotes(&self) -> &[InspirationQuote] {
        &self.quotes
    }
}

impl AchievementOracle for TestOracles {
    fn achievements(&self) -> &[AchievementDefinition] {
        &self.achievements
    }
}

impl WorldOracle for TestOracles {
    fn rivals(&self) -> &[RivalEntry] {
        &self.rivals
    }

    fn macro_events(&self) -> &[GameEvent] {
        &self.macro_events
    }
}

impl ConfigOracle for TestOracles {
    fn game_config(&self) -> &GameConfig {
        &self.config
    }
}

/// A fresh Transparent career on [`TEST_SEED`].
pub(crate) fn fresh_state(oracles: &TestOracles) -> GameState {
    state_with_seed(oracles, TEST_SEED)
}

pub(crate) fn state_with_seed(oracles: &TestOracles, seed: u64) -> GameState {
    GameState::new_game(seed, IdentityKind::Transparent, &oracles.env()).unwrap()
}

/// First game seed whose nonce-0 roll on `stream` satisfies `accept`.
pub(crate) fn find_seed(oracles: &TestOracles, stream: u32, accept: impl Fn(f64) -> bool) -> u64 {
    (0..10_000)
        .find(|&seed| accept(oracles.rng.unit_f64(compute_seed(seed, 0, stream, 0))))
        .expect("no seed satisfies the roll predicate")
}

/// Starts a Daily novel with placeholder outlines.
pub(crate) fn start_novel(state: &mut GameState, env: &GameEnv<'_>) -> NovelId {
    let action = StartNovelAction {
        title: "雨夜".into(),
        genre: Genre::Daily,
        tendency: Tendency::Sweet,
        outlines: Vec::new(),
    };
    action.pre_validate(state, env).unwrap();
    action.apply(state, env).unwrap();
    state.library.active.as_ref().unwrap().id
}

pub(crate) fn set_price(state: &mut GameState, asset: &AssetId, price: f64) {
    state.market.asset_mut(asset).unwrap().price = price;
}

/// Gives the player a position bought at the current price.
pub(crate) fn hold(state: &mut GameState, asset: &AssetId, shares: u64) {
    let price = state.market.asset(asset).unwrap().price;
    state.market.portfolio.insert(
        asset.clone(),
        Holding {
            shares,
            average_cost: price,
        },
    );
}

fn skill(id: &str, effect: Option<PerkEffect>) -> RankSkill {
    RankSkill {
        id: id.into(),
        name: id.into(),
        description: String::new(),
        effect,
    }
}

pub(crate) fn ladder() -> Vec<StatusLevel> {
    vec![
        StatusLevel {
            rank: AuthorRank::Novice,
            threshold: 0,
            unlocked_genres: vec![Genre::Daily, Genre::Campus],
            perks: "基础写作".into(),
            skills: vec![skill("diary", None)],
        },
        StatusLevel {
            rank: AuthorRank::Contracted,
            threshold: 1_000,
            unlocked_genres: vec![Genre::Taboo],
            perks: "签约分成".into(),
            skills: vec![skill("contract", None)],
        },
        StatusLevel {
            rank: AuthorRank::MidTier,
            threshold: 10_000,
            unlocked_genres: vec![Genre::Abo, Genre::Fantasy, Genre::Tragedy],
            perks: "热度翻倍".into(),
            skills: vec![skill("spotlight", Some(PerkEffect::PostHeatFactor(2.0)))],
        },
        StatusLevel {
            rank: AuthorRank::Platinum,
            threshold: 50_000,
            unlocked_genres: Vec::new(),
            perks: "高效写作".into(),
            skills: vec![
                skill("stamina", Some(PerkEffect::WritingStaminaFactor(0.95))),
                skill("flow", Some(PerkEffect::WordCountFactor(1.2))),
            ],
        },
        StatusLevel {
            rank: AuthorRank::Legend,
            threshold: 200_000,
            unlocked_genres: Vec::new(),
            perks: "灵感无限".into(),
            skills: vec![skill("muse", Some(PerkEffect::InspirationFree))],
        },
    ]
}

fn identities() -> Vec<IdentityProfile> {
    let profile = |kind, funds, fans, skill, specialty: Vec<Genre>, house| IdentityProfile {
        kind,
        name: kind.to_string(),
        description: String::new(),
        initial_funds: funds,
        initial_fans: fans,
        initial_skill: skill,
        specialty,
        initial_house_level: house,
    };
    vec![
        profile(IdentityKind::Transparent, 5_000.0, 0, 10.0, vec![Genre::Daily], 0),
        profile(
            IdentityKind::PartTime,
            10_000.0,
            100,
            30.0,
            vec![Genre::Campus, Genre::Taboo],
            1,
        ),
        profile(
            IdentityKind::Niche,
            20_000.0,
            1_000,
            60.0,
            vec![Genre::Abo, Genre::Fantasy],
            2,
        ),
    ]
}

fn assets() -> Vec<AssetSpec> {
    let spec = |id: &str, base_price, volatility, category, linked_genre, min_rank| AssetSpec {
        id: AssetId::from(id),
        name: id.into(),
        base_price,
        volatility,
        category,
        linked_genre,
        min_rank,
        description: String::new(),
    };
    vec![
        spec(
            "money_fund",
            1.0,
            0.002,
            AssetCategory::Stable,
            Genre::Daily,
            AuthorRank::Novice,
        ),
        spec(
            "index_fund",
            25.5,
            0.02,
            AssetCategory::Stable,
            Genre::Campus,
            AuthorRank::Contracted,
        ),
        spec(
            "energy_stock",
            62.0,
            0.08,
            AssetCategory::Growth,
            Genre::Fantasy,
            AuthorRank::MidTier,
        ),
        spec(
            "media_stock",
            450.0,
            0.15,
            AssetCategory::Growth,
            Genre::Abo,
            AuthorRank::Platinum,
        ),
        spec(
            "tech_stock",
            210.5,
            0.35,
            AssetCategory::Speculative,
            Genre::Taboo,
            AuthorRank::Legend,
        ),
    ]
}

fn housing() -> Vec<HousingTier> {
    [
        (0, "城中村单间", 200.0, 40),
        (1, "老破小", 1_500.0, 60),
        (2, "江景公寓", 4_000.0, 80),
        (3, "独栋别墅", 12_000.0, 100),
    ]
    .into_iter()
    .map(|(level, name, rent, stamina_regen)| HousingTier {
        level,
        name: name.into(),
        rent,
        stamina_regen,
    })
    .collect()
}

fn shop_items() -> Vec<ShopItem> {
    vec![
        ShopItem {
            id: "coffee".into(),
            name: "冰美式".into(),
            price: 30.0,
            effects: vec![StatEffect::Stamina(20), StatEffect::Mood(5)],
        },
        ShopItem {
            id: "course".into(),
            name: "写作课".into(),
            price: 2_000.0,
            effects: vec![StatEffect::SkillPercent(10.0)],
        },
    ]
}

fn quotes() -> Vec<InspirationQuote> {
    vec![
        InspirationQuote {
            id: "t1".into(),
            text: "你是我唯一的例外".into(),
            category: QuoteCategory::Tension,
            shard_cost: 3,
            mood: -5,
            tension: 25,
            quality: 0.0,
        },
        InspirationQuote {
            id: "p1".into(),
            text: "晚风很温柔".into(),
            category: QuoteCategory::Pure,
            shard_cost: 1,
            mood: 5,
            tension: 0,
            quality: 1.0,
        },
    ]
}

fn achievements() -> Vec<AchievementDefinition> {
    let def = |id: &str, category, criterion| AchievementDefinition {
        id: id.into(),
        title: id.into(),
        description: String::new(),
        category,
        reward_text: String::new(),
        criterion,
    };
    use AchievementCategory::*;
    vec![
        def("ink_master", Writing, Criterion::TotalWordsAtLeast(1_000_000)),
        def("masterpiece", Writing, Criterion::AnyNovelQualityAtLeast(90.0)),
        def("heartbreaker", Writing, Criterion::AnyNovelTensionAtLeast(90)),
        def("trilogy", Writing, Criterion::FinishedNovelsAtLeast(3)),
        def(
            "big_win",
            Finance,
            Criterion::MaxSingleTradeProfitAtLeast(100_000.0),
        ),
        def("millionaire", Finance, Criterion::MoneyAtLeast(1_000_000.0)),
        def("villa", Finance, Criterion::HouseLevelAtLeast(3)),
        def("cult", Social, Criterion::StansAtLeast(10_000)),
        def("viral", Social, Criterion::GlobalHeatAtLeast(1_000_000)),
        def("famous", Social, Criterion::ReputationAtLeast(100_000)),
        def("legend", Ultimate, Criterion::RankReached(AuthorRank::Legend)),
        def(
            "tycoon",
            Ultimate,
            Criterion::AllOf(vec![
                Criterion::MoneyAtLeast(5_000_000.0),
                Criterion::HouseLevelAtLeast(3),
            ]),
        ),
    ]
}

fn rivals() -> Vec<RivalEntry> {
    let rival = |board, author: &str, title: &str, score| RivalEntry {
        board,
        author: author.into(),
        title: title.into(),
        score,
        tickets: score / 10,
    };
    vec![
        rival(RankingBoard::Monthly, "墨染", "长夜未央", 12_000),
        rival(RankingBoard::Monthly, "青梧", "春日来信", 8_000),
        rival(RankingBoard::Potential, "小满", "夏至", 2_000),
        rival(RankingBoard::Potential, "南风", "海盐汽水", 1_500),
        rival(RankingBoard::RichFans, "鲸落", "深海", 50_000),
    ]
}

fn macro_events() -> Vec<GameEvent> {
    vec![GameEvent {
        id: "rate_cut".into(),
        title: "央行降息".into(),
        description: "市场流动性充裕".into(),
        options: vec![EventOption {
            text: "加仓".into(),
            dialogue: None,
            impact: EventImpact {
                mood: 5,
                ..EventImpact::default()
            },
        }],
        market_effect: Some(MarketEffect {
            target_asset: AssetId::from("index_fund"),
            bias: 20,
        }),
    }]
}
