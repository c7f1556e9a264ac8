/// Game configuration constants and tunable parameters.
///
/// Every field has a default so a partial `config.toml` only needs to list
/// the values it overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    // ===== starting record =====
    pub initial_health: u32,
    pub initial_max_stamina: u32,
    pub initial_inspiration: u32,
    pub initial_mood: u32,
    pub initial_shards: u32,
    pub initial_marketing_power: u32,

    // ===== writing =====
    pub normal_chapter_words: u32,
    pub normal_chapter_stamina: u32,
    pub hardcore_chapter_words: u32,
    pub hardcore_chapter_stamina: u32,
    /// Total width of the word-count roll around the base (0.2 → 0.9..1.1).
    pub word_variance: f64,
    pub income_per_word: f64,
    pub chapter_mood_cost: u32,
    pub normal_quality_gain: f64,
    pub hardcore_quality_gain: f64,
    pub fallback_outline_count: u32,
    pub finish_reputation_bonus: u64,
    pub legacy_income_per_quality: f64,
    pub inspiration_per_shard: u32,

    // ===== social =====
    pub post_stamina_cost: u32,
    pub leave_note_stamina_cost: u32,
    pub vote_reputation_cost: u64,
    pub play_dead_reputation_cost: u64,
    pub npc_stamina_cost: u32,
    pub nudge_pressure_per_idle_day: u32,

    // ===== market manipulation =====
    pub pump_ban_chance: f64,
    pub pump_ban_chance_on_cooldown: f64,
    pub pump_ban_days: u32,
    pub pump_cooldown_days: u32,
    pub pump_reputation_cost: u64,
    pub pump_ban_sentiment_penalty: i32,

    // ===== market =====
    pub initial_history_steps: u32,
    /// How strongly carried sentiment tilts the next daily roll.
    pub sentiment_bias_weight: f64,
    pub min_price: f64,

    // ===== daily upkeep =====
    pub passerby_retention: f64,
    pub follower_retention: f64,
    pub broke_stamina: u32,
    pub broke_allowance: f64,
    pub broke_mood_penalty: u32,
    pub rest_mood_gain: u32,
    pub residence_deposit_months: u32,

    // ===== rankings =====
    pub ranking_boost_stamina: u32,
    pub ranking_boost_cost: f64,
    pub ranking_boost_heat: u64,
    pub ranking_boost_score: u64,

    // ===== IP and events =====
    pub ip_min_words: u64,
    pub ip_progress_per_day: u32,
    pub macro_event_interval: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Price samples retained per asset.
    pub const PRICE_HISTORY_LEN: usize = 30;
    pub const MAX_NEWS: usize = 20;
    pub const MAX_REVIEWS: usize = 30;
    /// Outlines rewritten after the current chapter by a butterfly revision.
    pub const MAX_REVISED_OUTLINES: usize = 3;
    pub const MAX_CHAPTER_GOAL_CHARS: usize = 50;

    pub const MAX_MOOD: u32 = 100;
    pub const MAX_INSPIRATION: u32 = 100;
    pub const MAX_QUALITY: f64 = 100.0;
    pub const MAX_TENSION: u32 = 100;

    pub fn new() -> Self {
        Self {
            initial_health: 100,
            initial_max_stamina: 100,
            initial_inspiration: 50,
            initial_mood: 80,
            initial_shards: 5,
            initial_marketing_power: 10,

            normal_chapter_words: 2000,
            normal_chapter_stamina: 25,
            hardcore_chapter_words: 6000,
            hardcore_chapter_stamina: 50,
            word_variance: 0.2,
            income_per_word: 0.06,
            chapter_mood_cost: 5,
            normal_quality_gain: 0.5,
            hardcore_quality_gain: 1.5,
            fallback_outline_count: 15,
            finish_reputation_bonus: 2500,
            legacy_income_per_quality: 2.0,
            inspiration_per_shard: 5,

            post_stamina_cost: 15,
            leave_note_stamina_cost: 20,
            vote_reputation_cost: 200,
            play_dead_reputation_cost: 100,
            npc_stamina_cost: 5,
            nudge_pressure_per_idle_day: 10,

            pump_ban_chance: 0.05,
            pump_ban_chance_on_cooldown: 0.7,
            pump_ban_days: 3,
            pump_cooldown_days: 12,
            pump_reputation_cost: 500,
            pump_ban_sentiment_penalty: 50,

            initial_history_steps: 20,
            sentiment_bias_weight: 0.5,
            min_price: 0.01,

            passerby_retention: 0.85,
            follower_retention: 0.99,
            broke_stamina: 20,
            broke_allowance: 400.0,
            broke_mood_penalty: 30,
            rest_mood_gain: 5,
            residence_deposit_months: 3,

            ranking_boost_stamina: 50,
            ranking_boost_cost: 10_000.0,
            ranking_boost_heat: 500,
            ranking_boost_score: 3000,

            ip_min_words: 10_000,
            ip_progress_per_day: 10,
            macro_event_interval: 7,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
