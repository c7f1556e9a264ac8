//! Writing actions: starting, drafting, revising and finishing novels.
use super::result::ActionResult;
use super::{ActionTransition, WritingError};
use crate::config::GameConfig;
use crate::economy::{self, ChapterYield};
use crate::env::{GameEnv, compute_seed, streams};
use crate::state::{
    ChapterOutline, FanTier, GameState, Genre, NewsImpact, Novel, RankingBoard, RankingEntry,
    Rankings, Tendency, Trend,
};

/// Name shown for the player on the leaderboards.
pub const PLAYER_AUTHOR: &str = "我";

fn active_novel(state: &GameState) -> Result<&Novel, WritingError> {
    state.library.active.as_ref().ok_or(WritingError::NoActiveNovel)
}

fn active_novel_mut(state: &mut GameState) -> Result<&mut Novel, WritingError> {
    state.library.active.as_mut().ok_or(WritingError::NoActiveNovel)
}

/// Adds a zero-score player entry to `board` if the player is not listed yet.
pub(crate) fn ensure_player_entry(rankings: &mut Rankings, board: RankingBoard, title: &str) {
    if rankings.board(board).iter().any(|entry| entry.is_player) {
        return;
    }
    rankings.board_mut(board).push(RankingEntry {
        rank: 0,
        author: PLAYER_AUTHOR.to_string(),
        title: title.to_string(),
        score: 0,
        tickets: 0,
        trend: Trend::Stable,
        is_player: true,
    });
    rankings.re_rank(board);
}

// ============================================================================
// Start
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartNovelAction {
    pub title: String,
    pub genre: Genre,
    pub tendency: Tendency,
    /// Chapter plan. Empty means "use placeholder chapters".
    pub outlines: Vec<ChapterOutline>,
}

impl ActionTransition for StartNovelAction {
    type Error = WritingError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(WritingError::EmptyTitle);
        }
        if state.library.active.is_some() {
            return Err(WritingError::NovelAlreadyActive);
        }
        let rank = state.career.rank;
        if !economy::genre_unlocked(rank, self.genre, env.ladder()?) {
            return Err(WritingError::GenreLocked {
                genre: self.genre,
                rank,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        let outlines = if self.outlines.is_empty() {
            ChapterOutline::fallback_set(config.fallback_outline_count)
        } else {
            self.outlines.clone()
        };

        let id = state.allocate_novel_id();
        let title = self.title.trim().to_string();
        for board in [
            RankingBoard::Monthly,
            RankingBoard::Potential,
            RankingBoard::RichFans,
        ] {
            ensure_player_entry(&mut state.rankings, board, &title);
        }
        state.library.active = Some(Novel::new(id, title, self.genre, self.tendency, outlines));

        Ok(ActionResult::Novel(id))
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            state
                .library
                .active
                .as_ref()
                .is_some_and(|novel| !novel.outlines.is_empty()),
            "a started novel always has at least one outline"
        );
        Ok(())
    }
}

// ============================================================================
// Write chapter
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WritingMode {
    #[default]
    Normal,
    Hardcore,
}

impl WritingMode {
    fn base_words(self, config: &GameConfig) -> u32 {
        match self {
            Self::Normal => config.normal_chapter_words,
            Self::Hardcore => config.hardcore_chapter_words,
        }
    }

    fn base_stamina(self, config: &GameConfig) -> u32 {
        match self {
            Self::Normal => config.normal_chapter_stamina,
            Self::Hardcore => config.hardcore_chapter_stamina,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteChapterAction {
    pub mode: WritingMode,
    pub inspiration_spend: u32,
    /// Reader comments to attach to the novel.
    pub comments: Vec<String>,
}

impl WriteChapterAction {
    fn stamina_cost(&self, state: &GameState, env: &GameEnv<'_>) -> Result<u32, WritingError> {
        let config = env.game_config()?;
        let perks = economy::perks(state.career.rank, env.ladder()?);
        Ok(economy::chapter_stamina(self.mode.base_stamina(config), &perks))
    }
}

impl ActionTransition for WriteChapterAction {
    type Error = WritingError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        active_novel(state)?;

        let required = self.stamina_cost(state, env)?;
        if state.author.stamina < required {
            return Err(WritingError::InsufficientStamina {
                required,
                available: state.author.stamina,
            });
        }

        let perks = economy::perks(state.career.rank, env.ladder()?);
        if !perks.inspiration_free && state.author.inspiration < self.inspiration_spend {
            return Err(WritingError::InsufficientInspiration {
                required: self.inspiration_spend,
                available: state.author.inspiration,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        let perks = economy::perks(state.career.rank, env.ladder()?);
        let rng = env.rng()?;

        let roll = rng.unit_f64(compute_seed(
            state.game_seed,
            state.clock.nonce,
            streams::WORD_COUNT,
            0,
        ));
        let words = economy::chapter_words(self.mode.base_words(config), roll, &perks, config);
        let income = economy::chapter_income(words, state.author.writing_skill, config);
        let quality_gain = economy::chapter_quality_gain(
            self.mode == WritingMode::Hardcore,
            self.inspiration_spend,
            config,
        );
        let stamina_cost = economy::chapter_stamina(self.mode.base_stamina(config), &perks);

        let author = &mut state.author;
        author.spend_stamina(stamina_cost);
        author.money += income;
        if !perks.inspiration_free {
            author.inspiration = author.inspiration.saturating_sub(self.inspiration_spend);
        }
        author.shift_mood(-(config.chapter_mood_cost as i64));

        state.career.total_words_written += words;
        state.social.last_post_day = state.clock.day;
        state.social.nudge_pressure = 0;

        let novel = active_novel_mut(state)?;
        novel.word_count += words;
        novel.total_income += income;
        novel.add_quality(quality_gain);
        novel.advance_chapter();
        novel.push_reviews(self.comments.iter().cloned());

        Ok(ActionResult::Chapter(ChapterYield {
            words,
            income,
            quality_gain,
            stamina_cost,
        }))
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let novel = active_novel(state)?;
        debug_assert!(novel.quality <= GameConfig::MAX_QUALITY);
        debug_assert!(novel.current_chapter_index < novel.outlines.len().max(1));
        Ok(())
    }
}

// ============================================================================
// Butterfly revision
// ============================================================================

/// Audience lean produced by a plot revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FanBias {
    Sweet,
    Bitter,
    Stans,
    Logic,
}

/// Side effects of rewriting the plot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButterflyImpact {
    pub stamina: i64,
    pub mood: i64,
    pub heat: i64,
    pub fan_bias: Option<FanBias>,
    /// Market sector that picks up the story, published as neutral news.
    pub market_echo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReviseOutlineAction {
    pub chapter_goal: String,
    /// Replacements for the chapters after the current one.
    pub revised_outlines: Vec<ChapterOutline>,
    pub impact: ButterflyImpact,
}

impl ActionTransition for ReviseOutlineAction {
    type Error = WritingError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        active_novel(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let impact = &self.impact;
        let day = state.clock.day;

        let novel = active_novel_mut(state)?;
        let current = novel.current_chapter_index;
        if let Some(outline) = novel.outlines.get_mut(current) {
            outline.goal = self
                .chapter_goal
                .chars()
                .take(GameConfig::MAX_CHAPTER_GOAL_CHARS)
                .collect();
            outline.is_modified = true;
        }
        // The plan never grows: revisions past the last chapter are dropped.
        for (slot, revised) in novel
            .outlines
            .iter_mut()
            .skip(current + 1)
            .zip(self.revised_outlines.iter().take(GameConfig::MAX_REVISED_OUTLINES))
        {
            let chapter_number = slot.chapter_number;
            *slot = ChapterOutline {
                chapter_number,
                is_modified: true,
                ..revised.clone()
            };
        }

        novel.heat = if impact.heat >= 0 {
            novel.heat.saturating_add(impact.heat as u64)
        } else {
            novel.heat.saturating_sub(impact.heat.unsigned_abs())
        };
        if impact.fan_bias == Some(FanBias::Bitter) {
            novel.shift_tension(10);
        }

        if impact.heat > 0 {
            state.social.add_heat(impact.heat as u64);
        }
        state.author.shift_stamina(impact.stamina);
        state.author.shift_mood(impact.mood);

        match impact.fan_bias {
            Some(FanBias::Sweet) => {
                let gained = (state.fans.followers as f64 * 0.05).floor() as i64;
                state.fans.shift(FanTier::Followers, gained);
            }
            Some(FanBias::Stans) => {
                let converted = (state.fans.hardcore as f64 * 0.05).floor() as u64;
                state
                    .fans
                    .convert(FanTier::Hardcore, FanTier::Stans, converted);
            }
            Some(FanBias::Logic) => state.author.writing_skill += 1.0,
            Some(FanBias::Bitter) | None => {}
        }

        if let Some(sector) = impact.market_echo.as_deref() {
            state.market.push_news(
                day,
                format!("小说剧情引发热议，{sector}板块受到关注"),
                NewsImpact::Neutral,
            );
        }

        Ok(ActionResult::Done)
    }
}

// ============================================================================
// Finish
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinishNovelAction;

impl ActionTransition for FinishNovelAction {
    type Error = WritingError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if active_novel(state)?.word_count == 0 {
            return Err(WritingError::NothingWritten);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        let mut novel = state
            .library
            .active
            .take()
            .ok_or(WritingError::NoActiveNovel)?;

        novel.is_finished = true;
        novel.legacy_income_rate = novel.quality * config.legacy_income_per_quality;
        let id = novel.id;
        state.library.finished.push(novel);

        state.career.finished_count += 1;
        state
            .author
            .shift_reputation(config.finish_reputation_bonus as i64);

        Ok(ActionResult::Novel(id))
    }
}

// ============================================================================
// Inspiration
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplyQuoteAction {
    pub quote_id: String,
}

impl ActionTransition for ApplyQuoteAction {
    type Error = WritingError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        active_novel(state)?;
        let quote = env
            .lifestyle()?
            .quote(&self.quote_id)
            .ok_or_else(|| WritingError::UnknownQuote(self.quote_id.clone()))?;
        if state.inspiration_library.contains(&self.quote_id) {
            return Err(WritingError::QuoteAlreadyUsed(self.quote_id.clone()));
        }
        if state.author.shards < quote.shard_cost {
            return Err(WritingError::InsufficientShards {
                required: quote.shard_cost,
                available: state.author.shards,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let quote = env
            .lifestyle()?
            .quote(&self.quote_id)
            .ok_or_else(|| WritingError::UnknownQuote(self.quote_id.clone()))?;

        state.author.shards -= quote.shard_cost;
        state.author.shift_mood(quote.mood as i64);

        let novel = active_novel_mut(state)?;
        novel.shift_tension(quote.tension as i64);
        novel.quality = (novel.quality + quote.quality).clamp(0.0, GameConfig::MAX_QUALITY);

        state.inspiration_library.push(self.quote_id.clone());
        Ok(ActionResult::Done)
    }
}

/// Turns collected shards into inspiration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrainstormAction {
    pub shards: u32,
}

impl ActionTransition for BrainstormAction {
    type Error = WritingError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if self.shards == 0 {
            return Err(WritingError::NoShardsSpent);
        }
        if state.author.shards < self.shards {
            return Err(WritingError::InsufficientShards {
                required: self.shards,
                available: state.author.shards,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        let gained = self.shards.saturating_mul(config.inspiration_per_shard);
        state.author.shards -= self.shards;
        state.author.inspiration = state
            .author
            .inspiration
            .saturating_add(gained)
            .min(GameConfig::MAX_INSPIRATION);
        Ok(ActionResult::Done)
    }
}
