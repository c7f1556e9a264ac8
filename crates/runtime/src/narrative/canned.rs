//! Text service backed by the shipped narrative pools.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use career_content::NarrativePools;
use career_core::env::AssetSpec;
use career_core::state::{ChapterOutline, Novel};
use career_core::{GameEvent, GameState, Genre, Tendency};

use super::{NarrativeError, NarrativeResult, NarrativeService, OutlineRevision};

/// Comments attached to each chapter.
const COMMENTS_PER_CHAPTER: usize = 3;
/// Danmu lines shown per gathering session.
pub(crate) const DANMU_LINES: usize = 12;

/// Deterministic [`NarrativeService`] that rotates through the pools.
///
/// Each request advances an internal cursor, so consecutive calls vary while
/// a fresh instance always answers the same sequence.
#[derive(Debug)]
pub struct CannedNarrative {
    pools: NarrativePools,
    outline_count: u32,
    macro_events: Vec<GameEvent>,
    cursor: AtomicU64,
}

impl CannedNarrative {
    pub fn new(pools: NarrativePools, outline_count: u32) -> Self {
        Self {
            pools,
            outline_count,
            macro_events: Vec::new(),
            cursor: AtomicU64::new(0),
        }
    }

    /// Events offered by [`NarrativeService::macro_event`].
    pub fn with_macro_events(mut self, events: Vec<GameEvent>) -> Self {
        self.macro_events = events;
        self
    }

    pub fn pools(&self) -> &NarrativePools {
        &self.pools
    }

    fn next(&self) -> u64 {
        self.cursor.fetch_add(1, Ordering::Relaxed)
    }

    fn pick(&self, pool: &[String], what: &'static str) -> NarrativeResult<String> {
        NarrativePools::pick(pool, self.next())
            .map(str::to_string)
            .ok_or(NarrativeError::Empty(what))
    }

    fn window(
        &self,
        pool: &[String],
        count: usize,
        what: &'static str,
    ) -> NarrativeResult<Vec<String>> {
        let lines = NarrativePools::window(pool, self.next(), count);
        if lines.is_empty() {
            return Err(NarrativeError::Empty(what));
        }
        Ok(lines)
    }
}

#[async_trait]
impl NarrativeService for CannedNarrative {
    async fn chapter_outlines(
        &self,
        _title: &str,
        _genre: Genre,
        _tendency: Tendency,
    ) -> NarrativeResult<Vec<ChapterOutline>> {
        let mut outlines = ChapterOutline::fallback_set(self.outline_count);
        if !self.pools.outline_goal.is_empty() {
            for outline in &mut outlines {
                outline.goal = self.pools.outline_goal.clone();
            }
        }
        Ok(outlines)
    }

    async fn chapter_comments(&self, _novel: &Novel) -> NarrativeResult<Vec<String>> {
        self.window(&self.pools.chapter_comments, COMMENTS_PER_CHAPTER, "comment")
    }

    async fn chapter_snippet(&self, _novel: &Novel, _inspiration: u32) -> NarrativeResult<String> {
        self.pick(&self.pools.snippets, "snippet")
    }

    async fn revise_outline(
        &self,
        _novel: &Novel,
        direction: &str,
    ) -> NarrativeResult<OutlineRevision> {
        // Takes the direction as the goal, keeps the rest of the plan and
        // causes no butterfly effect.
        Ok(OutlineRevision {
            chapter_goal: direction.trim().to_string(),
            ..OutlineRevision::default()
        })
    }

    async fn novel_title(&self, _genre: Genre, _tendency: Tendency) -> NarrativeResult<String> {
        self.pick(&self.pools.titles, "title")
    }

    async fn macro_event(&self, state: &GameState) -> NarrativeResult<GameEvent> {
        if self.macro_events.is_empty() {
            return Err(NarrativeError::Empty("macro event"));
        }
        let index = state.clock.day as usize % self.macro_events.len();
        Ok(self.macro_events[index].clone())
    }

    async fn gather_danmu(&self) -> NarrativeResult<Vec<String>> {
        self.window(&self.pools.danmu, DANMU_LINES, "danmu")
    }

    async fn social_quote(&self) -> NarrativeResult<String> {
        self.pick(&self.pools.social_quotes, "social quote")
    }

    async fn curator_post(&self, novel: &Novel) -> NarrativeResult<String> {
        let post = self.pick(&self.pools.curator_posts, "curator post")?;
        Ok(format!("《{}》{}", novel.title, post))
    }

    async fn guru_post(&self, asset: &AssetSpec) -> NarrativeResult<String> {
        let post = self.pick(&self.pools.guru_posts, "guru post")?;
        Ok(format!("【{}】{}", asset.name, post))
    }

    async fn nudge_comment(&self, intensity: u32) -> NarrativeResult<String> {
        NarrativePools::pick(&self.pools.nudge_comments, u64::from(intensity / 10))
            .map(str::to_string)
            .ok_or(NarrativeError::Empty("nudge comment"))
    }

    async fn ip_negotiation(&self, novel: &Novel) -> NarrativeResult<GameEvent> {
        if self.pools.ip_offers.is_empty() {
            return Err(NarrativeError::Empty("ip offer"));
        }
        let index = self.next() as usize % self.pools.ip_offers.len();
        let mut event = self.pools.ip_offers[index].clone();
        event.title = format!("《{}》{}", novel.title, event.title);
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fresh_state, pools};

    #[tokio::test]
    async fn outlines_use_the_pool_goal() {
        let canned = CannedNarrative::new(pools(), 4);
        let outlines = canned
            .chapter_outlines("雨夜", Genre::Daily, Tendency::Sweet)
            .await
            .unwrap();

        assert_eq!(outlines.len(), 4);
        assert_eq!(outlines[3].chapter_number, 4);
        assert!(outlines.iter().all(|o| o.goal == pools().outline_goal));
    }

    #[tokio::test]
    async fn danmu_is_capped_and_rotates() {
        let canned = CannedNarrative::new(pools(), 1);
        let first = canned.gather_danmu().await.unwrap();
        let second = canned.gather_danmu().await.unwrap();

        assert!(first.len() <= DANMU_LINES);
        assert_eq!(first.len(), pools().danmu.len().min(DANMU_LINES));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn empty_pools_report_what_is_missing() {
        let canned = CannedNarrative::new(NarrativePools::default(), 1);
        assert_eq!(
            canned.social_quote().await,
            Err(NarrativeError::Empty("social quote"))
        );
        assert_eq!(
            canned.macro_event(&fresh_state()).await,
            Err(NarrativeError::Empty("macro event"))
        );
    }
}
