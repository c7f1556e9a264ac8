//! Seam to the external text service.
//!
//! Outlines, reader comments, excerpts and flavour posts come from a text
//! generation service the runtime does not own. [`NarrativeService`] is the
//! contract; [`CannedNarrative`] answers every request from the shipped
//! pools and is what the runtime falls back to when the service fails.
//!
//! Nothing returned here is authoritative: the text only reaches the game
//! state as arguments of ordinary actions.

mod canned;
mod feed;

pub use canned::CannedNarrative;
pub use feed::{FeedKind, SocialPost, build_feed};
pub(crate) use feed::with_fallback;

use async_trait::async_trait;
use career_core::env::AssetSpec;
use career_core::state::{ChapterOutline, Novel};
use career_core::{ButterflyImpact, GameEvent, GameState, Genre, Tendency};
use thiserror::Error;

/// Failures reported by a text service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NarrativeError {
    #[error("text service unavailable: {0}")]
    Unavailable(String),

    #[error("text service returned malformed output: {0}")]
    Malformed(String),

    #[error("no {0} content available")]
    Empty(&'static str),
}

pub type NarrativeResult<T> = std::result::Result<T, NarrativeError>;

/// Result of rewriting the plot from the current chapter on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlineRevision {
    /// Rewritten goal of the current chapter.
    pub chapter_goal: String,
    /// Replacements for the chapters after the current one.
    pub outlines: Vec<ChapterOutline>,
    pub impact: ButterflyImpact,
}

/// Text generation used by the runtime's narrative helpers.
#[async_trait]
pub trait NarrativeService: Send + Sync {
    /// Chapter plan for a new novel.
    async fn chapter_outlines(
        &self,
        title: &str,
        genre: Genre,
        tendency: Tendency,
    ) -> NarrativeResult<Vec<ChapterOutline>>;

    /// Reader comments for the chapter about to be written.
    async fn chapter_comments(&self, novel: &Novel) -> NarrativeResult<Vec<String>>;

    /// Excerpt of the chapter just written.
    async fn chapter_snippet(&self, novel: &Novel, inspiration: u32) -> NarrativeResult<String>;

    /// Rewrites the plot following the player's direction.
    async fn revise_outline(&self, novel: &Novel, direction: &str)
    -> NarrativeResult<OutlineRevision>;

    async fn novel_title(&self, genre: Genre, tendency: Tendency) -> NarrativeResult<String>;

    /// Market-moving news with options for the player.
    async fn macro_event(&self, state: &GameState) -> NarrativeResult<GameEvent>;

    /// Bullet comments shown while gathering material.
    async fn gather_danmu(&self) -> NarrativeResult<Vec<String>>;

    /// A reader post for the social feed.
    async fn social_quote(&self) -> NarrativeResult<String>;

    async fn curator_post(&self, novel: &Novel) -> NarrativeResult<String>;

    async fn guru_post(&self, asset: &AssetSpec) -> NarrativeResult<String>;

    /// A reader demanding an update, harsher as `intensity` grows.
    async fn nudge_comment(&self, intensity: u32) -> NarrativeResult<String>;

    /// Adaptation offer for one of the player's novels.
    async fn ip_negotiation(&self, novel: &Novel) -> NarrativeResult<GameEvent>;
}

/// Strips decorative quotes a text service likes to wrap titles in.
pub fn clean_title(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '"' | '\'' | '《' | '》' | '「' | '」'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_lose_their_brackets() {
        assert_eq!(clean_title("  《雨夜》 "), "雨夜");
        assert_eq!(clean_title("「花与\"剑\"」"), "花与剑");
    }
}
