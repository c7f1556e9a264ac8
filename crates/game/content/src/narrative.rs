//! Canned narrative content.
//!
//! The runtime asks a text service for comments, outlines and flavour posts.
//! When that service is absent or fails, it draws from these pools instead.

use career_core::GameEvent;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NarrativePools {
    /// Reader comments attached to freshly written chapters.
    pub chapter_comments: Vec<String>,
    /// Prose shown as the chapter excerpt.
    pub snippets: Vec<String>,
    /// Goal line given to every generated placeholder outline.
    pub outline_goal: String,
    pub titles: Vec<String>,
    /// Bullet comments for the offline gathering screen.
    pub danmu: Vec<String>,
    /// Reader quotes that populate the social feed.
    pub social_quotes: Vec<String>,
    pub curator_posts: Vec<String>,
    pub guru_posts: Vec<String>,
    pub nudge_comments: Vec<String>,
    /// Adaptation offers presented when an IP negotiation opens.
    pub ip_offers: Vec<GameEvent>,
}

impl NarrativePools {
    /// Picks an entry from `pool` by `index`, wrapping around.
    pub fn pick(pool: &[String], index: u64) -> Option<&str> {
        if pool.is_empty() {
            return None;
        }
        Some(pool[(index % pool.len() as u64) as usize].as_str())
    }

    /// Up to `count` consecutive entries starting at `offset`, wrapping around.
    pub fn window(pool: &[String], offset: u64, count: usize) -> Vec<String> {
        if pool.is_empty() {
            return Vec::new();
        }
        let start = (offset % pool.len() as u64) as usize;
        pool.iter()
            .cycle()
            .skip(start)
            .take(count.min(pool.len()))
            .cloned()
            .collect()
    }
}
