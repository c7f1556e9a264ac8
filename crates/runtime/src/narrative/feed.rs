//! Social feed assembly.

use std::future::Future;

use career_core::env::{compute_seed, streams};
use career_core::{GameState, MarketOracle, RngOracle};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{CannedNarrative, NarrativeResult, NarrativeService};
use crate::oracle::OracleManager;

/// Reader posts at the top of every refresh.
const READER_POSTS: u32 = 2;
/// Heat above which the curator starts recommending the active novel.
const CURATOR_HEAT: u64 = 200;
/// Sentiment magnitude that makes an asset worth a guru post.
const GURU_SENTIMENT: i32 = 30;

const CURATOR_NAME: &str = "圈内第一推书姬";
const GURU_NAME: &str = "资本老韭菜·沈老师";
const NUDGE_NAME: &str = "催更读者";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedKind {
    Reader,
    Curator,
    FinanceGuru,
    Nudge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    pub kind: FeedKind,
    pub author: String,
    pub content: String,
    pub likes: u64,
    pub replies: u64,
}

/// Builds the feed for the current state.
///
/// Authors and counters are derived from the game seed and the current
/// nonce, so the same state always shows the same numbers. Text comes from
/// `service`, falling back to `fallback` post by post.
pub async fn build_feed(
    state: &GameState,
    oracles: &OracleManager,
    service: &dyn NarrativeService,
    fallback: &CannedNarrative,
) -> Vec<SocialPost> {
    let rng = oracles.rng();
    let seed = |context: u32| compute_seed(state.game_seed, state.clock.nonce, streams::FEED, context);
    let mut feed = Vec::new();

    for i in 0..READER_POSTS {
        let Some(content) = with_fallback(
            "social_quote",
            service.social_quote(),
            fallback.social_quote(),
        )
        .await
        else {
            continue;
        };
        feed.push(SocialPost {
            kind: FeedKind::Reader,
            author: format!("姬友{:04}", rng.range(seed(i * 3), 1000, 9999)),
            content,
            likes: u64::from(rng.range(seed(i * 3 + 1), 0, 500)),
            replies: u64::from(rng.range(seed(i * 3 + 2), 0, 50)),
        });
    }

    let heat = state.social.global_heat;
    if let Some(novel) = state.library.active.as_ref().filter(|_| heat > CURATOR_HEAT)
        && let Some(content) = with_fallback(
            "curator_post",
            service.curator_post(novel),
            fallback.curator_post(novel),
        )
        .await
    {
        feed.insert(
            0,
            SocialPost {
                kind: FeedKind::Curator,
                author: CURATOR_NAME.to_string(),
                content,
                likes: heat.saturating_mul(3),
                replies: heat / 5,
            },
        );
    }

    let assets = &state.market.assets;
    let hot = assets
        .iter()
        .find(|asset| asset.sentiment.abs() > GURU_SENTIMENT)
        .or_else(|| {
            let last = assets.len().checked_sub(1)?;
            assets.get(rng.range(seed(100), 0, last as u32) as usize)
        });
    if let Some(spec) = hot.and_then(|asset| oracles.market().asset(&asset.id))
        && let Some(content) = with_fallback(
            "guru_post",
            service.guru_post(spec),
            fallback.guru_post(spec),
        )
        .await
    {
        feed.push(SocialPost {
            kind: FeedKind::FinanceGuru,
            author: GURU_NAME.to_string(),
            content,
            likes: 888,
            replies: 66,
        });
    }

    let nudges = state.social.nudge_messages_count;
    let intensity = state.social.nudge_pressure;
    for _ in 0..nudges.min(3) {
        if let Some(content) = with_fallback(
            "nudge_comment",
            service.nudge_comment(intensity),
            fallback.nudge_comment(intensity),
        )
        .await
        {
            feed.push(SocialPost {
                kind: FeedKind::Nudge,
                author: NUDGE_NAME.to_string(),
                content,
                likes: u64::from(intensity),
                replies: 0,
            });
        }
    }

    feed
}

/// Awaits `primary`, then `fallback` if it failed. Both failing drops the post.
pub(crate) async fn with_fallback<T>(
    request: &'static str,
    primary: impl Future<Output = NarrativeResult<T>>,
    fallback: impl Future<Output = NarrativeResult<T>>,
) -> Option<T> {
    match primary.await {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(
                target: "runtime::narrative",
                request,
                error = %error,
                "Text service failed, using canned content"
            );
            fallback.await.ok()
        }
    }
}
