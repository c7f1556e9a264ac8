//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! executing actions, streaming events from specific topics, and the
//! narrative flows that need the text service before an action can be built.
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use career_core::state::Novel;
use career_core::{
    Action, ActionResult, ExecutionOutcome, GameState, Genre, NegotiateIpAction, NovelId,
    QueueEventAction, ReviseOutlineAction, StartNovelAction, Tendency, WriteChapterAction,
    WritingMode,
};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::narrative::{
    CannedNarrative, NarrativeError, NarrativeService, SocialPost, build_feed, clean_title,
    with_fallback,
};
use crate::oracle::OracleManager;
use crate::workers::Command;

/// Fewest danmu lines accepted from the text service before using the pool.
const MIN_DANMU_LINES: usize = 5;
const MAX_DANMU_LINES: usize = 12;

/// Outcome of writing a chapter, with the excerpt shown to the player.
#[derive(Debug, Clone)]
pub struct ChapterDraft {
    pub outcome: ExecutionOutcome,
    /// Empty when neither the service nor the pools had anything to offer.
    pub snippet: String,
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    oracles: OracleManager,
    narrative: Arc<dyn NarrativeService>,
    fallback: Arc<CannedNarrative>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        oracles: OracleManager,
        narrative: Arc<dyn NarrativeService>,
        fallback: Arc<CannedNarrative>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            oracles,
            narrative,
            fallback,
        }
    }

    /// Execute an action and its hooks, committing the result.
    ///
    /// A rejected action leaves the state untouched and comes back as
    /// [`RuntimeError::Execute`].
    pub async fn execute_action(&self, action: impl Into<Action>) -> Result<ExecutionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::ExecuteAction {
                action: action.into(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Save the current state, returning the nonce it was saved under.
    pub async fn save(&self) -> Result<u64> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Save { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Action execution, failures and commits
    /// - `Topic::Career` - Rank changes, achievements, day reports
    /// - `Topic::Market` - Daily price moves
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use career_runtime::Topic;
    ///
    /// let mut career_rx = handle.subscribe(Topic::Career);
    /// while let Ok(event) = career_rx.recv().await {
    ///     // Handle career events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Starts a novel with a chapter plan from the text service.
    pub async fn start_novel(
        &self,
        title: &str,
        genre: Genre,
        tendency: Tendency,
    ) -> Result<NovelId> {
        let title = clean_title(title);
        // Without any outlines the engine generates placeholders itself.
        let outlines = with_fallback(
            "chapter_outlines",
            self.narrative.chapter_outlines(&title, genre, tendency),
            self.fallback.chapter_outlines(&title, genre, tendency),
        )
        .await
        .unwrap_or_default();

        let outcome = self
            .execute_action(StartNovelAction {
                title,
                genre,
                tendency,
                outlines,
            })
            .await?;

        match outcome.action_result {
            ActionResult::Novel(id) => Ok(id),
            _ => self.active_novel().await.map(|novel| novel.id),
        }
    }

    /// Writes the next chapter of the active novel.
    pub async fn write_chapter(
        &self,
        mode: WritingMode,
        inspiration_spend: u32,
    ) -> Result<ChapterDraft> {
        let novel = self.active_novel().await?;

        let comments = with_fallback(
            "chapter_comments",
            self.narrative.chapter_comments(&novel),
            self.fallback.chapter_comments(&novel),
        )
        .await
        .unwrap_or_default();

        let outcome = self
            .execute_action(WriteChapterAction {
                mode,
                inspiration_spend,
                comments,
            })
            .await?;

        let snippet = with_fallback(
            "chapter_snippet",
            self.narrative.chapter_snippet(&novel, inspiration_spend),
            self.fallback.chapter_snippet(&novel, inspiration_spend),
        )
        .await
        .unwrap_or_default();

        Ok(ChapterDraft { outcome, snippet })
    }

    /// Rewrites the plot of the active novel in the given direction.
    ///
    /// There is no canned revision: a service failure is returned as
    /// [`RuntimeError::Narrative`] and nothing is executed.
    pub async fn revise_outline(&self, direction: &str) -> Result<ExecutionOutcome> {
        let novel = self.active_novel().await?;
        let revision = self.narrative.revise_outline(&novel, direction).await?;
        let chapter_goal = match revision.chapter_goal.trim() {
            "" => direction.trim().to_string(),
            goal => goal.to_string(),
        };

        self.execute_action(ReviseOutlineAction {
            chapter_goal,
            revised_outlines: revision.outlines,
            impact: revision.impact,
        })
        .await
    }

    /// Opens an adaptation negotiation for one of the player's novels.
    pub async fn negotiate_ip(&self, novel: NovelId) -> Result<ExecutionOutcome> {
        let state = self.query_state().await?;
        let target = state
            .library
            .find(novel)
            .ok_or(RuntimeError::NovelNotFound(novel))?;

        let event = with_fallback(
            "ip_negotiation",
            self.narrative.ip_negotiation(target),
            self.fallback.ip_negotiation(target),
        )
        .await
        .ok_or(NarrativeError::Empty("ip offer"))?;

        self.execute_action(NegotiateIpAction { novel, event }).await
    }

    /// Queues a macro event right away instead of waiting for the interval.
    pub async fn raise_macro_event(&self) -> Result<ExecutionOutcome> {
        let state = self.query_state().await?;
        let event = with_fallback(
            "macro_event",
            self.narrative.macro_event(&state),
            self.fallback.macro_event(&state),
        )
        .await
        .ok_or(NarrativeError::Empty("macro event"))?;

        self.execute_action(Action::system(QueueEventAction::new(event)))
            .await
    }

    /// Posts for the social screen, derived from the current state.
    pub async fn social_feed(&self) -> Result<Vec<SocialPost>> {
        let state = self.query_state().await?;
        Ok(build_feed(&state, &self.oracles, self.narrative.as_ref(), &self.fallback).await)
    }

    /// Bullet comments for the gathering screen.
    ///
    /// Short answers from the service are replaced by the pool.
    pub async fn gather_danmu(&self) -> Vec<String> {
        let mut lines = match self.narrative.gather_danmu().await {
            Ok(lines) if lines.len() >= MIN_DANMU_LINES => lines,
            result => {
                if let Err(error) = result {
                    tracing::warn!(
                        target: "runtime::narrative",
                        request = "gather_danmu",
                        error = %error,
                        "Text service failed, using canned content"
                    );
                }
                self.fallback.gather_danmu().await.unwrap_or_default()
            }
        };
        lines.truncate(MAX_DANMU_LINES);
        lines
    }

    /// A title suggestion, without decorative quotes.
    pub async fn suggest_title(&self, genre: Genre, tendency: Tendency) -> Result<String> {
        let raw = with_fallback(
            "novel_title",
            self.narrative.novel_title(genre, tendency),
            self.fallback.novel_title(genre, tendency),
        )
        .await
        .ok_or(NarrativeError::Empty("title"))?;

        Ok(clean_title(&raw))
    }

    async fn active_novel(&self) -> Result<Novel> {
        self.query_state()
            .await?
            .library
            .active
            .ok_or(RuntimeError::NoActiveNovel)
    }
}
