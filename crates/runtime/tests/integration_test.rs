//! End-to-end runtime tests against the shipped content.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use career_content::ContentFactory;
use career_core::env::AssetSpec;
use career_core::state::{ChapterOutline, Novel};
use career_core::{
    Action, ActionResult, AdvanceDayAction, ButterflyImpact, GameEvent, GameState, Genre,
    IdentityKind, QueueEventAction, Tendency, WriteChapterAction, WritingMode,
};
use career_runtime::narrative::OutlineRevision;
use career_runtime::{
    AchievementOracleImpl, CareerEvent, ConfigOracleImpl, Event, FileStateRepository,
    GameStateEvent, HookContext, HookCriticality, HookRegistry, LifestyleOracleImpl, MarketEvent,
    MarketOracleImpl, NarrativeError, NarrativeService, OracleManager, PostExecutionHook,
    Runtime, RuntimeError, StateRepository, Topic, WorldOracleImpl,
};
use tokio::sync::broadcast;

const SEED: u64 = 20_240_601;

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data"))
}

fn oracles() -> OracleManager {
    let factory = factory();
    OracleManager::new(
        Arc::new(factory.load_progression().unwrap().into()),
        Arc::new(MarketOracleImpl::new(factory.load_assets().unwrap())),
        Arc::new(LifestyleOracleImpl::new(factory.load_lifestyle().unwrap())),
        Arc::new(AchievementOracleImpl::new(factory.load_achievements().unwrap())),
        Arc::new(WorldOracleImpl::new(factory.load_world().unwrap())),
        Arc::new(ConfigOracleImpl::new(factory.load_config().unwrap())),
    )
}

async fn start() -> Runtime {
    Runtime::builder()
        .oracles(oracles())
        .new_game(SEED, IdentityKind::Transparent)
        .narrative_pools(factory().load_narrative().unwrap())
        .build()
        .await
        .expect("runtime should build")
}

/// Drains whatever is already buffered on a receiver.
fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// A text service that is down, except for an optional scripted revision.
#[derive(Default)]
struct OfflineService {
    revision: Option<OutlineRevision>,
}

#[async_trait]
impl NarrativeService for OfflineService {
    async fn chapter_outlines(
        &self,
        _: &str,
        _: Genre,
        _: Tendency,
    ) -> Result<Vec<ChapterOutline>, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
    async fn chapter_comments(&self, _: &Novel) -> Result<Vec<String>, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
    async fn chapter_snippet(&self, _: &Novel, _: u32) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
    async fn revise_outline(&self, _: &Novel, _: &str) -> Result<OutlineRevision, NarrativeError> {
        self.revision
            .clone()
            .ok_or_else(|| NarrativeError::Unavailable("offline".into()))
    }
    async fn novel_title(&self, _: Genre, _: Tendency) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
    async fn macro_event(&self, _: &GameState) -> Result<GameEvent, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
    async fn gather_danmu(&self) -> Result<Vec<String>, NarrativeError> {
        Ok(vec!["太短了".into()])
    }
    async fn social_quote(&self) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
    async fn curator_post(&self, _: &Novel) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
    async fn guru_post(&self, _: &AssetSpec) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
    async fn nudge_comment(&self, _: u32) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
    async fn ip_negotiation(&self, _: &Novel) -> Result<GameEvent, NarrativeError> {
        Err(NarrativeError::Unavailable("offline".into()))
    }
}

#[tokio::test]
async fn writing_a_chapter_commits_and_publishes() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut game_rx = handle.subscribe(Topic::GameState);

    let id = handle
        .start_novel("《雨夜的约定》", Genre::Daily, Tendency::Sweet)
        .await
        .unwrap();
    let draft = handle.write_chapter(WritingMode::Normal, 0).await.unwrap();

    let ActionResult::Chapter(chapter) = &draft.outcome.action_result else {
        panic!("unexpected result {:?}", draft.outcome.action_result);
    };
    assert!(chapter.words > 0);
    assert!(!draft.snippet.is_empty());

    let state = handle.query_state().await.unwrap();
    let novel = state.library.active.as_ref().unwrap();
    assert_eq!(novel.id, id);
    assert_eq!(novel.title, "雨夜的约定");
    assert_eq!(novel.word_count, chapter.words);

    let events = drain(&mut game_rx);
    assert!(matches!(
        events.first(),
        Some(Event::GameState(GameStateEvent::ActionExecuted { .. }))
    ));
    let commits: Vec<u64> = events
        .iter()
        .filter_map(|event| match event {
            Event::GameState(GameStateEvent::StateCommitted { nonce, digest, .. }) => {
                assert_eq!(digest.len(), 64);
                Some(*nonce)
            }
            _ => None,
        })
        .collect();
    assert_eq!(commits.len(), 2);
    assert_eq!(commits.last(), Some(&state.clock.nonce));

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn rejected_actions_leave_the_state_untouched() {
    let runtime = start().await;
    let handle = runtime.handle();
    let before = handle.query_state().await.unwrap();
    let mut game_rx = handle.subscribe(Topic::GameState);

    let error = handle
        .execute_action(WriteChapterAction::default())
        .await
        .unwrap_err();
    assert!(matches!(error, RuntimeError::Execute(_)));
    assert!(matches!(
        handle.write_chapter(WritingMode::Hardcore, 0).await,
        Err(RuntimeError::NoActiveNovel)
    ));

    assert_eq!(handle.query_state().await.unwrap(), before);
    let events = drain(&mut game_rx);
    assert!(matches!(
        events.as_slice(),
        [Event::GameState(GameStateEvent::ActionFailed { .. })]
    ));
}

#[tokio::test]
async fn advancing_the_day_ticks_the_market() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut career_rx = handle.subscribe(Topic::Career);
    let mut market_rx = handle.subscribe(Topic::Market);

    handle.execute_action(AdvanceDayAction).await.unwrap();
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.clock.day, 2);

    let career = drain(&mut career_rx);
    assert!(career.iter().any(|event| matches!(
        event,
        Event::Career(CareerEvent::DayAdvanced { report }) if report.day == 2
    )));

    let market = drain(&mut market_rx);
    let [Event::Market(MarketEvent::MarketTicked { day, prices })] = market.as_slice() else {
        panic!("expected one market tick, got {market:?}");
    };
    assert_eq!(*day, 2);
    assert_eq!(prices.len(), state.market.assets.len());
}

async fn start_with(service: OfflineService) -> Runtime {
    Runtime::builder()
        .oracles(oracles())
        .new_game(SEED, IdentityKind::Transparent)
        .narrative(Arc::new(service))
        .narrative_pools(factory().load_narrative().unwrap())
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn offline_service_falls_back_except_for_revisions() {
    let runtime = start_with(OfflineService::default()).await;
    let handle = runtime.handle();

    handle
        .start_novel("花与剑", Genre::Daily, Tendency::Bitter)
        .await
        .unwrap();
    let draft = handle.write_chapter(WritingMode::Normal, 0).await.unwrap();
    assert!(!draft.snippet.is_empty());

    let danmu = handle.gather_danmu().await;
    assert!(danmu.len() > 1 && danmu.len() <= 12);

    let feed = handle.social_feed().await.unwrap();
    assert!(feed.len() >= 3);

    let before = handle.query_state().await.unwrap();
    assert!(matches!(
        handle.revise_outline("让她们在雨中重逢").await,
        Err(RuntimeError::Narrative(NarrativeError::Unavailable(_)))
    ));
    assert_eq!(handle.query_state().await.unwrap(), before);
}

#[tokio::test]
async fn revisions_use_the_goal_written_by_the_service() {
    let runtime = start_with(OfflineService {
        revision: Some(OutlineRevision {
            chapter_goal: "雨停之后，她们在车站重逢".into(),
            outlines: vec![ChapterOutline::new(0, "重逢", "把误会说开")],
            impact: ButterflyImpact::default(),
        }),
    })
    .await;
    let handle = runtime.handle();

    handle
        .start_novel("花与剑", Genre::Daily, Tendency::Sweet)
        .await
        .unwrap();
    handle.revise_outline("让她们在雨中重逢").await.unwrap();

    let state = handle.query_state().await.unwrap();
    let novel = state.library.active.as_ref().unwrap();
    let current = novel.current_chapter_index;
    assert_eq!(novel.outlines[current].goal, "雨停之后，她们在车站重逢");
    assert!(novel.outlines[current].is_modified);
    assert_eq!(novel.outlines[current + 1].title, "重逢");
}

/// Always answers with an event the engine rejects.
struct BrokenEventHook;

impl PostExecutionHook for BrokenEventHook {
    fn name(&self) -> &'static str {
        "broken_event"
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Critical
    }

    fn should_trigger(&self, _ctx: &HookContext<'_>) -> bool {
        true
    }

    fn create_actions(&self, _ctx: &HookContext<'_>) -> Vec<Action> {
        vec![Action::system(QueueEventAction::new(GameEvent {
            id: "empty".into(),
            title: "空白".into(),
            description: String::new(),
            options: Vec::new(),
            market_effect: None,
        }))]
    }
}

#[tokio::test]
async fn failing_critical_hook_rolls_back_the_action() {
    let runtime = Runtime::builder()
        .oracles(oracles())
        .new_game(SEED, IdentityKind::Transparent)
        .with_hooks(HookRegistry::new(vec![
            Arc::new(BrokenEventHook) as Arc<dyn PostExecutionHook>,
        ]))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let before = handle.query_state().await.unwrap();
    let mut game_rx = handle.subscribe(Topic::GameState);
    let mut career_rx = handle.subscribe(Topic::Career);

    assert!(matches!(
        handle.execute_action(AdvanceDayAction).await,
        Err(RuntimeError::Execute(_))
    ));

    let after = handle.query_state().await.unwrap();
    assert_eq!(after, before);
    assert_eq!(after.clock.nonce, before.clock.nonce);
    assert_eq!(after.clock.day, before.clock.day);

    assert!(matches!(
        drain(&mut game_rx).as_slice(),
        [Event::GameState(GameStateEvent::ActionFailed { .. })]
    ));
    assert!(drain(&mut career_rx).is_empty());
}

#[tokio::test]
async fn macro_events_cannot_stack() {
    let runtime = start().await;
    let handle = runtime.handle();

    handle.raise_macro_event().await.unwrap();
    let state = handle.query_state().await.unwrap();
    assert!(state.events.pending.is_some());
    assert_eq!(state.events.last_macro_event_day, state.clock.day);

    assert!(matches!(
        handle.raise_macro_event().await,
        Err(RuntimeError::Execute(_))
    ));
}

#[tokio::test]
async fn saves_round_trip_through_the_file_repository() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(FileStateRepository::new(dir.path()).unwrap());

    let runtime = Runtime::builder()
        .oracles(oracles())
        .new_game(SEED, IdentityKind::Transparent)
        .repository(repo.clone())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    handle.execute_action(AdvanceDayAction).await.unwrap();
    let nonce = handle.save().await.unwrap();
    let state = handle.query_state().await.unwrap();
    assert_eq!(nonce, state.clock.nonce);

    drop(handle);
    runtime.shutdown().await.unwrap();

    assert_eq!(repo.load_latest().unwrap(), Some(state));
}

#[tokio::test]
async fn saving_requires_a_repository() {
    let runtime = start().await;
    assert!(matches!(
        runtime.handle().save().await,
        Err(RuntimeError::PersistenceDisabled)
    ));
}
