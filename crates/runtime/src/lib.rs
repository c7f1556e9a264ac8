//! Runtime orchestration for the career simulation.
//!
//! This crate wires together oracle access, repositories, the text service
//! seam and worker tasks into a cohesive runtime API. Consumers embed
//! [`Runtime`] to execute actions, subscribe to events, and drive the
//! narrative flows through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`hooks`] issues the system actions that follow player actions
//! - [`narrative`] is the seam to the external text service
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod events;
pub mod hooks;
pub mod narrative;
pub mod oracle;
pub mod repository;
pub mod runtime;
pub mod utils;

mod workers;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ChapterDraft, Result, RuntimeError, RuntimeHandle};
pub use events::{CareerEvent, Event, EventBus, GameStateEvent, MarketEvent, Topic};
pub use hooks::{
    AchievementHook, HookContext, HookCriticality, HookRegistry, MacroEventHook, MarketTickHook,
    PostExecutionHook, RankSyncHook,
};
pub use narrative::{
    CannedNarrative, FeedKind, NarrativeError, NarrativeService, OutlineRevision, SocialPost,
};
pub use oracle::{
    AchievementOracleImpl, ConfigOracleImpl, LifestyleOracleImpl, MarketOracleImpl,
    OracleManager, ProgressionOracleImpl, WorldOracleImpl,
};
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, StateRepository,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use workers::PersistenceConfig;
