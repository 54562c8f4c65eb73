//! Encounter engine and adventure orchestration for Tavern.
//!
//! Runs encounters through their preparation, combat, and short-rest
//! stages, grants experience, and plays whole adventures with one party.
//! Every stage narrates what happened into an [`EventLog`].

/// Adventure orchestrator.
pub mod adventure;
/// Configuration types for adventure runs.
pub mod config;
/// Mutable state borrowed by a running encounter.
pub mod context;
/// The encounter state machine.
pub mod encounter;
/// Error types for the engine crate.
pub mod error;
/// Adventure event types and the event log.
pub mod event;
/// Narrated text for every event.
pub mod narration;
/// Experience, level-ups, and evolution.
pub mod progression;

/// Re-exports of the orchestrator types.
pub use adventure::{AdventureOutcome, AdventureReport, AdventureRun};
/// Re-export of [`config::EngineConfig`].
pub use config::EngineConfig;
/// Re-export of [`context::EncounterContext`].
pub use context::EncounterContext;
/// Re-exports of the encounter state machine.
pub use encounter::{EncounterOutcome, run_encounter};
/// Re-exports of [`error::EngineError`] and [`error::EngineResult`].
pub use error::{EngineError, EngineResult};
/// Re-exports of the event types.
pub use event::{AdventureEvent, EventKind, EventLog, InitiativeSlot, Stage};
/// Re-exports of the progression types.
pub use progression::{Advancement, grant_experience};
