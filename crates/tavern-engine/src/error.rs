//! Error types for the encounter engine.

use thiserror::Error;

use tavern_core::TavernError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while setting up an adventure run.
///
/// Once a run has started nothing can fail: a total party defeat is a normal
/// outcome, not an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The party is too small or too large.
    #[error("a party needs {min} to {max} members, got {got}")]
    PartySize {
        /// Members supplied.
        got: usize,
        /// Smallest allowed party.
        min: usize,
        /// Largest allowed party.
        max: usize,
    },

    /// The same character was fielded twice.
    #[error("{0} is already in the party")]
    DuplicateMember(String),

    /// A fielded character has no hit points even after the adventure reset.
    #[error("{0} cannot start an adventure unconscious")]
    UnconsciousMember(String),

    /// A data model rule was violated.
    #[error("{0}")]
    Tavern(#[from] TavernError),
}
