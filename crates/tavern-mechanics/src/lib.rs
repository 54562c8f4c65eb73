//! Encounter mechanics for Tavern.
//!
//! Provides initiative scheduling, per-turn action resolution, casualty
//! pruning with safe cursor adjustment, the preparation and short-rest
//! actions, and a seeded dice source.

pub mod camp;
pub mod casualty;
pub mod initiative;
pub mod resolver;
pub mod rng;

pub use camp::{Preparation, PreparationLedger, Rest, StatChange};
pub use initiative::{RoundCursor, Side, Turn};
pub use resolver::{Attack, AttackRoll, Heal, Hit, TurnOutcome};
pub use rng::SeededDice;
