//! Core types for Tavern: dice, party members, monsters, encounters, and adventures.
//!
//! This crate holds the data model the encounter engine runs on. Every roll
//! goes through [`RandomSource`], so the model can be driven by a seeded or a
//! scripted source without touching global state.

/// Adventures and their encounter-count rules.
pub mod adventure;
/// Party members and their transient combat state.
pub mod character;
/// The class ladder and per-class behavior tables.
pub mod class;
/// The capability set shared by party members and monsters.
pub mod combatant;
/// Dice and the randomness seam.
pub mod dice;
/// Encounters as ordered monster templates with counts.
pub mod encounter;
/// Error types used throughout the crate.
pub mod error;
/// Monster templates and instances.
pub mod monster;
/// Level formula and experience helpers.
pub mod progression;
/// Character creation rules and party fielding.
pub mod roster;
/// Stats and damage types.
pub mod stat;

/// Re-export adventure types.
pub use adventure::Adventure;
/// Re-export the party member type.
pub use character::PartyMember;
/// Re-export class types.
pub use class::{CharacterClass, ClassLine};
/// Re-export the combatant capability set.
pub use combatant::Combatant;
/// Re-export dice types.
pub use dice::{Die, RandomSource, ScriptedDice};
/// Re-export encounter types.
pub use encounter::{Encounter, EncounterEntry};
/// Re-export error types.
pub use error::{TavernError, TavernResult};
/// Re-export monster types.
pub use monster::{Challenge, Monster};
/// Re-export stat types.
pub use stat::{DamageType, Stat};
