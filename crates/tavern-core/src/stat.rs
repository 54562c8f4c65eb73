//! Character stats and damage types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TavernError;

/// A stat a preparation or short-rest action can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Physical strength; scales HP and melee damage.
    Body,
    /// Intellect; scales healing and arcane damage.
    Mind,
    /// Willpower; scales initiative and divine damage.
    Spirit,
    /// Mage-only damage buffer drained before HP.
    Shield,
    /// Current hit points.
    HitPoints,
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body => write!(f, "Body"),
            Self::Mind => write!(f, "Mind"),
            Self::Spirit => write!(f, "Spirit"),
            Self::Shield => write!(f, "Shield"),
            Self::HitPoints => write!(f, "hit points"),
        }
    }
}

/// The kind of damage an attack deals.
///
/// Resistance and passive mitigation only apply when the attack's type
/// matches the defender's own type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    /// Blades, claws, and fists.
    Physical,
    /// Arcane energy.
    Magical,
    /// Attacks on the mind.
    Psychical,
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Physical => write!(f, "physical"),
            Self::Magical => write!(f, "magical"),
            Self::Psychical => write!(f, "psychical"),
        }
    }
}

impl std::str::FromStr for DamageType {
    type Err = TavernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physical" => Ok(Self::Physical),
            "magical" => Ok(Self::Magical),
            "psychical" => Ok(Self::Psychical),
            _ => Err(TavernError::UnknownDamageType(s.to_string())),
        }
    }
}
