//! Adventures: a named, ordered list of encounters.

use serde::{Deserialize, Serialize};

use crate::encounter::Encounter;
use crate::error::{TavernError, TavernResult};

/// Fewest encounters an adventure may have.
pub const MIN_ENCOUNTERS: usize = 1;
/// Most encounters an adventure may have.
pub const MAX_ENCOUNTERS: usize = 4;

/// A playable adventure template.
///
/// The party is not part of the template; it is assigned when the adventure
/// is played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AdventureRecord", into = "AdventureRecord")]
pub struct Adventure {
    name: String,
    encounters: Vec<Encounter>,
}

/// The stored shape of an adventure, before the count is cross-checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdventureRecord {
    /// Adventure name.
    pub name: String,
    /// Declared number of encounters.
    pub number_encounters: usize,
    /// Encounters in play order.
    pub encounters: Vec<Encounter>,
}

impl Adventure {
    /// Build an adventure, checking the encounter count and that no encounter is empty.
    pub fn new(name: impl Into<String>, encounters: Vec<Encounter>) -> TavernResult<Self> {
        check_encounter_count(encounters.len())?;
        for encounter in &encounters {
            encounter.validate()?;
        }
        Ok(Self {
            name: name.into(),
            encounters,
        })
    }

    /// Adventure name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encounters in play order.
    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }
}

/// Check a planned number of encounters before authoring them.
pub fn check_encounter_count(count: usize) -> TavernResult<()> {
    if !(MIN_ENCOUNTERS..=MAX_ENCOUNTERS).contains(&count) {
        return Err(TavernError::InvalidEncounterCount {
            got: count,
            min: MIN_ENCOUNTERS,
            max: MAX_ENCOUNTERS,
        });
    }
    Ok(())
}

/// Reject `name` if an adventure in `existing` already uses it.
pub fn check_unique_name(existing: &[Adventure], name: &str) -> TavernResult<()> {
    if existing.iter().any(|a| a.name == name) {
        return Err(TavernError::DuplicateAdventure(name.to_string()));
    }
    Ok(())
}

impl TryFrom<AdventureRecord> for Adventure {
    type Error = TavernError;

    fn try_from(record: AdventureRecord) -> Result<Self, Self::Error> {
        if record.number_encounters != record.encounters.len() {
            return Err(TavernError::EncounterCountMismatch {
                name: record.name,
                declared: record.number_encounters,
                actual: record.encounters.len(),
            });
        }
        Self::new(record.name, record.encounters)
    }
}

impl From<Adventure> for AdventureRecord {
    fn from(adventure: Adventure) -> Self {
        Self {
            number_encounters: adventure.encounters.len(),
            name: adventure.name,
            encounters: adventure.encounters,
        }
    }
}
