//! Encounters: ordered monster templates with counts.

use serde::{Deserialize, Serialize};

use crate::error::{TavernError, TavernResult};
use crate::monster::Monster;

/// One template in an encounter and how many copies of it appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterEntry {
    /// The monster template.
    pub monster: Monster,
    /// Number of copies. Always positive.
    pub value: u32,
}

/// An ordered mapping from monster template to count.
///
/// Insertion order drives the order monsters are expanded in, and therefore
/// the order of ties in initiative. At most one entry is a Boss and that
/// entry has a count of one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EncounterEntry>", into = "Vec<EncounterEntry>")]
pub struct Encounter {
    entries: Vec<EncounterEntry>,
}

impl Encounter {
    /// Create an empty encounter, to be filled with [`add`](Self::add).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of a template.
    ///
    /// A template already present (same name) has its count raised instead of
    /// getting a second entry.
    pub fn add(&mut self, monster: Monster, count: u32) -> TavernResult<()> {
        if count == 0 {
            return Err(TavernError::InvalidMonsterCount(monster.name));
        }
        if monster.is_boss() {
            if count > 1 {
                return Err(TavernError::BossesToAddExceeded);
            }
            if self.has_boss() {
                return Err(TavernError::BossAmountExceeded);
            }
        }
        match self.entries.iter_mut().find(|e| e.monster == monster) {
            Some(entry) => entry.value += count,
            None => self.entries.push(EncounterEntry {
                monster,
                value: count,
            }),
        }
        Ok(())
    }

    /// Remove the entry at `index` (0-based) and return it.
    pub fn remove(&mut self, index: usize) -> TavernResult<EncounterEntry> {
        if index >= self.entries.len() {
            return Err(TavernError::InvalidEntry(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[EncounterEntry] {
        &self.entries
    }

    /// True if no monsters have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if any entry is a Boss.
    pub fn has_boss(&self) -> bool {
        self.entries.iter().any(|e| e.monster.is_boss())
    }

    /// Total number of monsters across all entries.
    pub fn monster_count(&self) -> u32 {
        self.entries.iter().map(|e| e.value).sum()
    }

    /// Check that the encounter can be played.
    pub fn validate(&self) -> TavernResult<()> {
        if self.is_empty() {
            return Err(TavernError::EmptyEncounter);
        }
        Ok(())
    }

    /// Fresh, independent monster instances in entry order.
    pub fn expand(&self) -> Vec<Monster> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat_n(&e.monster, e.value as usize))
            .cloned()
            .collect()
    }
}

impl TryFrom<Vec<EncounterEntry>> for Encounter {
    type Error = TavernError;

    fn try_from(entries: Vec<EncounterEntry>) -> Result<Self, Self::Error> {
        let mut encounter = Self::new();
        for entry in entries {
            encounter.add(entry.monster, entry.value)?;
        }
        encounter.validate()?;
        Ok(encounter)
    }
}

impl From<Encounter> for Vec<EncounterEntry> {
    fn from(encounter: Encounter) -> Self {
        encounter.entries
    }
}
