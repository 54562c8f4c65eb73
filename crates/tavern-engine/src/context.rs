use tavern_core::{PartyMember, RandomSource};

use crate::event::{AdventureEvent, EventKind, EventLog};

/// Mutable state borrowed by one encounter while it runs.
pub struct EncounterContext<'a> {
    /// Encounter number within the adventure, starting at 1.
    pub number: usize,
    /// The whole adventure party, conscious or not.
    pub party: &'a mut [PartyMember],
    /// Where narrated events go.
    pub events: &'a mut EventLog,
    /// The single source of every roll.
    pub rng: &'a mut dyn RandomSource,
}

impl EncounterContext<'_> {
    /// Emit an event for the current encounter.
    pub fn emit(&mut self, kind: EventKind, description: impl Into<String>) {
        self.events
            .push(AdventureEvent::new(self.number, kind, description));
    }
}
