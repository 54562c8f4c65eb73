//! The adventure orchestrator.
//!
//! Plays every encounter of an adventure in order with one party. The party
//! is handed back for saving only when the last encounter is won; a total
//! party defeat ends the run on the spot and forfeits it.

use std::collections::HashSet;

use tracing::{info, warn};

use tavern_core::{Adventure, PartyMember, RandomSource};
use tavern_mechanics::SeededDice;

use crate::config::EngineConfig;
use crate::context::EncounterContext;
use crate::encounter::{EncounterOutcome, run_encounter};
use crate::error::{EngineError, EngineResult};
use crate::event::{AdventureEvent, EventKind, EventLog};
use crate::narration;

/// How an adventure ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdventureOutcome {
    /// Every encounter was won.
    Completed {
        /// The party as it should be saved.
        party: Vec<PartyMember>,
    },
    /// The party fell during this encounter. Nothing is to be saved.
    Aborted {
        /// Encounter number, starting at 1.
        encounter: usize,
    },
}

impl AdventureOutcome {
    /// True when every encounter was won.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// The result of a finished run.
#[derive(Debug, Clone)]
pub struct AdventureReport {
    /// How the adventure ended.
    pub outcome: AdventureOutcome,
    /// Everything that happened, in order.
    pub events: EventLog,
}

/// One party setting out on one adventure.
///
/// Owns the party, the dice, and the event log for the length of the run.
pub struct AdventureRun<R = SeededDice> {
    adventure: Adventure,
    party: Vec<PartyMember>,
    rng: R,
    events: EventLog,
}

impl<R> std::fmt::Debug for AdventureRun<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdventureRun")
            .field("adventure", &self.adventure.name())
            .field("party", &self.party.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl AdventureRun<SeededDice> {
    /// Prepare a run rolling with dice seeded from `config`.
    pub fn new(
        adventure: Adventure,
        party: Vec<PartyMember>,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        Self::with_dice(adventure, party, config, SeededDice::new(config.seed))
    }
}

impl<R: RandomSource> AdventureRun<R> {
    /// Prepare a run rolling with `rng`.
    ///
    /// The party must fit the configured size and name each character once.
    /// Every member is evolved to the class of its level and healed to the
    /// full hit points of that class; a member whose maximum is still zero
    /// is rejected.
    pub fn with_dice(
        adventure: Adventure,
        mut party: Vec<PartyMember>,
        config: &EngineConfig,
        rng: R,
    ) -> EngineResult<Self> {
        let (min, max) = (config.min_party_size, config.max_party_size);
        if !(min..=max).contains(&party.len()) {
            return Err(EngineError::PartySize {
                got: party.len(),
                min,
                max,
            });
        }

        let mut seen = HashSet::new();
        for slot in party.iter_mut() {
            if !seen.insert(slot.name.to_lowercase()) {
                return Err(EngineError::DuplicateMember(slot.name.clone()));
            }
            if slot.can_evolve() {
                *slot = slot.clone().evolve();
            }
            slot.set_up_hp_for_adventure();
            if slot.is_unconscious() {
                return Err(EngineError::UnconsciousMember(slot.name.clone()));
            }
        }

        Ok(Self {
            adventure,
            party,
            rng,
            events: EventLog::new(config.max_events),
        })
    }

    /// The adventure being played.
    pub fn adventure(&self) -> &Adventure {
        &self.adventure
    }

    /// The party in its current state.
    pub fn party(&self) -> &[PartyMember] {
        &self.party
    }

    /// Play every encounter until the adventure is won or the party falls.
    pub fn run(mut self) -> AdventureReport {
        let name = self.adventure.name().to_string();
        info!(adventure = %name, party = self.party.len(), "adventure started");
        self.events.push(AdventureEvent::new(
            0,
            EventKind::AdventureStarted {
                adventure: name.clone(),
            },
            narration::adventure_start(&name),
        ));

        for (index, encounter) in self.adventure.encounters().iter().enumerate() {
            let number = index + 1;
            let mut ctx = EncounterContext {
                number,
                party: self.party.as_mut_slice(),
                events: &mut self.events,
                rng: &mut self.rng,
            };
            if run_encounter(&mut ctx, encounter) == EncounterOutcome::PartyDefeated {
                warn!(adventure = %name, encounter = number, "party defeated, adventure aborted");
                ctx.emit(EventKind::PartyDefeated, narration::PARTY_DEFEATED);
                return AdventureReport {
                    outcome: AdventureOutcome::Aborted { encounter: number },
                    events: self.events,
                };
            }
        }

        info!(adventure = %name, "adventure completed");
        self.events.push(AdventureEvent::new(
            0,
            EventKind::AdventureCompleted {
                adventure: name.clone(),
            },
            narration::adventure_completed(&name),
        ));
        AdventureReport {
            outcome: AdventureOutcome::Completed { party: self.party },
            events: self.events,
        }
    }
}
