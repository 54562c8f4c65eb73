//! Adventure events and the event log.
//!
//! Every event carries the structured outcome it came from plus the narrated
//! text, so callers can either print the story or inspect what happened.

use tavern_mechanics::{Attack, Heal, Preparation, Rest, Side};

use crate::progression::Advancement;

/// The three stages of an encounter, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Buffs before initiative is rolled.
    Preparation,
    /// Rounds until one side is down.
    Combat,
    /// Healing and experience after a won fight.
    ShortRest,
}

impl Stage {
    /// Banner title for this stage.
    pub fn title(self) -> &'static str {
        match self {
            Self::Preparation => "Preparation stage",
            Self::Combat => "Combat stage",
            Self::ShortRest => "Short rest stage",
        }
    }
}

/// One line of the initiative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiativeSlot {
    /// Combatant name, without any Boss suffix.
    pub name: String,
    /// Rolled initiative.
    pub initiative: i32,
    /// Which side the combatant fights on.
    pub side: Side,
}

/// What kind of adventure event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// The adventure is about to begin.
    AdventureStarted {
        /// Adventure name.
        adventure: String,
    },
    /// A new encounter begins.
    EncounterStarted {
        /// Total monsters in the encounter.
        monsters: u32,
    },
    /// A stage of the current encounter begins.
    StageStarted {
        /// The stage.
        stage: Stage,
    },
    /// A party member's preparation action.
    Prepared(Preparation),
    /// Initiative was rolled for everyone still standing.
    InitiativeRolled {
        /// Merged turn order, highest first.
        order: Vec<InitiativeSlot>,
    },
    /// A combat round begins.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
    },
    /// A combatant attacked.
    Attacked(Attack),
    /// A party member healed in battle.
    Healed(Heal),
    /// A monster reached zero hit points.
    MonsterDied {
        /// Monster name.
        monster: String,
        /// True if it was a Boss.
        boss: bool,
        /// Experience it awards.
        xp: u32,
    },
    /// A party member reached zero hit points.
    MemberFell {
        /// Member name.
        member: String,
    },
    /// A combat round ended.
    RoundEnded {
        /// Round number.
        round: u32,
    },
    /// Every monster is down and the party stands.
    EnemiesDefeated {
        /// Experience earned in the encounter.
        xp: u32,
    },
    /// A party member's short-rest action.
    Rested(Rest),
    /// A party member gained experience.
    Advanced(Advancement),
    /// The whole party fell; the adventure ends here.
    PartyDefeated,
    /// Every encounter was won.
    AdventureCompleted {
        /// Adventure name.
        adventure: String,
    },
}

impl EventKind {
    /// Check whether the named combatant took part in this event.
    pub fn involves(&self, name: &str) -> bool {
        match self {
            Self::Prepared(Preparation::Unconscious { name: n })
            | Self::Prepared(Preparation::Prepared { name: n, .. })
            | Self::Rested(Rest::Unconscious { name: n })
            | Self::Rested(Rest::Idle { name: n, .. }) => n == name,
            Self::Rested(Rest::Healed { name: n, party, .. }) => {
                n == name || party.iter().any(|p| p == name)
            }
            Self::InitiativeRolled { order } => order.iter().any(|s| s.name == name),
            Self::Attacked(attack) => {
                attack.attacker == name || attack.hits.iter().any(|h| h.target == name)
            }
            Self::Healed(heal) => heal.healer == name || heal.targets.iter().any(|t| t == name),
            Self::MonsterDied { monster, .. } => monster == name,
            Self::MemberFell { member } => member == name,
            Self::Advanced(advancement) => advancement.name == name,
            Self::AdventureStarted { .. }
            | Self::EncounterStarted { .. }
            | Self::StageStarted { .. }
            | Self::RoundStarted { .. }
            | Self::RoundEnded { .. }
            | Self::EnemiesDefeated { .. }
            | Self::PartyDefeated
            | Self::AdventureCompleted { .. } => false,
        }
    }
}

/// A record of something that happened during an adventure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdventureEvent {
    /// Encounter number, starting at 1. Adventure-level events use 0.
    pub encounter: usize,
    /// The specific kind of event that occurred.
    pub kind: EventKind,
    /// The narrated text for this event.
    pub description: String,
}

impl AdventureEvent {
    /// Create a new event with the given encounter, kind, and description.
    pub fn new(encounter: usize, kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            encounter,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during an adventure run.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<AdventureEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: AdventureEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[AdventureEvent] {
        &self.events
    }

    /// Return all events of the given encounter.
    pub fn events_in_encounter(&self, encounter: usize) -> Vec<&AdventureEvent> {
        self.events
            .iter()
            .filter(|e| e.encounter == encounter)
            .collect()
    }

    /// Return all events the named combatant took part in.
    pub fn events_for(&self, name: &str) -> Vec<&AdventureEvent> {
        self.events.iter().filter(|e| e.kind.involves(name)).collect()
    }

    /// The narrated story, one description per event.
    pub fn transcript(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.description.as_str())
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
