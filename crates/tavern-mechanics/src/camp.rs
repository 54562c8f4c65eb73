//! Out-of-combat actions: preparation before a fight and the short rest after.

use tracing::debug;

use tavern_core::class::{Amount, PreparationEffect, RestEffect};
use tavern_core::{Die, PartyMember, RandomSource, Stat};

/// One stat change made during preparation, kept so it can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatChange {
    /// Party index of the member that changed.
    pub member: usize,
    /// Stat that changed.
    pub stat: Stat,
    /// Amount added.
    pub delta: i32,
}

/// Every preparation change applied to the party during one encounter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparationLedger {
    changes: Vec<StatChange>,
}

impl PreparationLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change. Zero deltas are dropped.
    pub fn record(&mut self, member: usize, stat: Stat, delta: i32) {
        if delta != 0 {
            self.changes.push(StatChange {
                member,
                stat,
                delta,
            });
        }
    }

    /// Changes in the order they were made.
    pub fn changes(&self) -> &[StatChange] {
        &self.changes
    }

    /// Undo every recorded change and empty the ledger.
    pub fn revert(&mut self, party: &mut [PartyMember]) {
        for change in self.changes.drain(..).rev() {
            party[change.member].decrease_stat(change.stat, change.delta);
        }
    }
}

/// What one member did in the preparation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preparation {
    /// The member was unconscious and did nothing.
    Unconscious {
        /// Member name.
        name: String,
    },
    /// The member used its preparation action.
    Prepared {
        /// Member name.
        name: String,
        /// Action name.
        action: &'static str,
        /// Effect phrase.
        effect: &'static str,
        /// The value narrated after the effect phrase.
        value: i32,
    },
}

/// Run the preparation stage over the whole party in order.
///
/// Each conscious member performs its action. The action's broadcast value
/// is then added to every conscious member, the actor included, whether or
/// not the action is marked as self-only. Self-only actions broadcast zero,
/// so only party-wide buffs spread. Every change lands in `ledger`.
pub fn prepare_party<R: RandomSource + ?Sized>(
    party: &mut [PartyMember],
    ledger: &mut PreparationLedger,
    rng: &mut R,
) -> Vec<Preparation> {
    let mut results = Vec::with_capacity(party.len());
    for actor in 0..party.len() {
        if party[actor].is_unconscious() {
            results.push(Preparation::Unconscious {
                name: party[actor].name.clone(),
            });
            continue;
        }

        let profile = party[actor].class.preparation();
        let value = match profile.kind {
            PreparationEffect::SelfBoost(amount) => {
                party[actor].increase_stat(profile.stat, amount);
                ledger.record(actor, profile.stat, amount);
                amount
            }
            PreparationEffect::ShieldRecharge => {
                let member = &mut party[actor];
                let shield = (Die::D6.roll(rng) + member.mind) * member.level() as i32;
                let shield = shield.max(0);
                let delta = shield - member.shield;
                member.increase_stat(Stat::Shield, delta);
                ledger.record(actor, Stat::Shield, delta);
                shield
            }
            PreparationEffect::PartyBoost(amount) => roll_amount(amount, rng),
        };

        let broadcast = match profile.broadcast() {
            Amount::Fixed(n) => n,
            Amount::Roll(_) => value,
        };
        if broadcast != 0 {
            for (id, member) in party.iter_mut().enumerate() {
                if !member.is_unconscious() {
                    member.increase_stat(profile.stat, broadcast);
                    ledger.record(id, profile.stat, broadcast);
                }
            }
        }

        debug!(
            member = %party[actor].name,
            action = profile.name,
            value,
            self_only = profile.is_self_action(),
            "preparation"
        );
        results.push(Preparation::Prepared {
            name: party[actor].name.clone(),
            action: profile.name,
            effect: profile.effect,
            value,
        });
    }
    results
}

fn roll_amount<R: RandomSource + ?Sized>(amount: Amount, rng: &mut R) -> i32 {
    match amount {
        Amount::Fixed(n) => n,
        Amount::Roll(die) => die.roll(rng),
    }
}

/// What one member did in the short-rest stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rest {
    /// The member was unconscious and did nothing.
    Unconscious {
        /// Member name.
        name: String,
    },
    /// The member's action has no effect.
    Idle {
        /// Member name.
        name: String,
        /// What the member is doing.
        action: &'static str,
    },
    /// The member healed itself or the party.
    Healed {
        /// Member name.
        name: String,
        /// Action name.
        action: &'static str,
        /// HP restored to the actor, or the rolled amount for a party heal.
        amount: i32,
        /// Every party member for a party heal, empty otherwise.
        party: Vec<String>,
    },
}

/// Run the short-rest stage over the whole party in order.
///
/// A party heal reaches every member, unconscious ones included, which
/// brings them back on their feet.
pub fn rest_party<R: RandomSource + ?Sized>(party: &mut [PartyMember], rng: &mut R) -> Vec<Rest> {
    let mut results = Vec::with_capacity(party.len());
    for actor in 0..party.len() {
        let name = party[actor].name.clone();
        if party[actor].is_unconscious() {
            results.push(Rest::Unconscious { name });
            continue;
        }

        let profile = party[actor].class.short_rest();
        let result = match profile.kind {
            RestEffect::Idle => Rest::Idle {
                name,
                action: profile.name,
            },
            RestEffect::HealSelf { die, modifier } => {
                let member = &mut party[actor];
                let amount = die.roll(rng) + member.stat(modifier);
                let restored = member.heal(amount);
                Rest::Healed {
                    name,
                    action: profile.name,
                    amount: restored,
                    party: Vec::new(),
                }
            }
            RestEffect::FullHealSelf => {
                let member = &mut party[actor];
                let restored = member.heal(member.max_hp);
                Rest::Healed {
                    name,
                    action: profile.name,
                    amount: restored,
                    party: Vec::new(),
                }
            }
            RestEffect::HealParty { die, modifier } => {
                let amount = die.roll(rng) + party[actor].stat(modifier);
                for member in party.iter_mut() {
                    member.heal(amount);
                }
                Rest::Healed {
                    name,
                    action: profile.name,
                    amount,
                    party: party.iter().map(|m| m.name.clone()).collect(),
                }
            }
        };
        debug!(member = %party[actor].name, action = profile.name, "short rest");
        results.push(result);
    }
    results
}
