//! Action resolution for one combat turn.
//!
//! Every function here rolls through the injected [`RandomSource`], applies
//! its effect to the combatants, and returns an immutable outcome that the
//! narration layer formats. Nothing about a roll is left behind on the
//! combatants themselves.

use tracing::debug;

use tavern_core::class::{HealScope, Targeting};
use tavern_core::{DamageType, Die, Monster, PartyMember, RandomSource};

use crate::rng::pick_index;

/// Die rolled to confirm every attack.
pub const CONFIRMATION_DIE: Die = Die::D10;

/// How the confirmation die landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRoll {
    /// A natural 1. No damage is rolled.
    Miss,
    /// Anything from 2 to 9.
    Hit,
    /// A natural 10. Damage is doubled after mitigation.
    Critical,
}

impl AttackRoll {
    /// Classify a confirmation roll.
    pub fn from_confirmation(value: i32) -> Self {
        match value {
            1 => Self::Miss,
            10 => Self::Critical,
            _ => Self::Hit,
        }
    }

    /// Roll the confirmation die.
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::from_confirmation(CONFIRMATION_DIE.roll(rng))
    }

    /// Factor applied to mitigated damage.
    pub fn multiplier(self) -> i32 {
        match self {
            Self::Miss => 0,
            Self::Hit => 1,
            Self::Critical => 2,
        }
    }
}

/// Damage dealt to one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Target name.
    pub target: String,
    /// True if the target is a Boss.
    pub boss: bool,
    /// Damage actually applied after mitigation.
    pub damage: i32,
}

/// The outcome of an attack by either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    /// Attacker name.
    pub attacker: String,
    /// True if the attacker is a Boss.
    pub boss: bool,
    /// Action name; monsters attack without one.
    pub action: Option<&'static str>,
    /// Confirmation result.
    pub roll: AttackRoll,
    /// Damage type dealt.
    pub damage_type: DamageType,
    /// True when every opposing combatant was targeted.
    pub area: bool,
    /// The number narrated: applied damage for a single target, the
    /// unmitigated amount for an area attack.
    pub reported: i32,
    /// Targets in list order.
    pub hits: Vec<Hit>,
}

/// The outcome of an in-battle heal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heal {
    /// Healer name.
    pub healer: String,
    /// Action name.
    pub action: &'static str,
    /// The number narrated: restored HP for a single ally, the rolled
    /// amount for a party heal.
    pub amount: i32,
    /// Names of the healed allies.
    pub targets: Vec<String>,
    /// True for a party-wide heal.
    pub party: bool,
}

/// What a character did on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// An attack on the monsters.
    Attack(Attack),
    /// A heal on the party.
    Heal(Heal),
}

fn mitigated(roll: AttackRoll, base: i32, mitigate: impl FnOnce(i32) -> i32) -> i32 {
    match roll {
        AttackRoll::Miss => 0,
        _ => mitigate(base) * roll.multiplier(),
    }
}

/// Resolve the turn of party member `actor`.
///
/// `active` lists the party indices still standing. A healer heals instead
/// of attacking when any of them is below half HP.
///
/// # Panics
///
/// Panics if `monsters` is empty.
pub fn character_turn<R: RandomSource + ?Sized>(
    party: &mut [PartyMember],
    active: &[usize],
    actor: usize,
    monsters: &mut [Monster],
    rng: &mut R,
) -> TurnOutcome {
    assert!(!monsters.is_empty(), "character turn with no monsters left");

    let needs_healing = active.iter().any(|&id| party[id].is_below_half_hp());
    if let Some(heal) = party[actor].class.battle_heal().filter(|_| needs_healing) {
        let amount = heal.die.roll(rng) + party[actor].stat(heal.modifier);
        let healer = party[actor].name.clone();
        let outcome = match heal.scope {
            HealScope::Party => {
                for &id in active {
                    party[id].heal(amount);
                }
                Heal {
                    healer,
                    action: heal.name,
                    amount,
                    targets: active.iter().map(|&id| party[id].name.clone()).collect(),
                    party: true,
                }
            }
            HealScope::LowestAlly => {
                let target = lowest_hp_ally(party, active);
                let restored = party[target].heal(amount);
                Heal {
                    healer,
                    action: heal.name,
                    amount: restored,
                    targets: vec![party[target].name.clone()],
                    party: false,
                }
            }
        };
        debug!(healer = %outcome.healer, amount = outcome.amount, "heal resolved");
        return TurnOutcome::Heal(outcome);
    }

    TurnOutcome::Attack(character_attack(&party[actor], monsters, rng))
}

fn lowest_hp_ally(party: &[PartyMember], active: &[usize]) -> usize {
    let mut best = active[0];
    for &id in &active[1..] {
        if party[id].current_hp < party[best].current_hp {
            best = id;
        }
    }
    best
}

fn lowest_hp_monster(monsters: &[Monster]) -> usize {
    let mut best = 0;
    for (k, monster) in monsters.iter().enumerate().skip(1) {
        if monster.hit_points < monsters[best].hit_points {
            best = k;
        }
    }
    best
}

fn highest_hp_monster(monsters: &[Monster]) -> usize {
    let mut best = 0;
    for (k, monster) in monsters.iter().enumerate().skip(1) {
        if monster.hit_points > monsters[best].hit_points {
            best = k;
        }
    }
    best
}

/// Resolve an attack by `attacker` on the monster list.
///
/// Single targets are picked before any dice are rolled. Resistance applies
/// per target and a critical doubles the resisted amount.
pub fn character_attack<R: RandomSource + ?Sized>(
    attacker: &PartyMember,
    monsters: &mut [Monster],
    rng: &mut R,
) -> Attack {
    let strike = attacker.class.strike(monsters.len());
    let kind = attacker.damage_type();

    let target = match strike.targeting {
        Targeting::Area => None,
        Targeting::LowestHp => Some(lowest_hp_monster(monsters)),
        Targeting::HighestHp => Some(highest_hp_monster(monsters)),
        Targeting::Random => Some(pick_index(rng, monsters.len())),
    };

    let roll = AttackRoll::roll(rng);
    let base = match roll {
        AttackRoll::Miss => 0,
        _ => (strike.die.roll(rng) + attacker.stat(strike.modifier)).max(0),
    };

    let (hits, reported) = match target {
        None => {
            let hits = monsters
                .iter_mut()
                .map(|monster| {
                    let damage = mitigated(roll, base, |b| monster.resist(b, kind));
                    monster.take_damage(damage);
                    Hit {
                        target: monster.name.clone(),
                        boss: monster.is_boss(),
                        damage,
                    }
                })
                .collect();
            (hits, base * roll.multiplier())
        }
        Some(k) => {
            let monster = &mut monsters[k];
            let damage = mitigated(roll, base, |b| monster.resist(b, kind));
            monster.take_damage(damage);
            let hit = Hit {
                target: monster.name.clone(),
                boss: monster.is_boss(),
                damage,
            };
            (vec![hit], damage)
        }
    };

    debug!(
        attacker = %attacker.name,
        action = strike.name,
        ?roll,
        damage = reported,
        "character attack resolved"
    );

    Attack {
        attacker: attacker.name.clone(),
        boss: false,
        action: Some(strike.name),
        roll,
        damage_type: kind,
        area: target.is_none(),
        reported,
        hits,
    }
}

/// Resolve a monster's attack on the active party.
///
/// The confirmation and damage dice are rolled before a single target is
/// picked. Bosses hit every active member.
///
/// # Panics
///
/// Panics if `active` is empty.
pub fn monster_turn<R: RandomSource + ?Sized>(
    monster: &Monster,
    party: &mut [PartyMember],
    active: &[usize],
    rng: &mut R,
) -> Attack {
    assert!(!active.is_empty(), "monster turn with no party members left");

    let roll = AttackRoll::roll(rng);
    let base = match roll {
        AttackRoll::Miss => 0,
        _ => monster.damage_dice.roll(rng),
    };
    let kind = monster.damage_type;

    let targets: Vec<usize> = if monster.is_area_attack() {
        active.to_vec()
    } else {
        vec![active[pick_index(rng, active.len())]]
    };

    let hits: Vec<Hit> = targets
        .iter()
        .map(|&id| {
            let member = &mut party[id];
            let damage = mitigated(roll, base, |b| member.mitigate(b, kind));
            member.take_damage(damage);
            Hit {
                target: member.name.clone(),
                boss: false,
                damage,
            }
        })
        .collect();

    let area = monster.is_area_attack();
    let reported = if area {
        base * roll.multiplier()
    } else {
        hits[0].damage
    };

    debug!(
        monster = %monster.name,
        ?roll,
        damage = reported,
        targets = hits.len(),
        "monster attack resolved"
    );

    Attack {
        attacker: monster.name.clone(),
        boss: monster.is_boss(),
        action: None,
        roll,
        damage_type: kind,
        area,
        reported,
        hits,
    }
}
