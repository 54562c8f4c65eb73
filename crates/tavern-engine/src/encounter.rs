//! The encounter state machine: preparation, combat, short rest.
//!
//! Stages run strictly in that order. Preparation buffs last for the fight
//! only and are undone before anything else happens afterwards. A party that
//! falls entirely never reaches the short rest.

use tracing::{debug, info};

use tavern_core::{Encounter, Monster};
use tavern_mechanics::camp::{prepare_party, rest_party};
use tavern_mechanics::casualty::{prune_monsters, prune_party};
use tavern_mechanics::initiative::{merge, roll_all, sort_by_initiative, sort_ids_by_initiative};
use tavern_mechanics::resolver::{character_turn, monster_turn};
use tavern_mechanics::{PreparationLedger, RoundCursor, Side, TurnOutcome};

use crate::context::EncounterContext;
use crate::event::{EventKind, InitiativeSlot, Stage};
use crate::narration;
use crate::progression::grant_experience;

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// Every monster fell and at least one member stands.
    Won {
        /// Experience earned from the kills.
        xp: u32,
    },
    /// Every party member fell.
    PartyDefeated,
}

/// The live lists of one fight.
#[derive(Debug)]
struct Battle {
    /// Party indices still standing, in initiative order.
    active: Vec<usize>,
    /// Monsters still alive, in initiative order.
    monsters: Vec<Monster>,
    /// Experience from monsters killed so far.
    xp: u32,
}

/// Play one encounter against the party in `ctx`.
pub fn run_encounter(ctx: &mut EncounterContext<'_>, encounter: &Encounter) -> EncounterOutcome {
    info!(
        encounter = ctx.number,
        monsters = encounter.monster_count(),
        "encounter started"
    );
    ctx.emit(
        EventKind::EncounterStarted {
            monsters: encounter.monster_count(),
        },
        narration::encounter_header(ctx.number, encounter),
    );

    let mut ledger = PreparationLedger::new();
    prepare(ctx, &mut ledger);
    let mut battle = roll_initiative(ctx, encounter);
    fight(ctx, &mut battle);
    ledger.revert(ctx.party);

    if battle.active.is_empty() {
        info!(encounter = ctx.number, "party defeated");
        return EncounterOutcome::PartyDefeated;
    }

    short_rest(ctx, battle.xp);
    info!(encounter = ctx.number, xp = battle.xp, "encounter won");
    EncounterOutcome::Won { xp: battle.xp }
}

fn prepare(ctx: &mut EncounterContext<'_>, ledger: &mut PreparationLedger) {
    ctx.emit(
        EventKind::StageStarted {
            stage: Stage::Preparation,
        },
        narration::stage_banner(Stage::Preparation),
    );
    for result in prepare_party(ctx.party, ledger, &mut *ctx.rng) {
        let text = narration::preparation(&result);
        ctx.emit(EventKind::Prepared(result), text);
    }
}

fn roll_initiative(ctx: &mut EncounterContext<'_>, encounter: &Encounter) -> Battle {
    let mut active: Vec<usize> = (0..ctx.party.len())
        .filter(|&id| !ctx.party[id].is_unconscious())
        .collect();
    for &id in &active {
        ctx.party[id].roll_initiative(&mut *ctx.rng);
    }
    let mut monsters = encounter.expand();
    roll_all(&mut monsters, &mut ctx.rng);

    sort_ids_by_initiative(ctx.party, &mut active);
    sort_by_initiative(&mut monsters);

    let party_inits: Vec<i32> = active.iter().map(|&id| ctx.party[id].initiative).collect();
    let monster_inits: Vec<i32> = monsters.iter().map(|m| m.initiative).collect();
    let order: Vec<InitiativeSlot> = merge(&party_inits, &monster_inits)
        .into_iter()
        .map(|turn| match turn.side {
            Side::Party => {
                let member = &ctx.party[active[turn.position]];
                InitiativeSlot {
                    name: member.name.clone(),
                    initiative: member.initiative,
                    side: Side::Party,
                }
            }
            Side::Monsters => {
                let monster = &monsters[turn.position];
                InitiativeSlot {
                    name: monster.name.clone(),
                    initiative: monster.initiative,
                    side: Side::Monsters,
                }
            }
        })
        .collect();

    let text = narration::initiative(&order);
    ctx.emit(EventKind::InitiativeRolled { order }, text);

    Battle {
        active,
        monsters,
        xp: 0,
    }
}

fn fight(ctx: &mut EncounterContext<'_>, battle: &mut Battle) {
    ctx.emit(
        EventKind::StageStarted {
            stage: Stage::Combat,
        },
        narration::stage_banner(Stage::Combat),
    );

    let mut round = 1;
    while !battle.active.is_empty() && !battle.monsters.is_empty() {
        debug!(encounter = ctx.number, round, "round started");
        let text = narration::round_start(round, ctx.party);
        ctx.emit(EventKind::RoundStarted { round }, text);

        let mut cursor = RoundCursor::new();
        loop {
            let party_inits: Vec<i32> = battle
                .active
                .iter()
                .map(|&id| ctx.party[id].initiative)
                .collect();
            let monster_inits: Vec<i32> = battle.monsters.iter().map(|m| m.initiative).collect();
            let Some(side) = cursor.next(&party_inits, &monster_inits) else {
                break;
            };

            let position = cursor.position(side);
            cursor.advance(side);
            match side {
                Side::Party => {
                    let actor = battle.active[position];
                    let outcome = character_turn(
                        ctx.party,
                        &battle.active,
                        actor,
                        &mut battle.monsters,
                        &mut *ctx.rng,
                    );
                    match outcome {
                        TurnOutcome::Attack(attack) => {
                            let text = narration::attack(&attack);
                            ctx.emit(EventKind::Attacked(attack), text);
                        }
                        TurnOutcome::Heal(heal) => {
                            let text = narration::heal(&heal);
                            ctx.emit(EventKind::Healed(heal), text);
                        }
                    }
                    for dead in prune_monsters(&mut battle.monsters, &mut cursor) {
                        battle.xp += dead.experience;
                        ctx.emit(
                            EventKind::MonsterDied {
                                monster: dead.name.clone(),
                                boss: dead.is_boss(),
                                xp: dead.experience,
                            },
                            narration::monster_died(&dead.name, dead.is_boss()),
                        );
                    }
                }
                Side::Monsters => {
                    let attack = monster_turn(
                        &battle.monsters[position],
                        ctx.party,
                        &battle.active,
                        &mut *ctx.rng,
                    );
                    let text = narration::attack(&attack);
                    ctx.emit(EventKind::Attacked(attack), text);
                    for id in prune_party(ctx.party, &mut battle.active, &mut cursor) {
                        let member = ctx.party[id].name.clone();
                        let text = narration::member_fell(&member);
                        ctx.emit(EventKind::MemberFell { member }, text);
                    }
                }
            }
        }

        ctx.emit(EventKind::RoundEnded { round }, narration::round_end(round));
        round += 1;
    }

    if !battle.active.is_empty() {
        ctx.emit(
            EventKind::EnemiesDefeated { xp: battle.xp },
            narration::ENEMIES_DEFEATED,
        );
    }
}

fn short_rest(ctx: &mut EncounterContext<'_>, xp: u32) {
    ctx.emit(
        EventKind::StageStarted {
            stage: Stage::ShortRest,
        },
        narration::stage_banner(Stage::ShortRest),
    );
    for result in rest_party(ctx.party, &mut *ctx.rng) {
        let text = narration::rest(&result);
        ctx.emit(EventKind::Rested(result), text);
    }
    for advancement in grant_experience(ctx.party, xp) {
        let text = narration::advancement(&advancement);
        ctx.emit(EventKind::Advanced(advancement), text);
    }
}
