//! The narrated text for every adventure event.
//!
//! The wording here is what players read, so it is tested line by line.
//! Combat lines end in a newline; everything else leaves line breaks to the
//! printer.

use std::fmt::Write;

use tavern_core::{Encounter, PartyMember};
use tavern_mechanics::{Attack, AttackRoll, Heal, Preparation, Rest};

use crate::event::{InitiativeSlot, Stage};
use crate::progression::Advancement;

const HEADER_RULE: &str = "---------------------";

/// Told when the whole party has fallen.
pub const PARTY_DEFEATED: &str = "Tavern keeper: “Lad, wake up. Yes, your party fell unconscious.”\n\
                                  “Don’t worry, you are safe back at the Tavern.”";

/// Told when the last monster of an encounter falls.
pub const ENEMIES_DEFEATED: &str = "All enemies are defeated.";

/// Join names as `A`, `A and B`, or `A, B and C`.
pub fn list_names<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push_str(if i + 1 == names.len() { " and " } else { ", " });
        }
        out.push_str(name.as_ref());
    }
    out
}

fn with_boss_suffix(name: &str, boss: bool) -> String {
    if boss {
        format!("{name} (Boss)")
    } else {
        name.to_string()
    }
}

/// Opening line of an adventure.
pub fn adventure_start(adventure: &str) -> String {
    format!("The “{adventure}” will start soon...")
}

/// Closing line of a completed adventure.
pub fn adventure_completed(adventure: &str) -> String {
    format!("Congratulations, your party completed “{adventure}”")
}

/// The monster roster of an encounter between two rules.
pub fn encounter_header(number: usize, encounter: &Encounter) -> String {
    let mut out = format!("{HEADER_RULE}\nStarting Encounter {number}:\n");
    for entry in encounter.entries() {
        let _ = writeln!(out, "  - {}x {}", entry.value, entry.monster.display_name());
    }
    out.push_str(HEADER_RULE);
    out
}

/// A stage title framed by dashes of the same width.
pub fn stage_banner(stage: Stage) -> String {
    let title = format!("*** {} ***", stage.title());
    let rule = "-".repeat(title.chars().count());
    format!("{rule}\n{title}\n{rule}")
}

/// One member's preparation.
pub fn preparation(result: &Preparation) -> String {
    match result {
        Preparation::Unconscious { name } => format!("{name} is unconscious."),
        Preparation::Prepared {
            name,
            action,
            effect,
            value,
        } => {
            let sign = if *value >= 0 { "+" } else { "" };
            format!("{name} uses {action}. {effect} {sign}{value}.")
        }
    }
}

/// The merged initiative order.
pub fn initiative(order: &[InitiativeSlot]) -> String {
    let mut out = String::from("Rolling initiative...");
    for slot in order {
        let _ = write!(out, "\n  - {:<5} {}", slot.initiative, slot.name);
    }
    out
}

/// Round heading with the hit points of the whole party.
pub fn round_start(round: u32, party: &[PartyMember]) -> String {
    let width = party.iter().map(|m| m.name.chars().count()).max().unwrap_or(0) + 4;
    let mut out = format!("Round {round}:\nParty:\n");
    for member in party {
        let _ = writeln!(
            out,
            "  - {:<width$} {} / {} hit points",
            member.name, member.current_hp, member.max_hp
        );
    }
    out
}

/// Closing line of a round.
pub fn round_end(round: u32) -> String {
    format!("End of round {round}.")
}

/// An attack by either side.
///
/// Characters name their action, monsters do not. A single monster target
/// is named plainly; an area attack lists every monster with its Boss tag.
pub fn attack(attack: &Attack) -> String {
    let targets = if attack.area {
        let names: Vec<String> = attack
            .hits
            .iter()
            .map(|h| with_boss_suffix(&h.target, h.boss))
            .collect();
        list_names(&names)
    } else {
        attack
            .hits
            .first()
            .map(|h| h.target.clone())
            .unwrap_or_default()
    };

    let mut out = match attack.action {
        Some(action) => format!("{} attacks {targets} with {action}.\n", attack.attacker),
        None => format!(
            "{} attacks {targets}\n",
            with_boss_suffix(&attack.attacker, attack.boss)
        ),
    };

    match attack.roll {
        AttackRoll::Miss => out.push_str("Fails and deals 0 physical damage.\n"),
        AttackRoll::Critical => {
            let _ = writeln!(
                out,
                "Critical hit and deals {} {} damage.",
                attack.reported, attack.damage_type
            );
        }
        AttackRoll::Hit => {
            let _ = writeln!(
                out,
                "Hits and deals {} {} damage.",
                attack.reported, attack.damage_type
            );
        }
    }
    out
}

/// An in-battle heal.
pub fn heal(heal: &Heal) -> String {
    format!(
        "{} uses {}. Heals {} hit points to {}\n",
        heal.healer,
        heal.action,
        heal.amount,
        list_names(&heal.targets)
    )
}

/// A monster reaching zero hit points.
pub fn monster_died(monster: &str, boss: bool) -> String {
    format!("{} dies.\n", with_boss_suffix(monster, boss))
}

/// A party member reaching zero hit points.
pub fn member_fell(member: &str) -> String {
    format!("{member} falls unconscious.\n")
}

/// One member's short rest.
pub fn rest(result: &Rest) -> String {
    match result {
        Rest::Unconscious { name } => format!("{name} is unconscious."),
        Rest::Idle { name, action } => format!("{name} is {action}."),
        Rest::Healed {
            name,
            action,
            amount,
            party,
        } if party.is_empty() => format!("{name} uses {action}. Heals {amount} hit points."),
        Rest::Healed {
            name,
            action,
            amount,
            party,
        } => format!(
            "{name} uses {action}. Heals {amount} hit points to {}.",
            list_names(party)
        ),
    }
}

/// Experience, level, and evolution for one member.
pub fn advancement(advancement: &Advancement) -> String {
    let name = &advancement.name;
    let mut out = format!("{name} gains {} xp.", advancement.xp);
    if let Some(level) = advancement.level {
        let _ = write!(out, " {name} levels up. They are now lvl {level}!");
    }
    if let Some(class) = advancement.evolved {
        let _ = write!(out, "\n{name} evolves to {class}!");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavern_core::{Challenge, CharacterClass, DamageType, Die, Monster};
    use tavern_mechanics::{Hit, Side};

    fn hit(target: &str, boss: bool, damage: i32) -> Hit {
        Hit {
            target: target.into(),
            boss,
            damage,
        }
    }

    #[test]
    fn names_join_with_commas_and_and() {
        assert_eq!(list_names::<&str>(&[]), "");
        assert_eq!(list_names(&["Ann"]), "Ann");
        assert_eq!(list_names(&["Ann", "Bo"]), "Ann and Bo");
        assert_eq!(list_names(&["Ann", "Bo", "Cy"]), "Ann, Bo and Cy");
    }

    #[test]
    fn encounter_header_lists_templates() {
        let mut encounter = Encounter::new();
        let goblin = Monster::new("Goblin", Challenge::Minion, 10, 5, 0, Die::D4, DamageType::Physical);
        let ogre = Monster::new("Ogre", Challenge::Boss, 200, 40, 2, Die::D10, DamageType::Physical);
        encounter.add(goblin, 2).unwrap();
        encounter.add(ogre, 1).unwrap();
        insta::assert_snapshot!(encounter_header(1, &encounter), @r"
---------------------
Starting Encounter 1:
  - 2x Goblin
  - 1x Ogre (Boss)
---------------------
");
    }

    #[test]
    fn banners_match_title_width() {
        assert_eq!(
            stage_banner(Stage::Preparation),
            "-------------------------\n*** Preparation stage ***\n-------------------------"
        );
        assert_eq!(
            stage_banner(Stage::Combat),
            "--------------------\n*** Combat stage ***\n--------------------"
        );
        assert_eq!(
            stage_banner(Stage::ShortRest),
            "------------------------\n*** Short rest stage ***\n------------------------"
        );
    }

    #[test]
    fn preparation_lines() {
        let prepared = Preparation::Prepared {
            name: "Ann".into(),
            action: "Self-Motivated",
            effect: "Their Spirit increases in",
            value: 1,
        };
        assert_eq!(
            preparation(&prepared),
            "Ann uses Self-Motivated. Their Spirit increases in +1."
        );
        assert_eq!(
            preparation(&Preparation::Unconscious { name: "Bo".into() }),
            "Bo is unconscious."
        );
    }

    #[test]
    fn initiative_order_is_padded() {
        let order = vec![
            InitiativeSlot {
                name: "Ann".into(),
                initiative: 12,
                side: Side::Party,
            },
            InitiativeSlot {
                name: "Goblin".into(),
                initiative: 7,
                side: Side::Monsters,
            },
        ];
        insta::assert_snapshot!(initiative(&order), @r"
Rolling initiative...
  - 12    Ann
  - 7     Goblin
");
    }

    #[test]
    fn round_start_aligns_hit_points() {
        let mut ann = PartyMember::new("Ann", "P", 0, (0, 0, 0), CharacterClass::Adventurer);
        ann.set_up_hp_for_adventure();
        let mut rue = PartyMember::new("Rue Lee", "P", 0, (0, 0, 0), CharacterClass::Cleric);
        rue.set_up_hp_for_adventure();
        rue.current_hp = 4;
        assert_eq!(
            round_start(2, &[ann, rue]),
            "Round 2:\nParty:\n  - Ann         10 / 10 hit points\n  - Rue Lee     4 / 10 hit points\n"
        );
    }

    #[test]
    fn character_single_target_attack() {
        let text = attack(&Attack {
            attacker: "Ann".into(),
            boss: false,
            action: Some("Sword slash"),
            roll: AttackRoll::Critical,
            damage_type: DamageType::Physical,
            area: false,
            reported: 8,
            hits: vec![hit("Ogre", true, 8)],
        });
        assert_eq!(
            text,
            "Ann attacks Ogre with Sword slash.\nCritical hit and deals 8 physical damage.\n"
        );
    }

    #[test]
    fn character_area_attack_lists_bosses() {
        let text = attack(&Attack {
            attacker: "Vex".into(),
            boss: false,
            action: Some("Fireball"),
            roll: AttackRoll::Hit,
            damage_type: DamageType::Magical,
            area: true,
            reported: 5,
            hits: vec![hit("Lich", true, 2), hit("Imp", false, 5), hit("Imp", false, 5)],
        });
        assert_eq!(
            text,
            "Vex attacks Lich (Boss), Imp and Imp with Fireball.\nHits and deals 5 magical damage.\n"
        );
    }

    #[test]
    fn monster_attacks_without_action() {
        let boss = attack(&Attack {
            attacker: "Ogre".into(),
            boss: true,
            action: None,
            roll: AttackRoll::Miss,
            damage_type: DamageType::Psychical,
            area: true,
            reported: 0,
            hits: vec![hit("Ann", false, 0), hit("Bo", false, 0)],
        });
        assert_eq!(boss, "Ogre (Boss) attacks Ann and Bo\nFails and deals 0 physical damage.\n");

        let minion = attack(&Attack {
            attacker: "Goblin".into(),
            boss: false,
            action: None,
            roll: AttackRoll::Hit,
            damage_type: DamageType::Physical,
            area: false,
            reported: 3,
            hits: vec![hit("Bo", false, 3)],
        });
        assert_eq!(minion, "Goblin attacks Bo\nHits and deals 3 physical damage.\n");
    }

    #[test]
    fn heal_and_casualty_lines() {
        let text = heal(&Heal {
            healer: "Rue".into(),
            action: "Prayer of mass healing",
            amount: 7,
            targets: vec!["Rue".into(), "Ann".into(), "Bo".into()],
            party: true,
        });
        assert_eq!(
            text,
            "Rue uses Prayer of mass healing. Heals 7 hit points to Rue, Ann and Bo\n"
        );
        assert_eq!(monster_died("Ogre", true), "Ogre (Boss) dies.\n");
        assert_eq!(monster_died("Imp", false), "Imp dies.\n");
        assert_eq!(member_fell("Bo"), "Bo falls unconscious.\n");
    }

    #[test]
    fn rest_lines() {
        assert_eq!(
            rest(&Rest::Healed {
                name: "Ann".into(),
                action: "Bandage time",
                amount: 6,
                party: vec![],
            }),
            "Ann uses Bandage time. Heals 6 hit points."
        );
        assert_eq!(
            rest(&Rest::Healed {
                name: "Rue".into(),
                action: "Prayer of mass healing",
                amount: 4,
                party: vec!["Ann".into(), "Rue".into()],
            }),
            "Rue uses Prayer of mass healing. Heals 4 hit points to Ann and Rue."
        );
        assert_eq!(
            rest(&Rest::Idle {
                name: "Vex".into(),
                action: "reading a book",
            }),
            "Vex is reading a book."
        );
    }

    #[test]
    fn advancement_lines() {
        let plain = Advancement {
            name: "Ann".into(),
            xp: 30,
            level: None,
            evolved: None,
        };
        assert_eq!(advancement(&plain), "Ann gains 30 xp.");
        let evolved = Advancement {
            level: Some(4),
            evolved: Some(CharacterClass::Warrior),
            ..plain
        };
        assert_eq!(
            advancement(&evolved),
            "Ann gains 30 xp. Ann levels up. They are now lvl 4!\nAnn evolves to Warrior!"
        );
    }

    #[test]
    fn closing_lines() {
        assert_eq!(adventure_completed("Dark Woods"), "Congratulations, your party completed “Dark Woods”");
        assert_eq!(adventure_start("Dark Woods"), "The “Dark Woods” will start soon...");
        assert!(PARTY_DEFEATED.ends_with("safe back at the Tavern.”"));
        assert_eq!(PARTY_DEFEATED.lines().count(), 2);
    }
}
