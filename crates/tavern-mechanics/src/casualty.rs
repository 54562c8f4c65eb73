//! Removing fallen combatants between actions.

use tracing::debug;

use tavern_core::{Monster, PartyMember};

use crate::initiative::{RoundCursor, Side};

/// Remove every dead monster, shift the monster cursor, and return the dead
/// in their former order.
pub fn prune_monsters(monsters: &mut Vec<Monster>, cursor: &mut RoundCursor) -> Vec<Monster> {
    let positions: Vec<usize> = monsters
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_dead())
        .map(|(k, _)| k)
        .collect();
    if positions.is_empty() {
        return Vec::new();
    }
    cursor.removed(Side::Monsters, &positions);

    let (dead, alive): (Vec<Monster>, Vec<Monster>) =
        monsters.drain(..).partition(Monster::is_dead);
    *monsters = alive;
    for monster in &dead {
        debug!(monster = %monster.name, xp = monster.experience, "monster killed");
    }
    dead
}

/// Remove every unconscious member from the active list, shift the party
/// cursor, and return the party indices that fell.
pub fn prune_party(
    party: &[PartyMember],
    active: &mut Vec<usize>,
    cursor: &mut RoundCursor,
) -> Vec<usize> {
    let positions: Vec<usize> = active
        .iter()
        .enumerate()
        .filter(|&(_, &id)| party[id].is_unconscious())
        .map(|(k, _)| k)
        .collect();
    if positions.is_empty() {
        return Vec::new();
    }
    cursor.removed(Side::Party, &positions);

    let fallen: Vec<usize> = positions.iter().map(|&k| active[k]).collect();
    active.retain(|&id| !party[id].is_unconscious());
    for &id in &fallen {
        debug!(member = %party[id].name, "party member unconscious");
    }
    fallen
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavern_core::{Challenge, CharacterClass, DamageType, Die};

    fn monster(name: &str, hp: i32) -> Monster {
        Monster::new(name, Challenge::Minion, 10, hp, 0, Die::D4, DamageType::Physical)
    }

    #[test]
    fn dead_monsters_removed_in_order() {
        let mut monsters = vec![monster("A", 0), monster("B", 3), monster("C", 0)];
        let mut cursor = RoundCursor::new();
        cursor.advance(Side::Monsters);
        cursor.advance(Side::Monsters);
        let dead = prune_monsters(&mut monsters, &mut cursor);
        assert_eq!(dead.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), ["A", "C"]);
        assert_eq!(monsters.len(), 1);
        // A was behind the cursor, C was the next to act.
        assert_eq!(cursor.position(Side::Monsters), 1);
    }

    #[test]
    fn nothing_to_prune_leaves_cursor() {
        let mut monsters = vec![monster("A", 2)];
        let mut cursor = RoundCursor::new();
        cursor.advance(Side::Monsters);
        assert!(prune_monsters(&mut monsters, &mut cursor).is_empty());
        assert_eq!(cursor.position(Side::Monsters), 1);
    }

    #[test]
    fn fallen_members_leave_active_list() {
        let mut party: Vec<PartyMember> = ["Ann", "Bo", "Cy"]
            .iter()
            .map(|n| {
                let mut m = PartyMember::new(*n, "P", 0, (0, 0, 0), CharacterClass::Adventurer);
                m.set_up_hp_for_adventure();
                m
            })
            .collect();
        party[1].current_hp = 0;
        let mut active = vec![2, 1, 0];
        let mut cursor = RoundCursor::new();
        cursor.advance(Side::Party);
        cursor.advance(Side::Party);
        let fallen = prune_party(&party, &mut active, &mut cursor);
        assert_eq!(fallen, [1]);
        assert_eq!(active, [2, 0]);
        assert_eq!(cursor.position(Side::Party), 1);
    }
}
