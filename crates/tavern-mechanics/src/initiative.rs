//! Initiative scheduling.
//!
//! Each side is sorted on its own (highest first, ties keep their original
//! order) and the two queues are then interleaved by comparing their fronts.
//! Characters win ties against monsters.

use std::cmp::Reverse;

use tavern_core::{Combatant, RandomSource};

/// Which side of the fight a turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// A party member.
    Party,
    /// A monster.
    Monsters,
}

/// One slot of the interleaved turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Whose turn it is.
    pub side: Side,
    /// Position within that side's sorted list.
    pub position: usize,
}

/// The tie rule shared by the display order and the live combat loop.
pub fn character_acts_first(character: i32, monster: i32) -> bool {
    character >= monster
}

/// Roll initiative for every combatant in `list`.
pub fn roll_all<C: Combatant, R: RandomSource>(list: &mut [C], rng: &mut R) {
    for combatant in list {
        combatant.roll_initiative(rng);
    }
}

/// Stable sort, highest initiative first.
pub fn sort_by_initiative<C: Combatant>(list: &mut [C]) {
    list.sort_by_key(|c| Reverse(c.initiative()));
}

/// Stable sort of positions into `list`, highest initiative first.
pub fn sort_ids_by_initiative<C: Combatant>(list: &[C], ids: &mut [usize]) {
    ids.sort_by_key(|&id| Reverse(list[id].initiative()));
}

/// Interleave two descending initiative sequences into one turn order.
pub fn merge(party: &[i32], monsters: &[i32]) -> Vec<Turn> {
    let mut order = Vec::with_capacity(party.len() + monsters.len());
    let (mut ci, mut mi) = (0, 0);

    while ci < party.len() && mi < monsters.len() {
        if character_acts_first(party[ci], monsters[mi]) {
            order.push(Turn { side: Side::Party, position: ci });
            ci += 1;
        } else {
            order.push(Turn { side: Side::Monsters, position: mi });
            mi += 1;
        }
    }
    order.extend((ci..party.len()).map(|position| Turn { side: Side::Party, position }));
    order.extend((mi..monsters.len()).map(|position| Turn { side: Side::Monsters, position }));
    order
}

/// Walks one combat round over two live, shrinking lists.
///
/// The cursors point at the next combatant to act on each side. When
/// combatants are removed, [`removed`](Self::removed) shifts the matching
/// cursor so nobody is skipped and nobody acts twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundCursor {
    party: usize,
    monsters: usize,
}

impl RoundCursor {
    /// A cursor at the start of a round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the next combatant on `side`.
    pub fn position(&self, side: Side) -> usize {
        match side {
            Side::Party => self.party,
            Side::Monsters => self.monsters,
        }
    }

    /// Decide whose turn is next, or `None` when the round is over.
    ///
    /// The round ends once either side is empty or both cursors have passed
    /// the end of their lists. `party` and `monsters` are the current
    /// initiatives of each side in turn order.
    pub fn next(&self, party: &[i32], monsters: &[i32]) -> Option<Side> {
        if party.is_empty() || monsters.is_empty() {
            return None;
        }
        match (party.get(self.party), monsters.get(self.monsters)) {
            (Some(&c), Some(&m)) if character_acts_first(c, m) => Some(Side::Party),
            (Some(_), Some(_)) => Some(Side::Monsters),
            (Some(_), None) => Some(Side::Party),
            (None, Some(_)) => Some(Side::Monsters),
            (None, None) => None,
        }
    }

    /// Move past the combatant that just acted on `side`.
    pub fn advance(&mut self, side: Side) {
        match side {
            Side::Party => self.party += 1,
            Side::Monsters => self.monsters += 1,
        }
    }

    /// Account for combatants removed from `side` at the given original positions.
    pub fn removed(&mut self, side: Side, positions: &[usize]) {
        let cursor = match side {
            Side::Party => &mut self.party,
            Side::Monsters => &mut self.monsters,
        };
        let before = positions.iter().filter(|&&k| k < *cursor).count();
        *cursor -= before;
    }
}
