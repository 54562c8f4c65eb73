//! The capability set shared by party members and monsters.

use crate::character::PartyMember;
use crate::dice::RandomSource;
use crate::monster::Monster;

/// Anything that takes a place in the initiative order.
pub trait Combatant {
    /// Initiative rolled for the current encounter.
    fn initiative(&self) -> i32;

    /// Roll and store initiative for the current encounter.
    fn roll_initiative(&mut self, rng: &mut dyn RandomSource) -> i32;
}

impl Combatant for PartyMember {
    fn initiative(&self) -> i32 {
        self.initiative
    }

    fn roll_initiative(&mut self, rng: &mut dyn RandomSource) -> i32 {
        PartyMember::roll_initiative(self, rng)
    }
}

impl Combatant for Monster {
    fn initiative(&self) -> i32 {
        self.initiative
    }

    fn roll_initiative(&mut self, rng: &mut dyn RandomSource) -> i32 {
        Monster::roll_initiative(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::CharacterClass;
    use crate::dice::{Die, ScriptedDice};
    use crate::monster::Challenge;
    use crate::stat::DamageType;

    fn roll<C: Combatant>(combatant: &mut C, dice: &mut ScriptedDice) -> i32 {
        combatant.roll_initiative(dice);
        combatant.initiative()
    }

    #[test]
    fn both_sides_roll_through_the_trait() {
        let mut dice = ScriptedDice::new([7, 7]);
        // Mind line: d20 + mind.
        let mut mage = PartyMember::new("Vex", "P", 0, (0, 2, 0), CharacterClass::Mage);
        let mut imp = Monster::new("Imp", Challenge::Minion, 10, 4, 3, Die::D4, DamageType::Magical);
        assert_eq!(roll(&mut mage, &mut dice), 9);
        assert_eq!(roll(&mut imp, &mut dice), 10);
        assert_eq!(mage.initiative, 9);
        assert_eq!(imp.initiative, 10);
    }
}
