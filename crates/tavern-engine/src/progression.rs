//! Experience, level-ups, and evolution after a won encounter.

use tracing::info;

use tavern_core::{CharacterClass, PartyMember};

/// What experience did for one party member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advancement {
    /// Member name.
    pub name: String,
    /// Experience gained.
    pub xp: u32,
    /// New level, if the member levelled up.
    pub level: Option<u32>,
    /// New class, if the member evolved.
    pub evolved: Option<CharacterClass>,
}

/// Grant `xp` to every conscious member.
///
/// A member that levels up evolves in place when its new level leaves its
/// class's range, and its hit points are recomputed for the new level and
/// class. Unconscious members gain nothing.
pub fn grant_experience(party: &mut [PartyMember], xp: u32) -> Vec<Advancement> {
    let mut advancements = Vec::with_capacity(party.len());
    for slot in party.iter_mut() {
        if slot.is_unconscious() {
            continue;
        }

        let mut advancement = Advancement {
            name: slot.name.clone(),
            xp,
            level: None,
            evolved: None,
        };

        if slot.gain_xp(xp) {
            advancement.level = Some(slot.level());
            if slot.can_evolve() {
                *slot = slot.clone().evolve();
                advancement.evolved = Some(slot.class);
                info!(member = %slot.name, class = %slot.class, "member evolved");
            }
            slot.set_up_hp_for_adventure();
            info!(member = %slot.name, level = slot.level(), "member levelled up");
        }

        advancements.push(advancement);
    }
    advancements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, class: CharacterClass, xp: u32) -> PartyMember {
        let mut m = PartyMember::new(name, "P", xp, (1, 0, 0), class);
        m.set_up_hp_for_adventure();
        m
    }

    #[test]
    fn xp_without_level_up() {
        let mut party = vec![member("Ann", CharacterClass::Adventurer, 100)];
        party[0].current_hp = 3;
        let result = grant_experience(&mut party, 30);
        assert_eq!(
            result,
            [Advancement {
                name: "Ann".into(),
                xp: 30,
                level: None,
                evolved: None,
            }]
        );
        assert_eq!(party[0].xp, 130);
        assert_eq!(party[0].current_hp, 3);
    }

    #[test]
    fn level_up_refreshes_hp() {
        let mut party = vec![member("Ann", CharacterClass::Adventurer, 180)];
        party[0].current_hp = 3;
        let result = grant_experience(&mut party, 30);
        assert_eq!(result[0].level, Some(3));
        assert_eq!(result[0].evolved, None);
        assert_eq!(party[0].current_hp, party[0].max_hp);
        assert_eq!(party[0].max_hp, CharacterClass::Adventurer.max_hp(1, 3));
    }

    #[test]
    fn crossing_class_range_evolves_in_place() {
        let mut party = vec![
            member("Oak", CharacterClass::Cleric, 0),
            member("Ann", CharacterClass::Adventurer, 390),
        ];
        let result = grant_experience(&mut party, 20);
        assert_eq!(result[1].level, Some(4));
        assert_eq!(result[1].evolved, Some(CharacterClass::Warrior));
        assert_eq!(party[1].name, "Ann");
        assert_eq!(party[1].class, CharacterClass::Warrior);
        assert_eq!(party[1].xp, 410);
        assert_eq!(party[0].class, CharacterClass::Cleric);
    }

    #[test]
    fn unconscious_members_gain_nothing() {
        let mut party = vec![
            member("Ann", CharacterClass::Adventurer, 0),
            member("Bo", CharacterClass::Adventurer, 0),
        ];
        party[1].current_hp = 0;
        let result = grant_experience(&mut party, 50);
        assert_eq!(result.len(), 1);
        assert_eq!(party[1].xp, 0);
    }
}
