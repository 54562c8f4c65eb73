//! Monster templates and their per-encounter instances.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::dice::{Die, RandomSource};
use crate::error::TavernError;
use crate::stat::DamageType;

/// Die added to a monster's base initiative each encounter.
pub const MONSTER_INITIATIVE_DIE: Die = Die::D12;

/// A monster's tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Challenge {
    /// Weakest tier.
    Minion,
    /// Middle tier.
    Lieutenant,
    /// Area-attacking, damage-resistant tier. At most one per encounter.
    Boss,
}

impl Challenge {
    /// Multiplier applied to same-type damage taken.
    pub fn damage_resistance(self) -> f32 {
        match self {
            Self::Boss => 0.5,
            Self::Minion | Self::Lieutenant => 1.0,
        }
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minion => write!(f, "Minion"),
            Self::Lieutenant => write!(f, "Lieutenant"),
            Self::Boss => write!(f, "Boss"),
        }
    }
}

impl std::str::FromStr for Challenge {
    type Err = TavernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minion" => Ok(Self::Minion),
            "lieutenant" => Ok(Self::Lieutenant),
            "boss" => Ok(Self::Boss),
            _ => Err(TavernError::UnknownChallenge(s.to_string())),
        }
    }
}

/// A monster. The same type serves as template and as encounter instance.
///
/// Equality and hashing use the name only, so two templates with the same
/// name are the same encounter key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    /// Display name, unique within the bestiary.
    pub name: String,
    /// Tier.
    pub challenge: Challenge,
    /// Experience granted to the party when killed.
    pub experience: u32,
    /// Current hit points.
    pub hit_points: i32,
    /// Base initiative before the per-encounter roll.
    #[serde(rename = "initiative")]
    pub initiative_bonus: i32,
    /// Die rolled for damage on a hit.
    pub damage_dice: Die,
    /// Type of damage dealt.
    pub damage_type: DamageType,
    /// Initiative rolled for the current encounter.
    #[serde(skip)]
    pub initiative: i32,
}

impl Monster {
    /// Create a monster template.
    pub fn new(
        name: impl Into<String>,
        challenge: Challenge,
        experience: u32,
        hit_points: i32,
        initiative_bonus: i32,
        damage_dice: Die,
        damage_type: DamageType,
    ) -> Self {
        Self {
            name: name.into(),
            challenge,
            experience,
            hit_points,
            initiative_bonus,
            damage_dice,
            damage_type,
            initiative: 0,
        }
    }

    /// True for the Boss tier.
    pub fn is_boss(&self) -> bool {
        self.challenge == Challenge::Boss
    }

    /// Bosses hit the whole party every turn.
    pub fn is_area_attack(&self) -> bool {
        self.is_boss()
    }

    /// Multiplier applied to same-type damage taken.
    pub fn damage_resistance(&self) -> f32 {
        self.challenge.damage_resistance()
    }

    /// Scale incoming damage of type `kind` by this monster's resistance.
    pub fn resist(&self, damage: i32, kind: DamageType) -> i32 {
        if kind == self.damage_type {
            (damage as f32 * self.damage_resistance()) as i32
        } else {
            damage
        }
    }

    /// Subtract damage from hit points, clamped at zero.
    pub fn take_damage(&mut self, damage: i32) {
        self.hit_points = (self.hit_points - damage.max(0)).max(0);
    }

    /// True once hit points reach zero.
    pub fn is_dead(&self) -> bool {
        self.hit_points <= 0
    }

    /// Roll initiative as base initiative plus a d12.
    pub fn roll_initiative<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> i32 {
        self.initiative = self.initiative_bonus + MONSTER_INITIATIVE_DIE.roll(rng);
        self.initiative
    }

    /// Name as printed in narration; bosses get a " (Boss)" suffix.
    pub fn display_name(&self) -> Cow<'_, str> {
        if self.is_boss() {
            Cow::Owned(format!("{} (Boss)", self.name))
        } else {
            Cow::Borrowed(&self.name)
        }
    }
}

impl PartialEq for Monster {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Monster {}

impl Hash for Monster {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use std::collections::HashSet;

    fn goblin() -> Monster {
        Monster::new("Goblin", Challenge::Minion, 30, 10, 2, Die::D4, DamageType::Physical)
    }

    fn dragon() -> Monster {
        Monster::new("Dragon", Challenge::Boss, 400, 80, 5, Die::D12, DamageType::Magical)
    }

    #[test]
    fn boss_halves_same_type_damage() {
        let boss = dragon();
        assert_eq!(boss.resist(9, DamageType::Magical), 4);
        assert_eq!(boss.resist(9, DamageType::Physical), 9);
        assert!(boss.is_area_attack());
    }

    #[test]
    fn standard_resistance_is_identity() {
        let minion = goblin();
        assert_eq!(minion.resist(9, DamageType::Physical), 9);
        assert!(!minion.is_area_attack());
    }

    #[test]
    fn hit_points_clamp_at_zero() {
        let mut minion = goblin();
        minion.take_damage(25);
        assert_eq!(minion.hit_points, 0);
        assert!(minion.is_dead());
    }

    #[test]
    fn initiative_adds_d12_to_base() {
        let mut minion = goblin();
        let mut dice = ScriptedDice::new([11]);
        assert_eq!(minion.roll_initiative(&mut dice), 13);
        assert_eq!(minion.initiative_bonus, 2);
    }

    #[test]
    fn equality_is_by_name() {
        let mut a = goblin();
        let b = goblin();
        a.hit_points = 1;
        assert_eq!(a, b);
        let set: HashSet<Monster> = [a, b, dragon()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_name_marks_bosses() {
        assert_eq!(goblin().display_name(), "Goblin");
        assert_eq!(dragon().display_name(), "Dragon (Boss)");
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = r#"{
            "name": "Skeleton",
            "challenge": "Lieutenant",
            "experience": 60,
            "hitPoints": 25,
            "initiative": 4,
            "damageDice": "d6",
            "damageType": "physical"
        }"#;
        let monster: Monster = serde_json::from_str(json).unwrap();
        assert_eq!(monster.challenge, Challenge::Lieutenant);
        assert_eq!(monster.hit_points, 25);
        assert_eq!(monster.initiative_bonus, 4);
        assert_eq!(monster.damage_dice, Die::D6);

        let value = serde_json::to_value(&monster).unwrap();
        assert_eq!(value["hitPoints"], 25);
        assert_eq!(value["initiative"], 4);
        assert_eq!(value["damageDice"], "d6");
    }

    #[test]
    fn challenge_parse() {
        assert_eq!("boss".parse::<Challenge>(), Ok(Challenge::Boss));
        assert!("Dragon".parse::<Challenge>().is_err());
    }
}
