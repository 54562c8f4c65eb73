//! The class ladder and the per-class behavior tables.
//!
//! Every playable class belongs to a line (body, spirit, mind). Within a line
//! the class is a pure function of level, so evolution is a lookup keyed by
//! `(line, level)` rather than a chain of subclasses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::error::TavernError;
use crate::stat::{DamageType, Stat};

/// Base hit points per level before the body modifier.
pub const BASE_HP: i32 = 10;
/// Fewest monsters that make a mage cast an area spell instead of a single bolt.
pub const AREA_SPELL_THRESHOLD: usize = 3;

/// The three class lines a character can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLine {
    /// Adventurer, Warrior, Champion.
    Body,
    /// Cleric, Paladin.
    Spirit,
    /// Mage.
    Mind,
}

/// A playable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    /// Body line, levels 1-3.
    Adventurer,
    /// Body line, levels 4-7.
    Warrior,
    /// Body line, levels 8-10.
    Champion,
    /// Spirit line, levels 1-4.
    Cleric,
    /// Spirit line, levels 5-10.
    Paladin,
    /// Mind line, every level.
    Mage,
}

/// How a single-target battle action picks its victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Targeting {
    /// The monster with the least current HP; first seen wins ties.
    LowestHp,
    /// The monster with the most current HP; first seen wins ties.
    HighestHp,
    /// A uniformly random monster.
    Random,
    /// Every live monster at once.
    Area,
}

/// An attacking battle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeProfile {
    /// Action name used in narration.
    pub name: &'static str,
    /// Damage die rolled on a hit.
    pub die: Die,
    /// Stat added to the damage roll.
    pub modifier: Stat,
    /// How targets are picked.
    pub targeting: Targeting,
}

/// Who an in-battle heal reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealScope {
    /// The lowest-HP ally only.
    LowestAlly,
    /// Every active ally.
    Party,
}

/// A healing battle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealProfile {
    /// Action name used in narration.
    pub name: &'static str,
    /// Die rolled for the heal amount.
    pub die: Die,
    /// Stat added to the heal roll.
    pub modifier: Stat,
    /// Who receives the heal.
    pub scope: HealScope,
}

/// A value that is either fixed or rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    /// Always this value.
    Fixed(i32),
    /// A single roll of this die.
    Roll(Die),
}

/// What a preparation action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreparationEffect {
    /// Raise the actor's own stat.
    SelfBoost(i32),
    /// Raise the stat of every conscious party member.
    PartyBoost(Amount),
    /// Recharge the actor's shield to `(d6 + mind) * level`.
    ShieldRecharge,
}

/// The pre-combat action of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreparationProfile {
    /// Action name used in narration.
    pub name: &'static str,
    /// Effect phrase used in narration.
    pub effect: &'static str,
    /// Stat the action changes.
    pub stat: Stat,
    /// What the action does.
    pub kind: PreparationEffect,
}

impl PreparationProfile {
    /// True if the action only affects the actor.
    pub fn is_self_action(&self) -> bool {
        !matches!(self.kind, PreparationEffect::PartyBoost(_))
    }

    /// The delta broadcast to every conscious member. Self actions broadcast zero.
    pub fn broadcast(&self) -> Amount {
        match self.kind {
            PreparationEffect::PartyBoost(amount) => amount,
            PreparationEffect::SelfBoost(_) | PreparationEffect::ShieldRecharge => Amount::Fixed(0),
        }
    }
}

/// What a short-rest action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestEffect {
    /// Heal the actor by a die roll plus a stat.
    HealSelf {
        /// Die rolled.
        die: Die,
        /// Stat added to the roll.
        modifier: Stat,
    },
    /// Heal the actor to full.
    FullHealSelf,
    /// Heal every party member by a die roll plus a stat.
    HealParty {
        /// Die rolled.
        die: Die,
        /// Stat added to the roll.
        modifier: Stat,
    },
    /// Nothing happens.
    Idle,
}

/// The post-combat action of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestProfile {
    /// Action name used in narration.
    pub name: &'static str,
    /// What the action does.
    pub kind: RestEffect,
}

impl RestProfile {
    /// True if the result reaches the whole party.
    pub fn is_party_action(&self) -> bool {
        matches!(self.kind, RestEffect::HealParty { .. })
    }
}

/// How same-type incoming damage is mitigated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Passive {
    /// Multiply the damage by this factor.
    Factor(f32),
    /// Subtract the character's level from the damage.
    SubtractLevel,
}

impl CharacterClass {
    /// Every class, body line first.
    pub fn all() -> &'static [Self] {
        &[
            Self::Adventurer,
            Self::Warrior,
            Self::Champion,
            Self::Cleric,
            Self::Paladin,
            Self::Mage,
        ]
    }

    /// The line this class belongs to.
    pub fn line(self) -> ClassLine {
        match self {
            Self::Adventurer | Self::Warrior | Self::Champion => ClassLine::Body,
            Self::Cleric | Self::Paladin => ClassLine::Spirit,
            Self::Mage => ClassLine::Mind,
        }
    }

    /// The class a member of `line` has at `level`.
    pub fn for_level(line: ClassLine, level: u32) -> Self {
        match (line, level) {
            (ClassLine::Body, 0..=3) => Self::Adventurer,
            (ClassLine::Body, 4..=7) => Self::Warrior,
            (ClassLine::Body, _) => Self::Champion,
            (ClassLine::Spirit, 0..=4) => Self::Cleric,
            (ClassLine::Spirit, _) => Self::Paladin,
            (ClassLine::Mind, _) => Self::Mage,
        }
    }

    /// The class this one migrates to at `level`, or `None` if it already fits.
    pub fn evolution_target(self, level: u32) -> Option<Self> {
        let target = Self::for_level(self.line(), level);
        (target != self).then_some(target)
    }

    /// True when `level` lies outside this class's range.
    pub fn can_evolve(self, level: u32) -> bool {
        self.evolution_target(level).is_some()
    }

    /// Initiative die and the stat added to it.
    pub fn initiative(self) -> (Die, Stat) {
        match self.line() {
            ClassLine::Body => (Die::D12, Stat::Spirit),
            ClassLine::Spirit => (Die::D10, Stat::Spirit),
            ClassLine::Mind => (Die::D20, Stat::Mind),
        }
    }

    /// The type of damage this class deals and defends against.
    pub fn damage_type(self) -> DamageType {
        match self.line() {
            ClassLine::Body => DamageType::Physical,
            ClassLine::Spirit => DamageType::Psychical,
            ClassLine::Mind => DamageType::Magical,
        }
    }

    /// Mitigation applied to same-type incoming damage.
    pub fn passive(self) -> Passive {
        match self {
            Self::Adventurer | Self::Cleric => Passive::Factor(1.0),
            Self::Warrior | Self::Champion | Self::Paladin => Passive::Factor(0.5),
            Self::Mage => Passive::SubtractLevel,
        }
    }

    /// The attack this class uses with `monsters_left` monsters standing.
    pub fn strike(self, monsters_left: usize) -> StrikeProfile {
        match self {
            Self::Adventurer => StrikeProfile {
                name: "Sword slash",
                die: Die::D6,
                modifier: Stat::Body,
                targeting: Targeting::LowestHp,
            },
            Self::Warrior | Self::Champion => StrikeProfile {
                name: "Improved sword slash",
                die: Die::D10,
                modifier: Stat::Body,
                targeting: Targeting::Random,
            },
            Self::Cleric => StrikeProfile {
                name: "Not on my watch",
                die: Die::D4,
                modifier: Stat::Spirit,
                targeting: Targeting::Random,
            },
            Self::Paladin => StrikeProfile {
                name: "Never on my watch",
                die: Die::D8,
                modifier: Stat::Spirit,
                targeting: Targeting::Random,
            },
            Self::Mage if monsters_left >= AREA_SPELL_THRESHOLD => StrikeProfile {
                name: "Fireball",
                die: Die::D4,
                modifier: Stat::Mind,
                targeting: Targeting::Area,
            },
            Self::Mage => StrikeProfile {
                name: "Arcane missile",
                die: Die::D6,
                modifier: Stat::Mind,
                targeting: Targeting::HighestHp,
            },
        }
    }

    /// The heal this class casts when an ally is hurt, if it heals in battle.
    pub fn battle_heal(self) -> Option<HealProfile> {
        match self {
            Self::Cleric => Some(HealProfile {
                name: "Prayer of healing",
                die: Die::D10,
                modifier: Stat::Mind,
                scope: HealScope::LowestAlly,
            }),
            Self::Paladin => Some(HealProfile {
                name: "Prayer of mass healing",
                die: Die::D10,
                modifier: Stat::Mind,
                scope: HealScope::Party,
            }),
            _ => None,
        }
    }

    /// The pre-combat action of this class.
    pub fn preparation(self) -> PreparationProfile {
        match self {
            Self::Adventurer | Self::Warrior => PreparationProfile {
                name: "Self-Motivated",
                effect: "Their Spirit increases in",
                stat: Stat::Spirit,
                kind: PreparationEffect::SelfBoost(1),
            },
            Self::Champion => PreparationProfile {
                name: "Motivational speech",
                effect: "Everyone’s Spirit increases in",
                stat: Stat::Spirit,
                kind: PreparationEffect::PartyBoost(Amount::Fixed(1)),
            },
            Self::Cleric => PreparationProfile {
                name: "Prayer of good luck",
                effect: "Everyone’s Mind increases in",
                stat: Stat::Mind,
                kind: PreparationEffect::PartyBoost(Amount::Fixed(1)),
            },
            Self::Paladin => PreparationProfile {
                name: "Blessing of good luck",
                effect: "Everyone’s Mind increases in",
                stat: Stat::Mind,
                kind: PreparationEffect::PartyBoost(Amount::Roll(Die::D3)),
            },
            Self::Mage => PreparationProfile {
                name: "Mage shield",
                effect: "Shield recharges to",
                stat: Stat::Shield,
                kind: PreparationEffect::ShieldRecharge,
            },
        }
    }

    /// The post-combat action of this class.
    pub fn short_rest(self) -> RestProfile {
        match self {
            Self::Adventurer | Self::Warrior => RestProfile {
                name: "Bandage time",
                kind: RestEffect::HealSelf {
                    die: Die::D8,
                    modifier: Stat::Mind,
                },
            },
            Self::Champion => RestProfile {
                name: "Improved bandage time",
                kind: RestEffect::FullHealSelf,
            },
            Self::Cleric => RestProfile {
                name: "Prayer of self-healing",
                kind: RestEffect::HealSelf {
                    die: Die::D10,
                    modifier: Stat::Mind,
                },
            },
            Self::Paladin => RestProfile {
                name: "Prayer of mass healing",
                kind: RestEffect::HealParty {
                    die: Die::D10,
                    modifier: Stat::Mind,
                },
            },
            Self::Mage => RestProfile {
                name: "reading a book",
                kind: RestEffect::Idle,
            },
        }
    }

    /// Maximum HP for this class with the given body stat and level.
    pub fn max_hp(self, body: i32, level: u32) -> i32 {
        let level = level as i32;
        let base = (BASE_HP + body) * level;
        match self {
            Self::Champion => base + body * level,
            _ => base,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adventurer => write!(f, "Adventurer"),
            Self::Warrior => write!(f, "Warrior"),
            Self::Champion => write!(f, "Champion"),
            Self::Cleric => write!(f, "Cleric"),
            Self::Paladin => write!(f, "Paladin"),
            Self::Mage => write!(f, "Mage"),
        }
    }
}

impl std::str::FromStr for CharacterClass {
    type Err = TavernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|class| class.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TavernError::UnknownClass(s.to_string()))
    }
}
