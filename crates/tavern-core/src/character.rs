//! Party members: persistent record plus transient combat state.

use serde::{Deserialize, Serialize};

use crate::class::{CharacterClass, Passive};
use crate::dice::RandomSource;
use crate::progression::level_for_xp;
use crate::stat::{DamageType, Stat};

/// A player character.
///
/// Only the persistent fields are serialized. `max_hp`, `current_hp`,
/// `initiative`, and `shield` are recomputed for each adventure or encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyMember {
    /// Display name, unique across the roster.
    pub name: String,
    /// Name of the player who owns the character.
    pub player: String,
    /// Total experience. Never decreases.
    pub xp: u32,
    /// Body stat.
    pub body: i32,
    /// Mind stat.
    pub mind: i32,
    /// Spirit stat.
    pub spirit: i32,
    /// Current class on the ladder.
    pub class: CharacterClass,
    /// Maximum hit points for the current adventure.
    #[serde(skip)]
    pub max_hp: i32,
    /// Current hit points; carries over between encounters of one adventure.
    #[serde(skip)]
    pub current_hp: i32,
    /// Initiative rolled for the current encounter.
    #[serde(skip)]
    pub initiative: i32,
    /// Damage buffer drained before HP. Only mages ever raise it.
    #[serde(skip)]
    pub shield: i32,
}

impl PartyMember {
    /// Create a character with no transient combat state.
    pub fn new(
        name: impl Into<String>,
        player: impl Into<String>,
        xp: u32,
        (body, mind, spirit): (i32, i32, i32),
        class: CharacterClass,
    ) -> Self {
        Self {
            name: name.into(),
            player: player.into(),
            xp,
            body,
            mind,
            spirit,
            class,
            max_hp: 0,
            current_hp: 0,
            initiative: 0,
            shield: 0,
        }
    }

    /// Current level, derived from experience.
    pub fn level(&self) -> u32 {
        level_for_xp(self.xp)
    }

    /// The value of a stat.
    pub fn stat(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Body => self.body,
            Stat::Mind => self.mind,
            Stat::Spirit => self.spirit,
            Stat::Shield => self.shield,
            Stat::HitPoints => self.current_hp,
        }
    }

    /// Raise a stat by `value` and return the applied amount.
    ///
    /// Hit points go through [`heal`](Self::heal) so they stay capped.
    pub fn increase_stat(&mut self, stat: Stat, value: i32) -> i32 {
        match stat {
            Stat::Body => self.body += value,
            Stat::Mind => self.mind += value,
            Stat::Spirit => self.spirit += value,
            Stat::Shield => self.shield += value,
            Stat::HitPoints => return self.heal(value),
        }
        value
    }

    /// Lower a stat by `value`. Shield and hit points never drop below zero.
    pub fn decrease_stat(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Body => self.body -= value,
            Stat::Mind => self.mind -= value,
            Stat::Spirit => self.spirit -= value,
            Stat::Shield => self.shield = (self.shield - value).max(0),
            Stat::HitPoints => self.current_hp = (self.current_hp - value).max(0),
        }
    }

    /// Apply incoming damage.
    ///
    /// The shield absorbs damage first; whatever it cannot hold spills onto
    /// hit points, which are clamped at zero.
    pub fn take_damage(&mut self, damage: i32) {
        let damage = damage.max(0);
        let absorbed = damage.min(self.shield.max(0));
        self.shield -= absorbed;
        self.current_hp = (self.current_hp - (damage - absorbed)).max(0);
    }

    /// Restore hit points up to the maximum. Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp + amount.max(0)).min(self.max_hp);
        self.current_hp - before
    }

    /// True once hit points reach zero.
    pub fn is_unconscious(&self) -> bool {
        self.current_hp <= 0
    }

    /// True when current HP is under half of maximum (integer division).
    pub fn is_below_half_hp(&self) -> bool {
        self.current_hp < self.max_hp / 2
    }

    /// Recompute maximum HP for the current class and level, and heal to full.
    pub fn set_up_hp_for_adventure(&mut self) {
        self.max_hp = self.class.max_hp(self.body, self.level());
        self.current_hp = self.max_hp;
    }

    /// True when the current level lies outside the class's range.
    pub fn can_evolve(&self) -> bool {
        self.class.can_evolve(self.level())
    }

    /// Migrate to the class matching the current level.
    ///
    /// Every other field carries over unchanged; a character that cannot
    /// evolve is returned as is.
    pub fn evolve(self) -> Self {
        match self.class.evolution_target(self.level()) {
            Some(class) => Self { class, ..self },
            None => self,
        }
    }

    /// Add experience. Returns true when the level went up.
    pub fn gain_xp(&mut self, xp: u32) -> bool {
        let before = self.level();
        self.xp = self.xp.saturating_add(xp);
        self.level() > before
    }

    /// The damage type this character deals and resists.
    pub fn damage_type(&self) -> DamageType {
        self.class.damage_type()
    }

    /// Scale incoming damage of type `kind` by this character's passive ability.
    ///
    /// Only same-type damage is mitigated. Mages subtract their level instead
    /// of multiplying, never going below zero.
    pub fn mitigate(&self, damage: i32, kind: DamageType) -> i32 {
        if kind != self.damage_type() {
            return damage;
        }
        match self.class.passive() {
            Passive::Factor(factor) => (damage as f32 * factor) as i32,
            Passive::SubtractLevel => (damage - self.level() as i32).max(0),
        }
    }

    /// Roll and store initiative for the coming encounter.
    pub fn roll_initiative<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> i32 {
        let (die, stat) = self.class.initiative();
        self.initiative = die.roll(rng) + self.stat(stat);
        self.initiative
    }
}
