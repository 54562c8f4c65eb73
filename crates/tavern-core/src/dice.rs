//! Dice types and the randomness seam.
//!
//! The engine never touches an entropy source directly. Every roll goes
//! through a [`RandomSource`], so a seeded or scripted source makes a whole
//! adventure reproducible.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::TavernError;

/// Anything that can roll an N-sided die.
pub trait RandomSource {
    /// Roll a die with `sides` faces, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self, sides: u32) -> u32 {
        (**self).roll(sides)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        (**self).roll(sides)
    }
}

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Die {
    /// Three-sided die.
    D3,
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

    /// Parse a die from a string like "d20", "d6", "D3".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "d3" => Some(Self::D3),
            "d4" => Some(Self::D4),
            "d6" => Some(Self::D6),
            "d8" => Some(Self::D8),
            "d10" => Some(Self::D10),
            "d12" => Some(Self::D12),
            "d20" => Some(Self::D20),
            _ => None,
        }
    }

    /// Roll this die once.
    pub fn roll<R: RandomSource + ?Sized>(self, rng: &mut R) -> i32 {
        let value = rng.roll(self.sides());
        debug_assert!((1..=self.sides()).contains(&value));
        value as i32
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

impl std::str::FromStr for Die {
    type Err = TavernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_tag(s).ok_or_else(|| TavernError::UnknownDie(s.to_string()))
    }
}

impl TryFrom<String> for Die {
    type Error = TavernError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Die> for String {
    fn from(die: Die) -> Self {
        die.to_string()
    }
}

/// A [`RandomSource`] that replays a fixed sequence of rolls.
///
/// Used for deterministic replays and tests. Each value must fit the die it
/// is consumed by.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedDice {
    /// Create a scripted source from the rolls it should return, in order.
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Append more rolls to the end of the script.
    pub fn extend(&mut self, rolls: impl IntoIterator<Item = u32>) {
        self.rolls.extend(rolls);
    }

    /// Number of rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }

    /// Number of rolls consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedDice {
    /// # Panics
    ///
    /// Panics when the script is exhausted or the next value does not fit
    /// on a die with `sides` faces.
    fn roll(&mut self, sides: u32) -> u32 {
        let Some(value) = self.rolls.pop_front() else {
            panic!("scripted dice exhausted after {} rolls (wanted d{sides})", self.consumed);
        };
        assert!(
            (1..=sides).contains(&value),
            "scripted roll #{} is {value}, which does not fit a d{sides}",
            self.consumed + 1
        );
        self.consumed += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D3.sides(), 3);
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
        assert_eq!(Die::D20.sides(), 20);
    }

    #[test]
    fn die_from_str() {
        assert_eq!(Die::from_str_tag("d20"), Some(Die::D20));
        assert_eq!(Die::from_str_tag("D6"), Some(Die::D6));
        assert_eq!(Die::from_str_tag(" d3 "), Some(Die::D3));
        assert_eq!(Die::from_str_tag("d100"), None);
        assert_eq!(Die::from_str_tag("foo"), None);
        assert!("d7".parse::<Die>().is_err());
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::D20.to_string(), "d20");
        assert_eq!(Die::D3.to_string(), "d3");
    }

    #[test]
    fn die_serde_uses_notation() {
        let json = serde_json::to_string(&Die::D8).unwrap();
        assert_eq!(json, "\"d8\"");
        let die: Die = serde_json::from_str("\"d12\"").unwrap();
        assert_eq!(die, Die::D12);
        assert!(serde_json::from_str::<Die>("\"d9\"").is_err());
    }

    #[test]
    fn scripted_dice_replays_in_order() {
        let mut dice = ScriptedDice::new([3, 1, 6]);
        assert_eq!(Die::D6.roll(&mut dice), 3);
        assert_eq!(Die::D4.roll(&mut dice), 1);
        assert_eq!(dice.consumed(), 2);
        assert_eq!(dice.remaining(), 1);
        dice.extend([2]);
        assert_eq!(Die::D6.roll(&mut dice), 6);
        assert_eq!(Die::D3.roll(&mut dice), 2);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn scripted_dice_panics_when_exhausted() {
        let mut dice = ScriptedDice::new([]);
        dice.roll(6);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn scripted_dice_rejects_out_of_range() {
        let mut dice = ScriptedDice::new([7]);
        dice.roll(6);
    }
}
