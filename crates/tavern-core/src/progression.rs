//! Level formula and experience helpers.

use crate::error::{TavernError, TavernResult};

/// Experience needed per level.
pub const XP_PER_LEVEL: u32 = 100;
/// The lowest level a character can have.
pub const MIN_LEVEL: u32 = 1;
/// The highest level a character can reach.
pub const MAX_LEVEL: u32 = 10;

/// The level for a given amount of experience: `min(10, xp / 100 + 1)`.
pub fn level_for_xp(xp: u32) -> u32 {
    (xp / XP_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Experience a freshly created character starts with at `level`.
pub fn initial_xp_for_level(level: u32) -> TavernResult<u32> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(TavernError::InvalidLevel(level));
    }
    Ok(level * XP_PER_LEVEL - XP_PER_LEVEL)
}

/// Map the sum of two d6 to a stat modifier during character creation.
pub fn stat_from_roll(sum: u32) -> i32 {
    match sum {
        2 => -1,
        3..=5 => 0,
        6..=9 => 1,
        10 | 11 => 2,
        12 => 3,
        _ => -2,
    }
}
