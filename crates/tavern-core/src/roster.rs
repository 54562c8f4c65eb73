//! Character creation rules and party fielding.
//!
//! These helpers sit between the stored roster and the engine: they validate
//! input when a character is created and turn roster picks into a party that
//! is ready to play.

use crate::character::PartyMember;
use crate::class::CharacterClass;
use crate::dice::{Die, RandomSource};
use crate::error::{TavernError, TavernResult};
use crate::progression::{initial_xp_for_level, stat_from_roll};

/// Smallest party that can start an adventure.
pub const MIN_PARTY_SIZE: usize = 3;
/// Largest party that can start an adventure.
pub const MAX_PARTY_SIZE: usize = 5;

/// Validate a raw character name and capitalise each word.
///
/// A name starts with a letter and contains only letters and spaces. Runs
/// of spaces collapse to one. Names already in `existing` are rejected after
/// formatting, ignoring case.
pub fn format_character_name(raw: &str, existing: &[PartyMember]) -> TavernResult<String> {
    let trimmed = raw.trim();
    let valid = trimmed.chars().next().is_some_and(char::is_alphabetic)
        && trimmed.chars().all(|c| c.is_alphabetic() || c == ' ');
    if !valid {
        return Err(TavernError::InvalidCharacterName(raw.to_string()));
    }

    let name = trimmed
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if existing.iter().any(|c| c.name.eq_ignore_ascii_case(&name)) {
        return Err(TavernError::DuplicateCharacter(name));
    }
    Ok(name)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Roll 2d6 for one stat. Returns both dice and the resulting modifier.
pub fn roll_stat<R: RandomSource + ?Sized>(rng: &mut R) -> ([u32; 2], i32) {
    let dice = [Die::D6.roll(rng) as u32, Die::D6.roll(rng) as u32];
    (dice, stat_from_roll(dice[0] + dice[1]))
}

/// Create a new character at `level` on the line of `class`.
///
/// Experience is set to the floor of the level and the class is moved to
/// the one matching that level, so a level-5 Cleric starts as a Paladin.
pub fn create_character(
    name: impl Into<String>,
    player: impl Into<String>,
    level: u32,
    stats: (i32, i32, i32),
    class: CharacterClass,
) -> TavernResult<PartyMember> {
    let xp = initial_xp_for_level(level)?;
    let class = CharacterClass::for_level(class.line(), level);
    Ok(PartyMember::new(name, player, xp, stats, class))
}

/// Characters owned by `player`, or every character when `player` is empty,
/// each shown in the class matching its level.
pub fn characters_for_player(roster: &[PartyMember], player: &str) -> Vec<PartyMember> {
    roster
        .iter()
        .filter(|c| player.is_empty() || c.player == player)
        .cloned()
        .map(PartyMember::evolve)
        .collect()
}

/// Build a party from roster positions.
///
/// Every chosen member is evolved to the class for its level and set to
/// full HP. Positions must be distinct and the party size must lie within
/// `min..=max`.
pub fn field_party(
    roster: &[PartyMember],
    picks: &[usize],
    min: usize,
    max: usize,
) -> TavernResult<Vec<PartyMember>> {
    if roster.len() < min {
        return Err(TavernError::NotEnoughCharacters(min));
    }
    if !(min..=max).contains(&picks.len()) {
        return Err(TavernError::InvalidPartySize {
            got: picks.len(),
            min,
            max,
        });
    }

    let mut party: Vec<PartyMember> = Vec::with_capacity(picks.len());
    for (n, &pick) in picks.iter().enumerate() {
        let member = roster
            .get(pick)
            .ok_or(TavernError::InvalidCharacterChoice(pick))?;
        if picks[..n].contains(&pick) {
            return Err(TavernError::AlreadyInParty(member.name.clone()));
        }
        let mut member = member.clone().evolve();
        member.set_up_hp_for_adventure();
        party.push(member);
    }
    Ok(party)
}
