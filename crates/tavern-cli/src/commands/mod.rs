pub mod adventures;
pub mod monsters;
pub mod play;
pub mod recruit;
pub mod roster;

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use tavern_core::{Adventure, Monster, PartyMember};

pub const CHARACTERS_FILE: &str = "characters.json";
pub const MONSTERS_FILE: &str = "monsters.json";
pub const ADVENTURES_FILE: &str = "adventures.json";

/// Read and parse one JSON data file.
fn load<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, String> {
    let path = dir.join(file);
    let source =
        fs::read_to_string(&path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&source).map_err(|e| format!("invalid {}: {e}", path.display()))
}

/// Write one JSON data file, pretty-printed.
fn store<T: Serialize + ?Sized>(dir: &Path, file: &str, value: &T) -> Result<(), String> {
    let path = dir.join(file);
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("cannot serialize {}: {e}", path.display()))?;
    fs::write(&path, json + "\n").map_err(|e| format!("cannot write {}: {e}", path.display()))
}

fn load_roster(dir: &Path) -> Result<Vec<PartyMember>, String> {
    load(dir, CHARACTERS_FILE)
}

fn load_bestiary(dir: &Path) -> Result<Vec<Monster>, String> {
    load(dir, MONSTERS_FILE)
}

fn load_adventures(dir: &Path) -> Result<Vec<Adventure>, String> {
    load(dir, ADVENTURES_FILE)
}

fn store_roster(dir: &Path, roster: &[PartyMember]) -> Result<(), String> {
    store(dir, CHARACTERS_FILE, roster)
}

/// Show a signed stat the way character sheets do: `+1`, `+0`, `-1`.
fn signed(value: i32) -> String {
    format!("{value:+}")
}
