//! Integration tests for the tavern CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MINION: &str = r#"{
    "name": "Rat",
    "challenge": "Minion",
    "experience": 50,
    "hitPoints": 1,
    "initiative": 0,
    "damageDice": "d4",
    "damageType": "physical"
}"#;

const BOSS: &str = r#"{
    "name": "Ogre",
    "challenge": "Boss",
    "experience": 300,
    "hitPoints": 40,
    "initiative": 2,
    "damageDice": "d12",
    "damageType": "physical"
}"#;

/// Create a temp directory with a roster, a bestiary and two adventures.
///
/// The three Warriors have 60 HP each and the cellar holds a single rat with
/// 1 HP, so "Rat Cellar" is won whatever the dice say.
fn test_tavern() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("characters.json"),
        r#"[
  { "name": "Ann", "player": "Kim", "xp": 400, "body": 2, "mind": 0, "spirit": 0, "class": "Warrior" },
  { "name": "Bo", "player": "Kim", "xp": 400, "body": 2, "mind": 0, "spirit": 0, "class": "Warrior" },
  { "name": "Cy", "player": "Lou", "xp": 400, "body": 2, "mind": 0, "spirit": 0, "class": "Warrior" },
  { "name": "Dee", "player": "Lou", "xp": 0, "body": 0, "mind": 1, "spirit": 0, "class": "Mage" }
]
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("monsters.json"),
        format!("[{MINION}, {BOSS}]\n"),
    )
    .unwrap();
    fs::write(
        dir.path().join("adventures.json"),
        format!(
            r#"[
  {{ "name": "Rat Cellar", "numberEncounters": 1, "encounters": [[{{ "monster": {MINION}, "value": 1 }}]] }},
  {{ "name": "Ogre Bridge", "numberEncounters": 1, "encounters": [[{{ "monster": {BOSS}, "value": 1 }}]] }}
]
"#
        ),
    )
    .unwrap();
    dir
}

fn tavern() -> Command {
    let mut cmd = Command::cargo_bin("tavern").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// listings
// ---------------------------------------------------------------------------

#[test]
fn adventures_lists_every_adventure() {
    let dir = test_tavern();
    tavern()
        .args(["adventures", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rat Cellar")
                .and(predicate::str::contains("Ogre Bridge"))
                .and(predicate::str::contains("2 adventures")),
        );
}

#[test]
fn adventures_without_boss_show_a_plain_dash() {
    let dir = test_tavern();
    tavern()
        .args(["adventures", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1 encounter(s)")
                .and(predicate::str::contains(" - "))
                .and(predicate::str::contains("—").not()),
        );
}

#[test]
fn monsters_lists_the_bestiary() {
    let dir = test_tavern();
    tavern()
        .args(["monsters", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rat")
                .and(predicate::str::contains("Boss"))
                .and(predicate::str::contains("d12 physical"))
                .and(predicate::str::contains("+2")),
        );
}

#[test]
fn roster_filters_by_player() {
    let dir = test_tavern();
    tavern()
        .args(["roster", "-p", "Lou", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cy")
                .and(predicate::str::contains("Dee"))
                .and(predicate::str::contains("Ann").not()),
        );
}

#[test]
fn roster_unknown_player_is_empty() {
    let dir = test_tavern();
    tavern()
        .args(["roster", "-p", "Nobody", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No characters found."));
}

#[test]
fn missing_data_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    tavern()
        .args(["adventures", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read"));
}

#[test]
fn malformed_data_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("monsters.json"), "[{ \"name\": 3 }]").unwrap();
    tavern()
        .args(["monsters", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid"));
}

// ---------------------------------------------------------------------------
// recruit
// ---------------------------------------------------------------------------

#[test]
fn recruit_creates_the_roster() {
    let dir = TempDir::new().unwrap();
    tavern()
        .args([
            "recruit",
            "  sir   lancelot ",
            "--player",
            "Kim",
            "--level",
            "5",
            "-d",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hello, Sir Lancelot, be welcome.")
                .and(predicate::str::contains("You rolled"))
                .and(predicate::str::contains("Recruited Sir Lancelot the Warrior, level 5")),
        );

    let saved = fs::read_to_string(dir.path().join("characters.json")).unwrap();
    assert!(saved.contains("\"name\": \"Sir Lancelot\""));
    assert!(saved.contains("\"xp\": 400"));
    assert!(saved.contains("\"class\": \"Warrior\""));
}

#[test]
fn recruit_appends_to_existing_roster() {
    let dir = test_tavern();
    tavern()
        .args(["recruit", "Eve", "--player", "Kim", "-c", "cleric", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("characters.json")).unwrap();
    assert!(saved.contains("\"name\": \"Dee\""));
    assert!(saved.contains("\"name\": \"Eve\""));
    assert!(saved.contains("\"class\": \"Cleric\""));
}

#[test]
fn recruit_rejects_duplicate_name() {
    let dir = test_tavern();
    tavern()
        .args(["recruit", "ann", "--player", "Kim", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character already exists"));
}

#[test]
fn recruit_rejects_bad_level_and_class() {
    let dir = test_tavern();
    tavern()
        .args(["recruit", "Eve", "--player", "Kim", "-l", "11", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid level 11"));
    tavern()
        .args(["recruit", "Eve", "--player", "Kim", "-c", "Bard", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown character class"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_tells_the_story() {
    let dir = test_tavern();
    tavern()
        .args(["play", "Rat Cellar", "-p", "1,2,3", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The “Rat Cellar” will start soon...")
                .and(predicate::str::contains("Starting Encounter 1:"))
                .and(predicate::str::contains("Rolling initiative..."))
                .and(predicate::str::contains("All enemies are defeated."))
                .and(predicate::str::contains("Congratulations, your party completed “Rat Cellar”"))
                .and(predicate::str::contains("Completed 'Rat Cellar'")),
        );
}

#[test]
fn play_by_number_and_quiet() {
    let dir = test_tavern();
    tavern()
        .args(["play", "1", "-p", "1,2,3", "-q", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Completed 'Rat Cellar'")
                .and(predicate::str::contains("Rolling initiative").not()),
        );
}

#[test]
fn play_follow_tells_only_one_combatants_story() {
    let dir = test_tavern();
    tavern()
        .args(["play", "Rat Cellar", "-p", "1,2,3", "--follow", "Rat", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rolling initiative...")
                .and(predicate::str::contains("Rat dies."))
                .and(predicate::str::contains("Starting Encounter 1:").not())
                .and(predicate::str::contains("All enemies are defeated.").not())
                .and(predicate::str::contains("Completed 'Rat Cellar'")),
        );
}

#[test]
fn play_follow_and_quiet_conflict() {
    let dir = test_tavern();
    tavern()
        .args(["play", "1", "-p", "1,2,3", "-q", "-f", "Ann", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn play_is_reproducible_with_a_seed() {
    let dir = test_tavern();
    let run = || {
        tavern()
            .args(["play", "rat cellar", "-p", "3,1,2", "-s", "9", "-d", dir.path().to_str().unwrap()])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn play_save_writes_experience_back() {
    let dir = test_tavern();
    tavern()
        .args(["play", "Rat Cellar", "-p", "1,2,3", "--save", "-q", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Party saved to characters.json"));

    let saved = fs::read_to_string(dir.path().join("characters.json")).unwrap();
    assert_eq!(saved.matches("\"xp\": 450").count(), 3);
    // Dee stayed home.
    assert!(saved.contains("\"xp\": 0"));
}

#[test]
fn play_without_save_leaves_roster_untouched() {
    let dir = test_tavern();
    let before = fs::read_to_string(dir.path().join("characters.json")).unwrap();
    tavern()
        .args(["play", "Rat Cellar", "-p", "1,2,3", "-q", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success();
    let after = fs::read_to_string(dir.path().join("characters.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn play_rejects_small_party() {
    let dir = test_tavern();
    tavern()
        .args(["play", "Rat Cellar", "-p", "1,2", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a party needs between 3 and 5 members, got 2"));
}

#[test]
fn play_rejects_same_character_twice() {
    let dir = test_tavern();
    tavern()
        .args(["play", "Rat Cellar", "-p", "1,2,1", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in the party"));
}

#[test]
fn play_rejects_unknown_roster_number() {
    let dir = test_tavern();
    tavern()
        .args(["play", "Rat Cellar", "-p", "1,2,9", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no character number 9"));
    tavern()
        .args(["play", "Rat Cellar", "-p", "0,1,2", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no character number 0"));
}

#[test]
fn play_rejects_unknown_adventure() {
    let dir = test_tavern();
    tavern()
        .args(["play", "Dragon Lair", "-p", "1,2,3", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("adventure not found: Dragon Lair"));
    tavern()
        .args(["play", "7", "-p", "1,2,3", "-d", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no adventure number 7"));
}
