use std::io::ErrorKind;
use std::path::Path;

use colored::Colorize;

use tavern_core::CharacterClass;
use tavern_core::roster::{create_character, format_character_name, roll_stat};
use tavern_mechanics::SeededDice;

pub fn run(
    dir: &Path,
    name: &str,
    player: &str,
    level: u32,
    class: &str,
    seed: u64,
) -> Result<(), String> {
    // A missing roster is an empty one; anything else unreadable is an error
    let mut roster = match std::fs::metadata(dir.join(super::CHARACTERS_FILE)) {
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        _ => super::load_roster(dir)?,
    };

    let name = format_character_name(name, &roster).map_err(|e| e.to_string())?;
    let class: CharacterClass = class.parse().map_err(|e: tavern_core::TavernError| e.to_string())?;

    let mut dice = SeededDice::new(seed);
    let rolls = [
        ("Body", roll_stat(&mut dice)),
        ("Mind", roll_stat(&mut dice)),
        ("Spirit", roll_stat(&mut dice)),
    ];
    let stats = (rolls[0].1.1, rolls[1].1.1, rolls[2].1.1);
    let member = create_character(&name, player, level, stats, class).map_err(|e| e.to_string())?;

    println!("  Tavern keeper: “Hello, {name}, be welcome.”");
    println!();
    for (label, ([a, b], _)) in &rolls {
        println!("  {label}:\tYou rolled {} ({a} and {b}).", a + b);
    }
    println!();
    println!(
        "  {} {} the {}, level {} ({} {}, {} {}, {} {})",
        "Recruited".green().bold(),
        member.name,
        member.class,
        member.level(),
        "Body".dimmed(),
        super::signed(member.body),
        "Mind".dimmed(),
        super::signed(member.mind),
        "Spirit".dimmed(),
        super::signed(member.spirit),
    );

    roster.push(member);
    super::store_roster(dir, &roster)
}
