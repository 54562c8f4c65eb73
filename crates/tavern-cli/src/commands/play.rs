use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tracing::debug;

use tavern_core::roster::{MAX_PARTY_SIZE, MIN_PARTY_SIZE, field_party};
use tavern_core::{Adventure, PartyMember};
use tavern_engine::{AdventureOutcome, AdventureRun, EngineConfig, EventKind};

pub fn run(
    dir: &Path,
    adventure: &str,
    picks: &[usize],
    seed: u64,
    save: bool,
    quiet: bool,
    follow: Option<&str>,
) -> Result<(), String> {
    let mut roster = super::load_roster(dir)?;
    let adventures = super::load_adventures(dir)?;
    let adventure = find_adventure(&adventures, adventure)?;

    // Roster numbers are 1-based on the command line
    let picks = picks
        .iter()
        .map(|&n| match n.checked_sub(1) {
            Some(i) if i < roster.len() => Ok(i),
            _ => Err(format!("no character number {n} in the roster")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let party = field_party(&roster, &picks, MIN_PARTY_SIZE, MAX_PARTY_SIZE)
        .map_err(|e| e.to_string())?;

    debug!(adventure = %adventure.name(), party = party.len(), seed, "starting adventure");
    let config = EngineConfig::default().with_seed(seed);
    let report = AdventureRun::new(adventure.clone(), party, &config)
        .map_err(|e| e.to_string())?
        .run();

    if !quiet {
        let events = match follow {
            Some(name) => report.events.events_for(name),
            None => report.events.events().iter().collect(),
        };
        for event in events {
            println!("{}", colorize_event(&event.kind, &event.description));
        }
        println!();
    }

    match report.outcome {
        AdventureOutcome::Completed { party } => {
            println!(
                "  {} '{}' {}",
                "Completed".green().bold(),
                adventure.name(),
                format!("(seed={seed})").dimmed()
            );
            println!();
            println!("{}", party_table(&party));
            if save {
                for member in party {
                    if let Some(slot) = roster.iter_mut().find(|c| c.name == member.name) {
                        *slot = member;
                    }
                }
                super::store_roster(dir, &roster)?;
                println!();
                println!("  Party saved to {}", super::CHARACTERS_FILE);
            }
        }
        AdventureOutcome::Aborted { encounter } => {
            println!(
                "  {} '{}' in encounter {encounter} {}",
                "Defeated".red().bold(),
                adventure.name(),
                format!("(seed={seed})").dimmed()
            );
            if save {
                println!("  Nothing saved: the party never made it back.");
            }
        }
    }

    Ok(())
}

/// Find an adventure by its 1-based number or by name, ignoring case.
fn find_adventure<'a>(adventures: &'a [Adventure], query: &str) -> Result<&'a Adventure, String> {
    if let Ok(number) = query.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|i| adventures.get(i))
            .ok_or_else(|| format!("no adventure number {number}"));
    }
    adventures
        .iter()
        .find(|a| a.name().eq_ignore_ascii_case(query))
        .ok_or_else(|| format!("adventure not found: {query}"))
}

fn party_table(party: &[PartyMember]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Class", "Level", "XP", "HP"]);
    for member in party {
        table.add_row(vec![
            member.name.clone(),
            member.class.to_string(),
            member.level().to_string(),
            member.xp.to_string(),
            format!("{} / {}", member.current_hp, member.max_hp),
        ]);
    }
    table
}

fn colorize_event(kind: &EventKind, description: &str) -> colored::ColoredString {
    match kind {
        EventKind::StageStarted { .. } | EventKind::EncounterStarted { .. } => description.bold(),
        EventKind::MonsterDied { .. } => description.red(),
        EventKind::MemberFell { .. } | EventKind::PartyDefeated => description.red().bold(),
        EventKind::Healed(_) | EventKind::Rested(_) => description.green(),
        EventKind::Advanced(_) | EventKind::EnemiesDefeated { .. } => description.cyan(),
        EventKind::AdventureCompleted { .. } => description.green().bold(),
        EventKind::AdventureStarted { .. }
        | EventKind::Prepared(_)
        | EventKind::InitiativeRolled { .. }
        | EventKind::RoundStarted { .. }
        | EventKind::Attacked(_)
        | EventKind::RoundEnded { .. } => description.normal(),
    }
}
