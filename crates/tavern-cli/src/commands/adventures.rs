use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(dir: &Path) -> Result<(), String> {
    let adventures = super::load_adventures(dir)?;

    if adventures.is_empty() {
        println!("  No adventures found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Encounters", "Monsters", "Boss"]);

    for (index, adventure) in adventures.iter().enumerate() {
        let monsters: u32 = adventure
            .encounters()
            .iter()
            .map(|e| e.monster_count())
            .sum();
        let bosses = adventure
            .encounters()
            .iter()
            .filter(|e| e.has_boss())
            .count();
        let boss = if bosses > 0 {
            format!("{bosses} encounter(s)")
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            (index + 1).to_string(),
            adventure.name().to_string(),
            adventure.encounters().len().to_string(),
            monsters.to_string(),
            boss,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} adventures", adventures.len());

    Ok(())
}
