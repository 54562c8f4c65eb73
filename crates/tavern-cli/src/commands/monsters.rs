use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(dir: &Path) -> Result<(), String> {
    let bestiary = super::load_bestiary(dir)?;

    if bestiary.is_empty() {
        println!("  No monsters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name",
        "Challenge",
        "XP",
        "HP",
        "Initiative",
        "Damage",
    ]);

    for monster in &bestiary {
        table.add_row(vec![
            monster.name.clone(),
            monster.challenge.to_string(),
            monster.experience.to_string(),
            monster.hit_points.to_string(),
            super::signed(monster.initiative_bonus),
            format!("{} {}", monster.damage_dice, monster.damage_type),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} monsters", bestiary.len());

    Ok(())
}
