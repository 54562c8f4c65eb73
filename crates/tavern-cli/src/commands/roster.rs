use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use tavern_core::roster::characters_for_player;

pub fn run(dir: &Path, player: Option<&str>) -> Result<(), String> {
    let roster = super::load_roster(dir)?;
    let shown = characters_for_player(&roster, player.unwrap_or(""));

    if shown.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#", "Name", "Player", "Level", "XP", "Class", "Body", "Mind", "Spirit",
    ]);

    for member in &shown {
        // Party picks refer to the position in the full roster
        let number = roster
            .iter()
            .position(|c| c.name == member.name)
            .map_or_else(|| "?".to_string(), |i| (i + 1).to_string());
        table.add_row(vec![
            number,
            member.name.clone(),
            member.player.clone(),
            member.level().to_string(),
            member.xp.to_string(),
            member.class.to_string(),
            super::signed(member.body),
            super::signed(member.mind),
            super::signed(member.spirit),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", shown.len());

    Ok(())
}
