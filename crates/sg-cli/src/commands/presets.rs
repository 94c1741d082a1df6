use comfy_table::{ContentArrangement, Table};
use sg_core::preset::{self, PRESET_IDS};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Preset", "Player 1", "Player 2", "Nature"]);

    for id in PRESET_IDS {
        let Some(game) = preset::by_id(id) else {
            continue;
        };
        table.add_row(vec![
            game.id,
            game.p1_name,
            game.p2_name,
            game.nature.join(", "),
        ]);
    }

    println!("{table}");
    Ok(())
}
