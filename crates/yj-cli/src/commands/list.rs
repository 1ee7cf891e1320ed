use comfy_table::{ContentArrangement, Table};

use yj_core::hexagram;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Key", "Upper", "Lower"]);

    for h in hexagram::all() {
        table.add_row(vec![
            h.index().to_string(),
            h.name().to_string(),
            h.key().to_string(),
            h.upper_trigram().to_string(),
            h.lower_trigram().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", hexagram::all().len());

    Ok(())
}
