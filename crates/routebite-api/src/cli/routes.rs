//! `rbite routes` - print the connection table.

use comfy_table::{Table, presets::UTF8_FULL};

use crate::state::AppState;

/// List every known directional connection with its road and stop count.
pub fn routes(state: &AppState, json: bool) -> anyhow::Result<()> {
    let catalog = state.resolver.catalog();

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.connections())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["From", "To", "Road", "Stops"]);
    for conn in catalog.connections() {
        let stops = catalog.restaurants_on(&conn.road).count();
        table.add_row(vec![
            conn.from.clone(),
            conn.to.clone(),
            conn.road.clone(),
            stops.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
