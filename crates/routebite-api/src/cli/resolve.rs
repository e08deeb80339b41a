//! `rbite resolve` - one-shot local lookup.

use crate::state::AppState;

/// Resolve a city pair against the built-in catalog and print the stops.
pub fn resolve(state: &AppState, start: &str, end: &str, json: bool) -> anyhow::Result<()> {
    let stops = state.resolver.resolve(start, end)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stops)?);
        return Ok(());
    }

    if stops.is_empty() {
        println!("No restaurants found between {start} and {end}.");
        return Ok(());
    }

    println!(
        "  {} Restaurants between {} and {}:",
        console::style("🍽").bold(),
        console::style(start).cyan(),
        console::style(end).cyan()
    );
    for stop in &stops {
        println!("  - {} ({})", stop.name, console::style(&stop.location).dim());
    }

    Ok(())
}
