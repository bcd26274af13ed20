use anyhow::{Context, Result};

use encore_core::ActId;
use encore_fetch::{ApiClient, Config};

use crate::commands::Sources;

/// Show one act together with its concert locations and dates.
///
/// The act is looked up in the catalog by position; its locations and
/// dates are fetched from the links the act carries.
pub async fn show_act(config: &Config, sources: &Sources, id: i64, json: bool) -> Result<()> {
    let catalog = sources.load_catalog(config).await?;
    let act = catalog.require(ActId::new(id))?;

    let client = ApiClient::new(config)?;
    let (locations, dates) = tokio::try_join!(
        client.fetch_act_locations(act),
        client.fetch_concert_dates(act),
    )
    .with_context(|| format!("Failed to fetch details for {}", act.name))?;
    log::debug!(
        "{}: {} locations, {} dates",
        act.name,
        locations.locations.len(),
        dates.dates.len()
    );

    if json {
        let output = serde_json::json!({
            "band": act,
            "locations": locations.locations,
            "dates": dates.dates,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n🎤 {} ({})\n", act.name, act.creation_date);
    if !act.members.is_empty() {
        println!("  members:     {}", act.members.join(", "));
    }
    println!("  first album: {}", act.first_album);

    println!("\n  Locations");
    for location in &locations.locations {
        println!("    {}", location.replace('_', " "));
    }

    println!("\n  Concert dates");
    for date in dates.plain() {
        println!("    {}", date);
    }

    Ok(())
}
