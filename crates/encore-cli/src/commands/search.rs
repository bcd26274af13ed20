use anyhow::Result;
use std::sync::Arc;

use encore_fetch::Config;
use encore_search::SearchService;

use crate::commands::Sources;

pub async fn run_search(
    config: &Config,
    sources: &Sources,
    query: &str,
    json: bool,
) -> Result<()> {
    log::info!("Searching for {:?}", query);

    let catalog = sources.load_catalog(config).await?;
    let service = SearchService::new(Arc::new(catalog), sources.location_index(config)?);

    let results = service.search(query).await?;

    if json {
        let output = serde_json::json!({
            "length": results.len(),
            "bands": results.acts(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No acts match {:?}", query);
        return Ok(());
    }

    println!("\n🔎 {} results for {:?}\n", results.len(), query);
    for act in &results {
        println!("  {:>3}  {} ({})", act.id.get(), act.name, act.creation_date);
        if !act.members.is_empty() {
            println!("       members: {}", act.members.join(", "));
        }
        println!("       first album: {}", act.first_album);
    }

    Ok(())
}
