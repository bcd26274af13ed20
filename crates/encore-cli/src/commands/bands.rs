use anyhow::Result;

use encore_fetch::Config;

use crate::commands::Sources;

pub async fn show_bands(
    config: &Config,
    sources: &Sources,
    page: usize,
    json: bool,
) -> Result<()> {
    let catalog = sources.load_catalog(config).await?;

    if json {
        let acts: Vec<_> = catalog.iter().collect();
        println!("{}", serde_json::to_string_pretty(&acts)?);
        return Ok(());
    }

    let page = catalog.page(page, config.page_size);

    println!("\n🎸 Bands (page {} of {})\n", page.current_page, page.total_pages);
    if page.acts.is_empty() {
        println!("  No bands on this page");
    }
    for act in page.acts {
        println!("  {:>3}  {} ({})", act.id.get(), act.name, act.creation_date);
    }
    println!("\n  {} bands in total", page.total_items);

    Ok(())
}
