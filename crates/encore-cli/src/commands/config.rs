use anyhow::{Context, Result};
use encore_fetch::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    let path = config::config_file_path();
    println!("Config file: {}", path.display());
    let exists = if path.exists() {
        "yes"
    } else {
        "no (using defaults)"
    };
    println!("File exists: {}\n", exists);

    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
    print!("{}", rendered);

    println!("\nPriority: CLI args > ENV vars (ENCORE_*) > Config file > Defaults");

    Ok(())
}

/// Write the example config file unless one already exists.
pub fn init_config() -> Result<()> {
    let path = config::config_file_path();
    if config::ensure_config_file()? {
        println!("Created {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}

pub fn show_path() {
    println!("{}", config::config_file_path().display());
}
