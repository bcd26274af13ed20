use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use encore_fetch::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "encore", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Upstream API base URL (default: https://groupietrackers.herokuapp.com/api)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Read the act catalog from a JSON file instead of the upstream API
    #[arg(long, global = true)]
    catalog_file: Option<PathBuf>,

    /// Read the location index from a JSON file instead of the upstream API
    #[arg(long, global = true)]
    locations_file: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search acts by name, formation year, debut album, member, or location
    ///
    /// Only the text before the first " - " is searched for, so autocomplete
    /// suggestions such as "Queen - band" or "1970 - creation date" can be
    /// pasted as-is.
    ///
    /// Matching rules:
    ///
    /// - Formation year: exact match when the query is a number
    /// - Name: case- and whitespace-insensitive substring
    /// - Debut album: case-sensitive substring
    /// - Members: case-insensitive substring
    /// - Locations: case-insensitive substring, underscores read as spaces
    ///
    /// An act matching several of year, name and debut album is listed once
    /// per match. The location index is fetched fresh for every search.
    Search {
        /// The query, e.g. "queen" or "Freddie Mercury - member"
        query: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one act with its concert locations and dates
    Show {
        /// Catalog position of the act (1-based, as listed by `encore bands`)
        id: i64,

        /// Print the act and its details as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse the catalog page by page
    Bands {
        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Print the whole catalog as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Show or initialise configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Write an example config file if none exists
    Init,
    /// Print the config file location
    Path,
}

fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.api_url {
        Some(url) => Config::load_with_api_base_url(url)?,
        None => Config::load()?,
    };
    init_logging(&config);
    log::debug!(
        "Loaded configuration from {}",
        encore_fetch::config::config_file_path().display()
    );

    let sources = commands::Sources {
        catalog_file: cli.catalog_file,
        locations_file: cli.locations_file,
    };

    match cli.command {
        Commands::Search { query, json } => {
            commands::run_search(&config, &sources, &query, json).await?;
        }
        Commands::Show { id, json } => {
            commands::show_act(&config, &sources, id, json).await?;
        }
        Commands::Bands { page, json } => {
            commands::show_bands(&config, &sources, page, json).await?;
        }
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Path => commands::config::show_path(),
        },
    }

    Ok(())
}
