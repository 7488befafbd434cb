mod favorites;
mod location;
mod promotions;

use clap::{Parser, Subcommand};
use dealspot_core::{CatalogProvider, Language, StaticCatalog};
use tracing_subscriber::EnvFilter;

use crate::favorites::FavoritesCommands;
use crate::promotions::PromotionsCommands;

#[derive(Debug, Parser)]
#[command(name = "dealspot")]
#[command(about = "Browse local deals, keep favorites, and find what is near you")]
struct Cli {
    /// UI language for labels and messages (pl or en)
    #[arg(long, global = true, default_value = "pl", env = "DEALSPOT_LANG")]
    lang: Language,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the promotions catalog
    Promotions {
        #[command(subcommand)]
        command: PromotionsCommands,
    },
    /// List promotion categories
    Categories,
    /// Manage saved promotions
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
    /// Acquire the current device position
    Locate,
    /// Select a city, or `near-you` to use the device position
    City {
        /// City name (case-insensitive) or `near-you`
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = dealspot_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    dealspot_core::validate_category_labels()?;

    tracing::debug!(env = %config.env, lang = %cli.lang, "starting");

    match cli.command {
        Some(Commands::Promotions { command }) => {
            let catalog = open_catalog(&config)?;
            promotions::run(&catalog, command, cli.lang)?;
        }
        Some(Commands::Categories) => {
            promotions::run_categories(&open_catalog(&config)?, cli.lang)?;
        }
        Some(Commands::Favorites { command }) => {
            let catalog = open_catalog(&config)?;
            favorites::run(&config, &catalog, command, cli.lang)?;
        }
        Some(Commands::Locate) => location::run_locate(&config, cli.lang).await,
        Some(Commands::City { name }) => location::run_city(&config, &name, cli.lang).await?,
        None => print_overview(cli.lang),
    }

    Ok(())
}

/// The YAML catalog when one is configured, otherwise the built-in demo deals.
fn open_catalog(config: &dealspot_core::AppConfig) -> anyhow::Result<impl CatalogProvider> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = dealspot_core::load_catalog(path)?;
            tracing::info!(path = %path.display(), promotions = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(StaticCatalog::mock()),
    }
}

fn print_overview(language: Language) {
    let t = language.translations();
    println!("dealspot ({})", language.code());
    for key in [
        dealspot_core::TranslationKey::Discover,
        dealspot_core::TranslationKey::Categories,
        dealspot_core::TranslationKey::Favorites,
        dealspot_core::TranslationKey::CurrentLocation,
    ] {
        println!("  {}", t.get(key));
    }
}
