//! Saved-promotion commands backed by the on-disk favorites entry.

use clap::Subcommand;
use dealspot_core::{AppConfig, CatalogProvider, Language, TranslationKey};
use dealspot_store::{FavoritesStore, FileStorage, KeyValueStorage};

use crate::promotions::format_promotion_line;

#[derive(Debug, Subcommand)]
pub enum FavoritesCommands {
    /// List saved promotions
    List,
    /// Save a promotion from the catalog
    Add {
        /// Promotion identifier
        id: String,
    },
    /// Remove a saved promotion
    Remove {
        /// Promotion identifier
        id: String,
    },
    /// Save the promotion if it is not saved, remove it otherwise
    Toggle {
        /// Promotion identifier
        id: String,
    },
}

/// # Errors
///
/// Returns an error for ids missing from the catalog, catalog read failures,
/// and favorites that could not be written back to disk.
pub(crate) fn run(
    config: &AppConfig,
    catalog: &impl CatalogProvider,
    command: FavoritesCommands,
    language: Language,
) -> anyhow::Result<()> {
    let mut store = FavoritesStore::load(FileStorage::new(config.data_dir.clone()));
    let lines = apply(&mut store, catalog, command, language)?;
    for line in lines {
        println!("{line}");
    }
    if let Some(err) = store.persist_error() {
        anyhow::bail!("favorites were not saved: {err}");
    }
    Ok(())
}

/// Apply one command to `store` and return the lines to print.
pub(crate) fn apply<S: KeyValueStorage>(
    store: &mut FavoritesStore<S>,
    catalog: &impl CatalogProvider,
    command: FavoritesCommands,
    language: Language,
) -> anyhow::Result<Vec<String>> {
    let t = language.translations();
    let lines = match command {
        FavoritesCommands::List => {
            let mut lines = vec![t.get(TranslationKey::Favorites).to_string()];
            if store.is_empty() {
                lines.push(t.get(TranslationKey::NoFavorites).to_string());
            } else {
                lines.extend(store.favorites().iter().map(format_promotion_line));
            }
            lines
        }
        FavoritesCommands::Add { id } => {
            let promo = catalog
                .find_promotion(&id)?
                .ok_or_else(|| anyhow::anyhow!("no promotion with id {id}"))?;
            if store.add_favorite(promo) {
                vec![format!("+ {id}")]
            } else {
                vec![format!("= {id}")]
            }
        }
        FavoritesCommands::Remove { id } => {
            if store.remove_favorite(&id) {
                vec![format!("- {id}")]
            } else {
                vec![format!("= {id}")]
            }
        }
        FavoritesCommands::Toggle { id } => {
            let promo = catalog
                .find_promotion(&id)?
                .ok_or_else(|| anyhow::anyhow!("no promotion with id {id}"))?;
            if store.toggle_favorite(promo) {
                vec![format!("+ {id}")]
            } else {
                vec![format!("- {id}")]
            }
        }
    };
    Ok(lines)
}
