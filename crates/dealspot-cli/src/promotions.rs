//! Catalog browsing commands.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use dealspot_core::{CatalogProvider, Category, Language, Promotion, TranslationKey};

#[derive(Debug, Subcommand)]
pub enum PromotionsCommands {
    /// List current promotions
    List {
        /// Only show promotions in this category (e.g. restaurants)
        #[arg(long)]
        category: Option<Category>,
    },
    /// Show one promotion with its details
    Show {
        /// Promotion identifier
        id: String,
    },
}

/// # Errors
///
/// Returns an error if the catalog cannot be read or `show` names an unknown id.
pub(crate) fn run(
    catalog: &impl CatalogProvider,
    command: PromotionsCommands,
    language: Language,
) -> anyhow::Result<()> {
    match command {
        PromotionsCommands::List { category } => {
            for line in list_lines(catalog, category, language)? {
                println!("{line}");
            }
        }
        PromotionsCommands::Show { id } => {
            let promo = catalog
                .find_promotion(&id)?
                .ok_or_else(|| anyhow::anyhow!("no promotion with id {id}"))?;
            let today = Utc::now().date_naive();
            for line in format_promotion_details(&promo, language, today) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Heading plus one line per promotion. Expired deals are listed like any
/// other; only `show` marks them.
pub(crate) fn list_lines(
    catalog: &impl CatalogProvider,
    category: Option<Category>,
    language: Language,
) -> anyhow::Result<Vec<String>> {
    let (heading, promotions) = match category {
        Some(category) => (category.label(language), catalog.list_by_category(category)?),
        None => (
            language.translations().get(TranslationKey::PopularPromotions),
            catalog.list_promotions()?,
        ),
    };
    let mut lines = vec![heading.to_string()];
    lines.extend(promotions.iter().map(format_promotion_line));
    Ok(lines)
}

/// Print each category with its localized label and deal count.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub(crate) fn run_categories(
    catalog: &impl CatalogProvider,
    language: Language,
) -> anyhow::Result<()> {
    for line in category_lines(catalog, language)? {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn category_lines(
    catalog: &impl CatalogProvider,
    language: Language,
) -> anyhow::Result<Vec<String>> {
    let mut lines = vec![language.translations().get(TranslationKey::Categories).to_string()];
    for category in Category::ALL {
        let count = catalog.list_by_category(category)?.len();
        lines.push(format!("  {:<15}{:<20}{count}", category.id(), category.label(language)));
    }
    Ok(lines)
}

pub(crate) fn format_promotion_line(promo: &Promotion) -> String {
    format!(
        "{:<6}{:<6}{} ({}) {} -> {}",
        promo.id, promo.discount, promo.title, promo.store, promo.old_price, promo.new_price
    )
}

pub(crate) fn format_promotion_details(
    promo: &Promotion,
    language: Language,
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = vec![
        format!("{} [{}]", promo.title, promo.id),
        promo.description.clone(),
        format!("{}  {} -> {}", promo.discount, promo.old_price, promo.new_price),
        promo.store.clone(),
    ];
    if let Some(category) = promo.category {
        lines.push(category.label(language).to_string());
    }
    let Some(details) = &promo.details else {
        return lines;
    };

    if let Some(rating) = details.rating {
        let stars = usize::from(details.star_count());
        lines.push(format!(
            "{}{} {rating:.1} ({})",
            "*".repeat(stars),
            ".".repeat(5 - stars),
            details.review_count.unwrap_or(0)
        ));
    }
    if let Some(bought) = details.purchase_count {
        lines.push(format!("bought: {bought}"));
    }
    if let Some(savings) = &details.savings {
        lines.push(format!("save: {savings}"));
    }
    if let Some(until) = details.valid_until {
        let marker = if promo.is_expired_on(today) { " (expired)" } else { "" };
        lines.push(format!("valid until: {until}{marker}"));
    }
    if let Some(location) = &details.location {
        lines.push(location.clone());
    }
    if let Some(hours) = &details.hours {
        lines.push(hours.clone());
    }
    if let Some(about) = &details.company_description {
        lines.push(about.clone());
    }
    lines
}
