//! Promotion catalog access.
//!
//! The stores never depend on where promotions come from; they take any
//! [`CatalogProvider`]. [`StaticCatalog`] covers both the built-in mock deals
//! and catalogs loaded from a YAML file.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::categories::Category;
use crate::promotions::{Promotion, PromotionDetails};
use crate::ConfigError;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source could not be reached or read. In-memory catalogs never fail;
    /// providers backed by a network service or a remote store return this.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of the promotions currently on offer.
pub trait CatalogProvider {
    /// List every current promotion, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the source cannot be read.
    fn list_promotions(&self) -> Result<Vec<Promotion>, CatalogError>;

    /// Find a promotion by identifier. A miss is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogProvider::list_promotions`] failures.
    fn find_promotion(&self, id: &str) -> Result<Option<Promotion>, CatalogError> {
        Ok(self.list_promotions()?.into_iter().find(|p| p.id == id))
    }

    /// Promotions tagged with `category`, in display order.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogProvider::list_promotions`] failures.
    fn list_by_category(&self, category: Category) -> Result<Vec<Promotion>, CatalogError> {
        Ok(self
            .list_promotions()?
            .into_iter()
            .filter(|p| p.category == Some(category))
            .collect())
    }
}

/// An in-memory, fixed list of promotions.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    promotions: Vec<Promotion>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(promotions: Vec<Promotion>) -> Self {
        Self { promotions }
    }

    /// The built-in demo deals, one or more per category.
    #[must_use]
    pub fn mock() -> Self {
        let mut promotions = vec![
            card(
                "1",
                Category::Restaurants,
                "Restauracja Włoska Roma",
                "Wszystkie pizze 40% taniej",
                ("49.99 zł", "29.99 zł", "-40%"),
                "825661",
                "Roma Italian",
            ),
            card(
                "2",
                Category::Restaurants,
                "Sushi Master",
                "Zestaw 32 kawałki",
                ("159.99 zł", "119.99 zł", "-25%"),
                "2098085",
                "Sushi Master",
            ),
            card(
                "3",
                Category::Beauty,
                "Salon Beauty Plus",
                "Manicure hybrydowy",
                ("120 zł", "89 zł", "-25%"),
                "3997391",
                "Beauty Plus",
            ),
            card(
                "4",
                Category::Health,
                "Centrum Medyczne",
                "Konsultacja dietetyczna",
                ("200 zł", "150 zł", "-25%"),
                "4386466",
                "MedCenter",
            ),
            card(
                "5",
                Category::Entertainment,
                "Kino Centrum",
                "Bilety na premierę",
                ("35 zł", "25 zł", "-30%"),
                "7991579",
                "Cinema Center",
            ),
            card(
                "6",
                Category::Sports,
                "Fitness Club Pro",
                "Karnet miesięczny",
                ("199 zł", "149 zł", "-25%"),
                "841130",
                "Fitness Pro",
            ),
            card(
                "7",
                Category::Shopping,
                "Centrum Handlowe Galaxy",
                "Wyprzedaż sezonowa",
                ("299 zł", "149 zł", "-50%"),
                "5872361",
                "Galaxy Mall",
            ),
            card(
                "8",
                Category::Education,
                "Szkoła Językowa",
                "Kurs angielskiego",
                ("1200 zł", "899 zł", "-25%"),
                "4778621",
                "Language School",
            ),
            card(
                "9",
                Category::Travel,
                "Biuro Podróży",
                "Wakacje w Grecji",
                ("3999 zł", "2999 zł", "-25%"),
                "1430677",
                "Travel Agency",
            ),
        ];

        let mut massage = card(
            "b2",
            Category::Beauty,
            "Masaż relaksacyjny -30%",
            "60-minutowy masaż relaksacyjny całego ciała. Idealny na zrelaksowanie się po ciężkim dniu pracy.",
            ("150.00 zł", "105.00 zł", "-30%"),
            "3822622",
            "Salon Piękności Harmonia",
        );
        massage.details = Some(PromotionDetails {
            location: Some("ul. Piękna 15, Warszawa".to_string()),
            rating: Some(4.9),
            review_count: Some(28),
            purchase_count: Some(75),
            valid_until: NaiveDate::from_ymd_opt(2024, 8, 16),
            savings: Some("45.00 zł".to_string()),
            company_description: Some(
                "Profesjonalny salon kosmetyczny oferujący szeroki zakres usług pielęgnacyjnych dla kobiet i mężczyzn."
                    .to_string(),
            ),
            hours: Some("Pon-Pt: 10:00-20:00, Sob: 10:00-16:00".to_string()),
        });
        promotions.push(massage);

        Self { promotions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_promotions(&self) -> Result<Vec<Promotion>, CatalogError> {
        Ok(self.promotions.clone())
    }
}

fn card(
    id: &str,
    category: Category,
    title: &str,
    description: &str,
    (old_price, new_price, discount): (&str, &str, &str),
    pexels_photo: &str,
    store: &str,
) -> Promotion {
    Promotion {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        old_price: old_price.to_string(),
        new_price: new_price.to_string(),
        discount: discount.to_string(),
        image_url: format!(
            "https://images.pexels.com/photos/{pexels_photo}/pexels-photo-{pexels_photo}.jpeg"
        ),
        store: store.to_string(),
        category: Some(category),
        details: None,
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub promotions: Vec<Promotion>,
}

/// Load and validate a promotions catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<StaticCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog_file: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    validate_catalog(&catalog_file)?;

    Ok(StaticCatalog::new(catalog_file.promotions))
}

fn validate_catalog(catalog_file: &CatalogFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for promo in &catalog_file.promotions {
        if promo.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "promotion '{}' has an empty id",
                promo.title
            )));
        }

        if promo.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "promotion '{}' has an empty title",
                promo.id
            )));
        }

        if !seen_ids.insert(promo.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate promotion id: '{}'",
                promo.id
            )));
        }

        if let Some(rating) = promo.details.as_ref().and_then(|d| d.rating) {
            if !(0.0..=5.0).contains(&rating) {
                return Err(ConfigError::Validation(format!(
                    "promotion '{}' has rating {rating}; must be between 0 and 5",
                    promo.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
