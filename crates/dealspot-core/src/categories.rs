use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, TranslationKey};
use crate::{ConfigError, CoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurants,
    Beauty,
    Health,
    Entertainment,
    Shopping,
    Sports,
    Education,
    Travel,
}

/// Presentation metadata for a category tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub label_key: TranslationKey,
    /// Background color token, e.g. `"orange-500"`.
    pub color: &'static str,
    /// Icon token from the shell's icon set.
    pub icon: &'static str,
}

impl Category {
    /// Display order of the category strip.
    pub const ALL: [Category; 8] = [
        Category::Restaurants,
        Category::Beauty,
        Category::Health,
        Category::Entertainment,
        Category::Shopping,
        Category::Sports,
        Category::Education,
        Category::Travel,
    ];

    /// Route identifier, e.g. `"restaurants"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Category::Restaurants => "restaurants",
            Category::Beauty => "beauty",
            Category::Health => "health",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Sports => "sports",
            Category::Education => "education",
            Category::Travel => "travel",
        }
    }

    #[must_use]
    pub fn descriptor(self) -> CategoryDescriptor {
        let (label_key, color, icon) = match self {
            Category::Restaurants => (TranslationKey::Restaurants, "orange-500", "utensils"),
            Category::Beauty => (TranslationKey::Beauty, "pink-500", "sparkles"),
            Category::Health => (TranslationKey::Health, "red-500", "heart"),
            Category::Entertainment => (TranslationKey::Entertainment, "purple-500", "music"),
            Category::Shopping => (TranslationKey::Shopping, "violet-500", "shopping-bag"),
            Category::Sports => (TranslationKey::Sports, "green-500", "dumbbell"),
            Category::Education => (TranslationKey::Education, "blue-500", "graduation-cap"),
            Category::Travel => (TranslationKey::Travel, "cyan-500", "plane"),
        };
        CategoryDescriptor {
            label_key,
            color,
            icon,
        }
    }

    /// Localized label for the category.
    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        language.translations().get(self.descriptor().label_key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

/// Check that every category label resolves to a non-empty string in every
/// language and that no two categories share a label key.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] naming the first offending category.
pub fn validate_category_labels() -> Result<(), ConfigError> {
    let mut seen = std::collections::HashSet::new();
    for category in Category::ALL {
        let descriptor = category.descriptor();
        if !seen.insert(descriptor.label_key) {
            return Err(ConfigError::Validation(format!(
                "category '{category}' reuses label key '{}'",
                descriptor.label_key.as_str()
            )));
        }
        for language in Language::ALL {
            if category.label(language).trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category '{category}' has no {language} label"
                )));
            }
        }
    }
    Ok(())
}
