//! UI languages and their translation tables.
//!
//! Every [`TranslationKey`] is resolved by an exhaustive `match` per language,
//! so a key missing from either table fails to compile.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// The two supported UI languages. Polish is the primary locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Polish, Language::English];

    /// ISO 639-1 code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Polish => "pl",
            Language::English => "en",
        }
    }

    /// The other supported language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::Polish => Language::English,
            Language::English => Language::Polish,
        }
    }

    #[must_use]
    pub fn translations(self) -> Translations {
        Translations { language: self }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pl" => Ok(Language::Polish),
            "en" => Ok(Language::English),
            _ => Err(CoreError::InvalidLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TranslationKey {
    Discover,
    Categories,
    Map,
    Favorites,
    More,
    SearchPlaceholder,
    PopularPromotions,
    NearbyPromotions,
    ViewAll,
    Restaurants,
    Beauty,
    Health,
    Entertainment,
    Shopping,
    Sports,
    Education,
    Travel,
    AccountManagement,
    AccountDetails,
    PaymentCards,
    Vouchers,
    SurpriseBonuses,
    Notifications,
    Community,
    InviteFriends,
    RecommendPlace,
    RegisterLocation,
    Support,
    OrderHelp,
    AppFunctionality,
    CurrentLocation,
    Distance,
    NoFavorites,
    SelectCity,
    ChangeLanguage,
    Settings,
    NearYou,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 37] = [
        TranslationKey::Discover,
        TranslationKey::Categories,
        TranslationKey::Map,
        TranslationKey::Favorites,
        TranslationKey::More,
        TranslationKey::SearchPlaceholder,
        TranslationKey::PopularPromotions,
        TranslationKey::NearbyPromotions,
        TranslationKey::ViewAll,
        TranslationKey::Restaurants,
        TranslationKey::Beauty,
        TranslationKey::Health,
        TranslationKey::Entertainment,
        TranslationKey::Shopping,
        TranslationKey::Sports,
        TranslationKey::Education,
        TranslationKey::Travel,
        TranslationKey::AccountManagement,
        TranslationKey::AccountDetails,
        TranslationKey::PaymentCards,
        TranslationKey::Vouchers,
        TranslationKey::SurpriseBonuses,
        TranslationKey::Notifications,
        TranslationKey::Community,
        TranslationKey::InviteFriends,
        TranslationKey::RecommendPlace,
        TranslationKey::RegisterLocation,
        TranslationKey::Support,
        TranslationKey::OrderHelp,
        TranslationKey::AppFunctionality,
        TranslationKey::CurrentLocation,
        TranslationKey::Distance,
        TranslationKey::NoFavorites,
        TranslationKey::SelectCity,
        TranslationKey::ChangeLanguage,
        TranslationKey::Settings,
        TranslationKey::NearYou,
    ];

    /// The lookup name used by callers that address labels by string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TranslationKey::Discover => "discover",
            TranslationKey::Categories => "categories",
            TranslationKey::Map => "map",
            TranslationKey::Favorites => "favorites",
            TranslationKey::More => "more",
            TranslationKey::SearchPlaceholder => "searchPlaceholder",
            TranslationKey::PopularPromotions => "popularPromotions",
            TranslationKey::NearbyPromotions => "nearbyPromotions",
            TranslationKey::ViewAll => "viewAll",
            TranslationKey::Restaurants => "restaurants",
            TranslationKey::Beauty => "beauty",
            TranslationKey::Health => "health",
            TranslationKey::Entertainment => "entertainment",
            TranslationKey::Shopping => "shopping",
            TranslationKey::Sports => "sports",
            TranslationKey::Education => "education",
            TranslationKey::Travel => "travel",
            TranslationKey::AccountManagement => "accountManagement",
            TranslationKey::AccountDetails => "accountDetails",
            TranslationKey::PaymentCards => "paymentCards",
            TranslationKey::Vouchers => "vouchers",
            TranslationKey::SurpriseBonuses => "surpriseBonuses",
            TranslationKey::Notifications => "notifications",
            TranslationKey::Community => "community",
            TranslationKey::InviteFriends => "inviteFriends",
            TranslationKey::RecommendPlace => "recommendPlace",
            TranslationKey::RegisterLocation => "registerLocation",
            TranslationKey::Support => "support",
            TranslationKey::OrderHelp => "orderHelp",
            TranslationKey::AppFunctionality => "appFunctionality",
            TranslationKey::CurrentLocation => "currentLocation",
            TranslationKey::Distance => "distance",
            TranslationKey::NoFavorites => "noFavorites",
            TranslationKey::SelectCity => "selectCity",
            TranslationKey::ChangeLanguage => "changeLanguage",
            TranslationKey::Settings => "settings",
            TranslationKey::NearYou => "nearYou",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

/// Read-only view of one language's translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    language: Language,
}

impl Translations {
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn get(&self, key: TranslationKey) -> &'static str {
        match self.language {
            Language::Polish => polish(key),
            Language::English => english(key),
        }
    }

    /// Resolve a label by its string name; `None` for unknown names.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        TranslationKey::from_name(name).map(|key| self.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TranslationKey, &'static str)> + '_ {
        TranslationKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }

    /// The full table keyed by lookup name.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, &'static str> {
        self.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
}

fn polish(key: TranslationKey) -> &'static str {
    match key {
        TranslationKey::Discover => "Odkrywaj",
        TranslationKey::Categories => "Kategorie",
        TranslationKey::Map => "Mapa",
        TranslationKey::Favorites => "Ulubione",
        TranslationKey::More => "Więcej",
        TranslationKey::SearchPlaceholder => "Szukaj promocji, usług, lokalizacji...",
        TranslationKey::PopularPromotions => "Popularne Promocje",
        TranslationKey::NearbyPromotions => "Promocje w pobliżu",
        TranslationKey::ViewAll => "Zobacz wszystkie",
        TranslationKey::Restaurants => "Restauracje",
        TranslationKey::Beauty => "Uroda",
        TranslationKey::Health => "Zdrowie",
        TranslationKey::Entertainment => "Rozrywka",
        TranslationKey::Shopping => "Zakupy",
        TranslationKey::Sports => "Sport",
        TranslationKey::Education => "Edukacja",
        TranslationKey::Travel => "Podróże",
        TranslationKey::AccountManagement => "Zarządzanie Kontem",
        TranslationKey::AccountDetails => "Dane konta",
        TranslationKey::PaymentCards => "Karty płatnicze",
        TranslationKey::Vouchers => "Vouchery",
        TranslationKey::SurpriseBonuses => "Bonusy-niespodzianki",
        TranslationKey::Notifications => "Powiadomienia",
        TranslationKey::Community => "Społeczność",
        TranslationKey::InviteFriends => "Zaproś znajomych",
        TranslationKey::RecommendPlace => "Poleć miejsce",
        TranslationKey::RegisterLocation => "Zarejestruj lokal",
        TranslationKey::Support => "Wsparcie",
        TranslationKey::OrderHelp => "Pomoc z zamówieniem",
        TranslationKey::AppFunctionality => "Funkcjonalność aplikacji",
        TranslationKey::CurrentLocation => "Obecna lokalizacja",
        TranslationKey::Distance => "Odległość",
        TranslationKey::NoFavorites => "Nie masz jeszcze ulubionych promocji",
        TranslationKey::SelectCity => "Wybierz miasto",
        TranslationKey::ChangeLanguage => "Zmień język",
        TranslationKey::Settings => "Ustawienia",
        TranslationKey::NearYou => "Blisko Ciebie",
    }
}

fn english(key: TranslationKey) -> &'static str {
    match key {
        TranslationKey::Discover => "Discover",
        TranslationKey::Categories => "Categories",
        TranslationKey::Map => "Map",
        TranslationKey::Favorites => "Favorites",
        TranslationKey::More => "More",
        TranslationKey::SearchPlaceholder => "Search promotions, services, locations...",
        TranslationKey::PopularPromotions => "Popular Promotions",
        TranslationKey::NearbyPromotions => "Nearby Promotions",
        TranslationKey::ViewAll => "View all",
        TranslationKey::Restaurants => "Restaurants",
        TranslationKey::Beauty => "Beauty",
        TranslationKey::Health => "Health",
        TranslationKey::Entertainment => "Entertainment",
        TranslationKey::Shopping => "Shopping",
        TranslationKey::Sports => "Sports",
        TranslationKey::Education => "Education",
        TranslationKey::Travel => "Travel",
        TranslationKey::AccountManagement => "Account Management",
        TranslationKey::AccountDetails => "Account Details",
        TranslationKey::PaymentCards => "Payment Cards",
        TranslationKey::Vouchers => "Vouchers",
        TranslationKey::SurpriseBonuses => "Surprise Bonuses",
        TranslationKey::Notifications => "Notifications",
        TranslationKey::Community => "Community",
        TranslationKey::InviteFriends => "Invite Friends",
        TranslationKey::RecommendPlace => "Recommend Place",
        TranslationKey::RegisterLocation => "Register Location",
        TranslationKey::Support => "Support",
        TranslationKey::OrderHelp => "Order Help",
        TranslationKey::AppFunctionality => "App Functionality",
        TranslationKey::CurrentLocation => "Current Location",
        TranslationKey::Distance => "Distance",
        TranslationKey::NoFavorites => "You don't have any favorite promotions yet",
        TranslationKey::SelectCity => "Select City",
        TranslationKey::ChangeLanguage => "Change Language",
        TranslationKey::Settings => "Settings",
        TranslationKey::NearYou => "Near you",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_language_is_polish() {
        assert_eq!(Language::default(), Language::Polish);
    }

    #[test]
    fn language_parses_codes_case_insensitively() {
        assert_eq!("pl".parse::<Language>().unwrap(), Language::Polish);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn language_rejects_unsupported_code() {
        let err = "de".parse::<Language>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidLanguage(ref v) if v == "de"));
    }

    #[test]
    fn language_serializes_as_code() {
        let json = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(json, "\"en\"");
        let parsed: Language = serde_json::from_str("\"pl\"").unwrap();
        assert_eq!(parsed, Language::Polish);
    }

    #[test]
    fn toggled_flips_between_both_languages() {
        assert_eq!(Language::Polish.toggled(), Language::English);
        assert_eq!(Language::English.toggled(), Language::Polish);
    }

    #[test]
    fn key_names_are_unique_and_resolvable() {
        let mut seen = HashSet::new();
        for key in TranslationKey::ALL {
            assert!(seen.insert(key.as_str()), "duplicate key name {}", key.as_str());
            assert_eq!(TranslationKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(seen.len(), TranslationKey::ALL.len());
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        let pl = Language::Polish.translations().to_map();
        let en = Language::English.translations().to_map();
        let pl_keys: HashSet<_> = pl.keys().collect();
        let en_keys: HashSet<_> = en.keys().collect();
        assert_eq!(pl_keys, en_keys);
        assert_eq!(pl.len(), TranslationKey::ALL.len());
    }

    #[test]
    fn every_label_is_non_empty() {
        for language in Language::ALL {
            for (key, label) in language.translations().iter() {
                assert!(
                    !label.trim().is_empty(),
                    "{language} label for {} is empty",
                    key.as_str()
                );
            }
        }
    }

    #[test]
    fn secondary_language_changes_at_least_one_label() {
        let pl = Language::Polish.translations();
        let en = Language::English.translations();
        assert!(TranslationKey::ALL
            .into_iter()
            .any(|key| pl.get(key) != en.get(key)));
        assert_eq!(en.get(TranslationKey::Discover), "Discover");
        assert_eq!(pl.get(TranslationKey::Discover), "Odkrywaj");
    }

    #[test]
    fn lookup_by_name() {
        let en = Language::English.translations();
        assert_eq!(en.lookup("noFavorites"), Some("You don't have any favorite promotions yet"));
        assert_eq!(en.lookup("doesNotExist"), None);
    }
}
