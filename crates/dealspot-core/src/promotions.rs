use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// A single deal as shown on a promotion card.
///
/// Field names serialize in camelCase so persisted favorites stay readable by
/// older clients that wrote `oldPrice`/`imageUrl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Stable identifier; the only key used for favorite membership.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display string, e.g. `"49.99 zł"`. Never parsed.
    pub old_price: String,
    pub new_price: String,
    /// Discount label, e.g. `"-40%"`.
    pub discount: String,
    pub image_url: String,
    /// Merchant display name.
    pub store: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Extended attributes shown only on the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PromotionDetails>,
}

impl Promotion {
    /// Returns `true` if the promotion has a validity date and `today` is past it.
    ///
    /// Promotions without a validity date never expire.
    #[must_use]
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.details
            .as_ref()
            .and_then(|d| d.valid_until)
            .is_some_and(|until| today > until)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionDetails {
    /// Street address of the merchant.
    pub location: Option<String>,
    /// Average review score on a 0–5 scale.
    pub rating: Option<f32>,
    #[serde(rename = "reviews")]
    pub review_count: Option<u32>,
    #[serde(rename = "bought")]
    pub purchase_count: Option<u32>,
    pub valid_until: Option<NaiveDate>,
    /// Display string for the amount saved, e.g. `"45.00 zł"`.
    #[serde(rename = "save")]
    pub savings: Option<String>,
    #[serde(rename = "companyDesc")]
    pub company_description: Option<String>,
    /// Free-form opening hours, e.g. `"Pon-Pt: 10:00-20:00"`.
    pub hours: Option<String>,
}

impl PromotionDetails {
    /// Number of filled stars (0–5) for the rating, rounded half away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn star_count(&self) -> u8 {
        match self.rating {
            Some(r) if r.is_finite() => r.round().clamp(0.0, 5.0) as u8,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn massage() -> Promotion {
        Promotion {
            id: "b2".to_string(),
            title: "Masaż relaksacyjny -30%".to_string(),
            description: "60-minutowy masaż relaksacyjny całego ciała.".to_string(),
            old_price: "150.00 zł".to_string(),
            new_price: "105.00 zł".to_string(),
            discount: "-30%".to_string(),
            image_url: "https://images.pexels.com/photos/3822622/pexels-photo-3822622.jpeg"
                .to_string(),
            store: "Salon Piękności Harmonia".to_string(),
            category: Some(Category::Beauty),
            details: Some(PromotionDetails {
                location: Some("ul. Piękna 15, Warszawa".to_string()),
                rating: Some(4.9),
                review_count: Some(28),
                purchase_count: Some(75),
                valid_until: NaiveDate::from_ymd_opt(2024, 8, 16),
                savings: Some("45.00 zł".to_string()),
                company_description: None,
                hours: Some("Pon-Pt: 10:00-20:00, Sob: 10:00-16:00".to_string()),
            }),
        }
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(massage()).expect("serialization failed");
        assert_eq!(json["oldPrice"], "150.00 zł");
        assert_eq!(json["imageUrl"].as_str().map(|s| s.starts_with("https://")), Some(true));
        assert_eq!(json["category"], "beauty");
        assert_eq!(json["details"]["reviews"], 28);
        assert_eq!(json["details"]["validUntil"], "2024-08-16");
        assert_eq!(json["details"]["save"], "45.00 zł");
    }

    #[test]
    fn deserializes_card_payload_without_optional_fields() {
        let json = r#"{
            "id": "1",
            "title": "Restauracja Włoska Roma",
            "description": "Wszystkie pizze 40% taniej",
            "oldPrice": "49.99 zł",
            "newPrice": "29.99 zł",
            "discount": "-40%",
            "imageUrl": "https://images.pexels.com/photos/825661/pexels-photo-825661.jpeg",
            "store": "Roma Italian"
        }"#;
        let promo: Promotion = serde_json::from_str(json).expect("deserialization failed");
        assert_eq!(promo.id, "1");
        assert_eq!(promo.new_price, "29.99 zł");
        assert!(promo.category.is_none());
        assert!(promo.details.is_none());
    }

    #[test]
    fn card_payload_omits_absent_optional_fields() {
        let mut promo = massage();
        promo.category = None;
        promo.details = None;
        let json = serde_json::to_value(&promo).expect("serialization failed");
        assert!(json.get("category").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn is_expired_on_compares_against_valid_until() {
        let promo = massage();
        let before = NaiveDate::from_ymd_opt(2024, 8, 16).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
        assert!(!promo.is_expired_on(before));
        assert!(promo.is_expired_on(after));
    }

    #[test]
    fn promotion_without_validity_never_expires() {
        let mut promo = massage();
        promo.details = None;
        let far_future = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap();
        assert!(!promo.is_expired_on(far_future));
    }

    #[test]
    fn star_count_rounds_and_clamps() {
        let mut details = PromotionDetails {
            rating: Some(4.9),
            ..PromotionDetails::default()
        };
        assert_eq!(details.star_count(), 5);
        details.rating = Some(3.4);
        assert_eq!(details.star_count(), 3);
        details.rating = Some(7.0);
        assert_eq!(details.star_count(), 5);
        details.rating = None;
        assert_eq!(details.star_count(), 0);
    }
}
