use std::io::Write;
use std::path::Path;

use super::*;

fn promo(id: &str, title: &str) -> Promotion {
    Promotion {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        old_price: "10 zł".to_string(),
        new_price: "5 zł".to_string(),
        discount: "-50%".to_string(),
        image_url: "https://example.com/a.jpeg".to_string(),
        store: "Test Store".to_string(),
        category: None,
        details: None,
    }
}

#[test]
fn mock_catalog_has_unique_ids() {
    let catalog = StaticCatalog::mock();
    let file = CatalogFile {
        promotions: catalog.list_promotions().unwrap(),
    };
    assert!(validate_catalog(&file).is_ok());
}

#[test]
fn mock_catalog_covers_every_category() {
    let catalog = StaticCatalog::mock();
    for category in Category::ALL {
        let listed = catalog.list_by_category(category).unwrap();
        assert!(!listed.is_empty(), "no mock promotions for {category}");
        assert!(listed.iter().all(|p| p.category == Some(category)));
    }
}

#[test]
fn list_by_category_preserves_display_order() {
    let catalog = StaticCatalog::mock();
    let ids: Vec<String> = catalog
        .list_by_category(Category::Restaurants)
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn find_promotion_hit_and_miss() {
    let catalog = StaticCatalog::mock();
    let found = catalog.find_promotion("b2").unwrap().expect("b2 is in the mock catalog");
    assert_eq!(found.store, "Salon Piękności Harmonia");
    assert!(found.details.is_some());
    assert!(catalog.find_promotion("missing").unwrap().is_none());
}

#[test]
fn validate_rejects_duplicate_id() {
    let file = CatalogFile {
        promotions: vec![promo("1", "First"), promo("1", "Second")],
    };
    let err = validate_catalog(&file).unwrap_err();
    assert!(err.to_string().contains("duplicate promotion id"));
}

#[test]
fn validate_rejects_empty_id() {
    let file = CatalogFile {
        promotions: vec![promo(" ", "No Id")],
    };
    let err = validate_catalog(&file).unwrap_err();
    assert!(err.to_string().contains("empty id"));
}

#[test]
fn validate_rejects_empty_title() {
    let file = CatalogFile {
        promotions: vec![promo("1", "")],
    };
    let err = validate_catalog(&file).unwrap_err();
    assert!(err.to_string().contains("empty title"));
}

#[test]
fn validate_rejects_out_of_range_rating() {
    let mut p = promo("1", "Rated");
    p.details = Some(PromotionDetails {
        rating: Some(6.5),
        ..PromotionDetails::default()
    });
    let file = CatalogFile {
        promotions: vec![p],
    };
    let err = validate_catalog(&file).unwrap_err();
    assert!(err.to_string().contains("rating 6.5"));
}

#[test]
fn load_catalog_reports_missing_file() {
    let err = load_catalog(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
}

#[test]
fn load_catalog_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "promotions: [{{ id: 1").unwrap();
    let err = load_catalog(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileParse(_)));
}

#[test]
fn load_catalog_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("promotions.yaml");
    assert!(
        path.exists(),
        "promotions.yaml missing at {path:?}, required for this test"
    );
    let result = load_catalog(&path);
    assert!(result.is_ok(), "failed to load promotions.yaml: {result:?}");
    let catalog = result.unwrap();
    assert!(!catalog.is_empty());

    let massage = catalog.find_promotion("b2").unwrap().unwrap();
    let details = massage.details.unwrap();
    assert_eq!(details.review_count, Some(28));
    assert_eq!(details.valid_until, NaiveDate::from_ymd_opt(2024, 8, 16));
}

/// A provider whose backing source is down.
struct OfflineCatalog;

impl CatalogProvider for OfflineCatalog {
    fn list_promotions(&self) -> Result<Vec<Promotion>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}

#[test]
fn unavailable_source_propagates_through_lookups() {
    let err = OfflineCatalog.find_promotion("1").unwrap_err();
    assert!(matches!(err, CatalogError::Unavailable(ref m) if m == "connection refused"));

    let err = OfflineCatalog
        .list_by_category(Category::Travel)
        .unwrap_err();
    assert_eq!(err.to_string(), "catalog unavailable: connection refused");
}
