use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference data for the filter UI, fetched once from `GET /metadata` and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub makes: Vec<String>,
    pub models_by_make: HashMap<String, Vec<String>>,
    pub states: Vec<String>,
}

impl Catalog {
    /// Models belonging to `make`; unknown makes yield an empty slice.
    pub fn models_of(&self, make: &str) -> &[String] {
        self.models_by_make
            .get(make)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The make owning `model`, if any make in the catalog lists it.
    pub fn owner_of(&self, model: &str) -> Option<&str> {
        self.models_by_make
            .iter()
            .find(|(_, models)| models.iter().any(|m| m == model))
            .map(|(make, _)| make.as_str())
    }
}

/// One backend-supplied car record. Opaque to the coordinator beyond display;
/// fields default to empty because the scraper leaves gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, rename = "modelTitle")]
    pub model_title: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub mileage: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, rename = "monthlyPayment")]
    pub monthly_payment: String,
    #[serde(default)]
    pub dealer: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub region: String,
    /// Computed value score; lower is a better deal.
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub link: String,
}

/// Response shape of `GET /cars`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingPage {
    #[serde(default)]
    pub cars: Vec<Listing>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
}

/// Response shape of `POST /predict`. A 2xx carries `score`, a failure
/// carries `error`; both stay optional so a malformed body still decodes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_models_of_unknown_make() {
        let catalog = Catalog::default();
        assert!(catalog.models_of("toyota").is_empty());
    }

    #[test]
    fn test_catalog_owner_of() {
        let mut catalog = Catalog::default();
        catalog
            .models_by_make
            .insert("toyota".to_string(), vec!["camry".to_string()]);
        assert_eq!(catalog.owner_of("camry"), Some("toyota"));
        assert_eq!(catalog.owner_of("civic"), None);
    }

    #[test]
    fn test_listing_page_decodes_with_missing_fields() {
        let page: ListingPage = serde_json::from_str(
            r#"{"cars": [{"id": 7, "title": "2020 Toyota Camry", "value": 42.5}], "total": 1}"#,
        )
        .unwrap();
        assert_eq!(page.cars.len(), 1);
        assert_eq!(page.cars[0].value, Some(42.5));
        assert!(page.cars[0].dealer.is_empty());
        assert_eq!(page.per_page, 0);
    }
}
