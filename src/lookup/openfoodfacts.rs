//! Direct lookups against the public Open Food Facts API
//!
//! Open Food Facts returns a large, loosely typed product document. This
//! client reduces it to a [`ProductRecord`] with the same rules the product
//! service applies, so either backend renders identically.

use crate::core::strings::{strip_language_prefix, title_case};
use crate::lookup::additives::AdditiveCatalog;
use crate::lookup::client::{build_http_client, join_segments, parse_base_url, ProductLookup};
use crate::lookup::error::{LookupError, LookupResult};
use crate::lookup::record::{ProductRecord, VegStatus};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_OFF_BASE_URL: &str = "https://world.openfoodfacts.org";

/// At most this many categories are kept, in source order
const MAX_CATEGORIES: usize = 5;

/// Lookup client for `GET /api/v0/product/{code}.json`
pub struct OpenFoodFactsLookup {
    client: reqwest::Client,
    base_url: Url,
    additives: AdditiveCatalog,
}

impl OpenFoodFactsLookup {
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        additives: AdditiveCatalog,
    ) -> LookupResult<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: parse_base_url(base_url)?,
            additives,
        })
    }

    pub fn request_url(&self, code: &str) -> LookupResult<Url> {
        let document = format!("{}.json", code);
        join_segments(&self.base_url, &["api", "v0", "product", &document])
    }
}

#[async_trait]
impl ProductLookup for OpenFoodFactsLookup {
    async fn lookup(&self, code: &str) -> LookupResult<ProductRecord> {
        let url = self.request_url(code)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LookupError::Upstream(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))?;
        let document: Value =
            serde_json::from_str(&body).map_err(|e| LookupError::Upstream(e.to_string()))?;

        if document.get("status").and_then(Value::as_i64) != Some(1) {
            return Err(LookupError::NotFound);
        }

        let empty = Value::Object(Default::default());
        let product = document.get("product").unwrap_or(&empty);
        Ok(normalize_product(product, &self.additives))
    }

    fn name(&self) -> &str {
        "openfoodfacts"
    }
}

fn str_field<'a>(product: &'a Value, key: &str) -> Option<&'a str> {
    product.get(key).and_then(Value::as_str)
}

fn tags<'a>(product: &'a Value, key: &str) -> Vec<&'a str> {
    product
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Classify from `ingredients_analysis_tags`; vegan wins over vegetarian
pub fn veg_status_from_tags(tags: &[&str]) -> VegStatus {
    if tags.contains(&"en:vegan") {
        VegStatus::Vegan
    } else if tags.contains(&"en:vegetarian") {
        VegStatus::Vegetarian
    } else if tags.contains(&"en:non-vegetarian") {
        VegStatus::NonVegetarian
    } else {
        VegStatus::Unknown
    }
}

/// `en:sulphur-dioxide-and-sulphites` -> `Sulphur Dioxide And Sulphites`
pub fn allergen_label(tag: &str) -> String {
    title_case(&strip_language_prefix(tag).replace('-', " "))
}

/// Reduce an Open Food Facts product document to a [`ProductRecord`]
pub fn normalize_product(product: &Value, additives: &AdditiveCatalog) -> ProductRecord {
    let categories = str_field(product, "categories")
        .unwrap_or("Unknown Category")
        .split(',')
        .take(MAX_CATEGORIES)
        .map(|c| c.trim().to_string())
        .collect();

    ProductRecord {
        name: str_field(product, "product_name")
            .unwrap_or("Unknown Product")
            .to_string(),
        categories,
        image_url: str_field(product, "image_url")
            .filter(|url| !url.is_empty())
            .map(str::to_string),
        veg_status: veg_status_from_tags(&tags(product, "ingredients_analysis_tags")),
        nutriscore: Some(
            str_field(product, "nutriscore_grade")
                .unwrap_or("unknown")
                .to_uppercase(),
        ),
        allergens: tags(product, "allergens_tags")
            .into_iter()
            .map(allergen_label)
            .collect(),
        additives: tags(product, "additives_tags")
            .into_iter()
            .map(|tag| additives.describe(strip_language_prefix(tag)))
            .collect(),
    }
}
