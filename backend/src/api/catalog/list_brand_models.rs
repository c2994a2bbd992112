//! Models of one car brand.

use common::{catalog::CatalogItem, search_const::BRAND_MODELS_ENDPOINT_PATH};

use crate::api_utils::http_utils::ApiClient;

/// An empty or blank `brand_id` short-circuits to an empty list without a request.
pub async fn list_brand_models(client: &ApiClient, brand_id: &str) -> anyhow::Result<Vec<CatalogItem>> {
    let brand_id = brand_id.trim();
    if brand_id.is_empty() {
        return Ok(Vec::new());
    }
    client.get_json(&brand_models_path(brand_id)).await
}

fn brand_models_path(brand_id: &str) -> String {
    format!("{}/{}", BRAND_MODELS_ENDPOINT_PATH, urlencoding::encode(brand_id))
}
