use common::{catalog::CatalogItem, search_const::BRANDS_ENDPOINT_PATH};

use crate::api_utils::http_utils::ApiClient;

pub async fn list_brands(client: &ApiClient) -> anyhow::Result<Vec<CatalogItem>> {
    client.get_json(BRANDS_ENDPOINT_PATH).await
}
