use common::{catalog::CatalogItem, search_const::CITIES_ENDPOINT_PATH};

use crate::api_utils::http_utils::ApiClient;

pub async fn list_cities(client: &ApiClient) -> anyhow::Result<Vec<CatalogItem>> {
    client.get_json(CITIES_ENDPOINT_PATH).await
}
