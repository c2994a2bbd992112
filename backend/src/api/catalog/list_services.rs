use common::{catalog::CatalogItem, search_const::SERVICES_ENDPOINT_PATH};

use crate::api_utils::http_utils::ApiClient;

pub async fn list_services(client: &ApiClient) -> anyhow::Result<Vec<CatalogItem>> {
    client.get_json(SERVICES_ENDPOINT_PATH).await
}
