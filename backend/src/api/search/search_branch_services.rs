//! Search for service branches matching a payload.

use common::{search_const::SEARCH_ENDPOINT_PATH, search_payload::SearchPayload, search_result::ResultItem};
use serde_json::Value;

use crate::api_utils::http_utils::ApiClient;

/// POSTs `payload` to the search endpoint. A JSON array body becomes the
/// result list; any other JSON shape is read as "no matches". Items that do
/// not decode are logged and skipped, the rest are kept.
pub async fn search_branch_services(client: &ApiClient, payload: &SearchPayload) -> anyhow::Result<Vec<ResultItem>> {
    let body: Value = client.post_json(SEARCH_ENDPOINT_PATH, payload).await?;
    let Value::Array(items) = body else {
        tracing::warn!("search_branch_services: non-array response, treating as empty");
        return Ok(Vec::new());
    };
    let total = items.len();
    let results = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ResultItem>(item) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!("search_branch_services: skipping malformed result item: {}", e);
                None
            }
        })
        .collect::<Vec<_>>();
    if results.len() < total {
        tracing::warn!("search_branch_services: kept {} of {} result items", results.len(), total);
    }
    tracing::info!("search_branch_services: {} results", results.len());
    Ok(results)
}

/// Same as [`search_branch_services`], but a failed call yields an empty list.
/// The error is logged and never reaches the caller.
pub async fn fetch_search_results(client: &ApiClient, payload: &SearchPayload) -> Vec<ResultItem> {
    match search_branch_services(client, payload).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("search_branch_services: request failed: {:#?}", e);
            Vec::new()
        }
    }
}
