//! Client API call for the branch search endpoint.

use common::{search_payload::SearchPayload, search_result::ResultItem};
use dioxus::prelude::*;



/// Failures of the external backend are already degraded to an empty list on
/// the server; an `Err` here means the server itself could not be reached or
/// configured.
#[server]
pub async fn search_branch_services(payload: SearchPayload) -> Result<Vec<ResultItem>, ServerFnError> {
    let client = backend::api_utils::http_utils::get_api_client()
        .map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })?;
    Ok(backend::api::search::fetch_search_results(client, &payload).await)
}
