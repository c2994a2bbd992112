mod support;

use std::time::Duration;

use axum::http::StatusCode;
use backend::{
    api::search::{fetch_search_results, search_branch_services},
    api_utils::http_utils::ApiClient,
};
use common::{
    catalog::CatalogId,
    filter_state::{FilterKey, FilterState},
    search_payload::{SearchOverrides, compose},
    sort_by::SortBy,
};
use serde_json::json;
use support::{MockBackend, sample_results, unreachable_base_url};

fn bmw_payload() -> common::search_payload::SearchPayload {
    let base = FilterState::default().with(FilterKey::CarBrand, "bmw").with(FilterKey::City, " ");
    compose(&base, &SearchOverrides::new(Some("2025-06-01".into()), Some(SortBy::DistanceClosest)))
}

#[tokio::test]
async fn posts_sanitized_payload_and_parses_results() {
    let mock = MockBackend::with_results(sample_results()).await;
    let results = search_branch_services(&mock.client(), &bmw_payload()).await.expect("search should succeed");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "North Garage");
    assert_eq!(results[0].available_slots, vec!["09:00", "11:00"]);
    assert_eq!(results[1].address, None);
    assert_eq!(
        mock.search_bodies(),
        vec![json!({"carBrand": "bmw", "date": "2025-06-01", "sortBy": "DISTANCE_CLOSEST"})]
    );
}

#[tokio::test]
async fn non_array_body_means_no_results() {
    let mock = MockBackend::with_results(json!({"items": [], "total": 0})).await;
    let results = search_branch_services(&mock.client(), &bmw_payload()).await.expect("object body is not an error");
    assert!(results.is_empty());
    assert_eq!(mock.search_bodies().len(), 1);
}

#[tokio::test]
async fn server_error_fails_the_search_and_degrades_to_empty() {
    let mock = MockBackend::start(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let client = mock.client();

    let err = search_branch_services(&client, &bmw_payload()).await.unwrap_err();
    assert!(err.to_string().contains("500"), "unexpected error: {err}");

    let results = fetch_search_results(&client, &bmw_payload()).await;
    assert!(results.is_empty());
    assert_eq!(mock.search_bodies().len(), 2);
}

#[tokio::test]
async fn null_slots_and_slug_ids_keep_every_item() {
    let mock = MockBackend::with_results(json!([
        {"id": 1, "name": "North Garage", "availableSlots": null},
        {"id": "b-17", "name": "Quick Fix"}
    ]))
    .await;
    let results = search_branch_services(&mock.client(), &bmw_payload()).await.expect("search should succeed");

    assert_eq!(results.len(), 2);
    assert!(results[0].available_slots.is_empty());
    assert_eq!(results[1].id, CatalogId::String("b-17".into()));
}

#[tokio::test]
async fn malformed_items_are_skipped_and_the_rest_kept() {
    let mock = MockBackend::with_results(json!([
        {"id": 1, "name": "North Garage"},
        {"id": 2},
        "not an object",
        {"id": 3, "name": "Depot", "rating": "five"}
    ]))
    .await;
    let results = fetch_search_results(&mock.client(), &bmw_payload()).await;
    assert_eq!(results.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), ["North Garage"]);
}

#[tokio::test]
async fn unreachable_backend_degrades_to_empty() {
    let client = ApiClient::new(unreachable_base_url().await, Duration::from_secs(2)).unwrap();
    assert!(fetch_search_results(&client, &bmw_payload()).await.is_empty());
}

#[tokio::test]
async fn missing_base_url_degrades_to_empty() {
    let client = ApiClient::new("", Duration::from_secs(2)).unwrap();
    assert_eq!(client.endpoint("/api/brands"), "/api/brands");
    assert!(search_branch_services(&client, &bmw_payload()).await.is_err());
    assert!(fetch_search_results(&client, &bmw_payload()).await.is_empty());
}
