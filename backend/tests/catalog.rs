mod support;

use backend::api::catalog::{list_brand_models, list_brands, list_cities, list_services};
use common::catalog::CatalogId;
use support::{MockBackend, sample_results};

#[tokio::test]
async fn lists_catalogs_with_aliased_names() {
    let mock = MockBackend::with_results(sample_results()).await;
    let client = mock.client();

    let brands = list_brands(&client).await.expect("brands");
    assert_eq!(brands.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(), ["BMW", "Audi"]);

    let services = list_services(&client).await.expect("services");
    assert_eq!(services[0].id, CatalogId::String("oil-change".into()));
    assert_eq!(services[1].name, "Tyre fitting");

    let cities = list_cities(&client).await.expect("cities");
    assert_eq!(cities.len(), 2);
}

#[tokio::test]
async fn lists_models_for_a_brand() {
    let mock = MockBackend::with_results(sample_results()).await;
    let models = list_brand_models(&mock.client(), "1").await.expect("models");
    assert_eq!(models[0].name, "1 series");
}

#[tokio::test]
async fn brand_id_with_reserved_characters_stays_one_segment() {
    let mock = MockBackend::with_results(sample_results()).await;
    let models = list_brand_models(&mock.client(), "mercedes benz/amg").await.expect("models");
    assert_eq!(models[0].name, "mercedes benz/amg series");
}

#[tokio::test]
async fn blank_brand_lists_no_models_without_a_request() {
    let client = backend::api_utils::http_utils::ApiClient::new("", std::time::Duration::from_secs(1)).unwrap();
    assert!(list_brand_models(&client, "  ").await.expect("no request made").is_empty());
}
