//! Client API calls for the selector catalogs.

use common::catalog::CatalogItem;
use dioxus::prelude::*;


#[server]
pub async fn list_brands() -> Result<Vec<CatalogItem>, ServerFnError> {
    let client = backend::api_utils::http_utils::get_api_client()
        .map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })?;
    let x = backend::api::catalog::list_brands(client).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_brand_models(brand_id: String) -> Result<Vec<CatalogItem>, ServerFnError> {
    let client = backend::api_utils::http_utils::get_api_client()
        .map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })?;
    let x = backend::api::catalog::list_brand_models(client, &brand_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_services() -> Result<Vec<CatalogItem>, ServerFnError> {
    let client = backend::api_utils::http_utils::get_api_client()
        .map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })?;
    let x = backend::api::catalog::list_services(client).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_cities() -> Result<Vec<CatalogItem>, ServerFnError> {
    let client = backend::api_utils::http_utils::get_api_client()
        .map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })?;
    let x = backend::api::catalog::list_cities(client).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
