pub mod search_api;
pub mod catalog_api;
