//! Catalog endpoints feeding the selector inputs.

mod list_brands;
pub use list_brands::list_brands;

mod list_brand_models;
pub use list_brand_models::list_brand_models;

mod list_services;
pub use list_services::list_services;

mod list_cities;
pub use list_cities::list_cities;
