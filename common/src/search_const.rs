//! Constants shared by the search page and the API client.

/// Number of date chips offered by the date selector, today included.
pub const DATE_CHIP_DAYS: usize = 14;

/// Default timeout for a single call to the external backend.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

pub const SEARCH_ENDPOINT_PATH: &str = "/api/branches/services/search";
pub const BRANDS_ENDPOINT_PATH: &str = "/api/brands";
pub const SERVICES_ENDPOINT_PATH: &str = "/api/services";
pub const CITIES_ENDPOINT_PATH: &str = "/api/cities";
pub const BRAND_MODELS_ENDPOINT_PATH: &str = "/api/brand-models/by-brand";
