//! The user's current, not yet sanitized search criteria.

use serde::{Deserialize, Serialize};

use crate::sort_by::SortBy;

/// Filters chosen on the services page. A field is an active filter when it is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub car_brand: Option<String>,
    pub car_model: Option<String>,
    pub service: Option<String>,
    pub city: Option<String>,
    /// ISO-8601 calendar date, `YYYY-MM-DD`.
    pub date: Option<String>,
    pub sort_by: Option<SortBy>,
}

/// String-valued filter keys, as reported by the selector inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    CarBrand,
    CarModel,
    Service,
    City,
    Date,
}

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::CarBrand => "carBrand",
            FilterKey::CarModel => "carModel",
            FilterKey::Service => "service",
            FilterKey::City => "city",
            FilterKey::Date => "date",
        }
    }
}

impl FilterState {
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::CarBrand => self.car_brand.as_deref(),
            FilterKey::CarModel => self.car_model.as_deref(),
            FilterKey::Service => self.service.as_deref(),
            FilterKey::City => self.city.as_deref(),
            FilterKey::Date => self.date.as_deref(),
        }
    }

    /// Records a selector change. A new brand drops the selected model,
    /// since models are listed per brand.
    pub fn set(&mut self, key: FilterKey, value: Option<String>) {
        match key {
            FilterKey::CarBrand => {
                if self.car_brand != value {
                    self.car_model = None;
                }
                self.car_brand = value;
            }
            FilterKey::CarModel => self.car_model = value,
            FilterKey::Service => self.service = value,
            FilterKey::City => self.city = value,
            FilterKey::Date => self.date = value,
        }
    }

    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, Some(value.into()));
        self
    }

    pub fn set_sort(&mut self, sort: Option<SortBy>) {
        self.sort_by = sort;
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_brand_clears_model() {
        let mut filters = FilterState::default()
            .with(FilterKey::CarBrand, "bmw")
            .with(FilterKey::CarModel, "x5");
        filters.set(FilterKey::CarBrand, Some("audi".to_string()));
        assert_eq!(filters.get(FilterKey::CarBrand), Some("audi"));
        assert_eq!(filters.get(FilterKey::CarModel), None);
    }

    #[test]
    fn reselecting_same_brand_keeps_model() {
        let mut filters = FilterState::default()
            .with(FilterKey::CarBrand, "bmw")
            .with(FilterKey::CarModel, "x5");
        filters.set(FilterKey::CarBrand, Some("bmw".to_string()));
        assert_eq!(filters.get(FilterKey::CarModel), Some("x5"));
    }

    #[test]
    fn deserializes_partial_camel_case() {
        let filters: FilterState =
            serde_json::from_str(r#"{"carBrand":"bmw","sortBy":"DISTANCE_CLOSEST"}"#).unwrap();
        assert_eq!(filters.car_brand.as_deref(), Some("bmw"));
        assert_eq!(filters.sort_by, Some(SortBy::DistanceClosest));
        assert!(filters.city.is_none());
        assert!(!filters.is_empty());
    }
}
