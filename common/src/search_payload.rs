//! Network-ready search body and the composer that builds it.

use serde::{Deserialize, Serialize};

use crate::{filter_state::FilterState, sort_by::SortBy};

/// Date and sort values that take precedence over the base filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchOverrides {
    pub date: Option<String>,
    pub sort: Option<SortBy>,
}

impl SearchOverrides {
    pub fn new(date: Option<String>, sort: Option<SortBy>) -> Self {
        Self { date, sort }
    }
}

/// Sanitized projection of [`FilterState`]: no key is ever present with an
/// empty or all-whitespace value. Absent keys are left out of the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "FilterState")]
pub struct SearchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    car_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    car_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by: Option<SortBy>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<FilterState> for SearchPayload {
    fn from(filters: FilterState) -> Self {
        Self {
            car_brand: non_blank(filters.car_brand),
            car_model: non_blank(filters.car_model),
            service: non_blank(filters.service),
            city: non_blank(filters.city),
            date: non_blank(filters.date),
            sort_by: filters.sort_by,
        }
    }
}

impl SearchPayload {
    pub fn car_brand(&self) -> Option<&str> {
        self.car_brand.as_deref()
    }
    pub fn car_model(&self) -> Option<&str> {
        self.car_model.as_deref()
    }
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
    pub fn sort_by(&self) -> Option<SortBy> {
        self.sort_by
    }

    /// True when no filter survives sanitizing; the backend then returns every branch.
    pub fn is_empty(&self) -> bool {
        *self == SearchPayload::default()
    }
}

/// Merges `overrides` into a copy of `base` and strips empty values.
/// `base` is never modified, so the result is safe to hand to a request body.
pub fn compose(base: &FilterState, overrides: &SearchOverrides) -> SearchPayload {
    let mut merged = base.clone();
    if let Some(date) = &overrides.date {
        merged.date = Some(date.clone());
    }
    if let Some(sort) = overrides.sort {
        merged.sort_by = Some(sort);
    }
    SearchPayload::from(merged)
}
