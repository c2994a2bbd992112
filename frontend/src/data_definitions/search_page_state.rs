//! Context shared by the components of the services page.

use chrono::NaiveDate;
use common::{filter_state::FilterState, search_coordinator::SearchCoordinator, sort_by::SortBy};
use dioxus::prelude::*;

/// Handlers always read the coordinator's current values, so a re-fetch never
/// combines filters, date and sort from different renders.
#[derive(Clone, Copy)]
pub struct SearchPageState {
    pub today: NaiveDate,
    pub coordinator: Signal<SearchCoordinator>,
    pub submit: Callback<FilterState>,
    pub change_date: Callback<String>,
    pub change_sort: Callback<SortBy>,
}
