//! Page-level search state: what was submitted, what is selected, what is shown.
//!
//! The coordinator performs no I/O. Every operation that needs a fetch returns
//! a [`SearchRequest`]; the caller runs it and hands the outcome back through
//! [`SearchCoordinator::apply_results`]. Each request carries a sequence token
//! and only the most recently issued one may replace the result collection.

use crate::{
    filter_state::FilterState,
    search_payload::{SearchOverrides, SearchPayload, compose},
    search_result::ResultItem,
    sort_by::SortBy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing submitted yet; the page shows its default cards.
    #[default]
    Idle,
    /// Results are visible and the latest request has not completed.
    Searching,
    /// The latest request completed, possibly with no matches.
    Results,
}

/// One fetch to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub payload: SearchPayload,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCoordinator {
    submitted_filters: Option<FilterState>,
    selected_date: Option<String>,
    selected_sort: Option<SortBy>,
    phase: SearchPhase,
    latest_seq: u64,
    results: Vec<ResultItem>,
}

impl SearchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a preselected date chip, typically today.
    pub fn with_date(date: impl Into<String>) -> Self {
        Self { selected_date: Some(date.into()), ..Self::default() }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn results_visible(&self) -> bool {
        self.phase != SearchPhase::Idle
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn selected_sort(&self) -> Option<SortBy> {
        self.selected_sort
    }

    pub fn submitted_filters(&self) -> Option<&FilterState> {
        self.submitted_filters.as_ref()
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Explicit search submit. Always yields a request.
    pub fn submit(&mut self, base: FilterState) -> SearchRequest {
        self.submitted_filters = Some(base);
        self.next_request()
    }

    /// Date chip change. Only re-fetches once results are visible.
    pub fn on_change_date(&mut self, iso: impl Into<String>) -> Option<SearchRequest> {
        self.selected_date = Some(iso.into());
        self.refetch()
    }

    /// Sort order change. Only re-fetches once results are visible.
    pub fn on_change_sort(&mut self, sort: SortBy) -> Option<SearchRequest> {
        self.selected_sort = Some(sort);
        self.refetch()
    }

    /// Replaces the result collection when `seq` belongs to the latest request.
    /// Returns `false` for a superseded response, which is dropped.
    pub fn apply_results(&mut self, seq: u64, results: Vec<ResultItem>) -> bool {
        if seq != self.latest_seq || self.phase == SearchPhase::Idle {
            return false;
        }
        self.results = results;
        self.phase = SearchPhase::Results;
        true
    }

    fn refetch(&mut self) -> Option<SearchRequest> {
        if !self.results_visible() {
            return None;
        }
        Some(self.next_request())
    }

    fn next_request(&mut self) -> SearchRequest {
        let base = self.submitted_filters.clone().unwrap_or_default();
        let overrides = SearchOverrides::new(self.selected_date.clone(), self.selected_sort);
        self.latest_seq += 1;
        self.phase = SearchPhase::Searching;
        SearchRequest { seq: self.latest_seq, payload: compose(&base, &overrides) }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::filter_state::FilterKey;

    fn item(id: u64) -> ResultItem {
        serde_json::from_value(json!({"id": id, "name": format!("Branch {id}")})).unwrap()
    }

    #[test]
    fn date_change_before_submit_only_updates_selection() {
        let mut coordinator = SearchCoordinator::new();
        assert!(coordinator.on_change_date("2025-06-02").is_none());
        assert!(coordinator.on_change_sort(SortBy::DistanceClosest).is_none());
        assert_eq!(coordinator.selected_date(), Some("2025-06-02"));
        assert_eq!(coordinator.phase(), SearchPhase::Idle);
        assert_eq!(coordinator.latest_seq(), 0);
    }

    #[test]
    fn every_change_after_submit_yields_one_request() {
        let mut coordinator = SearchCoordinator::with_date("2025-06-01");
        let first = coordinator.submit(FilterState::default().with(FilterKey::CarBrand, "bmw"));
        assert_eq!(
            serde_json::to_value(&first.payload).unwrap(),
            json!({"carBrand": "bmw", "date": "2025-06-01"})
        );

        let second = coordinator.on_change_sort(SortBy::RatingHighToLow).unwrap();
        assert_eq!(
            serde_json::to_value(&second.payload).unwrap(),
            json!({"carBrand": "bmw", "date": "2025-06-01", "sortBy": "RATING_HIGH_TO_LOW"})
        );

        let third = coordinator.on_change_date("2025-06-03").unwrap();
        assert_eq!(
            serde_json::to_value(&third.payload).unwrap(),
            json!({"carBrand": "bmw", "date": "2025-06-03", "sortBy": "RATING_HIGH_TO_LOW"})
        );
        assert_eq!((first.seq, second.seq, third.seq), (1, 2, 3));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut coordinator = SearchCoordinator::new();
        let older = coordinator.submit(FilterState::default());
        let newer = coordinator.on_change_sort(SortBy::DistanceFarthest).unwrap();

        assert!(coordinator.apply_results(newer.seq, vec![item(2)]));
        assert!(!coordinator.apply_results(older.seq, vec![item(1), item(3)]));
        assert_eq!(coordinator.results(), &[item(2)]);
        assert_eq!(coordinator.phase(), SearchPhase::Results);
    }

    #[test]
    fn refetch_keeps_previous_results_until_replaced() {
        let mut coordinator = SearchCoordinator::new();
        let request = coordinator.submit(FilterState::default());
        coordinator.apply_results(request.seq, vec![item(1)]);

        let request = coordinator.on_change_date("2025-07-01").unwrap();
        assert_eq!(coordinator.phase(), SearchPhase::Searching);
        assert_eq!(coordinator.results().len(), 1);

        assert!(coordinator.apply_results(request.seq, vec![]));
        assert!(coordinator.results().is_empty());
        assert!(coordinator.results_visible());
    }

    #[test]
    fn resubmit_replaces_base_filters() {
        let mut coordinator = SearchCoordinator::new();
        coordinator.submit(FilterState::default().with(FilterKey::City, "Sofia"));
        let request = coordinator.submit(FilterState::default().with(FilterKey::Service, "oil"));
        assert_eq!(request.payload.city(), None);
        assert_eq!(request.payload.service(), Some("oil"));
        assert_eq!(coordinator.submitted_filters().and_then(|f| f.service.as_deref()), Some("oil"));
    }
}
