use dioxus::{logger::tracing, prelude::*};

use common::{
    filter_state::FilterState,
    search_coordinator::{SearchCoordinator, SearchRequest},
    sort_by::SortBy,
};
use crate::{
    api::search_api::search_branch_services,
    components::{
        search_components::{
            date_chip_selector::DateChipSelector, search_filter_bar::SearchFilterBar,
            search_results_panel::SearchResultsPanel, sort_selector::SortSelector,
        },
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::search_page_state::SearchPageState,
};


/// Car services listing page
#[component]
pub fn ServicesPage() -> Element {
    rsx! {
        Title { "VehicleOps - Car Services" }
        ServicesPageRootComponent {}
    }
}

/// Runs one search request and hands the outcome back to the coordinator.
/// Any failure ends as an empty result list.
fn dispatch_search(mut coordinator: Signal<SearchCoordinator>, request: Option<SearchRequest>) {
    let Some(SearchRequest { seq, payload }) = request else {
        return;
    };
    spawn(async move {
        let results = match search_branch_services(payload).await {
            Ok(results) => results,
            Err(e) => {
                tracing::error!("search_branch_services: request failed: {:#?}", e);
                Vec::new()
            }
        };
        if !coordinator.write().apply_results(seq, results) {
            tracing::debug!("search #{seq} superseded, response dropped");
        }
    });
}

#[component]
fn ServicesPageRootComponent() -> Element {
    let today = use_hook(|| chrono::Local::now().date_naive());
    let mut coordinator = use_signal(move || SearchCoordinator::with_date(today.format("%Y-%m-%d").to_string()));

    use_context_provider(move || SearchPageState {
        today,
        coordinator,
        submit: Callback::new(move |filters: FilterState| {
            let request = coordinator.write().submit(filters);
            dispatch_search(coordinator, Some(request));
        }),
        change_date: Callback::new(move |iso: String| {
            let request = coordinator.write().on_change_date(iso);
            dispatch_search(coordinator, request);
        }),
        change_sort: Callback::new(move |sort: SortBy| {
            let request = coordinator.write().on_change_sort(sort);
            dispatch_search(coordinator, request);
        }),
    });

    rsx! {
        div {
            id: "x-services-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-services-filter-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    width: 100%;
                    padding: 16px;
                ",
                SuspendWrapper { SearchFilterBar {} }
            }
            div {
                id: "x-services-refine-row",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    padding: 10px 16px;
                    background-color: #ECEEF2;
                    flex-shrink: 0;
                ",
                div {
                    style: "flex-grow: 1; min-width: 0;",
                    DateChipSelector {}
                }
                SortSelector {}
            }
            div {
                id: "x-services-results",
                style: "
                    flex-grow: 1;
                    overflow-y: auto;
                    background-color: #ECEEF2;
                    padding: 7px 16px;
                ",
                SuspendWrapper { SearchResultsPanel {} }
            }
        }
    }
}
