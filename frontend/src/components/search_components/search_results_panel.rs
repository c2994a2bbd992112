//! Result area of the services page: default cards, loading, results or empty state.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdBuild};

use common::search_coordinator::SearchPhase;
use crate::{
    components::{search_components::branch_result_card::BranchResultCard, suspend_boundary::LoadingIndicator},
    data_definitions::search_page_state::SearchPageState,
};

const POPULAR_SERVICES: [(&str, &str); 4] = [
    ("Oil change", "Engine oil and filter replacement"),
    ("Tyre fitting", "Seasonal tyre swap and balancing"),
    ("Brake inspection", "Pads, discs and fluid check"),
    ("Diagnostics", "Computer diagnostics and fault codes"),
];

#[component]
pub fn SearchResultsPanel() -> Element {
    let search_page_state = use_context::<SearchPageState>();
    let (phase, results) = {
        let coordinator = search_page_state.coordinator.read();
        (coordinator.phase(), coordinator.results().to_vec())
    };

    match phase {
        SearchPhase::Idle => rsx! { DefaultServiceCards {} },
        SearchPhase::Searching if results.is_empty() => rsx! { LoadingIndicator {} },
        SearchPhase::Results if results.is_empty() => rsx! { NoResults {} },
        _ => rsx! {
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); margin: 8px;",
                "{results.len()} branches found"
                if phase == SearchPhase::Searching {
                    span { style: "color: rgba(0,0,0,0.5); margin-left: 12px;", "updating..." }
                }
            }
            ul {
                id: "x-services-results-list",
                style: "
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    width: 100%;
                ",
                for result in results {
                    li {
                        key: "{result.id}",
                        BranchResultCard { result: result.clone() }
                    }
                }
            }
        },
    }
}

#[component]
fn DefaultServiceCards() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 16px;
                padding: 8px;
            ",
            for (title, description) in POPULAR_SERVICES {
                div {
                    key: "{title}",
                    style: "
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        width: 240px;
                        border-radius: 16px;
                        padding: 18px;
                        background: white;
                        box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                    ",
                    Icon { icon: MdBuild, style: "width: 26px; height: 26px; color: #4F46E5;" }
                    span { style: "font-size: 18px; font-weight: 500;", "{title}" }
                    span { style: "font-size: 14px; color: #4B5770;", "{description}" }
                }
            }
        }
        p {
            style: "margin: 8px; color: #4B5770;",
            "Pick your car, a service and a city above, then press Search to see available branches."
        }
    }
}

#[component]
fn NoResults() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 48px;
                color: #4B5770;
            ",
            span { style: "font-size: 22px; font-weight: 500;", "No branches match these filters" }
            span { "Try another date, or widen the search by clearing a filter." }
        }
    }
}
