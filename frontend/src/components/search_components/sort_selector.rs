//! Ordering of the result list, applied by the backend.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowDropDown};

use common::sort_by::SortBy;
use crate::data_definitions::search_page_state::SearchPageState;

#[component]
pub fn SortSelector() -> Element {
    let search_page_state = use_context::<SearchPageState>();
    let selected_sort = search_page_state.coordinator.read().selected_sort();

    let on_sort_change = move |event: Event<FormData>| match event.value().parse::<SortBy>() {
        Ok(sort) => search_page_state.change_sort.call(sort),
        Err(e) => tracing::warn!("sort selector: {e}"),
    };

    rsx! {
        label {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
                flex-shrink: 0;
                background: white;
                border: 1px solid rgba(101, 101, 101, 0.6);
                border-radius: 10px;
                padding: 0 6px 0 12px;
                height: 40px;
            ",
            select {
                style: "
                    border: none;
                    outline: none;
                    appearance: none;
                    background: transparent;
                    font-size: 15px;
                    cursor: pointer;
                ",
                onchange: on_sort_change,
                option { value: "", disabled: true, selected: selected_sort.is_none(), "Sort by" }
                for sort in SortBy::ALL {
                    option {
                        key: "{sort}",
                        value: "{sort}",
                        selected: selected_sort == Some(sort),
                        "{sort.label()}"
                    }
                }
            }
            Icon { icon: MdArrowDropDown, style: "width: 22px; height: 22px; color: #4B5770;" }
        }
    }
}
