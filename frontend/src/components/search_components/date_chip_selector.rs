//! Strip of day chips; picking one changes the search date.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdEvent};

use common::{date_chips::{DateChip, upcoming_date_chips}, search_const::DATE_CHIP_DAYS};
use crate::data_definitions::search_page_state::SearchPageState;

#[component]
pub fn DateChipSelector() -> Element {
    let search_page_state = use_context::<SearchPageState>();
    let today = search_page_state.today;
    let chips = use_hook(move || upcoming_date_chips(today, DATE_CHIP_DAYS));
    let selected_date = search_page_state.coordinator.read().selected_date().map(str::to_string);

    rsx! {
        div {
            id: "x-date-chip-strip",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                overflow-x: auto;
                padding: 4px 2px;
            ",
            Icon { icon: MdEvent, style: "width: 22px; height: 22px; color: #4B5770; flex-shrink: 0;" }
            for chip in chips.iter().cloned() {
                DateChipButton {
                    key: "{chip.iso}",
                    selected: selected_date.as_deref() == Some(chip.iso.as_str()),
                    chip: chip.clone(),
                    onselect: search_page_state.change_date,
                }
            }
        }
    }
}

#[component]
fn DateChipButton(chip: DateChip, selected: bool, onselect: Callback<String>) -> Element {
    let border_color = if selected { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.2)" };
    let background_color = if selected { "#4096FF33" } else { "white" };
    let DateChip { iso, weekday, day_of_month, month } = chip;

    rsx! {
        button {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                flex-shrink: 0;
                width: 64px;
                height: 64px;
                border: 2px solid {border_color};
                border-radius: 14px;
                background-color: {background_color};
                cursor: pointer;
                line-height: 1.1;
            ",
            onclick: move |_| onselect.call(iso.clone()),
            span { style: "font-size: 12px; color: #4B5770;", "{weekday}" }
            span { style: "font-size: 20px; font-weight: 500;", "{day_of_month}" }
            span { style: "font-size: 11px; color: rgba(0,0,0,0.5);", "{month}" }
        }
    }
}
