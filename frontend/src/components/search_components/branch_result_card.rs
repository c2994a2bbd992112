//! Branch result card component.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSchedule, md_communication_icons::MdLocationOn, md_toggle_icons::MdStar}};

use common::search_result::ResultItem;

#[component]
pub fn BranchResultCard(result: ResultItem) -> Element {
    let location = result.location_line();
    let distance = result.distance_label();
    let ResultItem { name, rating, logo, available_slots, price, .. } = result;

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: stretch;
                gap: 16px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 0px;
                width: 100%;
            ",
            BranchLogo { logo, name: name.clone() }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    flex: 1 1 auto;
                    min-width: 0;
                ",
                // Row 1: NAME - SPACER - RATING
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                    span {
                        style: "font-size: 20px; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        "{name}"
                    }
                    div { style: "flex: 1 1 auto;" }
                    if let Some(rating) = rating {
                        span {
                            style: "display: flex; align-items: center; gap: 2px; font-weight: 500;",
                            Icon { icon: MdStar, style: "width: 20px; height: 20px; color: #F5A623;" }
                            "{rating:.1}"
                        }
                    }
                }
                // Row 2: LOCATION - DISTANCE - PRICE
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px; color: #4B5770; font-size: 14px;",
                    Icon { icon: MdLocationOn, style: "width: 18px; height: 18px;" }
                    span { "{location}" }
                    if let Some(distance) = distance {
                        span { style: "color: rgba(0,0,0,0.5);", "{distance}" }
                    }
                    div { style: "flex: 1 1 auto;" }
                    if let Some(price) = price {
                        span { style: "font-size: 16px; color: #111827;", "from {price:.2}" }
                    }
                }
                // Row 3: TIME SLOTS
                TimeSlots { slots: available_slots }
            }
        }
    }
}

#[component]
fn BranchLogo(logo: Option<String>, name: String) -> Element {
    let initial = name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    rsx! {
        div {
            style: "
                width: 72px;
                height: 72px;
                flex-shrink: 0;
                border-radius: 12px;
                background-color: #ECEEF2;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                font-size: 30px;
                font-weight: 500;
                color: #4F46E5;
            ",
            if let Some(logo) = logo {
                img { src: "{logo}", alt: "{name}", style: "width: 100%; height: 100%; object-fit: cover;" }
            } else {
                "{initial}"
            }
        }
    }
}

#[component]
fn TimeSlots(slots: Vec<String>) -> Element {
    if slots.is_empty() {
        return rsx! {
            span { style: "font-size: 13px; color: rgba(0,0,0,0.5);", "No free slots on this day" }
        };
    }
    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; align-items: center; gap: 6px;",
            Icon { icon: MdSchedule, style: "width: 18px; height: 18px; color: #4B5770;" }
            for slot in slots {
                span {
                    key: "{slot}",
                    style: "
                        font-size: 13px;
                        padding: 2px 10px;
                        border-radius: 999px;
                        border: 1px solid rgba(0,0,255,0.4);
                        color: #2D208A;
                    ",
                    "{slot}"
                }
            }
        }
    }
}
