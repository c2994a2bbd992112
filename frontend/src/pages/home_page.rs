use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdSchedule, MdSearch};
use dioxus_free_icons::Icon;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "VehicleOps - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                ServiceSearchCard {}
                HowItWorksCard {}
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            img {
                src: asset!("/assets/favicon.svg"),
                alt: "VehicleOps Logo",
                style: "width: 46px; height: 46px;",
            },
            span { "Welcome to" }
            span { style: "color:#4F46E5;", "VehicleOps" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 26px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Find a service branch for your car, compare ratings and distance, and pick a free time slot."
        }
    }
}

#[component]
fn ServiceSearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-service-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 30px; font-weight: 500;", "Car services" }
            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Search branches by car brand and model, service and city. Change the day or the order without starting over."
            }
            div { style: "flex-grow: 1;" }
            Link {
                to: Route::ServicesPage {},
                span {
                    style: "
                        display:flex;
                        align-items:center;
                        gap: 10px;
                        width: fit-content;
                        background-color: white;
                        border-radius: 9999px;
                        padding: 10px 18px;
                        color: #2D208A;
                        font-size: 16px;
                        font-weight: 500;
                    ",
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                    "Start searching"
                }
            }
        }
    }
}

#[component]
fn HowItWorksCard() -> Element {
    let steps = [
        "Choose your car and the service you need.",
        "Pick a day; branches with free slots show up first.",
        "Sort by distance or rating to find the right place.",
    ];
    rsx! {
        div {
            id: "x-card-how-it-works",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: white;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",
            div {
                style: "display:flex; align-items:center; gap: 10px; font-size: 26px; font-weight: 500;",
                Icon { icon: MdSchedule, style: "width: 26px; height: 26px; color: #4F46E5;" }
                "How it works"
            }
            ol {
                style: "margin: 0; padding-left: 22px; font-size: 18px; line-height: 1.8; color: #4B5770;",
                for step in steps {
                    li { key: "{step}", "{step}" }
                }
            }
        }
    }
}
