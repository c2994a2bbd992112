//! Collapsible side navigation bar.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::icons::md_navigation_icons::{MdClose, MdMenu};
use dioxus_free_icons::{Icon, IconShape};

use common::sidebar::SidebarState;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar layout. The open/closed state comes from the `App` context.
#[component]
pub fn Navbar() -> Element {
    let sidebar = use_context::<Signal<SidebarState>>();
    let sidebar_width = if sidebar.read().is_open() { "220px" } else { "70px" };

    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: {sidebar_width};
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                    transition: width 0.2s ease;
                    flex-shrink: 0;
                ",

                SidebarToggle {},
                NavbarTopIconLinks {},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                NavbarBottomLogo {},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn SidebarToggle() -> Element {
    let mut sidebar = use_context::<Signal<SidebarState>>();
    let is_open = sidebar.read().is_open();
    let label = if is_open { "Collapse menu" } else { "Expand menu" };

    rsx! {
        button {
            title: "{label}",
            style: "
                border: none;
                background: none;
                cursor: pointer;
                color: white;
                width: 38px;
                padding: 0;
            ",
            onclick: move |_| sidebar.write().toggle(),
            if is_open {
                Icon { icon: MdClose, style: "width: 30px; height: 30px;" }
            } else {
                Icon { icon: MdMenu, style: "width: 30px; height: 30px;" }
            }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                align-items: flex-start;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::ServicesPage { }, icon: MdSearch, label: "Car services" }
        }
    }
}

#[component]
fn NavbarBottomLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            img { src: asset!("/assets/favicon.svg"), alt: "VehicleOps", style: "width: 38px; height: 38px;" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    let sidebar = use_context::<Signal<SidebarState>>();
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    color: white;
                    white-space: nowrap;
                ",
                Icon { icon: icon, style: "width: 26px; height: 26px; flex-shrink: 0;" }
                if sidebar.read().is_open() {
                    span { style: "font-size: 16px;", "{label}" }
                }
            }
        }
    }
}
