use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Loading fallback plus error containment for a page section.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; gap: 10px; padding: 24px; color: #4B5770; font-size: 18px;",
            div {
                style: "width: 14px; height: 14px; border-radius: 50%; background: #4F46E5;",
            }
            "Loading..."
        }
    }
}
