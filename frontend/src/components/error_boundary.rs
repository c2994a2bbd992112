//! Error boundaries: a full-page one for the router and an inline one for widgets.

use dioxus::prelude::*;

use crate::routes::Route;

/// Replaces everything below it with an error page that links back home.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px; padding: 36px 40px;",
                        h1 {
                            style: "color: #C53030; font-size: 40px; font-weight: 500; margin: 0;",
                            "Something went wrong",
                        }
                        p {
                            style: "color: #4B5770; font-size: 18px; margin: 0;",
                            "The page could not be displayed ({boundary_name})."
                        }
                        Link {
                            to: Route::HomePage {},
                            span { style: "color: #4F46E5; font-size: 18px;", "Back to the home page" }
                        }
                        pre { class: "x-error-box", style: "text-wrap: auto;", "{err:#?}" }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing widget contained, with a retry button.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #4F46E5; font-size: 16px; border: 1px solid #4F46E5; background: white; padding: 6px 14px; border-radius: 9999px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 8px; width: 100%; padding: 16px;",
            span { style: "color: #C53030; font-size: 20px; font-weight: 500;", "This section failed to load" }
            pre {
                class: "x-error-box",
                style: "text-wrap: auto; max-width: 500px; max-height: 240px; overflow-y: auto; margin: 0;",
                "{error_txt}"
            }
            {children}
        }
    }
}
