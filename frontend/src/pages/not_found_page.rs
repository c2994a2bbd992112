use dioxus::prelude::*;

use crate::routes::Route;


/// Fallback for unknown paths
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "VehicleOps - Not Found" }
        div {
            style: "display: flex; flex-direction: column; gap: 12px; padding: 36px 40px;",
            h1 { style: "font-size: 40px; font-weight: 500; margin: 0;", "Page not found" }
            p { style: "color: #4B5770; font-size: 18px; margin: 0;", "Nothing lives at /{path}." }
            Link {
                to: Route::ServicesPage {},
                span { style: "color: #4F46E5; font-size: 18px;", "Search car services instead" }
            }
        }
    }
}
