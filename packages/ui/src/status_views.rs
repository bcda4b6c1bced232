use dioxus::prelude::*;

use crate::icons::{FaCircleExclamation, FaMagnifyingGlass};
use crate::Icon;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "status-view",
            "data-testid": "loader",
            div { class: "spinner" }
        }
    }
}

/// Shown when a list loaded but has no rows.
#[component]
pub fn EmptyView(#[props(default = "No result".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "status-view",
            Icon { icon: FaMagnifyingGlass, width: 32, height: 32 }
            h3 { class: "status-title", "{label}" }
        }
    }
}

/// Shown when a fetch failed. `on_retry` re-issues the same request.
#[component]
pub fn FailureView(on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "status-view",
            Icon { icon: FaCircleExclamation, width: 32, height: 32 }
            h3 { class: "status-title", "Something went wrong Please try again" }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
