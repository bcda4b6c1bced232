use dioxus::prelude::*;

use super::{Authenticated, Screen};

#[component]
pub fn Projects() -> Element {
    rsx! {
        Authenticated { screen: Screen::Projects }
    }
}
