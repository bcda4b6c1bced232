use dioxus::prelude::*;

use super::{Authenticated, Screen};

#[component]
pub fn Tasks() -> Element {
    rsx! {
        Authenticated { screen: Screen::Tasks }
    }
}
