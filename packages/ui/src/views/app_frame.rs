use api::UserProfile;
use dioxus::prelude::*;

use crate::{Header, NavTab, SideNav};

/// Header plus side navigation around an authenticated screen.
///
/// Platform packages supply the profile state and callbacks; the screen is
/// `children`.
#[component]
pub fn AppFrame(
    profile: Option<UserProfile>,
    profile_failed: bool,
    on_retry_profile: EventHandler<()>,
    active: NavTab,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "app-frame",
            Header {
                profile,
                profile_failed,
                on_retry_profile,
                on_logout,
            }
            div {
                class: "app-body",
                SideNav { active }
                main { class: "app-content", {children} }
            }
        }
    }
}
