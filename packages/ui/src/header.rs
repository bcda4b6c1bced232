use api::UserProfile;
use dioxus::prelude::*;

use crate::icons::{FaCircleExclamation, FaListCheck, FaRightFromBracket};
use crate::views::ConfirmDialog;
use crate::Icon;

fn identity(profile: &UserProfile) -> Element {
    let initials = profile.initials();
    let name = profile.full_name();
    let role = profile.role.as_str();
    rsx! {
        span { class: "initials-badge", "{initials}" }
        div {
            class: "header-identity",
            p { class: "header-name", "{name}" }
            p { class: "header-role", "{role}" }
        }
    }
}

/// Top bar with the logo, the signed-in user and a logout button.
///
/// Until `profile` arrives the identity slot shows a placeholder, or a
/// retry marker once `profile_failed` is set.
#[component]
pub fn Header(
    profile: Option<UserProfile>,
    profile_failed: bool,
    on_retry_profile: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut confirming = use_signal(|| false);

    rsx! {
        header {
            class: "app-header",
            Link {
                to: "/",
                class: "logo",
                Icon { icon: FaListCheck, width: 22, height: 22 }
                span { "Taskify" }
            }
            div {
                class: "header-profile",
                if let Some(profile) = profile {
                    {identity(&profile)}
                } else if profile_failed {
                    button {
                        class: "btn btn-outline profile-error",
                        title: "Could not load your profile",
                        onclick: move |_| on_retry_profile.call(()),
                        Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                        "Retry"
                    }
                } else {
                    span { class: "header-role", "Loading profile" }
                }
                button {
                    class: "btn btn-outline",
                    title: "Logout",
                    onclick: move |_| confirming.set(true),
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                }
            }
        }
        if confirming() {
            ConfirmDialog {
                title: "Are you sure you want to logout?",
                confirm_label: "Logout",
                on_confirm: move |_| {
                    confirming.set(false);
                    on_logout.call(());
                },
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}
