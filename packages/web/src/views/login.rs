//! Login page: wires the shared form to the cookie session and router.

use dioxus::prelude::*;
use ui::views::LoginView;

use super::{api_client, make_session};
use crate::{redirect_for, Route};

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let client = use_hook(api_client);

    // If already logged in, redirect to projects
    if let Some(target) = redirect_for(&Route::Login {}, &make_session().status()) {
        nav.replace(target);
    }

    rsx! {
        LoginView {
            client,
            on_logged_in: move |token: String| {
                make_session().sign_in(&token);
                nav.replace(Route::Projects {});
            },
        }
    }
}
