use dioxus::prelude::*;
use ui::views::SignupView;

use super::{api_client, make_session};
use crate::{redirect_for, Route};

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    let client = use_hook(api_client);

    if let Some(target) = redirect_for(&Route::Signup {}, &make_session().status()) {
        nav.replace(target);
    }

    rsx! {
        SignupView {
            client,
            on_signed_up: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
