//! Shell for pages that need a signed-in user.
//!
//! Reads the stored credential and mounts the screen straight away; the
//! profile is fetched alongside and reaches the screen only after it has
//! verified the session. Until then every gated control stays disabled. A
//! 401 on the profile fetch clears the credential and returns to `/login`,
//! any other failure leaves a retry marker in the header.

use api::{ApiClient, ApiError, UserProfile};
use dioxus::prelude::*;
use store::SessionStatus;
use ui::views::{AppFrame, ProjectsView, TasksView};
use ui::{use_async_resource, Loader, NavTab, RequestState};

use super::{api_client, make_session};
use crate::{redirect_for, Route};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Projects,
    Tasks,
}

impl Screen {
    fn route(&self) -> Route {
        match self {
            Screen::Projects => Route::Projects {},
            Screen::Tasks => Route::Tasks {},
        }
    }

    fn tab(&self) -> NavTab {
        match self {
            Screen::Projects => NavTab::Projects,
            Screen::Tasks => NavTab::Tasks,
        }
    }
}

fn screen_body(screen: Screen, client: ApiClient, profile: Option<UserProfile>) -> Element {
    match screen {
        Screen::Projects => rsx! { ProjectsView { client, profile } },
        Screen::Tasks => rsx! { TasksView { client, profile } },
    }
}

/// The profile screens may act as: present only on a verified session.
fn acting_profile(gate: &SessionStatus, profile: &RequestState<UserProfile>) -> Option<UserProfile> {
    match (gate, profile) {
        (SessionStatus::PresentVerified(_), RequestState::Success(user)) => Some(user.clone()),
        _ => None,
    }
}

#[component]
pub fn Authenticated(screen: Screen) -> Element {
    let nav = use_navigator();
    let mut gate = use_signal(|| make_session().status());
    let client = use_hook(|| {
        let client = api_client();
        match gate.peek().credential() {
            Some(credential) => client.with_credential(credential.clone()),
            None => client,
        }
    });

    if let Some(target) = redirect_for(&screen.route(), &gate.peek()) {
        nav.replace(target);
    }

    let profile_client = client.clone();
    let mut profile = use_async_resource(move || {
        let client = profile_client.clone();
        async move {
            if client.credential().is_none() {
                return Err(ApiError::Unauthorized { message: None });
            }
            client.profile().await
        }
    });

    use_effect(move || match profile.state() {
        RequestState::Success(user) => {
            if !matches!(*gate.peek(), SessionStatus::PresentVerified(_)) {
                tracing::info!("session verified for user {}", user.user_id);
                let verified = gate.peek().clone().verified();
                gate.set(verified);
            }
        }
        RequestState::Failure(err) if err.is_unauthorized() => {
            tracing::warn!("stored credential rejected, signing out");
            make_session().sign_out();
            gate.set(SessionStatus::Absent);
            nav.replace(Route::Login {});
        }
        _ => {}
    });

    let on_logout = move |_: ()| {
        make_session().sign_out();
        tracing::info!("logged out");
        nav.replace(Route::Login {});
    };

    if !gate.read().is_present() {
        return rsx! {
            div { class: "screen-centered", Loader {} }
        };
    }

    let state = profile.state();
    let acting = acting_profile(&gate.read(), &state);
    let profile_failed = state.failure().is_some_and(|err| !err.is_unauthorized());

    rsx! {
        AppFrame {
            profile: acting.clone(),
            profile_failed,
            on_retry_profile: move |_| profile.retry(),
            active: screen.tab(),
            on_logout,
            {screen_body(screen, client.clone(), acting)}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Credential;

    #[test]
    fn test_screens_map_to_routes_and_tabs() {
        assert_eq!(Screen::Projects.route(), Route::Projects {});
        assert_eq!(Screen::Tasks.route(), Route::Tasks {});
        assert_eq!(Screen::Tasks.tab(), NavTab::Tasks);
    }

    fn user() -> UserProfile {
        UserProfile {
            user_id: "u-1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: api::Role::Member,
            email_id: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_screens_act_only_on_a_verified_session() {
        let unverified = SessionStatus::PresentUnverified(Credential::new("t"));
        let verified = unverified.clone().verified();
        let loaded = RequestState::Success(user());

        assert_eq!(acting_profile(&unverified, &loaded), None);
        assert_eq!(acting_profile(&verified, &loaded), Some(user()));
        assert_eq!(acting_profile(&verified, &RequestState::InProgress), None);
        assert_eq!(
            acting_profile(&verified, &RequestState::Failure(ApiError::Network("down".into()))),
            None
        );
    }
}
