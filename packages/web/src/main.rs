use dioxus::prelude::*;

use store::SessionStatus;
use views::{Login, Projects, Signup, Tasks};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/")]
    Projects {},
    #[route("/tasks")]
    Tasks {},
}

impl Route {
    fn is_public(&self) -> bool {
        matches!(self, Route::Login {} | Route::Signup {})
    }
}

/// Where `route` should send the user instead, given the stored session.
///
/// Public pages bounce a signed-in user to `/`; every other page needs a
/// credential.
fn redirect_for(route: &Route, status: &SessionStatus) -> Option<Route> {
    match (route.is_public(), status.is_present()) {
        (true, true) => Some(Route::Projects {}),
        (false, false) => Some(Route::Login {}),
        _ => None,
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Taskify" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Credential;

    #[test]
    fn test_absent_session_redirects_private_pages_to_login() {
        let status = SessionStatus::Absent;
        assert_eq!(redirect_for(&Route::Projects {}, &status), Some(Route::Login {}));
        assert_eq!(redirect_for(&Route::Tasks {}, &status), Some(Route::Login {}));
        assert_eq!(redirect_for(&Route::Login {}, &status), None);
        assert_eq!(redirect_for(&Route::Signup {}, &status), None);
    }

    #[test]
    fn test_present_session_skips_public_pages() {
        let status = SessionStatus::PresentUnverified(Credential::new("t"));
        assert_eq!(redirect_for(&Route::Login {}, &status), Some(Route::Projects {}));
        assert_eq!(redirect_for(&Route::Signup {}, &status), Some(Route::Projects {}));
        assert_eq!(redirect_for(&Route::Tasks {}, &status), None);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Projects {}.to_string(), "/");
        assert_eq!(Route::Tasks {}.to_string(), "/tasks");
        assert_eq!(Route::Login {}.to_string(), "/login");
    }
}
