use std::sync::LazyLock;

use api::ApiClient;
use store::{CredentialStore, Session, TaskifyConfig};

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod authenticated;
use authenticated::{Authenticated, Screen};

mod projects;
pub use projects::Projects;

mod tasks;
pub use tasks::Tasks;

static CONFIG: LazyLock<TaskifyConfig> = LazyLock::new(load_config);

fn load_config() -> TaskifyConfig {
    let config = match TaskifyConfig::from_toml(include_str!("../../taskify.toml")) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("invalid {}, using defaults: {e}", TaskifyConfig::filename());
            TaskifyConfig::default()
        }
    };
    match option_env!("TASKIFY_API_URL") {
        Some(url) if !url.is_empty() => config.with_base_url(url),
        _ => config,
    }
}

pub(crate) fn config() -> &'static TaskifyConfig {
    &CONFIG
}

/// Anonymous client for the public pages.
pub(crate) fn api_client() -> ApiClient {
    ApiClient::new(config())
}

#[cfg(not(target_arch = "wasm32"))]
static FALLBACK_STORE: LazyLock<store::MemoryStore> = LazyLock::new(store::MemoryStore::new);

pub(crate) fn make_session() -> Session<impl CredentialStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Session::new(store::CookieStore::new(), config().session.clone())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Session::new(FALLBACK_STORE.clone(), config().session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = TaskifyConfig::from_toml(include_str!("../../taskify.toml")).unwrap();
        assert_eq!(config.session.cookie_name, "jwt_token");
        assert_eq!(config.session.expiry_days, 30);
    }

    #[test]
    fn test_fallback_session_round_trips_credential() {
        let session = make_session();
        session.sign_in("abc");
        assert_eq!(session.credential().map(|c| c.token), Some("abc".to_string()));
        session.sign_out();
        assert!(!session.status().is_present());
    }
}
