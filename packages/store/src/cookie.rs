//! # Browser cookie store
//!
//! [`CookieStore`] is the [`CredentialStore`] used on the **web platform**.
//! It reads and writes `document.cookie` directly through `web-sys`, so the
//! session survives reloads for as long as the cookie's `max-age` allows.
//!
//! Cookie strings are built and parsed by the plain functions in this module
//! ([`set_cookie_string`], [`expire_cookie_string`], [`find_cookie`]), which
//! compile on every target and carry the unit tests.
//!
//! ## Error handling
//!
//! A missing `window`/`document` or a rejected cookie write is logged and
//! otherwise ignored: the store then behaves as empty, which the route guard
//! treats as "not logged in".

use chrono::Duration;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
use crate::session::CredentialStore;

/// `document.cookie` assignment that stores `name=value` for `ttl`.
pub fn set_cookie_string(name: &str, value: &str, ttl: Duration) -> String {
    let max_age = ttl.num_seconds().max(0);
    format!(
        "{}={}; max-age={max_age}; path=/; SameSite=Lax",
        urlencoding::encode(name),
        urlencoding::encode(value),
    )
}

/// `document.cookie` assignment that deletes `name`.
pub fn expire_cookie_string(name: &str) -> String {
    format!("{}=; max-age=0; path=/; SameSite=Lax", urlencoding::encode(name))
}

/// Look up `name` in a `document.cookie` style `a=1; b=2` string.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| urlencoding::decode(key).map(|k| k == name).unwrap_or(false))
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
}

/// Cookie-backed CredentialStore for the web platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl CookieStore {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;

        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    fn write(assignment: &str) {
        let Some(document) = Self::document() else {
            tracing::warn!("no document available for cookie write");
            return;
        };
        if let Err(e) = document.set_cookie(assignment) {
            tracing::error!("cookie write rejected: {:?}", e);
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl CredentialStore for CookieStore {
    fn get(&self, name: &str) -> Option<String> {
        let cookies = Self::document()?.cookie().ok()?;
        find_cookie(&cookies, name)
    }

    fn set(&self, name: &str, value: &str, ttl: Duration) {
        Self::write(&set_cookie_string(name, value, ttl));
    }

    fn remove(&self, name: &str) {
        Self::write(&expire_cookie_string(name));
    }
}
