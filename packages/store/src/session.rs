//! # Session credential and route gate
//!
//! The client keeps exactly one secret: the bearer token returned by the
//! login endpoint. It is written through a [`CredentialStore`] (a cookie jar
//! in the browser, a map in tests) and read back by every authenticated
//! screen.
//!
//! [`Session`] wraps a store together with the [`SessionConfig`] that names
//! the credential and sets its lifetime. Routing asks it for a
//! [`SessionStatus`] and decides the redirect itself.

use chrono::{DateTime, Duration, Utc};

use crate::config::SessionConfig;

/// Key-value capability with per-entry expiry.
pub trait CredentialStore {
    /// Read a live value. Expired entries read as `None`.
    fn get(&self, name: &str) -> Option<String>;
    /// Write a value that stops being readable after `ttl`.
    fn set(&self, name: &str, value: &str, ttl: Duration);
    fn remove(&self, name: &str);
}

/// An opaque bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    /// Known only when the credential was issued in this process; a value
    /// read back from the browser carries no expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// What the route guard knows about the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// No credential stored.
    Absent,
    /// A credential exists but the API has not accepted it yet.
    PresentUnverified(Credential),
    /// The API answered an authenticated request with this credential.
    PresentVerified(Credential),
}

impl SessionStatus {
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            SessionStatus::Absent => None,
            SessionStatus::PresentUnverified(c) | SessionStatus::PresentVerified(c) => Some(c),
        }
    }

    pub fn is_present(&self) -> bool {
        self.credential().is_some()
    }

    /// Promote after a successful authenticated round-trip.
    pub fn verified(self) -> Self {
        match self {
            SessionStatus::PresentUnverified(c) => SessionStatus::PresentVerified(c),
            other => other,
        }
    }
}

/// The stored credential plus the rules for naming and expiring it.
#[derive(Clone, Debug)]
pub struct Session<S: CredentialStore> {
    store: S,
    config: SessionConfig,
}

impl<S: CredentialStore> Session<S> {
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self { store, config }
    }

    pub fn status(&self) -> SessionStatus {
        match self.credential() {
            Some(c) => SessionStatus::PresentUnverified(c),
            None => SessionStatus::Absent,
        }
    }

    pub fn credential(&self) -> Option<Credential> {
        self.store
            .get(&self.config.cookie_name)
            .filter(|token| !token.is_empty())
            .map(Credential::new)
    }

    /// Persist a freshly issued token for the configured lifetime.
    pub fn sign_in(&self, token: &str) -> Credential {
        let ttl = self.config.expiry();
        self.store.set(&self.config.cookie_name, token, ttl);
        tracing::info!("session credential stored for {} days", self.config.expiry_days);
        Credential {
            token: token.to_string(),
            expires_at: Some(Utc::now() + ttl),
        }
    }

    pub fn sign_out(&self) {
        self.store.remove(&self.config.cookie_name);
        tracing::info!("session credential removed");
    }
}
