use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::session::CredentialStore;

/// In-memory CredentialStore for testing and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, (String, DateTime<Utc>)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(name) {
            Some((value, expires_at)) if *expires_at > Utc::now() => Some(value.clone()),
            Some(_) => {
                entries.remove(name);
                None
            }
            None => None,
        }
    }

    fn set(&self, name: &str, value: &str, ttl: Duration) {
        self.entries
            .lock()
            .unwrap()
            .insert(name.to_string(), (value.to_string(), Utc::now() + ttl));
    }

    fn remove(&self, name: &str) {
        self.entries.lock().unwrap().remove(name);
    }
}
