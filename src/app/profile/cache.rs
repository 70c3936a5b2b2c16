use std::collections::HashMap;

use crate::app::api::User;

const USER_KEY: &str = "user";

/// In-memory stand-in for the browser's local key-value store.
///
/// Holds the serialized last known user record. Non-authoritative: overwritten
/// on every successful fetch or update, read back best-effort.
#[derive(Debug, Clone, Default)]
pub struct UserCache {
    entries: HashMap<String, String>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_user(&mut self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => {
                self.entries.insert(USER_KEY.to_owned(), json);
            }
            Err(err) => tracing::warn!("Failed to serialize user for caching: {:?}", err),
        }
    }

    pub fn user(&self) -> Option<User> {
        let raw = self.entries.get(USER_KEY)?;
        serde_json::from_str(raw).ok()
    }
}
