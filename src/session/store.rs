//! Session store
//!
//! Holds the current identity and mirrors it into a [`KeyValueCache`] under a
//! fixed key. The in-memory value is authoritative: a cache failure is logged
//! and reported, but never stops a login or logout from taking effect.

use super::cache::KeyValueCache;
use super::error::SessionResult;
use super::types::UserIdentity;

/// Default cache key for the serialized identity
pub const DEFAULT_CACHE_KEY: &str = "dashboardUser";

/// Current identity plus its persisted copy
#[derive(Debug)]
pub struct SessionStore<C> {
    cache: C,
    key: String,
    current: Option<UserIdentity>,
}

impl<C: KeyValueCache> SessionStore<C> {
    /// Open the store, restoring any identity already cached under `key`.
    ///
    /// An entry that does not decode is removed and treated as no session.
    pub fn open(cache: C, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = restore(&cache, &key);
        Self {
            cache,
            key,
            current,
        }
    }

    pub fn current(&self) -> Option<&UserIdentity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Replace the current identity and persist it
    pub fn login(&mut self, identity: UserIdentity) -> SessionResult<()> {
        tracing::info!(user = %identity.name, email = %identity.email, "Session started");
        let encoded = serde_json::to_string(&identity);
        self.current = Some(identity);

        self.cache.set(&self.key, &encoded?).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "Failed to persist session");
            e
        })
    }

    /// Clear the current identity and its cached copy
    pub fn logout(&mut self) -> SessionResult<()> {
        if let Some(identity) = self.current.take() {
            tracing::info!(user = %identity.name, "Session ended");
        }
        self.cache.remove(&self.key).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "Failed to clear cached session");
            e
        })
    }
}

fn restore<C: KeyValueCache>(cache: &C, key: &str) -> Option<UserIdentity> {
    let raw = match cache.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::error!(key, error = %e, "Failed to read cached session");
            return None;
        }
    };

    match serde_json::from_str::<UserIdentity>(&raw) {
        Ok(identity) => {
            tracing::info!(user = %identity.name, "Restored cached session");
            Some(identity)
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding corrupt cached session");
            if let Err(e) = cache.remove(key) {
                tracing::error!(key, error = %e, "Failed to clear corrupt session entry");
            }
            None
        }
    }
}
