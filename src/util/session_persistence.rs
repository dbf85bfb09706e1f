//! Session record persistence.
//!
//! DESIGN
//! ======
//! One JSON record under one key. Current builds write `{user, token?}`;
//! older builds wrote the bare user object, which is still read. A record that
//! parses as neither is deleted on sight so a bad write cannot wedge startup.

#[cfg(test)]
#[path = "session_persistence_test.rs"]
mod session_persistence_test;

use serde::{Deserialize, Serialize};

use super::storage::KeyValueStore;
use crate::net::error::AuthError;
use crate::net::types::Identity;

/// Decoded session record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredShape {
    Current(StoredSession),
    Legacy(Identity),
}

pub struct SessionPersistence<K> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> SessionPersistence<K> {
    pub fn new(store: K, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn save(&self, user: &Identity, token: Option<&str>) {
        let record = StoredSession { user: user.clone(), token: token.map(str::to_owned) };
        match serde_json::to_string(&record) {
            Ok(raw) => self.store.set_item(&self.key, &raw),
            Err(e) => log::warn!("session serialize failed: {e}"),
        }
    }

    /// Read the stored session. Corrupt records are purged and read as absent.
    pub fn load(&self) -> Option<StoredSession> {
        match self.try_load() {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("{}: discarding stored session: {e:?}", e.error_code());
                self.clear();
                None
            }
        }
    }

    /// Read the stored session without self-healing.
    ///
    /// # Errors
    ///
    /// [`AuthError::CorruptPersistedState`] if the record exists but parses as
    /// neither the current nor the legacy shape.
    pub fn try_load(&self) -> Result<Option<StoredSession>, AuthError> {
        let Some(raw) = self.store.get_item(&self.key) else {
            return Ok(None);
        };
        match serde_json::from_str::<StoredShape>(&raw) {
            Ok(StoredShape::Current(stored)) => Ok(Some(stored)),
            Ok(StoredShape::Legacy(user)) => Ok(Some(StoredSession { user, token: None })),
            Err(e) => Err(AuthError::CorruptPersistedState(e.to_string())),
        }
    }

    pub fn clear(&self) {
        self.store.remove_item(&self.key);
    }
}
