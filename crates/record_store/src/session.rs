//! Login session persistence.

use std::sync::Arc;

use entities::User;
use tracing::warn;

use crate::{KeyValueStore, StoreResult, SESSION_KEY};

/// The persisted login session: at most one [`User`] snapshot at a time.
///
/// Constructed once at process start and passed explicitly to whoever
/// needs it. Reading restores a prior login; [`SessionManager::clear`]
/// ends it.
#[derive(Clone)]
pub struct SessionManager {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    /// Creates a session manager over the given adapter.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Returns the logged-in user, if any.
    ///
    /// Absent and malformed-but-present values both read as no session.
    pub fn get(&self) -> StoreResult<Option<User>> {
        let Some(raw) = self.kv.get(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "stored session is unreadable, treating as logged out");
                Ok(None)
            }
        }
    }

    /// Persists `user` as the current session.
    pub fn set(&self, user: &User) -> StoreResult<()> {
        let raw = serde_json::to_string(user)?;
        self.kv.set(SESSION_KEY, &raw)
    }

    /// Clears the current session.
    pub fn clear(&self) -> StoreResult<()> {
        self.kv.remove(SESSION_KEY)
    }
}
