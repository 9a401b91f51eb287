//! Credential checks and session lifecycle.

use entities::User;
use record_store::{RecordStore, SessionManager};
use tracing::{info, warn};

use crate::{AuthError, AuthResult};

/// Authentication over the seeded users collection.
///
/// Login is a linear scan for an exact, case-sensitive match on email and
/// password; the first match wins. Passwords are compared in the clear,
/// preserving the seeded demo contract.
pub struct AuthService {
    records: RecordStore,
    sessions: SessionManager,
}

impl AuthService {
    /// Creates an authentication service over the given store and session.
    pub fn new(records: RecordStore, sessions: SessionManager) -> Self {
        Self { records, sessions }
    }

    /// Validates credentials and persists the matched user as the session.
    ///
    /// On failure the error carries only the generic message, and any
    /// prior session is left untouched.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        let users = self.records.list_users()?;
        match users
            .iter()
            .find(|u| u.email == email && u.password == password)
        {
            Some(user) => {
                self.sessions.set(user)?;
                info!(email, "login succeeded");
                Ok(user.clone())
            }
            None => {
                warn!(email, "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Clears the current session.
    pub fn logout(&self) -> AuthResult<()> {
        self.sessions.clear()?;
        info!("logged out");
        Ok(())
    }

    /// Returns the logged-in user restored from the persisted session.
    pub fn current_user(&self) -> AuthResult<Option<User>> {
        Ok(self.sessions.get()?)
    }
}
