//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials did not match any user. Deliberately generic: the
    /// message must not reveal which field was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Underlying storage failed.
    #[error(transparent)]
    Store(#[from] record_store::StoreError),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
