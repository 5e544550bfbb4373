use serde::{Deserialize, Serialize};

/// Unique identifier for a registered account.
pub type UserId = String;

/// Public view of an account.
///
/// This is what auth operations return and what the session slot holds.
/// It never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
}

/// Persisted account record.
///
/// Only the data layer reads or writes this; callers get the [`User`] view.
/// Accounts are created by signup and are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    /// Stored in the form produced by the active `CredentialVerifier`
    /// (plaintext in the default configuration, matching the legacy store).
    pub password: String,
}

impl UserRecord {
    pub fn public_view(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
        }
    }
}
