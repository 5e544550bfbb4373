//! Signup, login, and session operations.

use crate::data::store::{Store, TABLE_SESSION, TABLE_USERS};
use crate::domain::{AuthError, User, UserRecord};
use std::sync::Arc;
use uuid::Uuid;

/// Pluggable credential check.
///
/// The default implementation compares stored and supplied secrets
/// byte-for-byte, keeping parity with the legacy store. A hashing scheme can
/// be substituted here without touching any calling code.
pub trait CredentialVerifier: Send + Sync {
    /// Transform a raw password into its stored form.
    fn protect(&self, raw: &str) -> String;
    /// Check a raw password against its stored form.
    fn verify(&self, raw: &str, stored: &str) -> bool;
}

/// Plaintext storage and equality comparison. Not real security.
pub struct PlaintextCredentials;

impl CredentialVerifier for PlaintextCredentials {
    fn protect(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn verify(&self, raw: &str, stored: &str) -> bool {
        raw == stored
    }
}

/// Repository for accounts and the session singleton.
pub struct AuthRepository {
    store: Arc<Store>,
    credentials: Box<dyn CredentialVerifier>,
}

impl AuthRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self::with_credentials(store, Box::new(PlaintextCredentials))
    }

    pub fn with_credentials(store: Arc<Store>, credentials: Box<dyn CredentialVerifier>) -> Self {
        Self { store, credentials }
    }

    fn load_users(&self) -> anyhow::Result<Vec<UserRecord>> {
        Ok(self.store.read(TABLE_USERS)?.unwrap_or_default())
    }

    /// Register a new account and log it in.
    ///
    /// Failure checks run in the legacy order: duplicate email first, then
    /// empty email/password, then password confirmation.
    pub fn signup(
        &self,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<User, AuthError> {
        let mut users = self.load_users()?;
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail);
        }
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }
        if password != password_confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let record = UserRecord {
            id: format!("user_{}", Uuid::new_v4()),
            email: email.to_string(),
            password: self.credentials.protect(password),
        };
        let user = record.public_view();
        users.push(record);
        self.store.write(TABLE_USERS, &users)?;

        // A successful signup doubles as a login.
        self.store.write(TABLE_SESSION, &user)?;
        Ok(user)
    }

    /// Authenticate and overwrite the session slot.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let users = self.load_users()?;
        let user = users
            .iter()
            .find(|u| u.email == email && self.credentials.verify(password, &u.password))
            .ok_or(AuthError::InvalidCredentials)?;

        let view = user.public_view();
        self.store.write(TABLE_SESSION, &view)?;
        Ok(view)
    }

    /// Clear the session slot. Succeeds whether or not anyone is logged in.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.clear(TABLE_SESSION)?;
        Ok(())
    }

    /// Session contents, if any.
    ///
    /// Returns the slot verbatim; it does not re-check that the referenced
    /// account still exists in the users table.
    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.store.read(TABLE_SESSION)?)
    }
}
