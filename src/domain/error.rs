//! Domain error types for the souq data layer.
//!
//! These errors represent domain-level failures that can occur during
//! marketplace operations. They are more specific than infrastructure errors
//! and can be handled appropriately at the presentation layer. No operation
//! retries automatically; every failure surfaces synchronously to the
//! immediate caller.

use thiserror::Error;

/// Domain errors related to signup, login, and the session.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Another account already uses this email (exact, case-sensitive match).
    #[error("email is already registered")]
    DuplicateEmail,

    /// Email or password was empty at signup.
    #[error("email and password are required")]
    MissingField,

    /// The two passwords supplied at signup differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// No account matches the supplied email and password.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("auth operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Domain errors related to ad lifecycle operations.
#[derive(Debug, Error)]
pub enum AdError {
    #[error("ad not found: {0}")]
    NotFound(String),

    /// The requesting user does not own the ad.
    #[error("not allowed to modify this ad")]
    Forbidden,

    #[error("ad operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Errors from the external generative suggestion service.
///
/// The rest of the system stays fully functional when this feature is
/// unavailable.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("suggestion service is not configured")]
    NotConfigured,

    #[error("suggestion service failed: {0}")]
    ServiceFailed(String),

    #[error("suggestion operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Unified domain error type for application-level error handling.
///
/// Use this when a caller needs to handle multiple domain errors in one
/// place, or to convert specific errors for propagation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("ad error: {0}")]
    Ad(#[from] AdError),

    #[error("suggestion error: {0}")]
    Suggest(#[from] SuggestError),

    #[error("unknown domain error: {0}")]
    Unknown(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Unknown(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::Unknown(s.to_string())
    }
}
