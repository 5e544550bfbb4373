//! Data layer - SQLite-backed key-value store and repositories.

mod ads;
mod auth;
mod store;

pub use ads::{AdRepository, sample_ads};
pub use auth::{AuthRepository, CredentialVerifier, PlaintextCredentials};
pub use store::{Store, TABLE_ADS, TABLE_SESSION, TABLE_USERS};
