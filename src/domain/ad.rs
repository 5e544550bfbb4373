use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::user::UserId;

/// Unique identifier for an ad.
pub type AdId = String;

/// Physical condition of the listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    LikeNew,
    Used,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::LikeNew => write!(f, "likenew"),
            Self::Used => write!(f, "used"),
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "likenew" => Ok(Self::LikeNew),
            "used" => Ok(Self::Used),
            other => Err(format!("unknown condition: {other}")),
        }
    }
}

/// A single classified listing.
///
/// Serialized with camelCase field names, matching the persisted layout of
/// the browser-profile store this crate replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: AdId,
    /// Owner reference. Weak: there is no account deletion, so no cascade.
    pub user_id: UserId,
    pub user_email: String,
    pub title: String,
    pub description: String,
    /// Base64-encoded image payloads, at most 5. The posting form enforces
    /// the limit; the data layer stores what it is given.
    #[serde(default)]
    pub images: Vec<String>,
    /// References the category catalog by id; not validated here.
    pub category_id: String,
    /// Non-negative. `0` is the "price on request" sentinel and is stored
    /// verbatim; consumers interpret it, the data layer never rewrites it.
    pub price: f64,
    pub country: String,
    pub city: String,
    pub contact_number: String,
    pub condition: Condition,
    /// Ordering key for listings, newest first. Reset on every update, which
    /// bumps the ad back to the top (deliberate behavior).
    pub created_at: DateTime<Utc>,
    pub views: u64,
}

/// Caller-supplied fields for a new ad.
///
/// The repository assigns `id`, `created_at`, and `views`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdDraft {
    pub user_id: UserId,
    pub user_email: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category_id: String,
    pub price: f64,
    pub country: String,
    pub city: String,
    pub contact_number: String,
    pub condition: Condition,
}

/// Partial update for an existing ad.
///
/// Identity, ownership, timestamps, and view counts are not patchable by
/// construction; `None` fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub category_id: Option<String>,
    pub price: Option<f64>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub contact_number: Option<String>,
    pub condition: Option<Condition>,
}
