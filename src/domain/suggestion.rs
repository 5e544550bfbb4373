use serde::{Deserialize, Serialize};

/// Input for the generative listing-copy service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Free-text keywords describing the item.
    pub keywords: String,
    /// Display name of the chosen category, passed through to the prompt.
    pub category: String,
}

/// Draft listing copy returned by the service.
///
/// The service is asked for a title under ~60 characters and a description
/// of roughly 20-70 words; those are content-quality expectations, not
/// contracts this crate enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
}
