//! Client for the generative listing-copy service.
//!
//! Wraps the Gemini `generateContent` endpoint: the caller supplies keywords
//! and a category, the service answers with a draft title and description as
//! a JSON document constrained by a response schema. This is the only
//! network call in the crate; the data layer itself never suspends.

use crate::domain::{SuggestError, Suggestion, SuggestionRequest};
use crate::infra::app_config::AppConfig;
use serde::Deserialize;
use serde_json::json;

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

pub struct SuggestionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl SuggestionClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
        }
    }

    /// Key resolution order: saved config, then the `GEMINI_API_KEY` env var.
    pub fn from_config(config: &AppConfig) -> Self {
        let api_key = config
            .gemini_api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok());
        Self::new(api_key)
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask the service for draft listing copy.
    pub async fn suggest(&self, request: &SuggestionRequest) -> Result<Suggestion, SuggestError> {
        let Some(api_key) = &self.api_key else {
            return Err(SuggestError::NotConfigured);
        };

        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(request) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        });

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|err| SuggestError::ServiceFailed(err.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|err| SuggestError::ServiceFailed(err.to_string()))?;
        if !status.is_success() {
            log::warn!("suggestion request failed with status {status}");
            return Err(SuggestError::ServiceFailed(format!(
                "request failed with status {status}"
            )));
        }

        parse_suggestion(&payload)
    }
}

/// The copywriting prompt sent to the model.
fn build_prompt(request: &SuggestionRequest) -> String {
    format!(
        "أنت خبير في كتابة الإعلانات المبوبة للمواقع العربية مثل السوق المفتوح وحراج. مهمتك هي إنشاء عنوان ووصف جذاب لإعلان جديد.\n\n\
         الرجاء استخدام التفاصيل التالية:\n\
         - الكلمات الرئيسية للمنتج: {keywords}\n\
         - قسم الإعلان: {category}\n\n\
         الهدف هو جذب انتباه المشترين المحتملين وتقديم معلومات واضحة ومقنعة.\n\
         اكتب بأسلوب مباشر وواضح وموجز.",
        keywords = request.keywords,
        category = request.category,
    )
}

/// Schema the service must answer with: a short title and a medium
/// description, both required.
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "عنوان جذاب ومختصر للإعلان المبوّب، يعكس المنتج وحالته. يجب أن يكون أقل من 60 حرفًا.",
            },
            "description": {
                "type": "STRING",
                "description": "وصف تفصيلي للمنتج يتضمن أهم مميزاته وحالته وأي معلومات أخرى تهم المشتري. يجب أن يكون بين 20 و 70 كلمة.",
            },
        },
        "required": ["title", "description"],
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Extract the suggestion from a raw `generateContent` payload.
fn parse_suggestion(payload: &str) -> Result<Suggestion, SuggestError> {
    let response: GenerateContentResponse = serde_json::from_str(payload)
        .map_err(|err| SuggestError::ServiceFailed(format!("unparseable response: {err}")))?;

    let text: String = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .map(|p| p.text)
        .collect();
    let text = text.trim();
    if text.is_empty() {
        return Err(SuggestError::ServiceFailed(
            "empty response from the service".to_string(),
        ));
    }

    serde_json::from_str(text)
        .map_err(|err| SuggestError::ServiceFailed(format!("unparseable suggestion: {err}")))
}
