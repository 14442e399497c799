//! Grocery-list and search-suggestion generation.
//!
//! [`GenerationService`] owns the two prompts and the response-shape
//! validation; the actual text completion is behind the [`TextGenerator`]
//! trait so tests can substitute a stub. The real implementation,
//! [`OpenAiGenerator`], talks to an OpenAI-style chat-completions
//! endpoint. Configuration is via environment variables:
//! - `OPENAI_API_KEY` - API key for the completion service (required)
//! - `RECIGO_COMPLETIONS_URL` - endpoint override (default: OpenAI)
//!
//! Requests are never retried: network failures, non-2xx statuses,
//! unparseable completions, and ill-shaped completions each surface as a
//! single [`GenerationError`] and no partial result is ever returned.

mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::GroceryList;

const DEFAULT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used for grocery-list generation.
const GROCERY_LIST_MODEL: &str = "gpt-4.1";
/// Model used for recipe-name suggestions; a cheaper model is enough.
const SEARCH_MODEL: &str = "gpt-4o-mini";

const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("completion service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("completion contained no message")]
    EmptyCompletion,

    #[error("failed to parse completion as JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("completion has an unexpected shape: {0}")]
    Shape(String),

    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
}

/// A text-completion backend: one prompt in, one completion out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// [`TextGenerator`] backed by an OpenAI-style chat-completions API.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl OpenAiGenerator {
    /// Create a generator from environment variables.
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| GenerationError::MissingApiKey)?;
        let url = std::env::var("RECIGO_COMPLETIONS_URL")
            .unwrap_or_else(|_| DEFAULT_COMPLETIONS_URL.to_string());
        Ok(Self::new(url, api_key))
    }

    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": TEMPERATURE,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let completion: ChatCompletion = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or(GenerationError::EmptyCompletion)
    }
}

/// Builds the two generation prompts and validates what comes back.
#[derive(Clone)]
pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate a grocery list for `recipe_name` scaled to `servings`.
    ///
    /// The completion must parse as a JSON object containing a
    /// `grocery_list` field and an `ingredients` array; anything else is
    /// rejected whole.
    pub async fn grocery_list(
        &self,
        recipe_name: &str,
        servings: u32,
    ) -> Result<GroceryList, GenerationError> {
        let prompt = prompts::grocery_list(recipe_name, servings);
        let text = self.generator.complete(GROCERY_LIST_MODEL, &prompt).await?;
        tracing::debug!(chars = text.len(), "received grocery list completion");

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(GenerationError::Parse)?;
        {
            let object = value
                .as_object()
                .ok_or_else(|| GenerationError::Shape("expected a JSON object".to_string()))?;
            if !object.contains_key("grocery_list") {
                return Err(GenerationError::Shape(
                    "missing grocery_list field".to_string(),
                ));
            }
            if !object.get("ingredients").map_or(false, |v| v.is_array()) {
                return Err(GenerationError::Shape(
                    "ingredients must be an array".to_string(),
                ));
            }
        }
        serde_json::from_value(value).map_err(|e| GenerationError::Shape(e.to_string()))
    }

    /// Generate up to five recipe-name variants for a search query.
    ///
    /// The completion must decode to a JSON array of strings.
    pub async fn search_results(
        &self,
        recipe_name: &str,
    ) -> Result<Vec<String>, GenerationError> {
        let prompt = prompts::search_results(recipe_name);
        let text = self.generator.complete(SEARCH_MODEL, &prompt).await?;
        tracing::debug!(chars = text.len(), "received search results completion");

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(GenerationError::Parse)?;
        if !value.is_array() {
            return Err(GenerationError::Shape("expected a JSON array".to_string()));
        }
        serde_json::from_value(value).map_err(|e| GenerationError::Shape(e.to_string()))
    }
}
