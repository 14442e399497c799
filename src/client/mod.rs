//! HTTP client for the Recigo backend.
//!
//! This is the app side of the wire contract: it posts the two
//! generation requests, unwraps the `{success, data, error}` envelope,
//! and keeps connectivity failures distinct from backend-reported
//! generation failures so the UI can word its alerts accordingly.
//! Configuration is via environment variables:
//! - `RECIGO_URL` - Base URL (default: `http://localhost:3000`)

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{ApiResponse, GroceryList};

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend could not be reached at all. Shown to the user as a
    /// connectivity problem, not a generation failure.
    #[error("could not reach the Recigo backend: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered and reported a failure.
    #[error("request failed with {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// The backend answered 2xx but the body was not a usable envelope.
    #[error("backend response was malformed: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct RecigoClient {
    base_url: String,
    client: reqwest::Client,
}

impl RecigoClient {
    /// Create a client from environment variables.
    pub fn from_env() -> Self {
        let base_url = std::env::var("RECIGO_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Request a grocery list for a recipe scaled to a serving count.
    pub async fn generate_grocery_list(
        &self,
        recipe_name: &str,
        servings: u32,
    ) -> Result<GroceryList, ClientError> {
        self.post_json(
            "/api/recigo/generate-grocery-list",
            &serde_json::json!({
                "recipeName": recipe_name,
                "numOfServings": servings,
            }),
        )
        .await
    }

    /// Request recipe-name variants for a search query.
    pub async fn generate_search_results(
        &self,
        recipe_name: &str,
    ) -> Result<Vec<String>, ClientError> {
        self.post_json(
            "/api/recigo/generate-search-results",
            &serde_json::json!({ "recipeName": recipe_name }),
        )
        .await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiResponse<T>>(&text)
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(ClientError::Api { status, message });
        }

        let envelope: ApiResponse<T> =
            serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))?;
        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| "backend reported failure".to_string());
            return Err(ClientError::Api { status, message });
        }
        envelope
            .data
            .ok_or_else(|| ClientError::Decode("success response carried no data".to_string()))
    }
}

/// Last-write-wins guard for overlapping generation requests.
///
/// There is no cancellation for in-flight requests; instead every call
/// takes a token from [`RequestSequence::begin`] and applies its result
/// only while [`RequestSequence::is_current`] still holds. A result
/// whose token has been superseded is discarded silently, so a slow
/// early response can never overwrite a later one.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding all earlier tokens.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` is still the most recently issued one.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}
