use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use crate::generation::{GenerationError, GenerationService};
use crate::models::{ApiResponse, GroceryList};

type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

/// Reject with a 400 and the caller-fixable message in the envelope.
fn bad_request<T>(message: &str) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

/// Map a generation failure to a 500. The error message is relayed: it
/// describes the upstream or shape failure, not internal state.
fn generation_failure<T>(e: GenerationError) -> (StatusCode, Json<ApiResponse<T>>) {
    tracing::error!("generation failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(e.to_string())),
    )
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Request body for grocery-list generation. Fields are optional so a
/// missing field becomes a 400 in the envelope instead of an extractor
/// rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateGroceryListRequest {
    pub recipe_name: Option<String>,
    pub num_of_servings: Option<i64>,
}

pub async fn generate_grocery_list(
    State(service): State<GenerationService>,
    Json(request): Json<GenerateGroceryListRequest>,
) -> ApiResult<GroceryList> {
    let recipe_name = request.recipe_name.as_deref().map(str::trim).unwrap_or("");
    let servings = request.num_of_servings.unwrap_or(0);
    if recipe_name.is_empty() || servings <= 0 {
        return Err(bad_request(
            "Recipe name and number of servings are required.",
        ));
    }

    tracing::info!(recipe = recipe_name, servings, "generating grocery list");
    match service.grocery_list(recipe_name, servings as u32).await {
        Ok(list) => Ok(Json(ApiResponse::ok(list))),
        Err(e) => Err(generation_failure(e)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSearchResultsRequest {
    pub recipe_name: Option<String>,
}

pub async fn generate_search_results(
    State(service): State<GenerationService>,
    Json(request): Json<GenerateSearchResultsRequest>,
) -> ApiResult<Vec<String>> {
    let recipe_name = request.recipe_name.as_deref().map(str::trim).unwrap_or("");
    if recipe_name.is_empty() {
        return Err(bad_request("Recipe name is required."));
    }

    tracing::info!(recipe = recipe_name, "generating search results");
    match service.search_results(recipe_name).await {
        Ok(results) => Ok(Json(ApiResponse::ok(results))),
        Err(e) => Err(generation_failure(e)),
    }
}
