mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::generation::GenerationService;

pub fn create_router(service: GenerationService) -> Router {
    let api = Router::new()
        .route(
            "/generate-grocery-list",
            post(handlers::generate_grocery_list),
        )
        .route(
            "/generate-search-results",
            post(handlers::generate_search_results),
        );

    Router::new()
        .nest("/api/recigo", api)
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
