pub mod docs;
pub mod health;
pub mod job_post;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::permissive_cors, AppState};

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route(
            "/api/job-posts",
            get(job_post::list_job_posts).post(job_post::create_job_post),
        )
        .route(
            "/api/job-posts/:id",
            get(job_post::get_job_post)
                .put(job_post::update_job_post)
                .delete(job_post::delete_job_post),
        )
}

/// The full application: routes, shared state, CORS and request tracing.
pub fn build_app(state: AppState) -> Router {
    api_router()
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
}
