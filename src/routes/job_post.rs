use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::Value;

use crate::{
    dto::job_post_dto::{require_payload, DeleteJobPostResponse, ErrorResponse, JOB_POST_NOT_FOUND},
    error::{Error, Result},
    models::JobPost,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/job-posts",
    tag = "job-posts",
    responses(
        (status = 200, description = "All job posts in stored order", body = [JobPost]),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_job_posts(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let job_posts = state.job_post_service.list_all().await?;
    Ok(Json(job_posts))
}

#[utoipa::path(
    get,
    path = "/api/job-posts/{id}",
    tag = "job-posts",
    params(
        ("id" = String, Path, description = "Job post ID")
    ),
    responses(
        (status = 200, description = "Job post found", body = JobPost),
        (status = 404, description = "Job post not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_job_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let job_post = state
        .job_post_service
        .get(&id)
        .await?
        .ok_or_else(|| Error::NotFound(JOB_POST_NOT_FOUND.to_string()))?;
    Ok(Json(job_post))
}

#[utoipa::path(
    post,
    path = "/api/job-posts",
    tag = "job-posts",
    request_body = JobPost,
    responses(
        (status = 201, description = "Job post created", body = JobPost),
        (status = 400, description = "Empty body, missing field or duplicate id", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_job_post(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let data = require_payload(payload)?;
    let job_post = state.job_post_service.create(data).await?;
    Ok((StatusCode::CREATED, Json(job_post)))
}

#[utoipa::path(
    put,
    path = "/api/job-posts/{id}",
    tag = "job-posts",
    params(
        ("id" = String, Path, description = "Job post ID; overrides any id in the body")
    ),
    request_body = JobPost,
    responses(
        (status = 200, description = "Job post replaced", body = JobPost),
        (status = 400, description = "Empty body or missing field", body = ErrorResponse),
        (status = 404, description = "Job post not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn update_job_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let data = require_payload(payload)?;
    let job_post = state
        .job_post_service
        .update(&id, data)
        .await?
        .ok_or_else(|| Error::NotFound(JOB_POST_NOT_FOUND.to_string()))?;
    Ok(Json(job_post))
}

#[utoipa::path(
    delete,
    path = "/api/job-posts/{id}",
    tag = "job-posts",
    params(
        ("id" = String, Path, description = "Job post ID")
    ),
    responses(
        (status = 200, description = "Job post deleted", body = DeleteJobPostResponse),
        (status = 404, description = "Job post not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_job_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    if !state.job_post_service.delete(&id).await? {
        return Err(Error::NotFound(JOB_POST_NOT_FOUND.to_string()));
    }
    Ok(Json(DeleteJobPostResponse::default()))
}
