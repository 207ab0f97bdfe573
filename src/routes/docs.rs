use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::job_post_dto::{DeleteJobPostResponse, ErrorResponse};
use crate::models::{Company, JobPost, Language, Location, Requirement};
use crate::routes::job_post;

#[derive(OpenApi)]
#[openapi(
    paths(
        job_post::list_job_posts,
        job_post::get_job_post,
        job_post::create_job_post,
        job_post::update_job_post,
        job_post::delete_job_post,
    ),
    components(schemas(
        JobPost,
        Requirement,
        Language,
        Location,
        Company,
        DeleteJobPostResponse,
        ErrorResponse,
    )),
    tags((name = "job-posts", description = "Job post management"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
