use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Missing required field: {field}")]
    Validation { field: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid type for field {field}: expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("Job post with ID {0} already exists")]
    DuplicateId(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Corrupt store: {0}")]
    CorruptStore(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request body: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_)
            | Error::Validation { .. }
            | Error::MissingField(_)
            | Error::DuplicateId(_)
            | Error::JsonRejection(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self {
            Error::BadRequest(msg) => msg,
            Error::NotFound(msg) => msg,
            Error::JsonRejection(rejection) => rejection.body_text(),
            Error::Internal(msg) => msg,
            Error::Config(_) => "An unexpected error occurred".to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, "{}", error_message);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
