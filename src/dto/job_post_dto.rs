use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{Error, Result};

pub const JOB_POST_NOT_FOUND: &str = "Job post not found";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteJobPostResponse {
    pub message: String,
}

impl Default for DeleteJobPostResponse {
    fn default() -> Self {
        Self {
            message: "Job post deleted successfully".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Unwraps a JSON request body, rejecting undecodable and empty payloads.
pub fn require_payload(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    let Json(value) = payload?;
    if is_empty_payload(&value) {
        return Err(Error::BadRequest("No data provided".to_string()));
    }
    Ok(value)
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
