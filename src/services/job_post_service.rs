use std::sync::Arc;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::database::JobPostStore;
use crate::error::{Error, Result};
use crate::models::{JobPost, Structured};
use crate::utils::time::now_iso8601;

/// Checked in this order; the first absent key is the one reported.
const REQUIRED_FIELDS: [&str; 7] = [
    "title",
    "deadline",
    "description",
    "requirements",
    "languages",
    "location",
    "company",
];

#[derive(Clone)]
pub struct JobPostService {
    store: Arc<dyn JobPostStore>,
}

impl JobPostService {
    pub fn new(store: Arc<dyn JobPostStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Value>> {
        let job_posts = self.store.list_all().await?;
        Ok(job_posts.iter().map(Structured::to_structured).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Value>> {
        let job_post = self.store.get(id).await?;
        Ok(job_post.as_ref().map(Structured::to_structured))
    }

    /// Fills in `id` and `created` when absent, validates, and stores the post.
    pub async fn create(&self, data: Value) -> Result<Value> {
        let mut data = into_object(data)?;

        if !data.contains_key("id") {
            data.insert("id".to_string(), Value::String(generate_id()));
        }
        validate_required_fields(&data)?;
        if !data.contains_key("created") {
            data.insert("created".to_string(), Value::String(now_iso8601()));
        }

        let job_post = JobPost::from_structured(&Value::Object(data))?;
        let created = self.store.create(job_post).await?;
        tracing::info!(job_post_id = %created.id, title = %created.title, "Job post created");
        Ok(created.to_structured())
    }

    /// Replaces the whole post stored under `id`.
    ///
    /// The path id overrides any id in the body, and the stored `created`
    /// timestamp is carried over regardless of what the body contains.
    pub async fn update(&self, id: &str, data: Value) -> Result<Option<Value>> {
        let mut data = into_object(data)?;
        data.insert("id".to_string(), Value::String(id.to_string()));
        validate_required_fields(&data)?;

        let Some(existing) = self.store.get(id).await? else {
            return Ok(None);
        };
        data.insert("created".to_string(), Value::String(existing.created));

        let job_post = JobPost::from_structured(&Value::Object(data))?;
        let updated = self.store.update(id, job_post).await?;
        if updated.is_some() {
            tracing::info!(job_post_id = %id, "Job post updated");
        }
        Ok(updated.as_ref().map(Structured::to_structured))
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!(job_post_id = %id, "Job post deleted");
        }
        Ok(deleted)
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

fn into_object(data: Value) -> Result<Map<String, Value>> {
    match data {
        Value::Object(map) => Ok(map),
        _ => Err(Error::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

fn validate_required_fields(data: &Map<String, Value>) -> Result<()> {
    match REQUIRED_FIELDS.iter().find(|field| !data.contains_key(**field)) {
        Some(field) => Err(Error::Validation {
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}
