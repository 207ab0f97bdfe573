use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;

use super::{CorruptionPolicy, JobPostStore};
use crate::error::{Error, Result};
use crate::models::{JobPost, Structured};

const JOB_POSTS_KEY: &str = "job_posts";

/// Keeps the whole collection in one JSON document of shape
/// `{ "job_posts": [ ... ] }`, loaded and rewritten on every operation.
pub struct JsonFileStore {
    path: PathBuf,
    on_corrupt: CorruptionPolicy,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store, writing an empty document if the file does not exist yet.
    pub async fn open(path: impl AsRef<Path>, on_corrupt: CorruptionPolicy) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            on_corrupt,
            write_lock: Mutex::new(()),
        };

        if !fs::try_exists(&store.path).await? {
            if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            store.save_document(&empty_document()).await?;
            tracing::info!(path = %store.path.display(), "Initialized job post store");
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_document(&self) -> Result<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Job post store file is missing");
                return Ok(empty_document());
            }
            Err(err) => return Err(err.into()),
        };

        match parse_document(&raw) {
            Ok(document) => Ok(document),
            Err((fallback, reason)) => match self.on_corrupt {
                CorruptionPolicy::Degrade => {
                    tracing::warn!(
                        path = %self.path.display(),
                        reason = %reason,
                        "Job post store is unreadable, treating the collection as empty"
                    );
                    Ok(fallback)
                }
                CorruptionPolicy::Fail => Err(Error::CorruptStore(format!(
                    "{}: {}",
                    self.path.display(),
                    reason
                ))),
            },
        }
    }

    async fn save_document(&self, document: &Map<String, Value>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let staging = self.staging_path();
        fs::write(&staging, &bytes).await?;
        fs::rename(&staging, &self.path).await?;
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| JOB_POSTS_KEY.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl JobPostStore for JsonFileStore {
    async fn list_all(&self) -> Result<Vec<JobPost>> {
        let mut document = self.load_document().await?;
        let job_posts = posts_mut(&mut document)?
            .iter()
            .map(JobPost::from_structured)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| Error::CorruptStore(format!("stored job post: {}", e)))?;
        tracing::debug!(count = job_posts.len(), "Loaded job posts");
        Ok(job_posts)
    }

    async fn get(&self, id: &str) -> Result<Option<JobPost>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .find(|job_post| job_post.id == id))
    }

    async fn create(&self, job_post: JobPost) -> Result<JobPost> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load_document().await?;
        let posts = posts_mut(&mut document)?;

        if position_of(posts, &job_post.id).is_some() {
            return Err(Error::DuplicateId(job_post.id));
        }

        posts.push(job_post.to_structured());
        self.save_document(&document).await?;
        tracing::info!(job_post_id = %job_post.id, "Stored new job post");
        Ok(job_post)
    }

    async fn update(&self, id: &str, job_post: JobPost) -> Result<Option<JobPost>> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load_document().await?;
        let posts = posts_mut(&mut document)?;

        let Some(index) = position_of(posts, id) else {
            return Ok(None);
        };

        posts[index] = job_post.to_structured();
        self.save_document(&document).await?;
        tracing::info!(job_post_id = %id, "Replaced job post");
        Ok(Some(job_post))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load_document().await?;
        let posts = posts_mut(&mut document)?;

        let Some(index) = position_of(posts, id) else {
            return Ok(false);
        };

        posts.remove(index);
        self.save_document(&document).await?;
        tracing::info!(job_post_id = %id, "Deleted job post");
        Ok(true)
    }
}

fn empty_document() -> Map<String, Value> {
    let mut document = Map::new();
    document.insert(JOB_POSTS_KEY.to_string(), Value::Array(Vec::new()));
    document
}

/// Parses the raw file, filling in a missing `job_posts` key.
///
/// On failure returns the document to fall back to alongside the reason: an
/// empty one if nothing could be parsed, otherwise the parsed one with only
/// `job_posts` reset.
fn parse_document(
    raw: &str,
) -> std::result::Result<Map<String, Value>, (Map<String, Value>, String)> {
    let mut document = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(document)) => document,
        Ok(_) => {
            return Err((
                empty_document(),
                "top-level value is not an object".to_string(),
            ))
        }
        Err(err) => return Err((empty_document(), err.to_string())),
    };

    match document.get(JOB_POSTS_KEY) {
        None => {
            document.insert(JOB_POSTS_KEY.to_string(), Value::Array(Vec::new()));
        }
        Some(Value::Array(_)) => {}
        Some(_) => {
            document.insert(JOB_POSTS_KEY.to_string(), Value::Array(Vec::new()));
            return Err((document, format!("`{}` is not an array", JOB_POSTS_KEY)));
        }
    }

    Ok(document)
}

fn posts_mut(document: &mut Map<String, Value>) -> Result<&mut Vec<Value>> {
    document
        .get_mut(JOB_POSTS_KEY)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| Error::Internal(format!("store document has no `{}` array", JOB_POSTS_KEY)))
}

fn position_of(posts: &[Value], id: &str) -> Option<usize> {
    posts
        .iter()
        .position(|post| post.get("id").and_then(Value::as_str) == Some(id))
}
