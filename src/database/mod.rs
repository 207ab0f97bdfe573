pub mod json_file;
pub mod memory;

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;
use crate::models::JobPost;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

/// What the file store does when the backing document cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptionPolicy {
    /// Log a warning and treat the collection as empty.
    #[default]
    Degrade,
    /// Return [`crate::error::Error::CorruptStore`].
    Fail,
}

impl FromStr for CorruptionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrade" | "empty" => Ok(CorruptionPolicy::Degrade),
            "fail" | "error" => Ok(CorruptionPolicy::Fail),
            other => Err(format!("expected `degrade` or `fail`, got `{}`", other)),
        }
    }
}

/// Storage for the job post collection.
///
/// Absence is a value: `get` and `update` return `None` and `delete` returns
/// `false` when no record carries the id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobPostStore: Send + Sync {
    /// Every stored job post, in stored order.
    async fn list_all(&self) -> Result<Vec<JobPost>>;

    /// First job post whose id matches.
    async fn get(&self, id: &str) -> Result<Option<JobPost>>;

    /// Appends a job post; fails with `DuplicateId` if the id is taken.
    async fn create(&self, job_post: JobPost) -> Result<JobPost>;

    /// Replaces the whole record stored under `id`.
    async fn update(&self, id: &str, job_post: JobPost) -> Result<Option<JobPost>>;

    async fn delete(&self, id: &str) -> Result<bool>;
}

pub async fn open_store(config: &Config) -> Result<Arc<dyn JobPostStore>> {
    let store = JsonFileStore::open(&config.database_file, config.on_corrupt_store).await?;
    Ok(Arc::new(store))
}
