use async_trait::async_trait;
use tokio::sync::RwLock;

use super::JobPostStore;
use crate::error::{Error, Result};
use crate::models::JobPost;

/// Process-local store with the same semantics as the file store, minus the disk.
#[derive(Default)]
pub struct InMemoryStore {
    job_posts: RwLock<Vec<JobPost>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job_posts(job_posts: Vec<JobPost>) -> Self {
        Self {
            job_posts: RwLock::new(job_posts),
        }
    }
}

#[async_trait]
impl JobPostStore for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<JobPost>> {
        Ok(self.job_posts.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<JobPost>> {
        Ok(self
            .job_posts
            .read()
            .await
            .iter()
            .find(|job_post| job_post.id == id)
            .cloned())
    }

    async fn create(&self, job_post: JobPost) -> Result<JobPost> {
        let mut job_posts = self.job_posts.write().await;
        if job_posts.iter().any(|existing| existing.id == job_post.id) {
            return Err(Error::DuplicateId(job_post.id));
        }
        job_posts.push(job_post.clone());
        Ok(job_post)
    }

    async fn update(&self, id: &str, job_post: JobPost) -> Result<Option<JobPost>> {
        let mut job_posts = self.job_posts.write().await;
        match job_posts.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => {
                *slot = job_post.clone();
                Ok(Some(job_post))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut job_posts = self.job_posts.write().await;
        match job_posts.iter().position(|existing| existing.id == id) {
            Some(index) => {
                job_posts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
