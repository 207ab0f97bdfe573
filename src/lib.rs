pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::database::{open_store, JobPostStore};
use crate::error::Result;
use crate::services::job_post_service::JobPostService;

#[derive(Clone)]
pub struct AppState {
    pub job_post_service: JobPostService,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let store = open_store(config).await?;
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn JobPostStore>) -> Self {
        let job_post_service = JobPostService::new(store);
        Self { job_post_service }
    }
}
