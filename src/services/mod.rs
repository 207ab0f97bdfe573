pub mod job_post_service;
