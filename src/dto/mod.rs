pub mod job_post_dto;
