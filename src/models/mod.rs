pub mod job_post;
pub mod structured;

pub use job_post::{Company, JobPost, Language, Location, Requirement};
pub use structured::Structured;
